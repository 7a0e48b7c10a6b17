//! Blocking HTTP executor for the probe.
//!
//! # Design
//! The only place in the workspace that touches the network. Executes an
//! `HttpRequest` built by the core and returns the response as plain data.
//! ureq's status-code-as-error behavior is disabled so 4xx/5xx responses
//! come back as `Ok` — status interpretation belongs to the core, and only
//! transport-level faults (DNS, connect, TLS, body read) surface as `Err`.

use probe_core::{HttpRequest, HttpResponse};
use thiserror::Error;

/// A failure to complete the HTTP exchange.
///
/// Connection refused, DNS failure, TLS failure, and mid-body read errors
/// all land here. The caller reports the description; it does not branch on
/// the fault class.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(#[from] ureq::Error);

/// Execute a GET request and return the full response, whatever its status.
///
/// No timeout is configured; the transport's defaults apply.
pub fn execute(request: &HttpRequest) -> Result<HttpResponse, TransportError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut builder = agent.get(&request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let mut response = builder.call()?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string()?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
