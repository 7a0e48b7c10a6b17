//! One-shot diagnostic probe for the teams backend.
//!
//! Issues a single blocking GET against the `/teams` endpoint and renders a
//! human-readable report: status code, raw body, content-type, then either
//! a team-count summary with the first record pretty-printed, an empty-body
//! note, a JSON decode error, or the error body of a non-200 response. A
//! transport fault produces a single `Error:` line. Nothing propagates past
//! [`run`]; the process always finishes normally.

pub mod transport;

use probe_core::TeamsProbe;

pub use transport::{execute, TransportError};

/// The backend this probe diagnoses. Deliberately hardcoded: the probe has
/// no configuration surface.
pub const TARGET_URL: &str = "https://project2-438-backend-c8e29941b290.herokuapp.com";

/// Perform the single probe round-trip and return the rendered diagnostic.
///
/// A transport fault is reported in the returned text with the same
/// `Error:` prefix a non-200 body gets; the two are distinct types
/// internally but intentionally share the printed shape.
pub fn run(base_url: &str) -> String {
    let probe = TeamsProbe::new(base_url);
    let request = probe.build_get_teams();
    log::debug!("GET {}", request.url);
    match execute(&request) {
        Ok(response) => {
            log::debug!(
                "received status {} with {} body bytes",
                response.status,
                response.body.len()
            );
            probe.inspect(response).render()
        }
        Err(fault) => {
            log::debug!("transport fault: {fault}");
            format!("Error: {fault}\n")
        }
    }
}
