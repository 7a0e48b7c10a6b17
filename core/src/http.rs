//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe one HTTP exchange as plain data. The core crate
//! builds an `HttpRequest` and inspects an `HttpResponse` without ever
//! touching the network — the caller (host) executes the actual I/O. This
//! separation keeps the core deterministic, so every diagnostic branch can
//! be exercised with constructed responses.
//!
//! The probe only ever issues GET, so requests carry no method field.

/// An HTTP GET request described as plain data.
///
/// Built by [`TeamsProbe::build_get_teams`](crate::TeamsProbe::build_get_teams).
/// The caller executes it against the network and returns the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to [`TeamsProbe::inspect`](crate::TeamsProbe::inspect).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// The `Content-Type` header value, if the server sent one.
    ///
    /// Header names are matched case-insensitively; the first match wins.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }
}
