//! Scripted stand-in for the teams backend.
//!
//! Serves GET `/teams` with a fixed response described by a [`Fixture`], so
//! tests can simulate every behavior the real backend has shown: a JSON
//! team list, an empty body, a body that is not JSON, or an error status.
//! A fixture without a content-type produces a response with the header
//! absent, not an empty header value.

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;

/// The response `/teams` will return, verbatim.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl Fixture {
    pub fn new(status: StatusCode, content_type: Option<&str>, body: &str) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    /// A 200 with a small seeded team list, mirroring the real backend's
    /// record shape.
    pub fn seeded_teams() -> Self {
        let teams = json!([
            { "id": 1, "name": "Sharks", "city": "San Jose" },
            { "id": 2, "name": "Kings", "city": "Los Angeles" },
            { "id": 3, "name": "Ducks", "city": "Anaheim" }
        ]);
        Self::new(StatusCode::OK, Some("application/json"), &teams.to_string())
    }

    /// A 200 with an empty body and no content-type header.
    pub fn empty() -> Self {
        Self::new(StatusCode::OK, None, "")
    }

    /// A 200 whose body claims to be JSON but is not.
    pub fn invalid_json() -> Self {
        Self::new(
            StatusCode::OK,
            Some("application/json"),
            "<html>maintenance</html>",
        )
    }

    /// A 404 with a plain-text body.
    pub fn not_found(body: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, Some("text/plain"), body)
    }
}

pub fn app(fixture: Fixture) -> Router {
    Router::new().route("/teams", get(get_teams)).with_state(fixture)
}

pub async fn run(listener: TcpListener, fixture: Fixture) -> Result<(), std::io::Error> {
    axum::serve(listener, app(fixture)).await
}

async fn get_teams(State(fixture): State<Fixture>) -> Response {
    let mut response = (fixture.status, fixture.body.clone()).into_response();
    // IntoResponse for String sets text/plain; the fixture owns the header.
    response.headers_mut().remove(header::CONTENT_TYPE);
    if let Some(ct) = &fixture.content_type {
        if let Ok(value) = HeaderValue::from_str(ct) {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
    }
    response
}
