//! Stateless request builder and response inspector for the teams endpoint.
//!
//! # Design
//! `TeamsProbe` holds only a `base_url` and carries no mutable state. The
//! single operation is split into `build_get_teams`, which produces an
//! `HttpRequest`, and `inspect`, which consumes an `HttpResponse` and
//! classifies it into a `Report`. The caller executes the actual HTTP
//! round-trip in between, keeping the core deterministic and free of I/O
//! dependencies.

use crate::http::{HttpRequest, HttpResponse};
use crate::report::{pretty_team, Outcome, Report};
use crate::types::Team;

/// Stateless inspector for the teams endpoint.
///
/// Builds the GET request as plain data and classifies the response without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_get_teams` and `inspect`.
#[derive(Debug, Clone)]
pub struct TeamsProbe {
    base_url: String,
}

impl TeamsProbe {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get_teams(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/teams", self.base_url),
            headers: Vec::new(),
        }
    }

    /// Classify a received response into a diagnostic `Report`.
    ///
    /// Infallible: every response, however malformed, maps to one of the
    /// `Outcome` variants. A non-200 status short-circuits; the body is
    /// reported raw and never parsed. On 200 the body is parsed only when
    /// non-empty after trimming.
    pub fn inspect(&self, response: HttpResponse) -> Report {
        let content_type = response.content_type().map(str::to_string);
        let outcome = if response.status == 200 {
            if response.body.trim().is_empty() {
                Outcome::EmptyBody
            } else {
                match serde_json::from_str::<Vec<Team>>(&response.body) {
                    Ok(teams) => Outcome::Teams {
                        count: teams.len(),
                        first: teams.first().map(pretty_team),
                    },
                    Err(e) => Outcome::DecodeError(e.to_string()),
                }
            }
        } else {
            Outcome::HttpError {
                body: response.body.clone(),
            }
        };
        Report {
            status: response.status,
            body: response.body,
            content_type,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe() -> TeamsProbe {
        TeamsProbe::new("http://localhost:3000")
    }

    fn json_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_teams_produces_correct_request() {
        let req = probe().build_get_teams();
        assert_eq!(req.url, "http://localhost:3000/teams");
        assert!(req.headers.is_empty());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let probe = TeamsProbe::new("http://localhost:3000/");
        assert_eq!(probe.build_get_teams().url, "http://localhost:3000/teams");
    }

    #[test]
    fn inspect_counts_teams_exactly() {
        let body = r#"[{"id":1,"name":"Sharks"},{"id":2,"name":"Kings"},{"id":3,"name":"Ducks"}]"#;
        let report = probe().inspect(json_response(200, body));
        assert!(matches!(report.outcome, Outcome::Teams { count: 3, .. }));
    }

    #[test]
    fn inspect_pretty_prints_first_team_with_two_space_indent() {
        let body = r#"[{"id":1,"name":"Sharks"}]"#;
        let report = probe().inspect(json_response(200, body));
        let Outcome::Teams { count, first } = report.outcome else {
            panic!("expected Teams outcome");
        };
        assert_eq!(count, 1);
        let first = first.unwrap();
        assert!(first.contains("  \"id\": 1"));
        assert!(first.contains("  \"name\": \"Sharks\""));
        // Round-trip to confirm all keys and values survived formatting.
        let back: Team = serde_json::from_str(&first).unwrap();
        assert_eq!(back.0["id"], 1);
        assert_eq!(back.0["name"], "Sharks");
    }

    #[test]
    fn inspect_empty_array_has_no_first_team() {
        let report = probe().inspect(json_response(200, "[]"));
        assert_eq!(
            report.outcome,
            Outcome::Teams {
                count: 0,
                first: None
            }
        );
    }

    #[test]
    fn inspect_blank_body_is_empty_not_decode_error() {
        let report = probe().inspect(json_response(200, "  \n\t"));
        assert_eq!(report.outcome, Outcome::EmptyBody);
    }

    #[test]
    fn inspect_invalid_json_reports_decoder_description() {
        let report = probe().inspect(json_response(200, "<html>oops</html>"));
        let Outcome::DecodeError(description) = report.outcome else {
            panic!("expected DecodeError outcome");
        };
        assert!(!description.is_empty());
    }

    #[test]
    fn inspect_non_200_is_http_error_without_parsing() {
        // Body is valid JSON, but a 404 must never be parsed.
        let report = probe().inspect(json_response(404, r#"[{"id":1}]"#));
        assert_eq!(
            report.outcome,
            Outcome::HttpError {
                body: r#"[{"id":1}]"#.to_string()
            }
        );
    }

    #[test]
    fn inspect_preserves_raw_body_and_content_type() {
        let report = probe().inspect(json_response(200, "[]"));
        assert_eq!(report.status, 200);
        assert_eq!(report.body, "[]");
        assert_eq!(report.content_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn inspect_missing_content_type_is_none() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "[]".to_string(),
        };
        let report = probe().inspect(response);
        assert_eq!(report.content_type, None);
    }
}
