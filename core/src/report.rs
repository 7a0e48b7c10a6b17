//! Diagnostic report: classification outcome plus fixed-order rendering.
//!
//! # Design
//! The source of truth for what the probe prints. `Outcome` is an explicit
//! sum type over the four ways a received response can be classified, so
//! callers and tests pattern-match instead of scraping text. `render` then
//! flattens a `Report` into the exact line order the diagnostic emits:
//! status code, quoted raw body, content-type, then one branch-specific
//! section.

use std::fmt::Write;

use crate::types::Team;

/// Sentinel printed when the server sent no `Content-Type` header.
pub const CONTENT_TYPE_MISSING: &str = "Not specified";

/// Classification of a received HTTP response.
///
/// Transport faults never reach this type; they are handled by the host
/// before a response exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 200 with a body that parsed as a JSON array of team records.
    /// `first` holds the first record pretty-printed with 2-space
    /// indentation, absent when the array is empty.
    Teams { count: usize, first: Option<String> },

    /// 200 with a body that is empty after trimming. No parse is attempted.
    EmptyBody,

    /// 200 with a non-empty body that failed to parse as a team array.
    DecodeError(String),

    /// Any non-200 status. The raw body is reported, never parsed.
    HttpError { body: String },
}

/// Everything the probe learned from one HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub status: u16,
    pub body: String,
    pub content_type: Option<String>,
    pub outcome: Outcome,
}

impl Report {
    /// Render the diagnostic text, one section per line, in fixed order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Status Code: {}", self.status);
        let _ = writeln!(out, "Response text: '{}'", self.body);
        let _ = writeln!(
            out,
            "Content-Type: {}",
            self.content_type.as_deref().unwrap_or(CONTENT_TYPE_MISSING)
        );
        match &self.outcome {
            Outcome::Teams { count, first } => {
                let _ = writeln!(out, "Number of teams: {count}");
                if let Some(first) = first {
                    let _ = writeln!(out, "First team structure:");
                    let _ = writeln!(out, "{first}");
                }
            }
            Outcome::EmptyBody => {
                let _ = writeln!(out, "Empty response");
            }
            Outcome::DecodeError(description) => {
                let _ = writeln!(out, "JSON decode error: {description}");
            }
            Outcome::HttpError { body } => {
                let _ = writeln!(out, "Error: {body}");
            }
        }
        out
    }
}

/// Pretty-print one team record with 2-space indentation.
///
/// Serializing a JSON object back to a string cannot fail, but the signature
/// of `to_string_pretty` says otherwise; the fallback keeps the renderer
/// infallible.
pub(crate) fn pretty_team(team: &Team) -> String {
    serde_json::to_string_pretty(team).unwrap_or_else(|e| format!("<unprintable team: {e}>"))
}
