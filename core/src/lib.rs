//! Deterministic core of the teams endpoint diagnostic probe.
//!
//! # Overview
//! Builds the `/teams` GET request as plain data and classifies the received
//! response without touching the network (host-does-IO pattern). The caller
//! executes the actual HTTP round-trip, making the core fully deterministic
//! and testable against constructed responses.
//!
//! # Design
//! - `TeamsProbe` is stateless — it holds only `base_url`.
//! - The single operation is split into `build_get_teams` (produces the
//!   request) and `inspect` (consumes the response), so the I/O boundary is
//!   explicit.
//! - `inspect` is infallible: instead of a catch-all, every response maps to
//!   an `Outcome` variant (team summary, empty body, decode error, non-200),
//!   and `Report::render` produces the fixed-order diagnostic text.
//! - Team records are schema-free JSON objects; the probe reports structure,
//!   it does not validate it.

pub mod http;
pub mod probe;
pub mod report;
pub mod types;

pub use http::{HttpRequest, HttpResponse};
pub use probe::TeamsProbe;
pub use report::{Outcome, Report, CONTENT_TYPE_MISSING};
pub use types::Team;
