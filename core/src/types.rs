//! Domain types for the teams backend.
//!
//! # Design
//! The backend does not publish a schema for team records, and the probe's
//! job is to report whatever comes back rather than validate it. `Team` is
//! therefore a transparent wrapper over a JSON object: keys and values are
//! preserved exactly, and pretty-printing a `Team` reproduces the record as
//! the server sent it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single team record as returned by the backend.
///
/// Schema is discovered at runtime; the wrapper only guarantees the record
/// is a JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Team(pub Map<String, Value>);
