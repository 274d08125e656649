//! Error types for project domain parsing.

use thiserror::Error;

/// Error returned while parsing a project status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);

/// Error returned when text does not hold a project identifier.
///
/// Drag payloads carry identifiers as text, so a payload from a foreign
/// source can fail to parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid project identifier: {0}")]
pub struct ParseProjectIdError(pub String);
