//! Global error type definitions

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
/// An [Outcome](`crate::Outcome`) was unwrapped on the wrong variant
///
/// This is raised only by the unwrap family (`expect`, `unwrap`, `expect_err`,
/// `unwrap_err`) and indicates a programming error at the call site, not a
/// runtime condition to recover from. It is delivered as a panic payload, so a
/// `catch_unwind` boundary can tell container misuse apart from any other
/// panic by downcasting to this type.
pub struct UnwrapError(String);

impl UnwrapError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// The message given to `expect`/`expect_err`, or the fixed default used
    /// by `unwrap`/`unwrap_err`
    pub fn message(&self) -> &str {
        &self.0
    }
}
