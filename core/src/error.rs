//! Error types for the randomness core.

use thiserror::Error;

/// Errors surfaced by generator mode control and the function registry.
///
/// Degenerate sampling inputs (empty sources, all-zero weights) are not
/// errors; they return `None` or fall back to uniform selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    /// `enter_unbound` was called while an engine is already parked.
    /// Honoring it would silently discard the deterministic stream.
    #[error("unbound mode is already active; exit it before entering again")]
    UnboundActive,

    /// `exit_unbound` was called with no parked engine to restore.
    #[error("not in unbound mode; no parked engine to restore")]
    NotUnbound,

    /// A registry call used a handle that was never issued.
    #[error("no registered function for handle {0}")]
    UnknownHandle(usize),

    /// A registry call requested a different type than was registered.
    #[error("registered function returns `{found}`, caller requested `{expected}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
