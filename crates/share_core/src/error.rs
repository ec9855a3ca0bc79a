//! Error types for the copy/share workflow.

use thiserror::Error;

/// Failure reported by the host environment for a single effect,
/// e.g. a rejected clipboard write. Carries only a message; the
/// workflow never inspects it beyond display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EnvFailure {
    pub message: String,
}

impl EnvFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Both clipboard paths failed: the primary clipboard write and the
/// legacy fallback copy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard write failed ({primary}); fallback copy failed ({fallback})")]
pub struct ClipboardError {
    pub primary: EnvFailure,
    pub fallback: EnvFailure,
}

/// Outcome of a rejected native share invocation.
///
/// User cancellation is not an error condition: the workflow treats
/// [`ShareError::Aborted`] as a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The user dismissed the native share dialog.
    #[error("share dismissed by the user")]
    Aborted,
    /// The native share entry point rejected for some other reason.
    #[error("native share failed: {0}")]
    Failed(String),
}

impl ShareError {
    /// Classify a rejection by its DOM exception name. Browsers
    /// signal user cancellation as an `AbortError`.
    pub fn from_exception(name: &str, message: impl Into<String>) -> Self {
        if name == "AbortError" {
            ShareError::Aborted
        } else {
            ShareError::Failed(message.into())
        }
    }

    pub fn is_abort(&self) -> bool {
        matches!(self, ShareError::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_error_classified_as_aborted() {
        let err = ShareError::from_exception("AbortError", "Share canceled");
        assert!(err.is_abort());
    }

    #[test]
    fn test_other_exceptions_classified_as_failed() {
        let err = ShareError::from_exception("NotAllowedError", "denied");
        assert_eq!(err, ShareError::Failed("denied".to_string()));

        let err = ShareError::from_exception("", "no exception name");
        assert!(!err.is_abort());
    }
}
