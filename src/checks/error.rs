//! Errors a single probe can hit.
//!
//! These never leave the engine: a probe returning one gets a failing
//! finding carrying the error text, and the run continues.

use thiserror::Error;

use crate::host::Outcome;

/// Why a probe could not reach a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// An expected host artifact is missing.
    #[error("Could not find {0}.")]
    SourceNotFound(String),

    /// The operation needs rights the user does not have.
    #[error("Permission denied while reading {what}: {message}")]
    PermissionDenied { what: String, message: String },

    /// A host artifact exists but could not be understood.
    #[error("Could not parse {0}.")]
    MalformedInput(String),
}

impl<T> Outcome<T> {
    /// The found value, or the matching probe error naming `what`.
    pub fn require(self, what: &str) -> Result<T, ProbeError> {
        match self {
            Outcome::Found(value) => Ok(value),
            Outcome::NotFound => Err(ProbeError::SourceNotFound(what.to_string())),
            Outcome::DeniedPermission(message) => Err(ProbeError::PermissionDenied {
                what: what.to_string(),
                message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_passes_found_value_through() {
        assert_eq!(Outcome::Found(7).require("value"), Ok(7));
    }

    #[test]
    fn require_maps_not_found() {
        let err = Outcome::<u32>::NotFound.require("kernel configuration").unwrap_err();
        assert_eq!(err, ProbeError::SourceNotFound("kernel configuration".into()));
        assert_eq!(err.to_string(), "Could not find kernel configuration.");
    }

    #[test]
    fn require_keeps_permission_text() {
        let err = Outcome::<()>::DeniedPermission("Operation not permitted".into())
            .require("/proc/swaps")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/proc/swaps"));
        assert!(msg.contains("Operation not permitted"));
    }

    #[test]
    fn malformed_input_names_source() {
        let err = ProbeError::MalformedInput("interrupt pattern".into());
        assert_eq!(err.to_string(), "Could not parse interrupt pattern.");
    }
}
