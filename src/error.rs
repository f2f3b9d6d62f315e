use std::io;

use git2::{ErrorClass, ErrorCode};
use thiserror::Error;

/// Failures that end a single credential negotiation.
///
/// Every variant is terminal: the negotiator never retries, and the transport
/// receives no credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The interactive stream failed (not a clean end-of-stream).
    #[error("Could not read response: {0}")]
    Io(#[from] io::Error),

    /// Growing the line buffer or building a string ran out of memory.
    #[error("Out of memory while reading response")]
    OutOfMemory,

    /// The public key path could not be derived from the private key path.
    #[error("Could not construct public key path")]
    PathConstructionError,

    /// None of the credential types the transport asked for can be produced.
    #[error("None of the requested credential types are supported")]
    UnsupportedCredentialType,
}

impl CredentialError {
    /// Status reported for I/O, allocation and path failures (`GIT_ERROR`).
    pub const HARD_ERROR_STATUS: i32 = -1;

    /// Status reported when no supported credential type was requested (`GIT_EAUTH`).
    pub const UNSUPPORTED_STATUS: i32 = -16;

    /// Whether the operator should see a diagnostic for this error.
    pub fn is_hard(&self) -> bool {
        !matches!(self, CredentialError::UnsupportedCredentialType)
    }

    /// Negative status handed back across the transport boundary.
    pub fn status(&self) -> i32 {
        if self.is_hard() {
            Self::HARD_ERROR_STATUS
        } else {
            Self::UNSUPPORTED_STATUS
        }
    }
}

impl From<CredentialError> for git2::Error {
    fn from(err: CredentialError) -> Self {
        let code = if err.is_hard() {
            ErrorCode::GenericError
        } else {
            ErrorCode::Auth
        };
        let class = match err {
            CredentialError::Io(_) => ErrorClass::Os,
            CredentialError::OutOfMemory => ErrorClass::NoMemory,
            CredentialError::PathConstructionError => ErrorClass::Invalid,
            CredentialError::UnsupportedCredentialType => ErrorClass::Callback,
        };
        git2::Error::new(code, class, err.to_string())
    }
}
