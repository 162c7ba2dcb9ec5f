//! Error types for the self-test
//!
//! Every error is fatal to the run. The diagnostic is the [`ErrorKind`]
//! plus a static label naming the stage, vector or key component; provider
//! messages are dropped at the stage boundary so nothing derived from key
//! material or buffers can reach the caller.

use core::fmt;
use thiserror::Error as ThisError;

/// Which check rejected the module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The embedded key could not be decoded or assembled
    KeyConstruction,
    /// A signature did not match its expected value, or failed to verify
    KatMismatch,
    /// Public-key encryption errored or produced no output
    EncryptFailure,
    /// The ciphertext begins with the plaintext verbatim
    TrivialCiphertext,
    /// Private-key decryption errored
    DecryptFailure,
    /// Decryption did not reproduce the plaintext
    RoundTripMismatch,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::KeyConstruction => "key construction failed",
            ErrorKind::KatMismatch => "known-answer signature mismatch",
            ErrorKind::EncryptFailure => "public encryption failed",
            ErrorKind::TrivialCiphertext => "ciphertext equals plaintext",
            ErrorKind::DecryptFailure => "private decryption failed",
            ErrorKind::RoundTripMismatch => "decrypted text differs from plaintext",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A self-test failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("RSA self-test: {kind} ({context})")]
pub struct Error {
    kind: ErrorKind,
    context: &'static str,
}

impl Error {
    pub const fn new(kind: ErrorKind, context: &'static str) -> Self {
        Self { kind, context }
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Static label of the failing stage, vector or key component
    pub const fn context(&self) -> &'static str {
        self.context
    }
}

/// Result type for self-test stages
pub type Result<T> = core::result::Result<T, Error>;
