//! Error type definitions for provider operations

/// Primary error type for provider operations
///
/// `context` is always a static string naming the operation. `message`
/// carries the backend's description and must never contain key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material could not be decoded or assembled
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Signature generation or verification failed
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Public-key encryption failed
    EncryptionFailed {
        context: &'static str,
        message: String,
    },

    /// Private-key decryption failed
    DecryptionFailed {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for provider operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::EncryptionFailed { message, .. } => Self::EncryptionFailed { context, message },
            Self::DecryptionFailed { message, .. } => Self::DecryptionFailed { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Replace the message of an existing error
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::EncryptionFailed { context, .. } => Self::EncryptionFailed { context, message },
            Self::DecryptionFailed { context, .. } => Self::DecryptionFailed { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// The static context of this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::EncryptionFailed { context, .. }
            | Self::DecryptionFailed { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::InvalidSignature { context, message } => {
                write!(f, "Invalid signature: {}: {}", context, message)
            }
            Self::EncryptionFailed { context, message } => {
                write!(f, "Encryption failed: {}: {}", context, message)
            }
            Self::DecryptionFailed { context, message } => {
                write!(f, "Decryption failed: {}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
