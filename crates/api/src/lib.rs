//! Public API traits and types for rsapost
//!
//! This crate defines the provider seam the self-test drives: the
//! [`RsaProvider`] trait, its error type, and the padding and hash
//! vocabulary shared with the constant tables.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::RsaProvider;
pub use types::*;
