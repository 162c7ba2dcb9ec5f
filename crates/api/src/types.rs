//! Core types shared between providers and the self-test
//!
//! The padding, hash and key-component vocabulary is defined next to the
//! constant tables in `rsapost-params` and re-exported here so provider
//! implementations only need this crate.

use zeroize::Zeroizing;

pub use rsapost_params::{
    EncryptionPadding, HashAlgorithm, KatCheck, KatSuite, KatVector, KeyComponents,
    SignaturePadding,
};

/// Heap buffer that is zeroed when dropped
///
/// Used for recovered plaintext and any other intermediate that may hold
/// sensitive bytes.
pub type SecretBuffer = Zeroizing<Vec<u8>>;
