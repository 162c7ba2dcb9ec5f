//! Constant values for the rsapost workspace
//!
//! Sizes and the compiled-in Known-Answer Test suite. This crate has no
//! dependencies and everything in it is immutable.

#![cfg_attr(not(test), no_std)]

pub mod kat;
pub mod traditional;
pub mod utils;

pub use kat::rsa::RSA_2048_KAT_SUITE;
pub use kat::{
    EncryptionPadding, HashAlgorithm, KatCheck, KatSuite, KatVector, KeyComponents,
    SignaturePadding,
};
