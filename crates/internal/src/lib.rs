//! Internal utilities for the rsapost workspace
//!
//! Not part of the public API; used by the self-test checks.

#![cfg_attr(not(test), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_starts_with};
