//! Testing utilities and benchmarks for the rsapost workspace
//!
//! [`FaultyProvider`] wraps the RustCrypto provider, breaks exactly one
//! operation on request and counts the keys it has handed out, so the
//! integration tests can check both the failure path and that no key
//! outlives a run.

pub mod fault;

pub use fault::{Fault, FaultyProvider, TrackedKey};
