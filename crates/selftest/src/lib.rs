//! RSA power-on Known-Answer self-test
//!
//! Before RSA is trusted for use, [`selftest_rsa`] builds a fixed 2048-bit
//! key from compiled-in components and checks, against precomputed values:
//!
//! 1. RSASSA-PKCS1-v1_5 / SHA-256 signing (byte-exact, then verified)
//! 2. RSASSA-PSS / SHA-256 signing (byte-exact with a zero-length salt)
//! 3. an RSAES-PKCS1-v1_5 encrypt/decrypt round trip
//!
//! Any failure stops the run. The outcome is a single pass/fail decision
//! with the failing [`ErrorKind`] kept as diagnostic context; what the
//! embedding module does with a failure is its own business.
//!
//! The checks run through [`RsaProvider`], so [`run_with`] can drive them
//! against any provider and any [`KatSuite`].
//!
//! # Features
//!
//! - `trace`: emit `tracing` events on state transitions and on failure.
//!   Off by default; the self-test is otherwise silent.
//! - `serde`: `Serialize` for the report and its parts.

pub mod error;
pub mod key;
pub mod roundtrip;
pub mod runner;
pub mod signature;
pub mod state;

pub use error::{Error, ErrorKind, Result};
pub use runner::{run_with, selftest_rsa, SelfTest};
pub use state::{SelfTestReport, SelfTestState};

pub use rsapost_api::RsaProvider;
pub use rsapost_params::{KatSuite, KatVector, KeyComponents, RSA_2048_KAT_SUITE};
pub use rsapost_rsa::RustCryptoProvider;
