//! # rsapost
//!
//! RSA power-on Known-Answer self-test.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rsapost = "0.3"
//! ```
//!
//! Then gate RSA on the result:
//!
//! ```
//! if let Err(err) = rsapost::power_on_self_test() {
//!     panic!("RSA unavailable: {err}");
//! }
//! ```
//!
//! ## Features
//!
//! - `trace`: `tracing` events on every self-test state transition
//! - `serde`: `Serialize` for [`SelfTestReport`](selftest::SelfTestReport)
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`rsapost-params`]: the embedded key, messages and expected signatures
//! - [`rsapost-api`]: the `RsaProvider` trait and its error type
//! - [`rsapost-internal`]: constant-time comparisons
//! - [`rsapost-rsa`]: the RustCrypto `rsa` provider
//! - [`rsapost-selftest`]: key loading, the signature and round-trip checks,
//!   and the state machine that runs them

// Core re-exports (always available)
pub use rsapost_api as api;
pub use rsapost_internal as internal;
pub use rsapost_params as params;
pub use rsapost_rsa as rsa;
pub use rsapost_selftest as selftest;

pub use rsapost_selftest::{run_with, selftest_rsa, Error, ErrorKind, SelfTestReport};

use rsapost_api::RsaProvider;

/// Common imports for rsapost users
pub mod prelude {
    pub use crate::api::{
        EncryptionPadding, HashAlgorithm, KatCheck, KatSuite, KatVector, KeyComponents,
        RsaProvider, SecretBuffer, SignaturePadding,
    };
    pub use crate::params::RSA_2048_KAT_SUITE;
    pub use crate::rsa::RustCryptoProvider;
    pub use crate::selftest::{
        run_with, selftest_rsa, Error, ErrorKind, SelfTest, SelfTestReport, SelfTestState,
    };
}

/// Run the RSA self-test and log the outcome
///
/// This is the call an embedding module makes at initialization. It logs
/// at `info` on success and at `error` on failure, naming only the error
/// kind and its static label.
pub fn power_on_self_test() -> selftest::Result<()> {
    let provider = rsa::RustCryptoProvider::new();
    let report = run_with(&provider, params::RSA_2048_KAT_SUITE);

    match report.failure() {
        None => {
            tracing::info!(provider = provider.name(), "RSA power-on self-test passed");
            Ok(())
        }
        Some(err) => {
            tracing::error!(
                reached = %report.reached(),
                kind = %err.kind(),
                context = err.context(),
                "RSA power-on self-test failed"
            );
            Err(err)
        }
    }
}
