//! Self-test orchestration

use rsapost_api::RsaProvider;
use rsapost_params::{KatSuite, RSA_2048_KAT_SUITE};
use rsapost_rsa::RustCryptoProvider;

use crate::error::{Error, Result};
use crate::key::load_private_key;
use crate::roundtrip::check_round_trip;
use crate::signature::check_signatures;
use crate::state::{SelfTestReport, SelfTestState};

/// One self-test run over a provider and a suite
///
/// Stages run strictly in order: load the key, check the signature
/// vectors, check the encrypt/decrypt round trip. The first failure ends
/// the run. [`run`](SelfTest::run) consumes the orchestrator, and the
/// private key is dropped before the report is returned whichever way the
/// run ended.
///
/// ```
/// use rsapost_selftest::{SelfTest, SelfTestState, RustCryptoProvider, RSA_2048_KAT_SUITE};
///
/// let test = SelfTest::new(RustCryptoProvider::new(), RSA_2048_KAT_SUITE);
/// assert_eq!(test.state(), SelfTestState::Start);
/// assert!(test.run().passed());
/// ```
#[derive(Debug)]
pub struct SelfTest<'s, P> {
    provider: P,
    suite: KatSuite<'s>,
    state: SelfTestState,
}

impl<'s, P: RsaProvider> SelfTest<'s, P> {
    pub fn new(provider: P, suite: KatSuite<'s>) -> Self {
        Self {
            provider,
            suite,
            state: SelfTestState::Start,
        }
    }

    pub fn state(&self) -> SelfTestState {
        self.state
    }

    /// Run every stage and produce the final report
    pub fn run(mut self) -> SelfTestReport {
        #[cfg(feature = "trace")]
        tracing::debug!(provider = self.provider.name(), "starting RSA self-test");

        match self.execute() {
            Ok(()) => {
                self.advance();
                SelfTestReport::passed_report()
            }
            Err(err) => self.fail(err),
        }
    }

    fn execute(&mut self) -> Result<()> {
        let key = load_private_key(&self.provider, &self.suite.key)?;
        self.advance();

        check_signatures(&self.provider, &key, self.suite.signatures)?;
        self.advance();

        check_round_trip(&self.provider, &key, self.suite.plaintext)?;
        self.advance();

        Ok(())
    }

    fn advance(&mut self) {
        let Some(next) = self.state.next() else {
            debug_assert!(false, "advance from terminal state {}", self.state);
            return;
        };

        #[cfg(feature = "trace")]
        tracing::debug!(from = %self.state, to = %next, "RSA self-test transition");

        self.state = next;
    }

    fn fail(&mut self, err: Error) -> SelfTestReport {
        let reached = self.state;

        #[cfg(feature = "trace")]
        tracing::warn!(
            reached = %reached,
            kind = %err.kind(),
            context = err.context(),
            "RSA self-test failed"
        );

        if let Some(failed) = reached.fail() {
            self.state = failed;
        }
        SelfTestReport::failed_report(reached, err)
    }
}

/// Run `suite` against `provider`
pub fn run_with<P: RsaProvider>(provider: P, suite: KatSuite<'_>) -> SelfTestReport {
    SelfTest::new(provider, suite).run()
}

/// Power-on RSA self-test over the embedded key and vectors
///
/// Returns `Ok(())` only if key construction, both signature vectors and
/// the round trip all succeeded.
pub fn selftest_rsa() -> Result<()> {
    run_with(RustCryptoProvider::new(), RSA_2048_KAT_SUITE).into_result()
}
