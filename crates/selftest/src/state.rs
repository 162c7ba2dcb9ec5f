//! Self-test state machine and report

use core::fmt;

use crate::error::{Error, Result};

/// Progress of one self-test run
///
/// The only legal path is `Start -> KeyLoaded -> SignatureVerified ->
/// RoundTripVerified -> Passed`, with a jump to `Failed` from any
/// non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelfTestState {
    Start,
    KeyLoaded,
    SignatureVerified,
    RoundTripVerified,
    Passed,
    Failed,
}

impl SelfTestState {
    /// State reached when the current stage succeeds; `None` once terminal
    pub const fn next(self) -> Option<Self> {
        match self {
            SelfTestState::Start => Some(SelfTestState::KeyLoaded),
            SelfTestState::KeyLoaded => Some(SelfTestState::SignatureVerified),
            SelfTestState::SignatureVerified => Some(SelfTestState::RoundTripVerified),
            SelfTestState::RoundTripVerified => Some(SelfTestState::Passed),
            SelfTestState::Passed | SelfTestState::Failed => None,
        }
    }

    /// State reached when the current stage fails; `None` once terminal
    pub const fn fail(self) -> Option<Self> {
        if self.is_terminal() {
            None
        } else {
            Some(SelfTestState::Failed)
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, SelfTestState::Passed | SelfTestState::Failed)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SelfTestState::Start => "start",
            SelfTestState::KeyLoaded => "key loaded",
            SelfTestState::SignatureVerified => "signatures verified",
            SelfTestState::RoundTripVerified => "round trip verified",
            SelfTestState::Passed => "passed",
            SelfTestState::Failed => "failed",
        }
    }
}

impl fmt::Display for SelfTestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a finished run
///
/// `state` is always terminal. `reached` is the last state entered before
/// the run ended, which locates the failing stage: a failure while in
/// `KeyLoaded` came from the signature checks, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelfTestReport {
    state: SelfTestState,
    reached: SelfTestState,
    failure: Option<Error>,
}

impl SelfTestReport {
    pub(crate) const fn passed_report() -> Self {
        Self {
            state: SelfTestState::Passed,
            reached: SelfTestState::Passed,
            failure: None,
        }
    }

    pub(crate) const fn failed_report(reached: SelfTestState, failure: Error) -> Self {
        Self {
            state: SelfTestState::Failed,
            reached,
            failure: Some(failure),
        }
    }

    pub const fn passed(&self) -> bool {
        matches!(self.state, SelfTestState::Passed)
    }

    pub const fn state(&self) -> SelfTestState {
        self.state
    }

    pub const fn reached(&self) -> SelfTestState {
        self.reached
    }

    pub const fn failure(&self) -> Option<Error> {
        self.failure
    }

    pub fn into_result(self) -> Result<()> {
        match self.failure {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

impl fmt::Display for SelfTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            None => write!(f, "RSA self-test passed"),
            Some(err) => write!(f, "RSA self-test failed after '{}': {}", self.reached, err),
        }
    }
}
