//! Each stage of the self-test fails closed and releases its key

use rsapost_selftest::{run_with, ErrorKind, SelfTestState, RSA_2048_KAT_SUITE};
use rsapost_tests::{Fault, FaultyProvider};

struct Case {
    fault: Fault,
    kind: ErrorKind,
    reached: SelfTestState,
}

const CASES: &[Case] = &[
    Case {
        fault: Fault::RejectKey,
        kind: ErrorKind::KeyConstruction,
        reached: SelfTestState::Start,
    },
    Case {
        fault: Fault::SignError,
        kind: ErrorKind::KatMismatch,
        reached: SelfTestState::KeyLoaded,
    },
    Case {
        fault: Fault::CorruptSignature,
        kind: ErrorKind::KatMismatch,
        reached: SelfTestState::KeyLoaded,
    },
    Case {
        fault: Fault::EncryptError,
        kind: ErrorKind::EncryptFailure,
        reached: SelfTestState::SignatureVerified,
    },
    Case {
        fault: Fault::EmptyCiphertext,
        kind: ErrorKind::EncryptFailure,
        reached: SelfTestState::SignatureVerified,
    },
    Case {
        fault: Fault::IdentityEncrypt,
        kind: ErrorKind::TrivialCiphertext,
        reached: SelfTestState::SignatureVerified,
    },
    Case {
        fault: Fault::DecryptError,
        kind: ErrorKind::DecryptFailure,
        reached: SelfTestState::SignatureVerified,
    },
    Case {
        fault: Fault::CorruptDecrypt,
        kind: ErrorKind::RoundTripMismatch,
        reached: SelfTestState::SignatureVerified,
    },
];

#[test]
fn every_fault_fails_the_run() {
    for case in CASES {
        let provider = FaultyProvider::new(case.fault);
        let report = run_with(&provider, RSA_2048_KAT_SUITE);

        assert!(!report.passed(), "{:?} passed", case.fault);
        assert_eq!(report.state(), SelfTestState::Failed, "{:?}", case.fault);
        assert_eq!(report.reached(), case.reached, "{:?}", case.fault);
        assert_eq!(
            report.failure().map(|err| err.kind()),
            Some(case.kind),
            "{:?}",
            case.fault
        );
    }
}

#[test]
fn no_key_outlives_a_run() {
    for case in CASES {
        let provider = FaultyProvider::new(case.fault);
        let _ = run_with(&provider, RSA_2048_KAT_SUITE);
        assert_eq!(provider.live_keys(), 0, "{:?}", case.fault);
    }

    let provider = FaultyProvider::new(Fault::None);
    assert!(run_with(&provider, RSA_2048_KAT_SUITE).passed());
    assert_eq!(provider.keys_built(), 1);
    assert_eq!(provider.live_keys(), 0);
}

#[test]
fn later_stages_do_not_run_after_a_failure() {
    let provider = FaultyProvider::new(Fault::RejectKey);
    let _ = run_with(&provider, RSA_2048_KAT_SUITE);
    assert_eq!(provider.sign_calls(), 0);
    assert_eq!(provider.encrypt_calls(), 0);

    let provider = FaultyProvider::new(Fault::SignError);
    let _ = run_with(&provider, RSA_2048_KAT_SUITE);
    assert_eq!(provider.sign_calls(), 1);
    assert_eq!(provider.encrypt_calls(), 0);

    let provider = FaultyProvider::new(Fault::IdentityEncrypt);
    let _ = run_with(&provider, RSA_2048_KAT_SUITE);
    assert_eq!(provider.sign_calls(), 2);
    assert_eq!(provider.decrypt_calls(), 0);
}

#[test]
fn diagnostics_carry_no_provider_messages() {
    for case in CASES {
        let report = run_with(FaultyProvider::new(case.fault), RSA_2048_KAT_SUITE);
        let printed = report.to_string();
        assert!(!printed.contains("refused"), "{printed}");
        assert!(!printed.contains("rejected"), "{printed}");
    }
}
