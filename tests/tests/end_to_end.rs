//! End-to-end runs of the RSA power-on self-test

use rsapost_params::kat::rsa::{
    KAT_MESSAGE, PKCS1_SHA256_LABEL, RSA_2048_PKCS1_SHA256_SIGNATURE, RSA_2048_SIGNATURE_VECTORS,
};
use rsapost_params::{KatCheck, KatSuite, KatVector, SignaturePadding};
use rsapost_selftest::{
    run_with, selftest_rsa, ErrorKind, RsaProvider, RustCryptoProvider, SelfTest, SelfTestState,
    RSA_2048_KAT_SUITE,
};
use rsapost_tests::{Fault, FaultyProvider};

#[test]
fn embedded_suite_passes() {
    assert_eq!(selftest_rsa(), Ok(()));

    let report = run_with(RustCryptoProvider::new(), RSA_2048_KAT_SUITE);
    assert!(report.passed());
    assert_eq!(report.state(), SelfTestState::Passed);
}

#[test]
fn repeated_runs_agree() {
    let provider = RustCryptoProvider::new();
    let first = run_with(&provider, RSA_2048_KAT_SUITE);
    let second = run_with(&provider, RSA_2048_KAT_SUITE);
    assert_eq!(first, second);
    assert_eq!(selftest_rsa(), selftest_rsa());
}

#[test]
fn every_pkcs1_byte_is_checked() {
    let provider = RustCryptoProvider::new();

    for index in [0, 1, 127, 128, 254, 255] {
        let mut expected = RSA_2048_PKCS1_SHA256_SIGNATURE;
        expected[index] = expected[index].wrapping_add(1);
        let vectors = [
            KatVector {
                expected: &expected,
                ..RSA_2048_SIGNATURE_VECTORS[0]
            },
            RSA_2048_SIGNATURE_VECTORS[1],
        ];
        let suite = KatSuite {
            signatures: &vectors,
            ..RSA_2048_KAT_SUITE
        };

        let err = run_with(&provider, suite).into_result().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KatMismatch, "byte {index}");
        assert_eq!(err.context(), PKCS1_SHA256_LABEL);
    }
}

#[test]
fn corrupted_signature_never_reaches_round_trip() {
    let provider = FaultyProvider::new(Fault::None);

    let mut expected = RSA_2048_PKCS1_SHA256_SIGNATURE;
    expected[42] ^= 0x04;
    let vectors = [KatVector {
        expected: &expected,
        ..RSA_2048_SIGNATURE_VECTORS[0]
    }];
    let suite = KatSuite {
        signatures: &vectors,
        ..RSA_2048_KAT_SUITE
    };

    let report = run_with(&provider, suite);
    assert!(!report.passed());
    assert_eq!(report.reached(), SelfTestState::KeyLoaded);
    assert_eq!(provider.encrypt_calls(), 0);
    assert_eq!(provider.live_keys(), 0);
}

#[test]
fn verify_mode_accepts_randomized_pss() {
    let provider = RustCryptoProvider::new();
    let key = provider
        .private_key_from_components(&RSA_2048_KAT_SUITE.key)
        .unwrap();
    let padding = SignaturePadding::Pss { salt_len: 32 };
    let expected = provider
        .sign(&key, padding, RSA_2048_SIGNATURE_VECTORS[1].hash, KAT_MESSAGE)
        .unwrap();

    let vectors = [
        RSA_2048_SIGNATURE_VECTORS[0],
        KatVector {
            expected: &expected,
            padding,
            check: KatCheck::Verify,
            ..RSA_2048_SIGNATURE_VECTORS[1]
        },
    ];
    let suite = KatSuite {
        signatures: &vectors,
        ..RSA_2048_KAT_SUITE
    };

    assert!(run_with(&provider, suite).passed());
}

#[test]
fn orchestrator_is_single_use() {
    let test = SelfTest::new(RustCryptoProvider::new(), RSA_2048_KAT_SUITE);
    assert_eq!(test.state(), SelfTestState::Start);
    let report = test.run();
    assert_eq!(report.state(), SelfTestState::Passed);
}

#[test]
fn report_serializes() {
    let report = run_with(FaultyProvider::new(Fault::EncryptError), RSA_2048_KAT_SUITE);
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["state"], "Failed");
    assert_eq!(json["reached"], "SignatureVerified");
    assert_eq!(json["failure"]["kind"], "EncryptFailure");
    assert_eq!(json["failure"]["context"], "RSA PKCS#1 v1.5 round trip");
}
