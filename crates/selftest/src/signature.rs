//! Signature Known-Answer checks

use rsapost_api::{ResultExt, RsaProvider};
use rsapost_internal::ct_eq;
use rsapost_params::{KatCheck, KatVector};

use crate::error::{Error, ErrorKind, Result};

/// Run one signature vector
///
/// Signs `vector.message`, compares the result with `vector.expected`
/// according to `vector.check`, then verifies the produced signature with
/// the public half of the key. Any error or mismatch is
/// [`ErrorKind::KatMismatch`] labelled with `vector.label`.
pub fn check_signature<P: RsaProvider>(
    provider: &P,
    key: &P::PrivateKey,
    vector: &KatVector<'_>,
) -> Result<()> {
    let mismatch = || Error::new(ErrorKind::KatMismatch, vector.label);

    let signature = provider
        .sign(key, vector.padding, vector.hash, vector.message)
        .wrap_err(mismatch)?;

    match vector.check {
        KatCheck::ExactMatch => {
            if !ct_eq(&signature, vector.expected) {
                return Err(mismatch());
            }
        }
        KatCheck::Verify => provider
            .verify(key, vector.padding, vector.hash, vector.message, vector.expected)
            .wrap_err(mismatch)?,
    }

    provider
        .verify(key, vector.padding, vector.hash, vector.message, &signature)
        .wrap_err(mismatch)
}

/// Run every vector in order, stopping at the first failure
///
/// An empty vector list is rejected rather than passed.
pub fn check_signatures<P: RsaProvider>(
    provider: &P,
    key: &P::PrivateKey,
    vectors: &[KatVector<'_>],
) -> Result<()> {
    if vectors.is_empty() {
        return Err(Error::new(ErrorKind::KatMismatch, "no signature vectors"));
    }

    vectors
        .iter()
        .try_for_each(|vector| check_signature(provider, key, vector))
}
