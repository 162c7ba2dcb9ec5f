//! Encrypt/decrypt round-trip check

use rsapost_api::{EncryptionPadding, ResultExt, RsaProvider};
use rsapost_internal::{ct_eq, ct_starts_with};
use zeroize::Zeroizing;

use crate::error::{Error, ErrorKind, Result};

const CONTEXT: &str = "RSA PKCS#1 v1.5 round trip";

/// Encrypt `plaintext` under the public key, decrypt it again and require
/// the same bytes back
///
/// A ciphertext that begins with the plaintext is rejected before
/// decryption is attempted. Both the ciphertext and the recovered text are
/// cleared on every exit path.
pub fn check_round_trip<P: RsaProvider>(
    provider: &P,
    key: &P::PrivateKey,
    plaintext: &[u8],
) -> Result<()> {
    let padding = EncryptionPadding::Pkcs1v15;

    let ciphertext = provider
        .public_encrypt(key, padding, plaintext)
        .map(Zeroizing::new)
        .wrap_err(|| Error::new(ErrorKind::EncryptFailure, CONTEXT))?;
    if ciphertext.is_empty() {
        return Err(Error::new(ErrorKind::EncryptFailure, CONTEXT));
    }

    if ct_starts_with(&*ciphertext, plaintext) {
        return Err(Error::new(ErrorKind::TrivialCiphertext, CONTEXT));
    }

    let recovered = provider
        .private_decrypt(key, padding, &ciphertext)
        .wrap_err(|| Error::new(ErrorKind::DecryptFailure, CONTEXT))?;

    if !ct_eq(&*recovered, plaintext) {
        return Err(Error::new(ErrorKind::RoundTripMismatch, CONTEXT));
    }

    Ok(())
}
