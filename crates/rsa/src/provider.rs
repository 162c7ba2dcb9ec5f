//! [`RsaProvider`] implementation

use rand::rngs::OsRng;
use rsa::Pkcs1v15Encrypt;
use rsapost_api::error::{CipherResult, KeyResult, SignatureResult};
use rsapost_api::{
    EncryptionPadding, Error as ApiError, HashAlgorithm, KeyComponents, ResultExt, RsaProvider,
    SecretBuffer, SignaturePadding,
};
use zeroize::Zeroizing;

use crate::key::RustCryptoKey;
use crate::scheme;

/// Stateless provider over the RustCrypto RSA stack
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl RsaProvider for RustCryptoProvider {
    type PrivateKey = RustCryptoKey;

    fn name(&self) -> &'static str {
        "RustCrypto rsa"
    }

    fn private_key_from_components(
        &self,
        components: &KeyComponents<'_>,
    ) -> KeyResult<Self::PrivateKey> {
        RustCryptoKey::from_components(components)
    }

    fn sign(
        &self,
        key: &Self::PrivateKey,
        padding: SignaturePadding,
        hash: HashAlgorithm,
        message: &[u8],
    ) -> SignatureResult<Vec<u8>> {
        let digest = scheme::digest(hash, message);
        let mut rng = OsRng;

        // The RNG only drives blinding, and the salt when salt_len > 0.
        let signature = match padding {
            SignaturePadding::Pkcs1v15 => {
                key.private()
                    .sign_with_rng(&mut rng, scheme::pkcs1v15(hash), &digest)
            }
            SignaturePadding::Pss { salt_len } => {
                check_salt_len(key, hash, salt_len)?;
                key.private()
                    .sign_with_rng(&mut rng, scheme::pss(hash, salt_len), &digest)
            }
        };

        signature.map_err(|e| ApiError::InvalidSignature {
            context: "RSA sign",
            message: e.to_string(),
        })
    }

    fn verify(
        &self,
        key: &Self::PrivateKey,
        padding: SignaturePadding,
        hash: HashAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> SignatureResult<()> {
        let digest = scheme::digest(hash, message);

        let verified = match padding {
            SignaturePadding::Pkcs1v15 => {
                key.public()
                    .verify(scheme::pkcs1v15(hash), &digest, signature)
            }
            SignaturePadding::Pss { salt_len } => {
                key.public()
                    .verify(scheme::pss(hash, salt_len), &digest, signature)
            }
        };

        verified.wrap_err(|| ApiError::InvalidSignature {
            context: "RSA verify",
            message: "signature does not verify".into(),
        })
    }

    fn public_encrypt(
        &self,
        key: &Self::PrivateKey,
        padding: EncryptionPadding,
        plaintext: &[u8],
    ) -> CipherResult<Vec<u8>> {
        let mut rng = OsRng;

        match padding {
            EncryptionPadding::Pkcs1v15 => key
                .public()
                .encrypt(&mut rng, Pkcs1v15Encrypt, plaintext)
                .map_err(|e| ApiError::EncryptionFailed {
                    context: "RSA public encrypt",
                    message: e.to_string(),
                }),
        }
    }

    fn private_decrypt(
        &self,
        key: &Self::PrivateKey,
        padding: EncryptionPadding,
        ciphertext: &[u8],
    ) -> CipherResult<SecretBuffer> {
        if ciphertext.len() != key.size() {
            return Err(ApiError::InvalidLength {
                context: "RSA private decrypt",
                expected: key.size(),
                actual: ciphertext.len(),
            });
        }

        // Padding failures stay opaque: a distinguishable error would be a
        // padding oracle.
        match padding {
            EncryptionPadding::Pkcs1v15 => key
                .private()
                .decrypt(Pkcs1v15Encrypt, ciphertext)
                .map(Zeroizing::new)
                .wrap_err(|| ApiError::DecryptionFailed {
                    context: "RSA private decrypt",
                    message: "decryption error".into(),
                }),
        }
    }
}

// EMSA-PSS needs room for the digest, the salt and two framing bytes.
fn check_salt_len(key: &RustCryptoKey, hash: HashAlgorithm, salt_len: usize) -> SignatureResult<()> {
    let max = key.size().saturating_sub(hash.output_size() + 2);
    if salt_len > max {
        return Err(ApiError::InvalidParameter {
            context: "RSA-PSS salt length",
            message: format!("salt of {salt_len} bytes exceeds {max}"),
        });
    }
    Ok(())
}
