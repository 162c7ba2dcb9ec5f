//! RSA provider trait
//!
//! The self-test never touches big integers, padding or hashing itself.
//! Everything it needs from an RSA implementation goes through this trait,
//! which keeps the orchestration testable with fault-injecting providers.

use crate::error::{CipherResult, KeyResult, SignatureResult};
use crate::types::{EncryptionPadding, HashAlgorithm, KeyComponents, SecretBuffer, SignaturePadding};

/// Capabilities the RSA self-test consumes from a cryptographic provider
///
/// # Key lifetime
///
/// There is no explicit release operation. A key is released when its
/// [`PrivateKey`](RsaProvider::PrivateKey) value is dropped; implementations
/// must clear private material in `Drop`.
///
/// # Diagnostics
///
/// Errors returned from any method must not embed key material, plaintext
/// or intermediate buffers.
pub trait RsaProvider {
    /// Opaque private key handle; also carries the public half
    type PrivateKey;

    /// Returns the name of this provider
    fn name(&self) -> &'static str;

    /// Decode eight big-endian integers and assemble a private key
    ///
    /// Implementations must reject a key whose components are inconsistent
    /// with each other, including CRT values that do not match the primes.
    fn private_key_from_components(
        &self,
        components: &KeyComponents<'_>,
    ) -> KeyResult<Self::PrivateKey>;

    /// Hash `message` and sign the digest
    fn sign(
        &self,
        key: &Self::PrivateKey,
        padding: SignaturePadding,
        hash: HashAlgorithm,
        message: &[u8],
    ) -> SignatureResult<Vec<u8>>;

    /// Hash `message` and verify `signature` with the public half of `key`
    fn verify(
        &self,
        key: &Self::PrivateKey,
        padding: SignaturePadding,
        hash: HashAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> SignatureResult<()>;

    /// Encrypt `plaintext` with the public half of `key`
    fn public_encrypt(
        &self,
        key: &Self::PrivateKey,
        padding: EncryptionPadding,
        plaintext: &[u8],
    ) -> CipherResult<Vec<u8>>;

    /// Decrypt `ciphertext` with the private key
    fn private_decrypt(
        &self,
        key: &Self::PrivateKey,
        padding: EncryptionPadding,
        ciphertext: &[u8],
    ) -> CipherResult<SecretBuffer>;
}

impl<P: RsaProvider + ?Sized> RsaProvider for &P {
    type PrivateKey = P::PrivateKey;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn private_key_from_components(
        &self,
        components: &KeyComponents<'_>,
    ) -> KeyResult<Self::PrivateKey> {
        (**self).private_key_from_components(components)
    }

    fn sign(
        &self,
        key: &Self::PrivateKey,
        padding: SignaturePadding,
        hash: HashAlgorithm,
        message: &[u8],
    ) -> SignatureResult<Vec<u8>> {
        (**self).sign(key, padding, hash, message)
    }

    fn verify(
        &self,
        key: &Self::PrivateKey,
        padding: SignaturePadding,
        hash: HashAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> SignatureResult<()> {
        (**self).verify(key, padding, hash, message, signature)
    }

    fn public_encrypt(
        &self,
        key: &Self::PrivateKey,
        padding: EncryptionPadding,
        plaintext: &[u8],
    ) -> CipherResult<Vec<u8>> {
        (**self).public_encrypt(key, padding, plaintext)
    }

    fn private_decrypt(
        &self,
        key: &Self::PrivateKey,
        padding: EncryptionPadding,
        ciphertext: &[u8],
    ) -> CipherResult<SecretBuffer> {
        (**self).private_decrypt(key, padding, ciphertext)
    }
}
