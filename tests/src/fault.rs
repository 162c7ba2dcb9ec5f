//! Fault-injecting RSA provider

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rsapost_api::error::{CipherResult, KeyResult, SignatureResult};
use rsapost_api::{
    EncryptionPadding, Error, HashAlgorithm, KeyComponents, RsaProvider, SecretBuffer,
    SignaturePadding,
};
use rsapost_rsa::{RustCryptoKey, RustCryptoProvider};

/// The single operation a [`FaultyProvider`] breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Behave exactly like the wrapped provider
    None,
    /// Refuse to build the key
    RejectKey,
    /// Fail every signing call
    SignError,
    /// Flip one bit of every produced signature
    CorruptSignature,
    /// Fail public encryption
    EncryptError,
    /// Return an empty ciphertext
    EmptyCiphertext,
    /// Return the plaintext as its own ciphertext
    IdentityEncrypt,
    /// Fail private decryption
    DecryptError,
    /// Flip one bit of the recovered plaintext
    CorruptDecrypt,
}

/// Private key handed out by [`FaultyProvider`]
///
/// Decrements the provider's live-key count when dropped.
#[derive(Debug)]
pub struct TrackedKey {
    inner: RustCryptoKey,
    live: Arc<AtomicUsize>,
}

impl Drop for TrackedKey {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// RustCrypto provider with one injectable fault and call accounting
#[derive(Debug)]
pub struct FaultyProvider {
    inner: RustCryptoProvider,
    fault: Fault,
    live: Arc<AtomicUsize>,
    built: AtomicUsize,
    signs: AtomicUsize,
    encrypts: AtomicUsize,
    decrypts: AtomicUsize,
}

impl FaultyProvider {
    pub fn new(fault: Fault) -> Self {
        Self {
            inner: RustCryptoProvider::new(),
            fault,
            live: Arc::new(AtomicUsize::new(0)),
            built: AtomicUsize::new(0),
            signs: AtomicUsize::new(0),
            encrypts: AtomicUsize::new(0),
            decrypts: AtomicUsize::new(0),
        }
    }

    /// Keys built and not yet dropped
    pub fn live_keys(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Keys successfully built so far
    pub fn keys_built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }

    pub fn sign_calls(&self) -> usize {
        self.signs.load(Ordering::SeqCst)
    }

    pub fn encrypt_calls(&self) -> usize {
        self.encrypts.load(Ordering::SeqCst)
    }

    pub fn decrypt_calls(&self) -> usize {
        self.decrypts.load(Ordering::SeqCst)
    }
}

impl RsaProvider for FaultyProvider {
    type PrivateKey = TrackedKey;

    fn name(&self) -> &'static str {
        "faulty RustCrypto rsa"
    }

    fn private_key_from_components(
        &self,
        components: &KeyComponents<'_>,
    ) -> KeyResult<TrackedKey> {
        if self.fault == Fault::RejectKey {
            return Err(Error::InvalidKey {
                context: "injected key fault",
                message: "key rejected".into(),
            });
        }

        let inner = self.inner.private_key_from_components(components)?;
        self.live.fetch_add(1, Ordering::SeqCst);
        self.built.fetch_add(1, Ordering::SeqCst);
        Ok(TrackedKey {
            inner,
            live: Arc::clone(&self.live),
        })
    }

    fn sign(
        &self,
        key: &TrackedKey,
        padding: SignaturePadding,
        hash: HashAlgorithm,
        message: &[u8],
    ) -> SignatureResult<Vec<u8>> {
        self.signs.fetch_add(1, Ordering::SeqCst);
        match self.fault {
            Fault::SignError => Err(Error::InvalidSignature {
                context: "injected sign fault",
                message: "signing refused".into(),
            }),
            Fault::CorruptSignature => {
                let mut signature = self.inner.sign(&key.inner, padding, hash, message)?;
                if let Some(last) = signature.last_mut() {
                    *last ^= 0x01;
                }
                Ok(signature)
            }
            _ => self.inner.sign(&key.inner, padding, hash, message),
        }
    }

    fn verify(
        &self,
        key: &TrackedKey,
        padding: SignaturePadding,
        hash: HashAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> SignatureResult<()> {
        self.inner.verify(&key.inner, padding, hash, message, signature)
    }

    fn public_encrypt(
        &self,
        key: &TrackedKey,
        padding: EncryptionPadding,
        plaintext: &[u8],
    ) -> CipherResult<Vec<u8>> {
        self.encrypts.fetch_add(1, Ordering::SeqCst);
        match self.fault {
            Fault::EncryptError => Err(Error::EncryptionFailed {
                context: "injected encrypt fault",
                message: "encryption refused".into(),
            }),
            Fault::EmptyCiphertext => Ok(Vec::new()),
            Fault::IdentityEncrypt => Ok(plaintext.to_vec()),
            _ => self.inner.public_encrypt(&key.inner, padding, plaintext),
        }
    }

    fn private_decrypt(
        &self,
        key: &TrackedKey,
        padding: EncryptionPadding,
        ciphertext: &[u8],
    ) -> CipherResult<SecretBuffer> {
        self.decrypts.fetch_add(1, Ordering::SeqCst);
        match self.fault {
            Fault::DecryptError => Err(Error::DecryptionFailed {
                context: "injected decrypt fault",
                message: "decryption refused".into(),
            }),
            Fault::CorruptDecrypt => {
                let mut recovered = self.inner.private_decrypt(&key.inner, padding, ciphertext)?;
                if let Some(first) = recovered.first_mut() {
                    *first ^= 0x01;
                }
                Ok(recovered)
            }
            _ => self.inner.private_decrypt(&key.inner, padding, ciphertext),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsapost_params::kat::rsa::RSA_2048_KEY;

    #[test]
    fn test_live_key_accounting() {
        let provider = FaultyProvider::new(Fault::None);
        let first = provider.private_key_from_components(&RSA_2048_KEY).unwrap();
        let second = provider.private_key_from_components(&RSA_2048_KEY).unwrap();
        assert_eq!(provider.live_keys(), 2);

        drop(first);
        assert_eq!(provider.live_keys(), 1);
        drop(second);
        assert_eq!(provider.live_keys(), 0);
        assert_eq!(provider.keys_built(), 2);
    }

    #[test]
    fn test_rejected_key_is_not_counted() {
        let provider = FaultyProvider::new(Fault::RejectKey);
        assert!(provider.private_key_from_components(&RSA_2048_KEY).is_err());
        assert_eq!(provider.live_keys(), 0);
        assert_eq!(provider.keys_built(), 0);
    }

    #[test]
    fn test_identity_encrypt_echoes_plaintext() {
        let provider = FaultyProvider::new(Fault::IdentityEncrypt);
        let key = provider.private_key_from_components(&RSA_2048_KEY).unwrap();
        let ciphertext = provider
            .public_encrypt(&key, EncryptionPadding::Pkcs1v15, b"echo")
            .unwrap();
        assert_eq!(ciphertext, b"echo");
        assert_eq!(provider.encrypt_calls(), 1);
    }
}
