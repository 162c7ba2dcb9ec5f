//! Private key assembly from raw big-endian components

use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use rsapost_api::error::KeyResult;
use rsapost_api::{Error as ApiError, KeyComponents};
use zeroize::Zeroizing;

/// RSA private key with its public half cached
///
/// The private half is cleared on drop by `rsa::RsaPrivateKey` itself.
pub struct RustCryptoKey {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl RustCryptoKey {
    /// Decode and assemble a key from its eight components
    ///
    /// Every decoded secret integer is held in a `Zeroizing` wrapper, so
    /// whichever step fails, the values decoded so far are cleared as the
    /// function returns.
    pub fn from_components(components: &KeyComponents<'_>) -> KeyResult<Self> {
        let n = decode_component("n", components.n)?;
        let e = decode_component("e", components.e)?;
        let d = Zeroizing::new(decode_component("d", components.d)?);
        let p = Zeroizing::new(decode_component("p", components.p)?);
        let q = Zeroizing::new(decode_component("q", components.q)?);
        let dmp1 = Zeroizing::new(decode_component("dmp1", components.dmp1)?);
        let dmq1 = Zeroizing::new(decode_component("dmq1", components.dmq1)?);
        let iqmp = Zeroizing::new(decode_component("iqmp", components.iqmp)?);

        let mut private =
            RsaPrivateKey::from_components(n, e, (*d).clone(), vec![(*p).clone(), (*q).clone()])
                .map_err(|e| invalid_key("RSA key assembly", e))?;
        private
            .validate()
            .map_err(|e| invalid_key("RSA key validation", e))?;
        private
            .precompute()
            .map_err(|e| invalid_key("RSA CRT precomputation", e))?;

        // The backend derives its own CRT values; the supplied ones must agree.
        let coefficient = private.crt_coefficient().map(Zeroizing::new);
        let crt_matches = private.dp() == Some(&*dmp1)
            && private.dq() == Some(&*dmq1)
            && coefficient.as_deref() == Some(&*iqmp);
        if !crt_matches {
            return Err(ApiError::InvalidKey {
                context: "RSA CRT parameters",
                message: "supplied CRT values do not match the primes".into(),
            });
        }

        let public = private.to_public_key();
        Ok(Self { private, public })
    }

    /// Modulus length in bytes
    pub fn size(&self) -> usize {
        self.public.size()
    }

    pub(crate) fn private(&self) -> &RsaPrivateKey {
        &self.private
    }

    pub(crate) fn public(&self) -> &RsaPublicKey {
        &self.public
    }
}

// Never print key material.
impl core::fmt::Debug for RustCryptoKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RustCryptoKey")
            .field("bits", &(self.size() * 8))
            .finish_non_exhaustive()
    }
}

/// Parse one unsigned big-endian component
fn decode_component(name: &'static str, bytes: &[u8]) -> KeyResult<BigUint> {
    if bytes.is_empty() {
        return Err(ApiError::InvalidKey {
            context: name,
            message: "key component is empty".into(),
        });
    }
    if bytes.iter().all(|&b| b == 0) {
        return Err(ApiError::InvalidKey {
            context: name,
            message: "key component is zero".into(),
        });
    }
    Ok(BigUint::from_bytes_be(bytes))
}

fn invalid_key(context: &'static str, err: rsa::Error) -> ApiError {
    ApiError::InvalidKey {
        context,
        message: err.to_string(),
    }
}
