//! Known-Answer Test vocabulary and embedded vectors
//!
//! Every item here is plain borrowed data. The embedded suite lives in
//! [`rsa`] as `'static` constants; tests build variants of it by borrowing
//! modified copies of individual fields.

use core::fmt;

pub mod rsa;

/// Hash function applied to the message before signing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256 (FIPS 180-4)
    Sha256,
}

impl HashAlgorithm {
    /// Digest length in bytes
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => crate::utils::hash::SHA256_OUTPUT_SIZE,
        }
    }

    /// Name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
        }
    }
}

/// Signature padding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignaturePadding {
    /// RSASSA-PKCS1-v1_5
    Pkcs1v15,
    /// RSASSA-PSS with MGF1 over the message hash and the given salt length
    Pss { salt_len: usize },
}

/// Encryption padding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionPadding {
    /// RSAES-PKCS1-v1_5
    Pkcs1v15,
}

/// How a signature vector's output is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KatCheck {
    /// The produced signature must equal the expected bytes exactly
    ExactMatch,
    /// The produced and the expected signature must both verify.
    /// For schemes whose output is randomized (PSS with a random salt).
    Verify,
}

/// The eight big-endian integer encodings of an RSA private key
///
/// Each field is an unsigned big-endian integer. A leading zero byte is
/// permitted where the high bit would otherwise be set.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyComponents<'a> {
    /// Modulus
    pub n: &'a [u8],
    /// Public exponent
    pub e: &'a [u8],
    /// Private exponent
    pub d: &'a [u8],
    /// First prime factor
    pub p: &'a [u8],
    /// Second prime factor
    pub q: &'a [u8],
    /// `d mod (p - 1)`
    pub dmp1: &'a [u8],
    /// `d mod (q - 1)`
    pub dmq1: &'a [u8],
    /// `q^-1 mod p`
    pub iqmp: &'a [u8],
}

impl<'a> KeyComponents<'a> {
    /// Components paired with their names, in declaration order
    pub fn named(&self) -> [(&'static str, &'a [u8]); 8] {
        [
            ("n", self.n),
            ("e", self.e),
            ("d", self.d),
            ("p", self.p),
            ("q", self.q),
            ("dmp1", self.dmp1),
            ("dmq1", self.dmq1),
            ("iqmp", self.iqmp),
        ]
    }
}

// Only lengths are printed; the values are private key material.
impl fmt::Debug for KeyComponents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("KeyComponents");
        for (name, bytes) in self.named() {
            s.field(name, &bytes.len());
        }
        s.finish()
    }
}

/// One signature Known-Answer Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KatVector<'a> {
    /// Message to sign
    pub message: &'a [u8],
    /// Expected signature
    pub expected: &'a [u8],
    /// Padding scheme
    pub padding: SignaturePadding,
    /// Message hash
    pub hash: HashAlgorithm,
    /// Comparison mode
    pub check: KatCheck,
    /// Human-readable name reported on failure
    pub label: &'static str,
}

/// Everything one self-test run consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KatSuite<'a> {
    /// Private key under test
    pub key: KeyComponents<'a>,
    /// Signature vectors, run in order
    pub signatures: &'a [KatVector<'a>],
    /// Plaintext for the encrypt/decrypt round trip
    pub plaintext: &'a [u8],
}
