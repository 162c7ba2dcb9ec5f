//! RSA provider backed by the RustCrypto `rsa` and `sha2` crates
//!
//! [`RustCryptoProvider`] implements [`rsapost_api::RsaProvider`]: key
//! assembly from raw components, RSASSA-PKCS1-v1_5 and RSASSA-PSS over
//! SHA-256, and RSAES-PKCS1-v1_5 encryption. Private operations are
//! blinded; randomness comes from the operating system per call.

mod key;
mod provider;
mod scheme;

pub use key::RustCryptoKey;
pub use provider::RustCryptoProvider;
