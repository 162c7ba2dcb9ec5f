//! Trait definitions for rsapost providers

pub mod rsa;

pub use rsa::RsaProvider;
