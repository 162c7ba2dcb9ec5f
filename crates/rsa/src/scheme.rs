//! Mapping from the shared padding/hash vocabulary to RustCrypto types

use rsa::{Pkcs1v15Sign, Pss};
use rsapost_api::HashAlgorithm;
use sha2::{Digest, Sha256};

/// Hash `message` with `hash`
pub(crate) fn digest(hash: HashAlgorithm, message: &[u8]) -> Vec<u8> {
    match hash {
        HashAlgorithm::Sha256 => Sha256::digest(message).to_vec(),
    }
}

/// RSASSA-PKCS1-v1_5 with the DigestInfo prefix for `hash`
pub(crate) fn pkcs1v15(hash: HashAlgorithm) -> Pkcs1v15Sign {
    match hash {
        HashAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
    }
}

/// RSASSA-PSS with MGF1(`hash`) and a fixed salt length
pub(crate) fn pss(hash: HashAlgorithm, salt_len: usize) -> Pss {
    match hash {
        HashAlgorithm::Sha256 => Pss::new_with_salt::<Sha256>(salt_len),
    }
}
