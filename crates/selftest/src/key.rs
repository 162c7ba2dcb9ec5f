//! Key material loading

use rsapost_api::RsaProvider;
use rsapost_params::KeyComponents;

use crate::error::{Error, ErrorKind, Result};

/// Build the private key under test from its eight components
///
/// Each component must be a non-empty unsigned big-endian integer with no
/// redundant leading zero byte; a single leading zero is only accepted
/// ahead of a byte with its high bit set. Assembly and consistency checks
/// are the provider's. Any failure is reported as
/// [`ErrorKind::KeyConstruction`] with the provider's static context, so
/// the name of the offending stage survives but nothing about its value
/// does.
pub fn load_private_key<P: RsaProvider>(
    provider: &P,
    components: &KeyComponents<'_>,
) -> Result<P::PrivateKey> {
    for (name, bytes) in components.named() {
        if !is_canonical(bytes) {
            return Err(Error::new(ErrorKind::KeyConstruction, name));
        }
    }

    provider
        .private_key_from_components(components)
        .map_err(|err| Error::new(ErrorKind::KeyConstruction, err.context()))
}

fn is_canonical(bytes: &[u8]) -> bool {
    match bytes {
        [] => false,
        [0, next, ..] => next & 0x80 != 0,
        _ => true,
    }
}
