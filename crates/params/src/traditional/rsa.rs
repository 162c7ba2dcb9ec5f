//! Constants for RSA algorithm

/// RSA with 2048-bit modulus
pub const RSA_MODULUS_2048: usize = 2048;

/// Common RSA public exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;

/// Byte length for RSA-2048 key
pub const RSA_2048_BYTE_LENGTH: usize = RSA_MODULUS_2048 / 8;

/// Minimum padding overhead of RSAES-PKCS1-v1_5 in bytes
pub const PKCS1_V15_ENCRYPTION_OVERHEAD: usize = 11;

/// Largest plaintext RSAES-PKCS1-v1_5 accepts under a 2048-bit modulus
pub const RSA_2048_PKCS1_MAX_PLAINTEXT: usize =
    RSA_2048_BYTE_LENGTH - PKCS1_V15_ENCRYPTION_OVERHEAD;
