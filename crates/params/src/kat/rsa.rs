//! Embedded RSA-2048 Known-Answer Test data
//!
//! The key, message and signatures below are fixed. The PKCS#1 v1.5 and PSS
//! signatures are over SHA-256 of [`KAT_MESSAGE`]; the PSS signature was made
//! with a zero-length salt, so it is reproducible byte for byte.

use super::{HashAlgorithm, KatCheck, KatSuite, KatVector, KeyComponents, SignaturePadding};

/// Modulus `n`, 2048 bits (sign-extended with a leading zero byte).
pub const RSA_2048_N: [u8; 257] = [
    0x00, 0xc9, 0xd5, 0x6d, 0x9d, 0x90, 0xdb, 0x43, 0xd6, 0x02, 0xed, 0x96,
    0x88, 0x13, 0x8a, 0xb2, 0xbf, 0x6e, 0xa1, 0x06, 0x10, 0xb2, 0x78, 0x37,
    0xa7, 0x14, 0xa8, 0xff, 0xdd, 0x00, 0xdd, 0xb4, 0x93, 0xa0, 0x45, 0xcc,
    0x96, 0x90, 0xed, 0xad, 0xa9, 0xdd, 0xc4, 0xd6, 0xca, 0x0c, 0xf0, 0xed,
    0x4f, 0x72, 0x5e, 0x21, 0x49, 0x9a, 0x18, 0x12, 0x15, 0x8f, 0x90, 0x5a,
    0xdb, 0xb6, 0x33, 0x99, 0xa3, 0xe6, 0xb4, 0xf0, 0xc4, 0x97, 0x21, 0x26,
    0xbb, 0xe3, 0xba, 0xf2, 0xff, 0xa0, 0x72, 0xda, 0x89, 0x63, 0x8e, 0x8b,
    0x3e, 0x08, 0x9d, 0x92, 0x2a, 0xbe, 0x16, 0xe1, 0x43, 0x15, 0xfc, 0x57,
    0xc7, 0x1f, 0x09, 0x11, 0x67, 0x1c, 0xa9, 0x96, 0xd1, 0x8b, 0x3e, 0x80,
    0x93, 0xc1, 0x59, 0xd0, 0x6d, 0x39, 0xf2, 0xac, 0x95, 0xcc, 0x10, 0x75,
    0xe9, 0x31, 0x24, 0xd1, 0x43, 0xaf, 0x68, 0x52, 0x4b, 0xe7, 0x16, 0xd7,
    0x49, 0x65, 0x6f, 0x26, 0xc0, 0x86, 0xad, 0xc0, 0x07, 0x0a, 0xc1, 0xe1,
    0x2f, 0x87, 0x85, 0x86, 0x3b, 0xdc, 0x5a, 0x99, 0xbe, 0xe9, 0xf9, 0xb9,
    0xe9, 0x82, 0x27, 0x51, 0x04, 0x15, 0xab, 0x06, 0x0e, 0x76, 0x5a, 0x28,
    0x8d, 0x92, 0xbd, 0xc5, 0xb5, 0x7b, 0xa8, 0xdf, 0x4e, 0x47, 0xa2, 0xc1,
    0xe7, 0x52, 0xbf, 0x47, 0xf7, 0x62, 0xe0, 0x3a, 0x6f, 0x4d, 0x6a, 0x4d,
    0x4e, 0xd4, 0xb9, 0x59, 0x69, 0xfa, 0xb2, 0x14, 0xc1, 0xee, 0xe6, 0x2f,
    0x95, 0xcd, 0x94, 0x72, 0xae, 0xe4, 0xdb, 0x18, 0x9a, 0xc4, 0xcd, 0x70,
    0xbd, 0xee, 0x31, 0x16, 0xb7, 0x49, 0x65, 0xac, 0x40, 0x19, 0x0e, 0xb5,
    0x6d, 0x83, 0xf1, 0x36, 0xbb, 0x08, 0x2f, 0x2e, 0x4e, 0x92, 0x62, 0xa4,
    0xff, 0x50, 0xdb, 0x20, 0x45, 0xa2, 0xeb, 0x16, 0x7a, 0xf2, 0xd5, 0x28,
    0xc1, 0xfd, 0x4e, 0x03, 0x71,
];

/// Public exponent `e` (65537).
pub const RSA_2048_E: [u8; 3] = [
    0x01, 0x00, 0x01,
];

/// Private exponent `d`.
pub const RSA_2048_D: [u8; 256] = [
    0x36, 0x27, 0x3d, 0xb1, 0xf9, 0x1b, 0xdb, 0xa7, 0xa0, 0x41, 0x7f, 0x12,
    0x23, 0xac, 0x23, 0x29, 0x99, 0xd5, 0x3a, 0x7b, 0x60, 0x67, 0x41, 0x07,
    0x63, 0x53, 0xb4, 0xd2, 0xe7, 0x58, 0x95, 0x0a, 0xc7, 0x05, 0xf3, 0x4e,
    0xb2, 0xb4, 0x12, 0xd4, 0x70, 0xdc, 0x4f, 0x85, 0x06, 0xd3, 0xdd, 0xd8,
    0x63, 0x27, 0x3e, 0x67, 0x31, 0x21, 0x24, 0x39, 0x04, 0xbc, 0x06, 0xa4,
    0xcc, 0xce, 0x2b, 0x7a, 0xfe, 0x7b, 0xad, 0xde, 0x11, 0x6e, 0xa3, 0xa5,
    0xe6, 0x04, 0x53, 0x0e, 0xa3, 0x4e, 0x2d, 0xb4, 0x8f, 0x31, 0xbf, 0xca,
    0x75, 0x25, 0x52, 0x02, 0x85, 0xde, 0x3d, 0xb2, 0x72, 0x43, 0xb2, 0x89,
    0x8a, 0x9a, 0x34, 0x41, 0x26, 0x3f, 0x9a, 0x67, 0xbe, 0xa4, 0x96, 0x7b,
    0x0e, 0x75, 0xba, 0xa6, 0x93, 0xd5, 0xb8, 0xd8, 0xb8, 0x57, 0xf2, 0x4b,
    0x0f, 0x14, 0x81, 0xd1, 0x57, 0x4e, 0xf6, 0x45, 0x4c, 0xa6, 0x3b, 0xd0,
    0x70, 0xca, 0xd3, 0x9d, 0x55, 0xde, 0x22, 0x05, 0xe7, 0x8e, 0x28, 0x4d,
    0xee, 0x11, 0xcf, 0xb6, 0x67, 0x76, 0x09, 0xd3, 0xe3, 0x3c, 0x13, 0xf9,
    0x99, 0x34, 0x10, 0x7b, 0xec, 0x81, 0x38, 0xf0, 0xb6, 0x34, 0x9c, 0x9b,
    0x50, 0x6f, 0x0b, 0x91, 0x81, 0x4d, 0x89, 0x94, 0x04, 0x7b, 0xf0, 0x3c,
    0xf4, 0xb1, 0xb2, 0x00, 0x48, 0x8d, 0x5a, 0x8f, 0x88, 0x9e, 0xc5, 0xab,
    0x3a, 0x9e, 0x44, 0x3f, 0x54, 0xe7, 0xd9, 0x6e, 0x47, 0xaa, 0xa1, 0xbd,
    0x40, 0x46, 0x31, 0xf9, 0xf0, 0x34, 0xb6, 0x04, 0xe1, 0x2b, 0x5b, 0x73,
    0x86, 0xdd, 0x3a, 0x92, 0x1b, 0x71, 0xc7, 0x3f, 0x32, 0xe5, 0xc3, 0xc2,
    0xab, 0xa1, 0x7e, 0xbf, 0xa4, 0x52, 0xa0, 0xb0, 0x68, 0x90, 0xd1, 0x20,
    0x12, 0x79, 0xe9, 0xd7, 0xc9, 0x40, 0xba, 0xf2, 0x19, 0xc7, 0xa5, 0x00,
    0x92, 0x86, 0x0d, 0x01,
];

/// First prime factor `p`.
pub const RSA_2048_P: [u8; 129] = [
    0x00, 0xfc, 0x5c, 0x6e, 0x16, 0xce, 0x1f, 0x03, 0x7b, 0xcd, 0xf7, 0xb3,
    0x72, 0xb2, 0x8f, 0x16, 0x72, 0xb8, 0x56, 0xae, 0xf7, 0xcd, 0x67, 0xd8,
    0x4e, 0x7d, 0x07, 0xaf, 0xd5, 0x43, 0x26, 0xc3, 0x35, 0xbe, 0x43, 0x8f,
    0x4e, 0x2f, 0x1c, 0x43, 0x4e, 0x6b, 0xd2, 0xb2, 0xec, 0x52, 0x6d, 0x97,
    0x52, 0x2b, 0xcc, 0x5c, 0x3a, 0x6b, 0xf4, 0x14, 0xc6, 0x74, 0xda, 0x66,
    0x38, 0x1c, 0x7a, 0x3f, 0x84, 0x2f, 0xe3, 0xf9, 0x5a, 0xb8, 0x65, 0x69,
    0x46, 0x06, 0xa3, 0x37, 0x79, 0xb2, 0xa1, 0x5b, 0x58, 0xed, 0x5e, 0xa7,
    0x5f, 0x8c, 0x65, 0x66, 0xbb, 0xd1, 0x24, 0x36, 0xe6, 0x37, 0xa7, 0x3d,
    0x49, 0x77, 0x8a, 0x8c, 0x34, 0xd8, 0x69, 0x29, 0xf3, 0x4d, 0x58, 0x22,
    0xb0, 0x51, 0x24, 0xb6, 0x40, 0xa8, 0x86, 0x59, 0x0a, 0xb7, 0xba, 0x5c,
    0x97, 0xda, 0x57, 0xe8, 0x36, 0xda, 0x7a, 0x9c, 0xad,
];

/// Second prime factor `q`.
pub const RSA_2048_Q: [u8; 129] = [
    0x00, 0xcc, 0xbe, 0x7b, 0x09, 0x69, 0x06, 0xee, 0x45, 0xbf, 0x88, 0x47,
    0x38, 0xa8, 0xf8, 0x17, 0xe5, 0xb6, 0xba, 0x67, 0x55, 0xe3, 0xe8, 0x05,
    0x8b, 0xb8, 0xe2, 0x53, 0xd6, 0x8e, 0xef, 0x2c, 0xe7, 0x4f, 0x4a, 0xf7,
    0x4e, 0x26, 0x8d, 0x85, 0x0b, 0x3f, 0xec, 0xc3, 0x1c, 0xd4, 0xeb, 0xec,
    0x6a, 0xc8, 0x72, 0x2a, 0x25, 0x7d, 0xfd, 0xa6, 0x77, 0x96, 0xf0, 0x1e,
    0xcd, 0x28, 0x57, 0xf8, 0x37, 0x30, 0x75, 0x6b, 0xbd, 0xd4, 0x7b, 0x0c,
    0x87, 0xc5, 0x6c, 0x87, 0x40, 0xa5, 0xbb, 0x27, 0x2c, 0x78, 0xc9, 0x74,
    0x5a, 0x54, 0x5b, 0x0b, 0x30, 0x6f, 0x44, 0x4a, 0xfa, 0x71, 0xe4, 0x21,
    0x61, 0x66, 0xf9, 0xee, 0x65, 0xde, 0x7c, 0x04, 0xd7, 0xfd, 0xa9, 0x15,
    0x5b, 0x7f, 0xe2, 0x7a, 0xba, 0x69, 0x86, 0x72, 0xa6, 0x06, 0x8d, 0x9b,
    0x90, 0x55, 0x60, 0x9e, 0x4c, 0x5d, 0xa9, 0xb6, 0x55,
];

/// CRT exponent `d mod (p - 1)`.
pub const RSA_2048_DMP1: [u8; 128] = [
    0x7a, 0xd6, 0x12, 0xd0, 0x0e, 0xec, 0x91, 0xa9, 0x85, 0x8b, 0xf8, 0x50,
    0xf0, 0x11, 0x2e, 0x00, 0x11, 0x32, 0x40, 0x60, 0x66, 0x1f, 0x11, 0xee,
    0xc2, 0x75, 0x27, 0x65, 0x4b, 0x16, 0x67, 0x16, 0x95, 0xd2, 0x14, 0xc3,
    0x1d, 0xb3, 0x48, 0x1f, 0xb7, 0xe4, 0x0b, 0x2b, 0x74, 0xc3, 0xdb, 0x50,
    0x27, 0xf9, 0x85, 0x3a, 0xfa, 0xa9, 0x08, 0x23, 0xc1, 0x65, 0x3d, 0x34,
    0x3a, 0xc8, 0x56, 0x7a, 0x65, 0x45, 0x36, 0x6e, 0xae, 0x2a, 0xce, 0x9f,
    0x43, 0x43, 0xd7, 0x10, 0xe9, 0x9e, 0x18, 0xf4, 0xa4, 0x35, 0xda, 0x8a,
    0x6b, 0xb0, 0x3f, 0xdd, 0x53, 0xe3, 0xa8, 0xc5, 0x4e, 0x79, 0x9d, 0x1f,
    0x51, 0x8c, 0xa2, 0xca, 0x66, 0x3c, 0x6a, 0x2a, 0xff, 0x8e, 0xd2, 0xf3,
    0xb7, 0xcb, 0x82, 0xda, 0xde, 0x2c, 0xe6, 0xd2, 0x8c, 0xb3, 0xad, 0xb6,
    0x4c, 0x95, 0x55, 0x76, 0xbd, 0xc9, 0xc8, 0xd1,
];

/// CRT exponent `d mod (q - 1)`.
pub const RSA_2048_DMQ1: [u8; 129] = [
    0x00, 0x83, 0x23, 0x1d, 0xbb, 0x11, 0x42, 0x17, 0x2b, 0x25, 0x5a, 0x2c,
    0x03, 0xe6, 0x75, 0xc1, 0x18, 0xa8, 0xc9, 0x0b, 0x96, 0xbf, 0xba, 0xc4,
    0x92, 0x91, 0x80, 0xa5, 0x22, 0x2f, 0xba, 0x91, 0x90, 0x36, 0x01, 0x56,
    0x15, 0x00, 0x2c, 0x74, 0xa2, 0x97, 0xf7, 0x15, 0xa1, 0x49, 0xdf, 0x32,
    0x35, 0xd2, 0xdd, 0x0c, 0x91, 0xa6, 0xf8, 0xe7, 0xbe, 0x81, 0x36, 0x9b,
    0x03, 0xdc, 0x6b, 0x3b, 0xd8, 0x5d, 0x79, 0x57, 0xe0, 0xe6, 0x4f, 0x49,
    0xdf, 0x4c, 0x5c, 0x0e, 0xe5, 0x21, 0x41, 0x95, 0xfd, 0xad, 0xff, 0x9a,
    0x3e, 0xa0, 0xf9, 0x0f, 0x59, 0x9e, 0x6a, 0xa7, 0x7b, 0x71, 0xa7, 0x24,
    0x9a, 0x36, 0x52, 0xae, 0x97, 0x20, 0xc1, 0x5e, 0x78, 0xd9, 0x47, 0x8b,
    0x1e, 0x67, 0xf2, 0xaf, 0x98, 0xe6, 0x2d, 0xef, 0x10, 0xd7, 0xf1, 0xab,
    0x49, 0xee, 0xe5, 0x4b, 0x7e, 0xae, 0x1f, 0x1d, 0x61,
];

/// CRT coefficient `q^-1 mod p`.
pub const RSA_2048_IQMP: [u8; 128] = [
    0x23, 0x96, 0xc1, 0x91, 0x17, 0x5e, 0x0a, 0x83, 0xd2, 0xdc, 0x7b, 0x69,
    0xb2, 0x59, 0x1d, 0x33, 0x58, 0x52, 0x3f, 0x18, 0xc7, 0x09, 0x50, 0x1c,
    0xb9, 0xa1, 0xbb, 0x4c, 0xa2, 0x38, 0x40, 0x4c, 0x9a, 0x8e, 0xfe, 0x9c,
    0x90, 0x92, 0xd0, 0x71, 0x9f, 0x89, 0x99, 0x50, 0x91, 0x1f, 0x34, 0x8b,
    0x74, 0x53, 0x11, 0x11, 0x4a, 0x70, 0xe2, 0xf7, 0x30, 0xd8, 0x8c, 0x80,
    0xe1, 0xcc, 0x9f, 0xf1, 0x63, 0x17, 0x1a, 0x7d, 0x67, 0x29, 0x4c, 0xcb,
    0x4e, 0x74, 0x7b, 0xe0, 0x3e, 0x9e, 0x2f, 0xf4, 0x67, 0x8f, 0xec, 0xb9,
    0x5c, 0x00, 0x1e, 0x7e, 0xa2, 0x7b, 0x92, 0xc9, 0x6f, 0x4c, 0xe4, 0x0e,
    0xf9, 0x48, 0x63, 0xcd, 0x50, 0x22, 0x5d, 0xbf, 0xb6, 0x9d, 0x01, 0x33,
    0x6a, 0xf4, 0x50, 0xbe, 0x86, 0x98, 0x4f, 0xca, 0x3f, 0x3a, 0xfa, 0xcf,
    0x07, 0x40, 0xc4, 0xaa, 0xad, 0xae, 0xbe, 0xbf,
];

/// Message signed by both signature vectors and used as round-trip plaintext
pub const KAT_MESSAGE: &[u8] = b"OpenSSL FIPS 140-2 Public Key RSA KAT";

/// Expected RSASSA-PKCS1-v1_5 / SHA-256 signature of [`KAT_MESSAGE`]
pub const RSA_2048_PKCS1_SHA256_SIGNATURE: [u8; 256] = [
    0xc2, 0xb1, 0x97, 0x00, 0x9a, 0xe5, 0x80, 0x6a, 0xe2, 0x51, 0x68, 0xb9,
    0x7a, 0x0c, 0xf2, 0xb4, 0x77, 0xed, 0x15, 0x0c, 0x4e, 0xe1, 0xdc, 0xff,
    0x8e, 0xbc, 0xde, 0xc7, 0x9a, 0x96, 0xf1, 0x47, 0x45, 0x24, 0x9d, 0x6f,
    0xa6, 0xf3, 0x1d, 0x0d, 0x35, 0x4c, 0x1a, 0xf3, 0x58, 0x2c, 0x6c, 0x06,
    0xd6, 0x22, 0x37, 0x77, 0x8c, 0x33, 0xe5, 0x07, 0x53, 0x93, 0x28, 0xcf,
    0x67, 0xfa, 0xc4, 0x1f, 0x1b, 0x24, 0xdb, 0x4c, 0xc5, 0x2a, 0x51, 0xa2,
    0x60, 0x15, 0x8c, 0x54, 0xb4, 0x30, 0xe2, 0x24, 0x47, 0x86, 0xf2, 0xf8,
    0x6c, 0xd6, 0x12, 0x59, 0x2c, 0x74, 0x9a, 0x37, 0xf3, 0xc4, 0xa2, 0xd5,
    0x4e, 0x1f, 0x77, 0xf0, 0x27, 0xce, 0x77, 0xf8, 0x4a, 0x79, 0x03, 0xbe,
    0xc8, 0x06, 0x2d, 0xa7, 0xa6, 0x46, 0xf5, 0x55, 0x79, 0xd7, 0x5c, 0xc6,
    0x5b, 0xb1, 0x00, 0x4e, 0x7c, 0xd9, 0x11, 0x85, 0xe0, 0xb1, 0x4d, 0x2d,
    0x13, 0xd7, 0xac, 0xea, 0x64, 0xd1, 0xac, 0x8f, 0x8d, 0x8f, 0xea, 0x42,
    0x7f, 0xf9, 0xb7, 0x7d, 0x2c, 0x68, 0x49, 0x07, 0x7a, 0x74, 0xef, 0xb4,
    0xc9, 0x97, 0x16, 0x5c, 0x6c, 0x6e, 0x5c, 0x09, 0x2e, 0x8e, 0x13, 0x2e,
    0x1a, 0x8d, 0xa6, 0x0c, 0x6e, 0x0c, 0x1c, 0x0f, 0xcc, 0xb2, 0x78, 0x8a,
    0x07, 0xfc, 0x5c, 0xc2, 0xf5, 0x65, 0xec, 0xab, 0x8b, 0x3c, 0xca, 0x91,
    0x6f, 0x84, 0x7c, 0x21, 0x0e, 0xb8, 0xda, 0x7b, 0x6c, 0xf7, 0xdf, 0xab,
    0x7e, 0x15, 0xfd, 0x85, 0x0b, 0x33, 0x9b, 0x6a, 0x3a, 0xc3, 0xef, 0x65,
    0x04, 0x6e, 0xb2, 0xac, 0x98, 0xfd, 0xeb, 0x02, 0xf5, 0xc0, 0x0b, 0x5e,
    0xcb, 0xd4, 0x83, 0x82, 0x18, 0x1b, 0xda, 0xb4, 0xcd, 0xe8, 0x71, 0x6b,
    0x1d, 0xb5, 0x4f, 0xe9, 0xd6, 0x43, 0xa0, 0x0a, 0x14, 0xa0, 0xe7, 0x5d,
    0x47, 0x9d, 0x18, 0xd7,
];

/// Expected RSASSA-PSS / SHA-256 signature of [`KAT_MESSAGE`] (salt length 0)
pub const RSA_2048_PSS_SHA256_SIGNATURE: [u8; 256] = [
    0x38, 0xda, 0x99, 0x51, 0x26, 0x38, 0xc6, 0x7f, 0xc4, 0x81, 0x57, 0x19,
    0x35, 0xc6, 0xf6, 0x1e, 0x90, 0x47, 0x20, 0x55, 0x47, 0x56, 0x26, 0xe9,
    0xf2, 0xa8, 0x39, 0x6c, 0xd5, 0xcd, 0xcb, 0x55, 0xfc, 0x0c, 0xc5, 0xcb,
    0xf7, 0x40, 0x17, 0x3b, 0xcf, 0xe4, 0x05, 0x03, 0x3b, 0xa0, 0xb2, 0xc9,
    0x0d, 0x5e, 0x48, 0x3a, 0xe9, 0xad, 0x28, 0x71, 0x7d, 0x8f, 0x89, 0x16,
    0x59, 0x93, 0x35, 0xdc, 0x4d, 0x7b, 0xdf, 0x84, 0xe4, 0x68, 0xaa, 0x33,
    0xaa, 0xdc, 0x66, 0x50, 0xc8, 0xa9, 0x32, 0x12, 0xdc, 0xc6, 0x90, 0x49,
    0x0b, 0x75, 0xff, 0x9b, 0x95, 0x00, 0x9a, 0x90, 0xe0, 0xd4, 0x0e, 0x67,
    0xab, 0x3c, 0x47, 0x36, 0xc5, 0x2e, 0x1c, 0x46, 0xf0, 0x2d, 0xd3, 0x8b,
    0x42, 0x08, 0xde, 0x0d, 0xb6, 0x2c, 0x86, 0xb0, 0x35, 0x71, 0x18, 0x6b,
    0x89, 0x67, 0xc0, 0x05, 0xad, 0xf4, 0x1d, 0x62, 0x4e, 0x75, 0xec, 0xd6,
    0xc2, 0xdb, 0x07, 0xb0, 0xb6, 0x8d, 0x15, 0xad, 0xcd, 0xbf, 0xf5, 0x60,
    0x76, 0xae, 0x48, 0xb8, 0x77, 0x7f, 0xc5, 0x01, 0xd9, 0x29, 0xbb, 0xd6,
    0x17, 0xa2, 0x20, 0x5a, 0xc0, 0x4a, 0x3b, 0x34, 0xc8, 0xb9, 0x39, 0xcf,
    0x06, 0x89, 0x95, 0x6f, 0xc7, 0xca, 0xc4, 0xe4, 0x43, 0xdf, 0x5a, 0x23,
    0xe2, 0x89, 0xa3, 0x38, 0x78, 0x31, 0x38, 0xc6, 0xa4, 0x6f, 0x5f, 0x73,
    0x5a, 0xe5, 0x9e, 0x09, 0xe7, 0x6f, 0xd4, 0xf8, 0x3e, 0xb7, 0xb0, 0x56,
    0x9a, 0xf3, 0x65, 0xf0, 0xc2, 0xa6, 0x8a, 0x08, 0xba, 0x44, 0xac, 0x97,
    0xde, 0xb4, 0x16, 0x83, 0xdf, 0xe3, 0xee, 0x71, 0xfa, 0xf9, 0x51, 0x50,
    0x14, 0xdc, 0xfd, 0x6a, 0x82, 0x20, 0x68, 0x64, 0x7d, 0x4e, 0x82, 0x68,
    0xd7, 0x45, 0xfa, 0x6a, 0xe4, 0xe5, 0x29, 0x3a, 0x70, 0xfb, 0xe4, 0x62,
    0x2b, 0x31, 0xb9, 0x7d,
];

/// Label of the PKCS#1 v1.5 signature vector
pub const PKCS1_SHA256_LABEL: &str = "RSA SHA256 PKCS#1";

/// Label of the PSS signature vector
pub const PSS_SHA256_LABEL: &str = "RSA SHA256 PSS";

/// Salt length used by the embedded PSS vector
pub const PSS_KAT_SALT_LEN: usize = 0;

/// The embedded RSA-2048 private key
pub const RSA_2048_KEY: KeyComponents<'static> = KeyComponents {
    n: &RSA_2048_N,
    e: &RSA_2048_E,
    d: &RSA_2048_D,
    p: &RSA_2048_P,
    q: &RSA_2048_Q,
    dmp1: &RSA_2048_DMP1,
    dmq1: &RSA_2048_DMQ1,
    iqmp: &RSA_2048_IQMP,
};

/// Signature vectors in execution order: PKCS#1 v1.5 first, then PSS
pub const RSA_2048_SIGNATURE_VECTORS: [KatVector<'static>; 2] = [
    KatVector {
        message: KAT_MESSAGE,
        expected: &RSA_2048_PKCS1_SHA256_SIGNATURE,
        padding: SignaturePadding::Pkcs1v15,
        hash: HashAlgorithm::Sha256,
        check: KatCheck::ExactMatch,
        label: PKCS1_SHA256_LABEL,
    },
    KatVector {
        message: KAT_MESSAGE,
        expected: &RSA_2048_PSS_SHA256_SIGNATURE,
        padding: SignaturePadding::Pss {
            salt_len: PSS_KAT_SALT_LEN,
        },
        hash: HashAlgorithm::Sha256,
        check: KatCheck::ExactMatch,
        label: PSS_SHA256_LABEL,
    },
];

/// The complete embedded suite run at power-up
pub const RSA_2048_KAT_SUITE: KatSuite<'static> = KatSuite {
    key: RSA_2048_KEY,
    signatures: &RSA_2048_SIGNATURE_VECTORS,
    plaintext: KAT_MESSAGE,
};
