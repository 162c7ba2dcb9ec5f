//! Constants for hash functions

/// SHA-256 output size in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;
