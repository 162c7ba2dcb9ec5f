//! Constants for traditional public-key algorithms

pub mod rsa;
