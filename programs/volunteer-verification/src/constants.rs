//! Program-wide constants.

/// All-zero content hash; rejected by both verification paths.
pub const ZERO_HASH: [u8; 32] = [0u8; 32];
