//! FNV-1a 64-bit hashing for pre-hashing arbitrary data into the table's
//! `u64` key space.
//!
//! The table itself never hashes keys; it maps a key to `key % buckets`.
//! Callers whose keys are not already well distributed should run them
//! through one of these helpers first.

use core::hash::{BuildHasher, Hasher};

const FNV1_64_INIT: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_64_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a hash of a byte string.
#[inline]
pub fn fnv_hash64(bytes: &[u8]) -> u64 {
    let mut h = FnvHasher::new();
    h.write(bytes);
    h.finish()
}

/// FNV-1a hash of the eight little-endian bytes of `value`.
#[inline]
pub fn fnv_hash_u64(value: u64) -> u64 {
    fnv_hash64(&value.to_le_bytes())
}

/// Streaming FNV-1a hasher.
#[derive(Debug, Copy, Clone)]
pub struct FnvHasher {
    hash: u64,
}

impl FnvHasher {
    pub const fn new() -> Self {
        Self { hash: FNV1_64_INIT }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.hash ^= u64::from(b);
            self.hash = self.hash.wrapping_mul(FNV_64_PRIME);
        }
    }
}

/// Builds [`FnvHasher`]s; `FnvBuildHasher.hash_one(&x)` turns any `Hash`
/// value into a table key.
#[derive(Debug, Copy, Clone, Default)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher::new()
    }
}
