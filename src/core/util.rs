//! Common utilities

use xxhash_rust::xxh3::xxh3_64;

/// Compute a stable content hash (XXH3-64, lowercase hex)
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}
