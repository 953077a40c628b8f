//! SHA-256 based hash algorithms.
//!
//! Implements the `HashAlgorithm` trait from `hashgen-core` using the `sha2`
//! crate (RustCrypto ecosystem). Both produce 10-character hashes.

use dashmap::DashMap;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use hashgen_core::service::hash::HashAlgorithm;
use hashgen_types::error::HashError;

/// Length of every generated hash.
pub const HASH_LEN: usize = 10;

const BASE62_CHARSET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// First [`HASH_LEN`] lowercase hex characters of SHA-256(input).
pub struct Sha256PrefixHasher;

impl Sha256PrefixHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256PrefixHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl HashAlgorithm for Sha256PrefixHasher {
    fn name(&self) -> &str {
        "sha256-prefix"
    }

    fn generate(&self, input: &str) -> Result<String, HashError> {
        let digest = Sha256::digest(input.as_bytes());
        let mut hex = format!("{:x}", digest);
        hex.truncate(HASH_LEN);
        Ok(hex)
    }
}

/// SHA-256 over a random 8-byte salt and the input, rendered in base62.
///
/// The first hash computed for an input is cached, so the same input keeps
/// returning the same hash for the lifetime of the hasher while two hashers
/// disagree.
pub struct SaltedBase62Hasher {
    cache: DashMap<String, String>,
}

impl SaltedBase62Hasher {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    fn salted(input: &str) -> String {
        let digest = Sha256::new()
            .chain_update(salt_from(&Uuid::new_v4()))
            .chain_update(input.as_bytes())
            .finalize();

        let num = digest[..8]
            .iter()
            .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
        encode_base62(num)
    }
}

impl Default for SaltedBase62Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl HashAlgorithm for SaltedBase62Hasher {
    fn name(&self) -> &str {
        "salted-base62"
    }

    fn generate(&self, input: &str) -> Result<String, HashError> {
        if let Some(hit) = self.cache.get(input) {
            return Ok(hit.clone());
        }

        // Two racing first calls both compute; the entry API keeps one.
        let hash = self
            .cache
            .entry(input.to_string())
            .or_insert_with(|| Self::salted(input))
            .clone();
        Ok(hash)
    }
}

/// Eight fully random bytes of a v4 UUID (OS RNG backed).
///
/// Byte 6 holds the version nibble and byte 8 the variant bits, so both
/// are skipped.
fn salt_from(uuid: &Uuid) -> [u8; 8] {
    let bytes = uuid.as_bytes();
    let mut salt = [0u8; 8];
    salt[..6].copy_from_slice(&bytes[..6]);
    salt[6..].copy_from_slice(&bytes[9..11]);
    salt
}

/// Encode the low-order base62 digits of `num` into exactly [`HASH_LEN`] characters.
fn encode_base62(mut num: u64) -> String {
    let base = BASE62_CHARSET.len() as u64;
    let mut out = [0u8; HASH_LEN];
    for slot in out.iter_mut().rev() {
        *slot = BASE62_CHARSET[(num % base) as usize];
        num /= base;
    }
    out.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_prefix_known_values() {
        let hasher = Sha256PrefixHasher::new();
        for (input, want) in [
            ("abc123", "6ca13d52ca"),
            ("hello", "2cf24dba5f"),
            ("a", "ca978112ca"),
            ("12345", "5994471abb"),
        ] {
            assert_eq!(hasher.generate(input).unwrap(), want, "input {input:?}");
        }
    }

    #[test]
    fn test_sha256_prefix_deterministic_and_distinct() {
        let hasher = Sha256PrefixHasher::new();
        assert_eq!(
            hasher.generate("testinput42").unwrap(),
            hasher.generate("testinput42").unwrap()
        );
        assert_ne!(
            hasher.generate("input1").unwrap(),
            hasher.generate("input2").unwrap()
        );
    }

    #[test]
    fn test_sha256_prefix_is_lowercase_hex() {
        let hash = Sha256PrefixHasher::new().generate("AbCdEf123").unwrap();
        assert_eq!(hash.len(), HASH_LEN);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_encode_base62_padding_and_digits() {
        assert_eq!(encode_base62(0), "0000000000");
        assert_eq!(encode_base62(61), "000000000Z");
        assert_eq!(encode_base62(62), "0000000010");
        assert_eq!(encode_base62(u64::MAX).len(), HASH_LEN);
    }

    #[test]
    fn test_salt_skips_version_and_variant_bytes() {
        let uuid = Uuid::from_bytes(std::array::from_fn(|i| i as u8));
        assert_eq!(salt_from(&uuid), [0, 1, 2, 3, 4, 5, 9, 10]);
    }

    #[test]
    fn test_salt_has_no_fixed_version_nibble() {
        let salts: Vec<[u8; 8]> = (0..256).map(|_| salt_from(&Uuid::new_v4())).collect();
        for position in 0..8 {
            assert!(
                salts.iter().any(|salt| salt[position] >> 4 != 0x4),
                "salt byte {position} always carries 0x4 in its high nibble"
            );
        }
    }

    #[test]
    fn test_salted_is_stable_per_input() {
        let hasher = SaltedBase62Hasher::new();
        let first = hasher.generate("abc123").unwrap();
        let second = hasher.generate("abc123").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), HASH_LEN);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_salted_distinct_inputs() {
        let hasher = SaltedBase62Hasher::new();
        assert_ne!(
            hasher.generate("input1").unwrap(),
            hasher.generate("input2").unwrap()
        );
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Sha256PrefixHasher::new().name(), "sha256-prefix");
        assert_eq!(SaltedBase62Hasher::new().name(), "salted-base62");
    }
}
