//! Order / refund identifier generation.
//!
//! Identifiers are short opaque tokens: 16 bytes of CSPRNG output,
//! hex-encoded, hashed with SHA-256, truncated to the first 12 hex
//! characters of the digest. Truncation leaves a 48-bit space, which
//! is enough for identifiers that are never stored locally and only
//! need to be practically unique per call.

use ring::digest;
use ring::rand::{SecureRandom, SystemRandom};

/// Length of a generated identifier in hex characters.
pub const ID_LENGTH: usize = 12;

/// The system entropy source could not produce random bytes.
///
/// This is the only failure mode of [`generate_id`] and indicates a
/// broken host rather than a recoverable condition.
#[derive(Debug, thiserror::Error)]
#[error("system entropy source unavailable")]
pub struct EntropyUnavailable;

/// Generate a fresh 12-character lowercase-hex identifier.
pub fn generate_id() -> Result<String, EntropyUnavailable> {
    let rng = SystemRandom::new();
    let mut seed = [0u8; 16];
    rng.fill(&mut seed).map_err(|_| EntropyUnavailable)?;

    let digest = digest::digest(&digest::SHA256, hex::encode(seed).as_bytes());
    let mut id = hex::encode(digest.as_ref());
    id.truncate(ID_LENGTH);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_is_12_lowercase_hex_chars() {
        let id = generate_id().unwrap();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn consecutive_ids_differ() {
        let first = generate_id().unwrap();
        let second = generate_id().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn many_ids_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(generate_id().unwrap()));
        }
    }
}
