//! Cryptographic primitives behind a replaceable adapter
//!
//! Request signing needs exactly two primitives: secure random bytes
//! for nonces and HMAC-SHA1 digests for signatures. Both sit behind
//! [`CryptoAdapter`] so tests can substitute deterministic values.

use thiserror::Error;

/// Provides the cryptographic primitives used for request signing
pub trait CryptoAdapter: Send + Sync {
    /// Produces `len` bytes of cryptographically secure randomness
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying random number generator is
    /// unable to produce bytes.
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, CryptoError>;

    /// Computes the raw HMAC-SHA1 digest of `message` under `key`
    fn hmac_sha1(&self, key: &[u8], message: &[u8]) -> Vec<u8>;
}

/// An error raised by a crypto adapter
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The random number generator failed to produce bytes
    #[error("random number generator failure")]
    RandomGenerator,
}

/// The default crypto provider, backed by [`ring`]
///
/// HMAC-SHA1 survives here solely because the OAuth 1.0 signature
/// method requires it.
#[derive(Clone, Debug)]
pub struct RingCrypto {
    rng: ring::rand::SystemRandom,
}

impl RingCrypto {
    /// Constructs a crypto provider using the system RNG
    pub fn new() -> Self {
        Self {
            rng: ring::rand::SystemRandom::new(),
        }
    }
}

impl Default for RingCrypto {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoAdapter for RingCrypto {
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, CryptoError> {
        use ring::rand::SecureRandom;

        let mut bytes = vec![0; len];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| CryptoError::RandomGenerator)?;
        Ok(bytes)
    }

    fn hmac_sha1(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        let key = ring::hmac::Key::new(ring::hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key);
        let digest = ring::hmac::sign(&key, message);
        digest.as_ref().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    #[test]
    fn hmac_sha1_known_answer() {
        let crypto = RingCrypto::new();
        let digest = crypto.hmac_sha1(
            b"key",
            b"The quick brown fox jumps over the lazy dog",
        );
        assert_eq!(hex(&digest), "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
    }

    #[test]
    fn hmac_sha1_rfc2202_case_1() {
        let crypto = RingCrypto::new();
        let digest = crypto.hmac_sha1(&[0x0b; 20], b"Hi There");
        assert_eq!(hex(&digest), "b617318655057264e28bc0b6fb378c8ef146be00");
    }

    #[test]
    fn random_bytes_fills_requested_length() {
        let crypto = RingCrypto::new();
        let bytes = crypto.random_bytes(16).unwrap();
        assert_eq!(bytes.len(), 16);
    }
}
