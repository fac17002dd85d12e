use core::fmt;
use rand_core::{CryptoRng, OsRng, RngCore};
use secrecy::zeroize::Zeroizing;
use thiserror::Error;

mod private_key;
mod public_key;
mod signature;

pub use self::private_key::{PrivateKey, SignatureError};
pub use self::public_key::PublicKey;
pub use self::signature::Signature;

/// Consecutive invalid scalar candidates tolerated before generation gives up.
pub const MAX_SCALAR_CANDIDATES: usize = 64;

/// A signature algorithm that keys can be generated for.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// ECDSA over P-256 with SHA-256.
    Es256,
}

impl SignatureAlgorithm {
    /// The JWK `kty` of keys for this algorithm.
    pub fn key_type(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Es256 => "EC",
        }
    }

    /// The JWK `crv` of keys for this algorithm.
    pub fn curve(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Es256 => "P-256",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureAlgorithm::Es256 => write!(f, "ES256"),
        }
    }
}

/// The reasons a fresh key could not be produced.
#[derive(Error, Debug)]
pub enum KeyGenerationError {
    #[error("secure random source is unavailable")]
    EntropyUnavailable(#[source] rand_core::Error),

    #[error("no valid P-256 scalar after {attempts} candidates")]
    ScalarOutOfRange { attempts: usize },

    #[error("key generation task did not complete: {0}")]
    TaskFailed(String),
}

/// A source of fresh signing keys.
pub trait KeySource {
    /// Produces a new private key.
    fn generate(&mut self) -> Result<PrivateKey, KeyGenerationError>;
}

/// Generates keys by sampling scalars from a cryptographically secure RNG.
///
/// Randomness is drawn with `try_fill_bytes` so an unavailable entropy source
/// surfaces as an error rather than a panic. Candidates that are zero or not
/// below the curve order are discarded and resampled.
pub struct RngKeySource<R> {
    rng: R,
}

impl<R> RngKeySource<R>
where
    R: RngCore + CryptoRng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> KeySource for RngKeySource<R>
where
    R: RngCore + CryptoRng,
{
    fn generate(&mut self) -> Result<PrivateKey, KeyGenerationError> {
        let mut candidate = Zeroizing::new([0u8; 32]);
        for _ in 0..MAX_SCALAR_CANDIDATES {
            self.rng
                .try_fill_bytes(&mut candidate[..])
                .map_err(KeyGenerationError::EntropyUnavailable)?;
            if let Ok(key) = p256::ecdsa::SigningKey::from_bytes(candidate.as_slice().into()) {
                return Ok(PrivateKey::from(key));
            }
        }

        Err(KeyGenerationError::ScalarOutOfRange {
            attempts: MAX_SCALAR_CANDIDATES,
        })
    }
}

/// The operating system's entropy source.
pub type OsKeySource = RngKeySource<OsRng>;

impl Default for OsKeySource {
    fn default() -> Self {
        RngKeySource::new(OsRng)
    }
}

pub fn generate_es256_pair() -> Result<(PublicKey, PrivateKey), KeyGenerationError> {
    let private_key = OsKeySource::default().generate()?;
    Ok((private_key.public_key(), private_key))
}
