use super::{PublicKey, Signature, SignatureAlgorithm};
use crate::jwk::{EcJwk, JwkError};
use secrecy::{zeroize::Zeroizing, ExposeSecret, Secret, Zeroize};
use signature::Signer;

pub use signature::Error as SignatureError;

/// Represents a private key
pub struct PrivateKey(Secret<PrivateKeyInner>);

pub enum PrivateKeyInner {
    Es256(p256::ecdsa::SigningKey),
}

impl PrivateKey {
    /// Get the signature algorithm used for by this key
    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        match self.0.expose_secret() {
            PrivateKeyInner::Es256(_) => SignatureAlgorithm::Es256,
        }
    }

    /// Get the big-endian private scalar
    pub fn bytes(&self) -> Zeroizing<Vec<u8>> {
        match self.0.expose_secret() {
            PrivateKeyInner::Es256(key) => Zeroizing::new(key.to_bytes().to_vec()),
        }
    }

    /// Sign a given message with this key
    pub fn sign(&self, msg: &[u8]) -> Result<Signature, SignatureError> {
        match self.0.expose_secret() {
            PrivateKeyInner::Es256(key) => Ok(Signature::Es256(key.try_sign(msg)?)),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self.0.expose_secret() {
            PrivateKeyInner::Es256(key) => {
                PublicKey::Es256(p256::ecdsa::VerifyingKey::from(key))
            }
        }
    }

    /// Export the key, private scalar included, as a JSON Web Key.
    pub fn to_jwk(&self) -> Result<EcJwk, JwkError> {
        match self.0.expose_secret() {
            PrivateKeyInner::Es256(key) => EcJwk::from_signing_key(key),
        }
    }
}

impl TryFrom<&EcJwk> for PrivateKey {
    type Error = JwkError;

    fn try_from(jwk: &EcJwk) -> Result<Self, JwkError> {
        Ok(PrivateKey::from(jwk.to_signing_key()?))
    }
}

impl Zeroize for PrivateKeyInner {
    fn zeroize(&mut self) {
        match self {
            PrivateKeyInner::Es256(sk) => {
                // SigningKey zeroizes on Drop:
                // https://github.com/RustCrypto/signatures/blob/a97a358f9e00773c4a04ca54816fb539506f89e6/ecdsa/src/sign.rs#L118
                let mostly_zero = p256::ecdsa::SigningKey::from(
                    p256::NonZeroScalar::new(p256::Scalar::ONE).unwrap(),
                );
                drop(std::mem::replace(sk, mostly_zero));
            }
        }
    }
}

impl From<p256::ecdsa::SigningKey> for PrivateKey {
    fn from(key: p256::ecdsa::SigningKey) -> Self {
        PrivateKey(Secret::from(PrivateKeyInner::Es256(key)))
    }
}
