use super::{Signature, SignatureAlgorithm};
use crate::jwk::{EcJwk, JwkError};
use signature::{Error as SignatureError, Verifier};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PublicKey {
    Es256(p256::ecdsa::VerifyingKey),
}

impl PublicKey {
    /// The signature algorithm used by this key
    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        match self {
            PublicKey::Es256(_) => SignatureAlgorithm::Es256,
        }
    }

    /// Verify that a given message and signature were signed by the private key associated with this public key
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> Result<(), SignatureError> {
        match (self, signature) {
            (PublicKey::Es256(key), Signature::Es256(signature)) => key.verify(msg, signature),
        }
    }

    /// The public JSON Web Key for this key, without a private scalar.
    pub fn to_jwk(&self) -> Result<EcJwk, JwkError> {
        match self {
            PublicKey::Es256(key) => EcJwk::from_verifying_key(key),
        }
    }
}

impl TryFrom<&EcJwk> for PublicKey {
    type Error = JwkError;

    fn try_from(jwk: &EcJwk) -> Result<Self, JwkError> {
        jwk.validate()?;
        Ok(PublicKey::Es256(jwk.to_verifying_key()?))
    }
}

impl From<p256::ecdsa::VerifyingKey> for PublicKey {
    fn from(key: p256::ecdsa::VerifyingKey) -> Self {
        PublicKey::Es256(key)
    }
}
