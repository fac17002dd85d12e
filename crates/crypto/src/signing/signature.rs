use super::SignatureAlgorithm;

/// A signature produced by a [`PrivateKey`](super::PrivateKey).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    Es256(p256::ecdsa::Signature),
}

impl Signature {
    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        match self {
            Signature::Es256(_) => SignatureAlgorithm::Es256,
        }
    }

    /// The fixed-width `r || s` encoding used by JWS.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Signature::Es256(signature) => signature.to_bytes().to_vec(),
        }
    }
}
