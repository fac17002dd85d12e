//! JSON Web Key ([RFC 7517]) representation of P-256 keys.
//!
//! Member encoding follows [RFC 7518 §6.2]: `x`, `y` and `d` are the
//! unpadded base64url encodings of the 32-byte big-endian field elements.
//!
//! [RFC 7517]: https://www.rfc-editor.org/rfc/rfc7517
//! [RFC 7518 §6.2]: https://www.rfc-editor.org/rfc/rfc7518#section-6.2

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use p256::ecdsa::{SigningKey, VerifyingKey};
use secrecy::zeroize::{Zeroize, Zeroizing};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Byte length of a P-256 field element or scalar.
const COORDINATE_LEN: usize = 32;

/// The JWK `kty` member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyType {
    #[serde(rename = "EC")]
    Ec,
}

/// The JWK `crv` member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curve {
    #[serde(rename = "P-256")]
    P256,
}

/// An elliptic-curve JSON Web Key on P-256.
///
/// Holds the private scalar `d` when exported from a private key; it is wiped
/// when the value is dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcJwk {
    pub kty: KeyType,
    pub crv: Curve,
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub d: Option<String>,
}

#[derive(Error, Debug)]
pub enum JwkError {
    #[error("invalid JWK JSON")]
    Json(#[from] serde_json::Error),

    #[error("JWK member `{member}` is not valid base64url")]
    Base64 {
        member: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("JWK member `{member}` must decode to 32 bytes, got {actual}")]
    Length { member: &'static str, actual: usize },

    #[error("JWK coordinates are not a point on P-256")]
    InvalidPoint,

    #[error("JWK private scalar is not a valid P-256 key")]
    InvalidScalar,

    #[error("JWK public coordinates do not match the private scalar")]
    KeyMismatch,

    #[error("JWK has no private scalar `d`")]
    MissingPrivateKey,
}

impl EcJwk {
    pub(crate) fn from_verifying_key(key: &VerifyingKey) -> Result<Self, JwkError> {
        let point = key.to_encoded_point(false);
        let (Some(x), Some(y)) = (point.x(), point.y()) else {
            return Err(JwkError::InvalidPoint);
        };

        Ok(Self {
            kty: KeyType::Ec,
            crv: Curve::P256,
            x: URL_SAFE_NO_PAD.encode(x),
            y: URL_SAFE_NO_PAD.encode(y),
            d: None,
        })
    }

    pub(crate) fn from_signing_key(key: &SigningKey) -> Result<Self, JwkError> {
        let mut jwk = Self::from_verifying_key(&VerifyingKey::from(key))?;
        jwk.d = Some(URL_SAFE_NO_PAD.encode(key.to_bytes()));
        Ok(jwk)
    }

    /// Parses and validates a JWK from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, JwkError> {
        let jwk: Self = serde_json::from_str(json)?;
        jwk.validate()?;
        Ok(jwk)
    }

    /// Serializes the JWK as compact JSON.
    pub fn to_json(&self) -> Result<Zeroizing<String>, JwkError> {
        Ok(Zeroizing::new(serde_json::to_string(self)?))
    }

    /// Whether the private scalar is present.
    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }

    /// The same key with the private scalar removed.
    pub fn public(&self) -> Self {
        Self {
            kty: self.kty,
            crv: self.crv,
            x: self.x.clone(),
            y: self.y.clone(),
            d: None,
        }
    }

    /// The [RFC 7638] thumbprint: base64url SHA-256 of the required members
    /// in lexicographic order with no whitespace.
    ///
    /// [RFC 7638]: https://www.rfc-editor.org/rfc/rfc7638
    pub fn thumbprint(&self) -> String {
        let canonical = format!(
            r#"{{"crv":"P-256","kty":"EC","x":"{x}","y":"{y}"}}"#,
            x = self.x,
            y = self.y
        );
        URL_SAFE_NO_PAD.encode(Sha256::digest(canonical.as_bytes()))
    }

    /// Checks that the coordinates form a P-256 point and, when present,
    /// that `d` is the matching private scalar.
    pub fn validate(&self) -> Result<(), JwkError> {
        if self.is_private() {
            self.to_signing_key()?;
        } else {
            self.to_verifying_key()?;
        }
        Ok(())
    }

    pub(crate) fn to_verifying_key(&self) -> Result<VerifyingKey, JwkError> {
        let x = decode_member("x", &self.x)?;
        let y = decode_member("y", &self.y)?;
        let point = p256::EncodedPoint::from_affine_coordinates(
            x.as_slice().into(),
            y.as_slice().into(),
            false,
        );
        VerifyingKey::from_encoded_point(&point).map_err(|_| JwkError::InvalidPoint)
    }

    /// Rebuilds the signing key from `d`, rejecting coordinates that belong
    /// to a different key.
    pub(crate) fn to_signing_key(&self) -> Result<SigningKey, JwkError> {
        let d = self.d.as_deref().ok_or(JwkError::MissingPrivateKey)?;
        let d = decode_member("d", d)?;
        let key = SigningKey::from_slice(d.as_slice()).map_err(|_| JwkError::InvalidScalar)?;
        if VerifyingKey::from(&key) != self.to_verifying_key()? {
            return Err(JwkError::KeyMismatch);
        }
        Ok(key)
    }
}

impl Drop for EcJwk {
    fn drop(&mut self) {
        if let Some(d) = self.d.as_mut() {
            d.zeroize();
        }
    }
}

fn decode_member(member: &'static str, value: &str) -> Result<Zeroizing<Vec<u8>>, JwkError> {
    let bytes = Zeroizing::new(
        URL_SAFE_NO_PAD
            .decode(value)
            .map_err(|source| JwkError::Base64 { member, source })?,
    );
    if bytes.len() != COORDINATE_LEN {
        return Err(JwkError::Length {
            member,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}
