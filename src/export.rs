//! Rendering of a private key as JWK text for operators.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use jwk_keygen_crypto::signing::PrivateKey;
use secrecy::zeroize::Zeroizing;
use std::io::Write;

/// Label printed before the compact JSON form.
pub const RAW_JSON_LABEL: &str = "--- RAW JSON ---";

/// Label printed before the Base64 form.
pub const BASE64_LABEL: &str = "--- BASE64 (Recommended for fly secrets set) ---";

/// A private key rendered as compact JWK JSON and as standard Base64 of that JSON.
pub struct KeyExport {
    json: Zeroizing<String>,
    base64: Zeroizing<String>,
    key_id: String,
}

impl KeyExport {
    /// Serializes the private key, scalar included.
    pub fn new(key: &PrivateKey) -> Result<Self> {
        let jwk = key
            .to_jwk()
            .context("failed to convert private key to JWK")?;
        let json = jwk.to_json().context("failed to serialize JWK")?;
        let base64 = Zeroizing::new(STANDARD.encode(json.as_bytes()));

        Ok(Self {
            json,
            base64,
            key_id: jwk.thumbprint(),
        })
    }

    /// The compact JSON text of the JWK.
    pub fn json(&self) -> &str {
        &self.json
    }

    /// Standard, padded Base64 of the JSON text's UTF-8 bytes.
    pub fn base64(&self) -> &str {
        &self.base64
    }

    /// The RFC 7638 thumbprint of the key, safe to log.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Writes both renderings under their labels, separated by one blank line.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{RAW_JSON_LABEL}")?;
        writeln!(out, "{}", self.json())?;
        writeln!(out)?;
        writeln!(out, "{BASE64_LABEL}")?;
        writeln!(out, "{}", self.base64())?;
        out.flush()
    }
}
