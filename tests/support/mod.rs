use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use jwk_keygen::export::{BASE64_LABEL, RAW_JSON_LABEL};
use rand_core::{CryptoRng, RngCore};

/// An entropy source that is never available.
pub struct UnavailableRng;

impl RngCore for UnavailableRng {
    fn next_u32(&mut self) -> u32 {
        unreachable!("key generation must use try_fill_bytes")
    }

    fn next_u64(&mut self) -> u64 {
        unreachable!("key generation must use try_fill_bytes")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unreachable!("key generation must use try_fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(rand_core::Error::new("entropy source offline"))
    }
}

impl CryptoRng for UnavailableRng {}

/// The two sections of the tool's standard output.
pub struct Printed {
    pub json: String,
    pub base64: String,
}

/// Splits stdout into its JSON and Base64 sections, checking the exact layout.
pub fn parse_printed(stdout: &str) -> Result<Printed> {
    let lines: Vec<&str> = stdout.split('\n').collect();
    let [raw_label, json, blank, base64_label, base64, end] = lines.as_slice() else {
        bail!("unexpected output layout: {stdout:?}");
    };
    if *raw_label != RAW_JSON_LABEL || *base64_label != BASE64_LABEL {
        bail!("unexpected labels: {raw_label:?}, {base64_label:?}");
    }
    if !blank.is_empty() || !end.is_empty() {
        bail!("sections must be separated by exactly one blank line");
    }

    let decoded = STANDARD
        .decode(base64)
        .context("base64 section is not standard base64")?;
    if decoded != json.as_bytes() {
        bail!("base64 section does not decode to the JSON section");
    }

    Ok(Printed {
        json: json.to_string(),
        base64: base64.to_string(),
    })
}
