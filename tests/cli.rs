use self::support::*;
use anyhow::Result;
use jwk_keygen_crypto::EcJwk;
use std::process::Command;

pub mod support;

fn jwk_keygen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jwk-keygen"))
}

#[test]
fn binary_prints_both_encodings() -> Result<()> {
    let output = jwk_keygen().env_remove("RUST_LOG").output()?;
    assert!(output.status.success());

    let printed = parse_printed(&String::from_utf8(output.stdout)?)?;
    assert!(EcJwk::from_json(&printed.json)?.is_private());

    Ok(())
}

#[test]
fn logging_stays_off_stdout() -> Result<()> {
    let output = jwk_keygen().env("RUST_LOG", "debug").output()?;
    assert!(output.status.success());

    parse_printed(&String::from_utf8(output.stdout)?)?;
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("generated signing key"));
    assert!(!stderr.contains("\"d\""));

    Ok(())
}

#[test]
fn unexpected_arguments_fail() -> Result<()> {
    let output = jwk_keygen().arg("--curve").arg("P-384").output()?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}
