use crate::export::KeyExport;
use anyhow::{Context, Result};
use clap::Args;
use jwk_keygen_crypto::signing::{KeyGenerationError, KeySource, OsKeySource};
use std::io::Write;

/// Generates a new ES256 signing key and prints it as a JSON Web Key.
#[derive(Args, Default)]
pub struct GenerateCommand {}

impl GenerateCommand {
    /// Executes the command against the OS entropy source and the process streams.
    pub async fn exec(self) -> i32 {
        let stdout = std::io::stdout();
        self.run(
            OsKeySource::default(),
            &mut stdout.lock(),
            &mut std::io::stderr(),
        )
        .await
    }

    /// Executes the command, reporting any failure on `err`.
    ///
    /// Returns the process exit code: 0 on success, 1 on failure.
    pub async fn run<S, W, E>(self, source: S, out: &mut W, err: &mut E) -> i32
    where
        S: KeySource + Send + 'static,
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        match self.exec_with(source, out).await {
            Ok(()) => 0,
            Err(e) => {
                // The exit code still reports the failure if stderr is gone.
                let _ = writeln!(err, "error: {e:?}");
                1
            }
        }
    }

    /// Executes the command with the given key source, writing to `out`.
    ///
    /// Nothing is written unless the key was generated and serialized.
    pub async fn exec_with<S, W>(self, mut source: S, out: &mut W) -> Result<()>
    where
        S: KeySource + Send + 'static,
        W: Write + ?Sized,
    {
        tracing::debug!("generating ES256 key pair");
        let key = tokio::task::spawn_blocking(move || source.generate())
            .await
            .unwrap_or_else(|e| Err(KeyGenerationError::TaskFailed(e.to_string())))
            .inspect_err(|e| tracing::error!(error = %e, "key generation failed"))
            .context("failed to generate signing key")?;

        let export = KeyExport::new(&key)?;
        tracing::info!(
            kid = export.key_id(),
            algorithm = %key.signature_algorithm(),
            "generated signing key"
        );

        export
            .write_to(out)
            .context("failed to write key to output")?;
        Ok(())
    }
}
