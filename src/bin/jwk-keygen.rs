use anyhow::Result;
use clap::Parser;
use jwk_keygen::commands::GenerateCommand;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn version() -> &'static str {
    option_env!("CARGO_VERSION_INFO").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Generates an ES256 signing key and prints it as a JSON Web Key.
#[derive(Parser)]
#[clap(bin_name = "jwk-keygen", version)]
#[command(version = version())]
struct JwkKeygenCli {
    #[clap(flatten)]
    generate: GenerateCommand,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let code = JwkKeygenCli::parse().generate.exec().await;
    if code != 0 {
        exit(code);
    }

    Ok(())
}
