//! Forge eligibility check.
//!
//! Verifies that a wallet holds at least the MPASS minimum and that the
//! registry router is deployed. Read-only; no private keys involved.
//!
//! # Usage
//!
//! ```bash
//! # Check a wallet
//! forge-check 0xWalletAddress
//!
//! # Machine-readable output
//! forge-check 0xWalletAddress --json
//!
//! # Show the contract configuration
//! forge-check --show-config
//! ```
//!
//! # Exit status
//!
//! `0` ready to forge, `2` not ready, `3` invalid input, configuration or
//! chain-read error.

use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use toadaid::{CheckError, evaluate_eligibility, parse_address};
use toadaid_cli::{ClientArgs, init_tracing, print_error, print_json, print_lines, report};

const EXIT_READY: u8 = 0;
const EXIT_NOT_READY: u8 = 2;
const EXIT_ERROR: u8 = 3;

/// Verify MPASS gating requirements and forge eligibility.
#[derive(Debug, Parser)]
#[command(name = "forge-check", version, about)]
struct Cli {
    /// Wallet address to check (0x followed by 40 hex characters).
    wallet: Option<String>,

    /// Print the contract configuration and exit.
    #[arg(long, conflicts_with = "wallet")]
    show_config: bool,

    #[command(flatten)]
    client: ClientArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures.
            let code = if e.use_stderr() { EXIT_ERROR } else { EXIT_READY };
            e.print().ok();
            return ExitCode::from(code);
        }
    };

    let json = cli.client.json;
    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::debug!(error = %e, "forge check failed");
            print_error(&e, json);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn run(cli: Cli) -> Result<u8> {
    let Some(wallet) = cli.wallet.as_deref() else {
        let client = cli.client.resolve()?;
        if !cli.show_config && !cli.client.json {
            print_lines(&[
                "Usage:".to_owned(),
                "  forge-check 0xWalletAddress".to_owned(),
                "  forge-check --show-config".to_owned(),
                String::new(),
            ]);
        }
        show_config(&client, cli.client.json);
        return Ok(EXIT_READY);
    };

    // Validation happens before the client is even configured.
    let wallet = parse_address(wallet)?;
    let client = cli.client.resolve()?;
    client.preflight().await?;

    tracing::info!(%wallet, "checking forge eligibility");
    let result = match evaluate_eligibility(&client.cast, &client.contracts, wallet).await {
        Ok(result) => result,
        Err(e @ CheckError::Unconfigured(_)) => {
            bail!(
                "{e}; set it under [contracts] in {}",
                cli.client.config.display()
            );
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(ready = result.ready, "eligibility evaluated");

    if cli.client.json {
        print_json(&report::eligibility_json(wallet, &result, &client.contracts));
    } else {
        print_lines(&report::eligibility(wallet, &result, &client.contracts));
    }

    Ok(if result.ready { EXIT_READY } else { EXIT_NOT_READY })
}

fn show_config(client: &toadaid_cli::Client, json: bool) {
    if json {
        print_json(&serde_json::json!({
            "rpc_url": client.cast.rpc_url(),
            "mpass_required": toadaid::MPASS_MIN_BALANCE,
            "contracts": client.contracts,
        }));
    } else {
        print_lines(&report::config(&client.contracts, client.cast.rpc_url()));
    }
}
