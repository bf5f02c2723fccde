//! Identity registration check against the ERC-8004 registry.
//!
//! Lists the agents a wallet owns, or looks up the owner and token URI of a
//! single agent id. Read-only; no private keys involved.
//!
//! # Usage
//!
//! ```bash
//! verify-identity 0xWalletAddress
//! verify-identity --agent-id 19173
//! ```
//!
//! # Exit status
//!
//! `0` on success, including an enumeration where some indices could not be
//! resolved. `1` on invalid input, a missing `cast`, a failed registry
//! count, or an agent lookup where any read failed.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use toadaid::{evaluate_registration, lookup_agent, parse_address, parse_agent_id};
use toadaid_cli::{ClientArgs, init_tracing, links, print_error, print_json, print_lines, report};

const EXIT_OK: u8 = 0;
const EXIT_FAILED: u8 = 1;

const USAGE: [&str; 2] = [
    "verify-identity 0xWalletAddress",
    "verify-identity --agent-id 19173",
];

/// Check wallet registration status in the ToadAid ERC-8004 registry.
#[derive(Debug, Parser)]
#[command(name = "verify-identity", version, about)]
struct Cli {
    /// Wallet address to enumerate (0x followed by 40 hex characters).
    wallet: Option<String>,

    /// Look up a single agent by its numeric id instead.
    #[arg(long, value_name = "ID", conflicts_with = "wallet")]
    agent_id: Option<String>,

    #[command(flatten)]
    client: ClientArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let json = cli.client.json;
    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::debug!(error = %e, "identity check failed");
            print_error(&e, json);
            ExitCode::from(EXIT_FAILED)
        }
    }
}

async fn run(cli: Cli) -> Result<u8> {
    if let Some(raw_id) = cli.agent_id.as_deref() {
        let agent_id = parse_agent_id(raw_id)?;
        let client = cli.client.resolve()?;
        client.preflight().await?;

        tracing::info!(%agent_id, "looking up agent");
        let lookup = lookup_agent(&client.cast, &client.contracts, agent_id).await?;

        if cli.client.json {
            print_json(&report::lookup_json(&lookup));
        } else {
            print_lines(&report::lookup(&lookup));
            print_lines(&[String::new()]);
            print_lines(&links::registry_block(&client.contracts, None, Some(agent_id)));
        }
        return Ok(if lookup.is_complete() { EXIT_OK } else { EXIT_FAILED });
    }

    let Some(wallet) = cli.wallet.as_deref() else {
        let client = cli.client.resolve()?;
        if cli.client.json {
            print_json(&serde_json::json!({
                "usage": USAGE,
                "links": report::registry_links_json(&client.contracts),
            }));
        } else {
            let mut lines = vec!["Usage:".to_owned()];
            lines.extend(USAGE.iter().map(|u| format!("  {u}")));
            lines.push(String::new());
            print_lines(&lines);
            print_lines(&links::registry_block(&client.contracts, None, None));
        }
        return Ok(EXIT_OK);
    };

    let wallet = parse_address(wallet)?;
    let client = cli.client.resolve()?;
    client.preflight().await?;

    tracing::info!(%wallet, "checking registry");
    let result = evaluate_registration(&client.cast, &client.contracts, wallet)
        .await
        .map_err(|e| {
            anyhow::Error::new(e).context(
                "registry query failed; ensure the RPC endpoint points at Base mainnet",
            )
        })?;

    if cli.client.json {
        print_json(&report::registration_json(&result));
    } else {
        print_lines(&report::registration(&result));
        print_lines(&[String::new()]);
        print_lines(&links::registry_block(&client.contracts, Some(wallet), None));
    }
    Ok(EXIT_OK)
}
