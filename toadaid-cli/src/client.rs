//! Flags shared by both binaries and how they resolve into a [`Cast`]
//! client and a [`ContractSet`].
//!
//! Precedence, lowest first: built-in defaults, the config file,
//! environment variables, command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use toadaid::{Cast, ChainReadError, ContractSet};

use crate::config::{Config, DEFAULT_RPC_URL};

const FOUNDRY_INSTALL: &str = "https://book.getfoundry.sh/getting-started/installation";

/// Chain-client options common to `forge-check` and `verify-identity`.
#[derive(Debug, Clone, clap::Args)]
pub struct ClientArgs {
    /// Configuration file (missing file means built-in defaults).
    #[arg(long, env = "TOADAID_CONFIG", default_value = "toadaid.toml")]
    pub config: PathBuf,

    /// RPC endpoint passed to `cast` [default: https://mainnet.base.org].
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Path to the `cast` binary [default: cast from PATH].
    #[arg(long, value_name = "PATH")]
    pub cast: Option<PathBuf>,

    /// Per-call timeout in seconds [default: 30].
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Print a single JSON document instead of the human-readable report.
    #[arg(long)]
    pub json: bool,
}

/// Everything a check needs to talk to the chain.
#[derive(Debug, Clone)]
pub struct Client {
    /// Configured `cast` invoker.
    pub cast: Cast,
    /// Contract addresses for this run.
    pub contracts: ContractSet,
}

impl ClientArgs {
    /// Merge flags, environment and config file into a [`Client`].
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be loaded or
    /// sets a zero timeout.
    pub fn resolve(&self) -> Result<Client> {
        let config = Config::load(&self.config)?;

        let rpc_url = self
            .rpc_url
            .clone()
            .or(config.rpc_url)
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_owned());
        let timeout = self
            .timeout
            .or(config.timeout_secs)
            .map_or(Cast::DEFAULT_TIMEOUT, Duration::from_secs);

        let mut cast = Cast::new().with_rpc_url(rpc_url).with_timeout(timeout);
        if let Some(program) = self.cast.clone().or(config.cast) {
            cast = cast.with_program(program);
        }

        tracing::debug!(
            program = %cast.program().display(),
            rpc = cast.rpc_url().unwrap_or_default(),
            timeout_secs = timeout.as_secs(),
            "client resolved"
        );

        Ok(Client {
            cast,
            contracts: config.contracts,
        })
    }
}

impl Client {
    /// Confirm `cast` can be run at all before issuing reads.
    ///
    /// # Errors
    ///
    /// Returns an error pointing at the Foundry install guide if `cast` is
    /// missing or broken.
    pub async fn preflight(&self) -> Result<()> {
        match self.cast.version().await {
            Ok(version) => {
                tracing::debug!(%version, "cast available");
                Ok(())
            }
            Err(e @ ChainReadError::ClientUnavailable { .. }) => Err(e).with_context(|| {
                format!("`cast` not found; install Foundry: {FOUNDRY_INSTALL}")
            }),
            Err(e) => Err(e).context("`cast --version` failed"),
        }
    }
}
