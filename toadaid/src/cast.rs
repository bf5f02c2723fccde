//! [`ChainReader`] backed by Foundry's `cast` binary.
//!
//! Each read is one `cast` invocation:
//!
//! ```text
//! cast call <to> <signature>(<returns>) <args...> [--rpc-url <url>]
//! cast code <address> [--rpc-url <url>]
//! ```
//!
//! Signatures carry their return types so `cast` prints decoded values
//! instead of raw ABI words. Standard output is the result; a non-zero exit
//! status with standard error is a failure.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use tokio::process::Command;

use crate::error::ChainReadError;
use crate::reader::{ChainReader, ReadResult};

/// Per-call timeout for `cast` invocations.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DECIMALS: &str = "decimals()(uint8)";
const BALANCE_OF: &str = "balanceOf(address)(uint256)";
const TOKEN_OF_OWNER_BY_INDEX: &str = "tokenOfOwnerByIndex(address,uint256)(uint256)";
const TOKEN_URI: &str = "tokenURI(uint256)(string)";
const OWNER_OF: &str = "ownerOf(uint256)(address)";

/// Read-only chain client that shells out to `cast`.
#[derive(Debug, Clone)]
pub struct Cast {
    program: PathBuf,
    rpc_url: Option<String>,
    timeout: Duration,
}

impl Default for Cast {
    fn default() -> Self {
        Self::new()
    }
}

impl Cast {
    /// Default per-call timeout (30 seconds).
    pub const DEFAULT_TIMEOUT: Duration = REQUEST_TIMEOUT;

    /// `cast` from `PATH`, no explicit RPC URL, default timeout.
    ///
    /// Without an RPC URL `cast` falls back to its own `ETH_RPC_URL`
    /// handling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("cast"),
            rpc_url: None,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Use a specific `cast` binary.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Pass `--rpc-url` on every call.
    #[must_use]
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    /// Override the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The binary being invoked.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The RPC endpoint passed to `cast`, if any.
    #[must_use]
    pub fn rpc_url(&self) -> Option<&str> {
        self.rpc_url.as_deref()
    }

    /// Run `cast --version`, confirming the binary is installed.
    ///
    /// # Errors
    ///
    /// Returns a [`ChainReadError`] if the binary cannot be run or fails.
    pub async fn version(&self) -> ReadResult<String> {
        let label = format!("{} --version", self.program.display());
        self.run(&label, &["--version".to_owned()]).await
    }

    /// `cast call <to> <signature> <args...>`, returning the label used in
    /// diagnostics and the trimmed output.
    async fn call(
        &self,
        to: Address,
        signature: &str,
        args: &[String],
    ) -> ReadResult<(String, String)> {
        let label = format!("cast call {signature}");
        let mut argv = vec!["call".to_owned(), to.to_string(), signature.to_owned()];
        argv.extend_from_slice(args);
        self.push_rpc(&mut argv);
        let output = self.run(&label, &argv).await?;
        Ok((label, output))
    }

    fn push_rpc(&self, argv: &mut Vec<String>) {
        if let Some(url) = &self.rpc_url {
            argv.push("--rpc-url".to_owned());
            argv.push(url.clone());
        }
    }

    async fn run(&self, label: &str, argv: &[String]) -> ReadResult<String> {
        tracing::debug!(command = label, args = ?argv, "invoking cast");

        let mut cmd = Command::new(&self.program);
        cmd.args(argv).stdin(Stdio::null()).kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| ChainReadError::Timeout {
                command: label.to_owned(),
                timeout: self.timeout,
            })?
            .map_err(|e| ChainReadError::ClientUnavailable {
                program: self.program.display().to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ChainReadError::Failed {
                command: label.to_owned(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }
}

impl ChainReader for Cast {
    async fn has_code(&self, address: Address) -> ReadResult<bool> {
        let label = "cast code".to_owned();
        let mut argv = vec!["code".to_owned(), address.to_string()];
        self.push_rpc(&mut argv);
        let output = self.run(&label, &argv).await?;
        decode(&label, &output, parse_code)
    }

    async fn decimals(&self, token: Address) -> ReadResult<u8> {
        let (label, output) = self.call(token, DECIMALS, &[]).await?;
        decode(&label, &output, parse_u8)
    }

    async fn token_balance_of(&self, token: Address, wallet: Address) -> ReadResult<U256> {
        let (label, output) = self.call(token, BALANCE_OF, &[wallet.to_string()]).await?;
        decode(&label, &output, parse_uint)
    }

    async fn nft_balance_of(&self, registry: Address, wallet: Address) -> ReadResult<U256> {
        let (label, output) = self.call(registry, BALANCE_OF, &[wallet.to_string()]).await?;
        decode(&label, &output, parse_uint)
    }

    async fn token_of_owner_by_index(
        &self,
        registry: Address,
        wallet: Address,
        index: U256,
    ) -> ReadResult<U256> {
        let args = [wallet.to_string(), index.to_string()];
        let (label, output) = self.call(registry, TOKEN_OF_OWNER_BY_INDEX, &args).await?;
        decode(&label, &output, parse_uint)
    }

    async fn token_uri(&self, registry: Address, token_id: U256) -> ReadResult<String> {
        let (_, output) = self.call(registry, TOKEN_URI, &[token_id.to_string()]).await?;
        Ok(unquote(&output).to_owned())
    }

    async fn owner_of(&self, registry: Address, token_id: U256) -> ReadResult<Address> {
        let (label, output) = self.call(registry, OWNER_OF, &[token_id.to_string()]).await?;
        decode(&label, &output, parse_address)
    }
}

fn decode<T>(label: &str, output: &str, parse: fn(&str) -> Result<T, String>) -> ReadResult<T> {
    parse(output).map_err(|reason| ChainReadError::Malformed {
        command: label.to_owned(),
        output: output.to_owned(),
        reason,
    })
}

/// First whitespace-separated token. Recent `cast` versions annotate large
/// integers, e.g. `1500000000000000000 [1.5e18]`.
fn first_token(output: &str) -> Result<&str, String> {
    output
        .split_whitespace()
        .next()
        .ok_or_else(|| "empty output".to_owned())
}

fn parse_uint(output: &str) -> Result<U256, String> {
    first_token(output)?
        .parse::<U256>()
        .map_err(|e| format!("expected an unsigned integer: {e}"))
}

fn parse_u8(output: &str) -> Result<u8, String> {
    first_token(output)?
        .parse::<u8>()
        .map_err(|e| format!("expected a uint8: {e}"))
}

fn parse_address(output: &str) -> Result<Address, String> {
    first_token(output)?
        .parse::<Address>()
        .map_err(|e| format!("expected an address: {e}"))
}

fn parse_code(output: &str) -> Result<bool, String> {
    match output {
        "" | "0x" => Ok(false),
        code if code.starts_with("0x") => Ok(true),
        _ => Err("expected 0x-prefixed bytecode".to_owned()),
    }
}

/// Strip one pair of surrounding double quotes, as `cast` prints strings.
fn unquote(output: &str) -> &str {
    output
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(output)
}
