//! Runtime configuration loaded from `toadaid.toml`.
//!
//! Every field is optional. When no config file is present the built-in
//! defaults are used: `cast` from `PATH`, the public Base mainnet RPC, a
//! 30 second per-call timeout and [`ContractSet::base_mainnet`].
//!
//! ```toml
//! rpc_url = "https://mainnet.base.org"
//! cast = "/opt/foundry/bin/cast"
//! timeout_secs = 30
//!
//! [contracts]
//! registry_router = "0x…"
//! mpass_token = "0x…"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use toadaid::ContractSet;

/// Public Base mainnet RPC used when nothing else is configured.
pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// RPC endpoint handed to `cast --rpc-url`.
    pub rpc_url: Option<String>,
    /// Path to the `cast` binary.
    pub cast: Option<PathBuf>,
    /// Per-call timeout in seconds; must be at least 1.
    pub timeout_secs: Option<u64>,
    /// Contract overrides; unnamed roles keep their Base mainnet defaults.
    pub contracts: ContractSet,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Returns [`Config::default`] if the file does not exist,
    /// allowing the binaries to work without any config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if `timeout_secs` is zero.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        ensure!(
            config.timeout_secs != Some(0),
            "timeout_secs in {} must be at least 1",
            path.display()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use toadaid::Role;

    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert!(config.rpc_url.is_none(), "no rpc override");
        assert_eq!(config.contracts, ContractSet::base_mainnet(), "default contracts");
    }

    #[test]
    fn parses_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toadaid.toml");
        std::fs::write(
            &path,
            r#"
rpc_url = "http://127.0.0.1:8545"
timeout_secs = 5

[contracts]
mpass_token = "0x00000000000000000000000000000000000000b2"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.rpc_url.as_deref(), Some("http://127.0.0.1:8545"), "rpc");
        assert_eq!(config.timeout_secs, Some(5), "timeout");
        assert!(config.contracts.get(Role::MpassToken).is_some(), "mpass set");
        assert!(config.contracts.get(Role::RegistryProxy).is_some(), "proxy default kept");
    }

    #[test]
    fn rejects_zero_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toadaid.toml");
        std::fs::write(&path, "timeout_secs = 0\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("timeout_secs"), "error: {err:#}");
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toadaid.toml");
        std::fs::write(&path, "rpc = \"http://x\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"), "error: {err:#}");
    }
}
