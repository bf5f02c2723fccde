//! Fixtures for driving the binaries against a scripted `cast`.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

pub const WALLET: &str = "0x0000000000000000000000000000000000000000";
pub const ROUTER: &str = "0x00000000000000000000000000000000000000a1";
pub const MPASS: &str = "0x00000000000000000000000000000000000000b2";

/// A temp dir holding a fake `cast`, a config file and a call log.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// `cast_body` is the shell script run for every invocation. Each call
    /// is appended to `calls.log` before the body runs.
    pub fn new(cast_body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let script = format!(
            "#!/bin/sh\necho \"$*\" >> '{}'\n{cast_body}\n",
            log.display()
        );
        let cast = dir.path().join("cast");
        std::fs::write(&cast, script).unwrap();
        std::fs::set_permissions(&cast, std::fs::Permissions::from_mode(0o755)).unwrap();

        let config = format!(
            r#"rpc_url = "http://127.0.0.1:8545"
timeout_secs = 10

[contracts]
registry_router = "{ROUTER}"
mpass_token = "{MPASS}"
"#
        );
        std::fs::write(dir.path().join("toadaid.toml"), config).unwrap();

        Self { dir }
    }

    pub fn cast(&self) -> PathBuf {
        self.dir.path().join("cast")
    }

    pub fn config(&self) -> PathBuf {
        self.dir.path().join("toadaid.toml")
    }

    /// Argument lines `cast` was invoked with, in order.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    /// A command for `bin` wired to this sandbox's `cast` and config.
    pub fn command(&self, bin: &str) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(bin);
        cmd.env_remove("RUST_LOG")
            .env_remove("ETH_RPC_URL")
            .env_remove("TOADAID_CONFIG")
            .arg("--cast")
            .arg(self.cast())
            .arg("--config")
            .arg(self.config());
        cmd
    }
}

/// Fake `cast` for the forge gate. `decimals` is a shell snippet so tests
/// can make the call fail.
pub fn forge_cast(code: &str, decimals: &str, balance: &str) -> String {
    format!(
        r#"case "$1" in
  --version) echo "cast 1.0.0 (fake)" ;;
  code) echo "{code}" ;;
  call)
    case "$3" in
      'decimals()(uint8)') {decimals} ;;
      'balanceOf(address)(uint256)') echo "{balance}" ;;
      *) echo "unexpected signature: $3" >&2; exit 1 ;;
    esac ;;
  *) echo "unexpected command: $1" >&2; exit 1 ;;
esac"#
    )
}
