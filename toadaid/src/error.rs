//! Error types for the check pipelines.

use std::time::Duration;

use crate::contracts::Role;

/// A failed read through the external chain client.
///
/// Every variant carries the diagnostic text needed to tell the user what
/// went wrong; none of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainReadError {
    /// The client binary is missing or could not be started.
    #[error("could not run `{program}`: {reason}")]
    ClientUnavailable {
        /// Program that was invoked.
        program: String,
        /// Operating-system error.
        reason: String,
    },

    /// The client did not return within the per-call timeout.
    #[error("`{command}` timed out after {}s", .timeout.as_secs())]
    Timeout {
        /// Abbreviated command line, e.g. `cast call balanceOf(address)(uint256)`.
        command: String,
        /// Timeout that elapsed.
        timeout: Duration,
    },

    /// The client exited unsuccessfully (including on-chain reverts).
    #[error("`{command}` failed ({status}): {stderr}")]
    Failed {
        /// Abbreviated command line.
        command: String,
        /// Exit status description.
        status: String,
        /// Trimmed standard error.
        stderr: String,
    },

    /// The client succeeded but its output could not be decoded.
    #[error("unexpected output from `{command}`: {output:?} ({reason})")]
    Malformed {
        /// Abbreviated command line.
        command: String,
        /// Trimmed standard output.
        output: String,
        /// What was expected.
        reason: String,
    },
}

/// Top-level failure of a check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// Malformed wallet address or agent id. Raised before any chain read.
    #[error("{0}")]
    InvalidInput(String),

    /// A contract role the check needs has no configured address.
    #[error("{0} address is not configured")]
    Unconfigured(Role),

    /// An unrecoverable chain read.
    #[error(transparent)]
    ChainRead(#[from] ChainReadError),
}
