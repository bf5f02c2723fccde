//! Domain types produced by the check pipelines.
//!
//! All of them are built fresh from live reads and never mutated afterwards.

use alloy::primitives::{Address, U256};
use serde::Serialize;

use crate::error::ChainReadError;

/// A registered identity: a token id in the ERC-8004 identity registry.
pub type AgentId = U256;

/// A raw on-chain token amount together with its `decimals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenAmount {
    /// Fixed-point value as returned by `balanceOf`.
    pub raw: U256,
    /// Power of ten `raw` is scaled by.
    pub decimals: u8,
}

impl TokenAmount {
    /// Pair a raw value with its decimals.
    #[must_use]
    pub const fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    /// Human-facing amount, `raw / 10^decimals`.
    ///
    /// Floating point is good enough here: the value is only displayed and
    /// compared against a whole-token threshold.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        // `U256` displays as plain decimal digits, which always parse.
        let raw = self.raw.to_string().parse::<f64>().unwrap_or(f64::INFINITY);
        raw / 10f64.powi(i32::from(self.decimals))
    }
}

/// Outcome of the forge gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EligibilityResult {
    /// The registry router has deployed bytecode.
    pub router_active: bool,
    /// MPASS held by the wallet.
    pub mpass_balance: TokenAmount,
    /// `mpass_balance` meets [`crate::MPASS_MIN_BALANCE`].
    pub mpass_sufficient: bool,
    /// `router_active && mpass_sufficient`.
    pub ready: bool,
}

/// A token index whose `tokenOfOwnerByIndex` lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedIndex {
    /// Ownership index that was probed.
    pub index: u64,
    /// Why the lookup failed.
    pub error: String,
}

/// Agents owned by a wallet, in the registry's enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationResult {
    /// Wallet that was enumerated.
    pub wallet: Address,
    /// Registry `balanceOf(wallet)`.
    pub count: u64,
    /// Token ids that resolved, in index order. Not deduplicated.
    pub agent_ids: Vec<AgentId>,
    /// Indices that could not be resolved.
    pub skipped: Vec<SkippedIndex>,
}

impl RegistrationResult {
    /// `true` if every index in `[0, count)` resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Owner and metadata URI of a single agent.
///
/// The two reads are independent; one failing does not hide the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentLookup {
    /// The agent that was looked up.
    pub agent_id: AgentId,
    /// `tokenURI(agent_id)`.
    pub token_uri: Result<String, ChainReadError>,
    /// `ownerOf(agent_id)`.
    pub owner: Result<Address, ChainReadError>,
}

impl AgentLookup {
    /// `true` if both reads succeeded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.token_uri.is_ok() && self.owner.is_ok()
    }
}
