//! The forge gate: MPASS balance plus a live registry router.

use alloy::primitives::Address;

use crate::contracts::{ContractSet, Role};
use crate::error::CheckError;
use crate::reader::ChainReader;
use crate::types::{EligibilityResult, TokenAmount};

/// Minimum MPASS balance, in whole tokens, required to forge.
pub const MPASS_MIN_BALANCE: f64 = 1.0;

impl EligibilityResult {
    /// Decide eligibility from the raw reads. Pure: no chain access.
    #[must_use]
    pub fn from_reads(router_has_code: bool, mpass_balance: TokenAmount) -> Self {
        let mpass_sufficient = mpass_balance.to_f64() >= MPASS_MIN_BALANCE;
        Self {
            router_active: router_has_code,
            mpass_balance,
            mpass_sufficient,
            ready: router_has_code && mpass_sufficient,
        }
    }
}

/// Check whether `wallet` may forge an identity.
///
/// Reads, in order: router bytecode, MPASS `decimals()` (falling back to 18),
/// MPASS `balanceOf(wallet)`.
///
/// # Errors
///
/// Returns [`CheckError::Unconfigured`] if the router or MPASS token has no
/// address, before any read is issued. Any failed read other than
/// `decimals()` aborts the check with [`CheckError::ChainRead`].
pub async fn evaluate_eligibility<R: ChainReader>(
    reader: &R,
    contracts: &ContractSet,
    wallet: Address,
) -> Result<EligibilityResult, CheckError> {
    let router = contracts.require(Role::RegistryRouter)?;
    let mpass = contracts.require(Role::MpassToken)?;

    let router_active = reader.has_code(router).await?;
    tracing::debug!(%router, router_active, "router probed");

    let decimals = reader.token_decimals(mpass).await;
    let raw = reader.token_balance_of(mpass, wallet).await?;
    let balance = TokenAmount::new(raw, decimals);
    tracing::debug!(%wallet, %raw, decimals, "MPASS balance read");

    Ok(EligibilityResult::from_reads(router_active, balance))
}
