//! Registration status against the ERC-8004 identity registry.
//!
//! Enumeration assumes the registry implements ERC-721 enumerable
//! ownership (`balanceOf` + `tokenOfOwnerByIndex`).

use alloy::primitives::{Address, U256};

use crate::contracts::{ContractSet, Role};
use crate::error::{ChainReadError, CheckError};
use crate::reader::ChainReader;
use crate::types::{AgentId, AgentLookup, RegistrationResult, SkippedIndex};

/// List the agents owned by `wallet`.
///
/// Indices are resolved one at a time in ascending order. A failed index is
/// recorded in [`RegistrationResult::skipped`] and enumeration moves on; each
/// index is an independent probe. Callers surface the skipped entries.
///
/// # Errors
///
/// Returns [`CheckError::Unconfigured`] if the registry proxy has no address
/// and [`CheckError::ChainRead`] if the owned-token count cannot be read.
pub async fn evaluate_registration<R: ChainReader>(
    reader: &R,
    contracts: &ContractSet,
    wallet: Address,
) -> Result<RegistrationResult, CheckError> {
    let registry = contracts.require(Role::RegistryProxy)?;

    let balance = reader.nft_balance_of(registry, wallet).await?;
    let count = u64::try_from(balance).map_err(|_| ChainReadError::Malformed {
        command: "balanceOf(address)".to_owned(),
        output: balance.to_string(),
        reason: "token count does not fit in 64 bits".to_owned(),
    })?;
    tracing::debug!(%wallet, %registry, count, "registered agents");

    let mut agent_ids: Vec<AgentId> = Vec::new();
    let mut skipped = Vec::new();
    for index in 0..count {
        match reader
            .token_of_owner_by_index(registry, wallet, U256::from(index))
            .await
        {
            Ok(id) => agent_ids.push(id),
            Err(e) => {
                tracing::debug!(%wallet, index, error = %e, "could not fetch token");
                skipped.push(SkippedIndex {
                    index,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(RegistrationResult {
        wallet,
        count,
        agent_ids,
        skipped,
    })
}

/// Look up the owner and token URI of a single agent.
///
/// Both reads are always attempted; their outcomes are reported separately.
///
/// # Errors
///
/// Returns [`CheckError::Unconfigured`] if the registry proxy has no address.
pub async fn lookup_agent<R: ChainReader>(
    reader: &R,
    contracts: &ContractSet,
    agent_id: AgentId,
) -> Result<AgentLookup, CheckError> {
    let registry = contracts.require(Role::RegistryProxy)?;

    let token_uri = reader.token_uri(registry, agent_id).await;
    if let Err(e) = &token_uri {
        tracing::debug!(%agent_id, error = %e, "tokenURI lookup failed");
    }
    let owner = reader.owner_of(registry, agent_id).await;
    if let Err(e) = &owner {
        tracing::debug!(%agent_id, error = %e, "ownerOf lookup failed");
    }

    Ok(AgentLookup {
        agent_id,
        token_uri,
        owner,
    })
}
