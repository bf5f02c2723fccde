//! The read-only chain interface the evaluators are written against.

use std::future::Future;

use alloy::primitives::{Address, U256};

use crate::error::ChainReadError;

/// Result of a single chain read.
pub type ReadResult<T> = Result<T, ChainReadError>;

/// `decimals` assumed for tokens whose `decimals()` call fails.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Read-only queries against contracts on a single chain.
///
/// Every method is one round trip; implementations must not retry or cache.
/// [`crate::Cast`] is the production implementation.
pub trait ChainReader: Sync {
    /// Whether `address` has deployed bytecode.
    fn has_code(&self, address: Address) -> impl Future<Output = ReadResult<bool>> + Send;

    /// ERC-20 `decimals()`.
    fn decimals(&self, token: Address) -> impl Future<Output = ReadResult<u8>> + Send;

    /// ERC-20 `balanceOf(wallet)`.
    fn token_balance_of(
        &self,
        token: Address,
        wallet: Address,
    ) -> impl Future<Output = ReadResult<U256>> + Send;

    /// ERC-721 `balanceOf(wallet)`: the number of tokens owned.
    fn nft_balance_of(
        &self,
        registry: Address,
        wallet: Address,
    ) -> impl Future<Output = ReadResult<U256>> + Send;

    /// ERC-721 enumerable `tokenOfOwnerByIndex(wallet, index)`.
    fn token_of_owner_by_index(
        &self,
        registry: Address,
        wallet: Address,
        index: U256,
    ) -> impl Future<Output = ReadResult<U256>> + Send;

    /// ERC-721 `tokenURI(token_id)`.
    fn token_uri(
        &self,
        registry: Address,
        token_id: U256,
    ) -> impl Future<Output = ReadResult<String>> + Send;

    /// ERC-721 `ownerOf(token_id)`.
    fn owner_of(
        &self,
        registry: Address,
        token_id: U256,
    ) -> impl Future<Output = ReadResult<Address>> + Send;

    /// `decimals()` with a fallback: any failure yields [`DEFAULT_DECIMALS`].
    ///
    /// Nonstandard tokens that do not expose `decimals()` should not block
    /// the balance check.
    fn token_decimals(&self, token: Address) -> impl Future<Output = u8> + Send {
        async move {
            match self.decimals(token).await {
                Ok(decimals) => decimals,
                Err(e) => {
                    tracing::info!(
                        %token,
                        error = %e,
                        fallback = DEFAULT_DECIMALS,
                        "decimals() unavailable"
                    );
                    DEFAULT_DECIMALS
                }
            }
        }
    }
}
