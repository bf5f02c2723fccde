//! In-memory [`ChainReader`] for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use alloy::primitives::{Address, U256};

use crate::error::ChainReadError;
use crate::reader::{ChainReader, ReadResult};

pub(crate) fn revert(what: &str) -> ChainReadError {
    ChainReadError::Failed {
        command: format!("cast call {what}"),
        status: "exit status: 1".to_owned(),
        stderr: "Error: execution reverted".to_owned(),
    }
}

/// Canned chain state. Anything not set reads as a revert.
#[derive(Debug, Default)]
pub(crate) struct FakeChain {
    pub(crate) code: HashSet<Address>,
    pub(crate) decimals: HashMap<Address, u8>,
    pub(crate) balances: HashMap<(Address, Address), U256>,
    /// Per-index results of `tokenOfOwnerByIndex`; `None` reverts.
    pub(crate) owned: HashMap<Address, Vec<Option<U256>>>,
    pub(crate) uris: HashMap<U256, String>,
    pub(crate) owners: HashMap<U256, Address>,
    /// Every call, in order, as `method` names.
    pub(crate) calls: Mutex<Vec<&'static str>>,
}

impl FakeChain {
    fn record(&self, method: &'static str) {
        self.calls.lock().unwrap().push(method);
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChainReader for FakeChain {
    async fn has_code(&self, address: Address) -> ReadResult<bool> {
        self.record("has_code");
        Ok(self.code.contains(&address))
    }

    async fn decimals(&self, token: Address) -> ReadResult<u8> {
        self.record("decimals");
        self.decimals.get(&token).copied().ok_or_else(|| revert("decimals()"))
    }

    async fn token_balance_of(&self, token: Address, wallet: Address) -> ReadResult<U256> {
        self.record("token_balance_of");
        self.balances
            .get(&(token, wallet))
            .copied()
            .ok_or_else(|| revert("balanceOf(address)"))
    }

    async fn nft_balance_of(&self, _registry: Address, wallet: Address) -> ReadResult<U256> {
        self.record("nft_balance_of");
        self.owned
            .get(&wallet)
            .map(|ids| U256::from(ids.len()))
            .ok_or_else(|| revert("balanceOf(address)"))
    }

    async fn token_of_owner_by_index(
        &self,
        _registry: Address,
        wallet: Address,
        index: U256,
    ) -> ReadResult<U256> {
        self.record("token_of_owner_by_index");
        let index = usize::try_from(index).map_err(|_| revert("tokenOfOwnerByIndex"))?;
        self.owned
            .get(&wallet)
            .and_then(|ids| ids.get(index).copied().flatten())
            .ok_or_else(|| revert("tokenOfOwnerByIndex(address,uint256)"))
    }

    async fn token_uri(&self, _registry: Address, token_id: U256) -> ReadResult<String> {
        self.record("token_uri");
        self.uris.get(&token_id).cloned().ok_or_else(|| revert("tokenURI(uint256)"))
    }

    async fn owner_of(&self, _registry: Address, token_id: U256) -> ReadResult<Address> {
        self.record("owner_of");
        self.owners.get(&token_id).copied().ok_or_else(|| revert("ownerOf(uint256)"))
    }
}
