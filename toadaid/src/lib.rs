//! Read-only ToadAid identity checks.
//!
//! Two pipelines share the same shape: validate the input, read the chain
//! through a [`ChainReader`], then evaluate the reads into a decision.
//!
//! - [`evaluate_eligibility`] answers "may this wallet forge an identity?"
//!   (MPASS balance gate plus a live registry router).
//! - [`evaluate_registration`] and [`lookup_agent`] answer "which agents
//!   does this wallet own?" and "who owns this agent?" against the ERC-8004
//!   identity registry.
//!
//! The production reader is [`Cast`], which shells out to Foundry's `cast`.
//!
//! ```no_run
//! use toadaid::{Cast, ContractSet, evaluate_eligibility, parse_address};
//!
//! # async fn run() -> Result<(), toadaid::CheckError> {
//! let wallet = parse_address("0x0000000000000000000000000000000000000001")?;
//! let contracts = ContractSet::base_mainnet();
//! let cast = Cast::new().with_rpc_url("https://mainnet.base.org");
//! let result = evaluate_eligibility(&cast, &contracts, wallet).await?;
//! assert_eq!(result.ready, result.router_active && result.mpass_sufficient);
//! # Ok(())
//! # }
//! ```

mod address;
mod cast;
mod contracts;
mod eligibility;
mod error;
mod reader;
mod registration;
mod types;

#[cfg(test)]
mod testing;

pub use address::{is_valid_address, parse_address, parse_agent_id};
pub use cast::Cast;
pub use contracts::{ContractSet, Role};
pub use eligibility::{MPASS_MIN_BALANCE, evaluate_eligibility};
pub use error::{ChainReadError, CheckError};
pub use reader::{ChainReader, DEFAULT_DECIMALS, ReadResult};
pub use registration::{evaluate_registration, lookup_agent};
pub use types::{
    AgentId, AgentLookup, EligibilityResult, RegistrationResult, SkippedIndex, TokenAmount,
};

pub use alloy::primitives::{Address, U256};
