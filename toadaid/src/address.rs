//! Syntactic validation of wallet addresses and agent ids.
//!
//! Nothing here touches the network: malformed input is rejected before a
//! single chain read is issued.

use alloy::primitives::{Address, U256};

use crate::error::CheckError;
use crate::types::AgentId;

/// Length of `0x` followed by 40 hex digits.
const ADDRESS_LEN: usize = 42;

/// Returns `true` if `candidate` is `0x` followed by exactly 40 hex digits.
///
/// Hex digits may be any case and the EIP-55 checksum is not verified. The
/// prefix itself is matched case-insensitively, so `0X…` is accepted too.
#[must_use]
pub fn is_valid_address(candidate: &str) -> bool {
    candidate.len() == ADDRESS_LEN
        && candidate
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("0x"))
        && candidate
            .bytes()
            .skip(2)
            .all(|b| b.is_ascii_hexdigit())
}

/// Parse a wallet or contract address, rejecting anything
/// [`is_valid_address`] does not accept.
///
/// # Errors
///
/// Returns [`CheckError::InvalidInput`] if the string is not a well-formed
/// 20-byte hex address.
pub fn parse_address(candidate: &str) -> Result<Address, CheckError> {
    if !is_valid_address(candidate) {
        return Err(CheckError::InvalidInput(format!(
            "invalid wallet address `{candidate}`: expected 0x followed by 40 hex characters"
        )));
    }
    // The prefix is stripped by hand because it may be upper-case.
    candidate
        .get(2..)
        .and_then(|digits| digits.parse::<Address>().ok())
        .ok_or_else(|| CheckError::InvalidInput(format!("invalid wallet address `{candidate}`")))
}

/// Parse an agent id given as a base-10 non-negative integer.
///
/// A single leading `+` is allowed, as with `str::parse` for unsigned ints.
///
/// # Errors
///
/// Returns [`CheckError::InvalidInput`] for empty strings, a `-` sign,
/// whitespace, any other non-digit character, or values that do not fit in
/// 256 bits.
pub fn parse_agent_id(candidate: &str) -> Result<AgentId, CheckError> {
    let invalid = || CheckError::InvalidInput(format!("invalid agent id `{candidate}`"));
    let digits = candidate.strip_prefix('+').unwrap_or(candidate);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    U256::from_str_radix(digits, 10).map_err(|_| invalid())
}
