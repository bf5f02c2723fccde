//! Explorer and portal links printed alongside reports.

use toadaid::{AgentId, Address, ContractSet, Role};

/// Forge portal.
pub const FORGE_PORTAL: &str = "https://toadaid.github.io/forge";

/// Agent directory.
pub const AGENT_DIRECTORY: &str = "https://toadaid.github.io/agent";

const EXPLORER: &str = "https://basescan.org";

/// Basescan page for an address.
#[must_use]
pub fn address(addr: Address) -> String {
    format!("{EXPLORER}/address/{addr}")
}

/// Directory page for a single agent.
#[must_use]
pub fn agent(id: AgentId) -> String {
    format!("{AGENT_DIRECTORY}?id={id}")
}

/// Basescan token page for an agent, if the implementation address is known.
#[must_use]
pub fn token(contracts: &ContractSet, id: AgentId) -> Option<String> {
    contracts
        .get(Role::BaseImpl)
        .map(|implementation| format!("{EXPLORER}/token/{implementation}?a={id}"))
}

/// The "Useful Links" block shown by `verify-identity`.
#[must_use]
pub fn registry_block(
    contracts: &ContractSet,
    wallet: Option<Address>,
    agent_id: Option<AgentId>,
) -> Vec<String> {
    let mut lines = vec!["Useful Links:".to_owned()];
    for (label, role) in [
        ("Registry Contract:", Role::RegistryProxy),
        ("Implementation:", Role::BaseImpl),
    ] {
        if let Some(addr) = contracts.get(role) {
            lines.push(format!("  {label:<19}{}", address(addr)));
        }
    }
    lines.push(format!("  {:<19}{AGENT_DIRECTORY}", "Agent Directory:"));
    lines.push(format!("  {:<19}{FORGE_PORTAL}", "Forge Portal:"));
    if let Some(wallet) = wallet {
        lines.push(format!("  {:<19}{}", "Wallet Explorer:", address(wallet)));
    }
    if let Some(url) = agent_id.and_then(|id| token(contracts, id)) {
        lines.push(format!("  {:<19}{url}", "Token Explorer:"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use toadaid::U256;

    use super::*;

    #[test]
    fn agent_links_use_decimal_ids() {
        assert_eq!(
            agent(U256::from(19_173u64)),
            "https://toadaid.github.io/agent?id=19173",
            "directory link"
        );
        let token = token(&ContractSet::base_mainnet(), U256::from(5u64)).unwrap();
        assert!(token.starts_with("https://basescan.org/token/0x7274"), "{token}");
        assert!(token.ends_with("?a=5"), "{token}");
    }

    #[test]
    fn registry_block_adds_optional_lines() {
        let bare = registry_block(&ContractSet::base_mainnet(), None, None);
        assert!(!bare.iter().any(|l| l.contains("Wallet Explorer")), "{bare:?}");

        let full = registry_block(
            &ContractSet::base_mainnet(),
            Some(Address::ZERO),
            Some(U256::from(1u64)),
        );
        assert!(full.iter().any(|l| l.contains("Wallet Explorer")), "{full:?}");
        assert!(full.iter().any(|l| l.contains("Token Explorer")), "{full:?}");
    }
}
