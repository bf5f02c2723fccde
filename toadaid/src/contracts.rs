//! The fixed set of contracts both checks read from.
//!
//! ToadAid builds on the ERC-8004 identity registry deployed on Base
//! mainnet. The registry proxy and its implementation are known; the forge
//! router, the reputation router and the MPASS token are deployment details
//! that must be supplied through configuration before the forge check can
//! run.

use std::fmt;

use alloy::primitives::{Address, address};
use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// ERC-8004 identity registry proxy on Base mainnet (CREATE2, shared by all mainnets).
const BASE_REGISTRY_PROXY: Address = address!("8004A169FB4a3325136EB29fA0ceB6D2e539a432");

/// Identity registry implementation behind the proxy.
const BASE_IMPL: Address = address!("7274e874CA62410a93Bd8bf61c69d8045E399c02");

/// A logical contract role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Router that forges new identities; probed for deployed bytecode.
    RegistryRouter,
    /// ERC-8004 identity registry (ERC-721) proxy.
    RegistryProxy,
    /// Router for reputation feedback.
    ReputationRouter,
    /// ERC-20 token whose balance gates forging.
    MpassToken,
    /// Implementation contract behind the registry proxy.
    BaseImpl,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: &[Self] = &[
        Self::RegistryRouter,
        Self::RegistryProxy,
        Self::ReputationRouter,
        Self::MpassToken,
        Self::BaseImpl,
    ];

    /// Upper-snake-case name, e.g. `MPASS_TOKEN`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RegistryRouter => "REGISTRY_ROUTER",
            Self::RegistryProxy => "REGISTRY_PROXY",
            Self::ReputationRouter => "REPUTATION_ROUTER",
            Self::MpassToken => "MPASS_TOKEN",
            Self::BaseImpl => "BASE_IMPL",
        }
    }

    /// Human-readable label, e.g. `MPASS Token`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RegistryRouter => "Registry Router",
            Self::RegistryProxy => "Registry Proxy",
            Self::ReputationRouter => "Reputation Router",
            Self::MpassToken => "MPASS Token",
            Self::BaseImpl => "Base Implementation",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role → address mapping, fixed for the lifetime of the process.
///
/// `None` means the role has no known deployment. Deserializing fills
/// missing fields from [`ContractSet::base_mainnet`], so a config file only
/// needs to name the roles it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractSet {
    /// See [`Role::RegistryRouter`].
    pub registry_router: Option<Address>,
    /// See [`Role::RegistryProxy`].
    pub registry_proxy: Option<Address>,
    /// See [`Role::ReputationRouter`].
    pub reputation_router: Option<Address>,
    /// See [`Role::MpassToken`].
    pub mpass_token: Option<Address>,
    /// See [`Role::BaseImpl`].
    pub base_impl: Option<Address>,
}

impl Default for ContractSet {
    fn default() -> Self {
        Self::base_mainnet()
    }
}

impl ContractSet {
    /// Known Base mainnet deployments.
    #[must_use]
    pub const fn base_mainnet() -> Self {
        Self {
            registry_router: None,
            registry_proxy: Some(BASE_REGISTRY_PROXY),
            reputation_router: None,
            mpass_token: None,
            base_impl: Some(BASE_IMPL),
        }
    }

    /// Address configured for `role`, if any.
    #[must_use]
    pub const fn get(&self, role: Role) -> Option<Address> {
        match role {
            Role::RegistryRouter => self.registry_router,
            Role::RegistryProxy => self.registry_proxy,
            Role::ReputationRouter => self.reputation_router,
            Role::MpassToken => self.mpass_token,
            Role::BaseImpl => self.base_impl,
        }
    }

    /// Address configured for `role`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Unconfigured`] if the role has no address.
    pub fn require(&self, role: Role) -> Result<Address, CheckError> {
        self.get(role).ok_or(CheckError::Unconfigured(role))
    }

    /// Iterate `(role, address)` pairs in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Option<Address>)> + '_ {
        Role::ALL.iter().map(move |&role| (role, self.get(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_defaults_leave_undeployed_roles_empty() {
        let set = ContractSet::base_mainnet();
        assert_eq!(set.get(Role::RegistryProxy), Some(BASE_REGISTRY_PROXY), "proxy");
        assert_eq!(set.get(Role::BaseImpl), Some(BASE_IMPL), "impl");
        for role in [Role::RegistryRouter, Role::ReputationRouter, Role::MpassToken] {
            assert_eq!(set.get(role), None, "{role} should be unset");
        }
    }

    #[test]
    fn require_names_the_missing_role() {
        let err = ContractSet::base_mainnet().require(Role::MpassToken).unwrap_err();
        assert!(matches!(err, CheckError::Unconfigured(Role::MpassToken)), "got {err:?}");
        assert!(err.to_string().contains("MPASS_TOKEN"), "message: {err}");
    }

    #[test]
    fn deserialize_overrides_only_named_roles() {
        let set: ContractSet = serde_json::from_str(
            r#"{"mpass_token": "0x00000000000000000000000000000000000000aa"}"#,
        )
        .unwrap();
        assert_eq!(
            set.mpass_token,
            Some(address!("00000000000000000000000000000000000000aa")),
            "override applied"
        );
        assert_eq!(set.registry_proxy, Some(BASE_REGISTRY_PROXY), "default kept");
    }

    #[test]
    fn deserialize_rejects_unknown_roles() {
        let res = serde_json::from_str::<ContractSet>(r#"{"registry": "0x00"}"#);
        assert!(res.is_err(), "unknown role must be rejected");
    }

    #[test]
    fn iter_follows_role_order() {
        let roles: Vec<Role> = ContractSet::default().iter().map(|(r, _)| r).collect();
        assert_eq!(roles, Role::ALL, "iteration order");
    }
}
