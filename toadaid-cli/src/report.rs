//! Human-readable and JSON rendering of check results.
//!
//! Renderers return lines or [`serde_json::Value`]s; the binaries decide
//! where they are printed.

use serde::Serialize;
use serde_json::{Value, json};
use toadaid::{
    Address, AgentLookup, ContractSet, EligibilityResult, MPASS_MIN_BALANCE, RegistrationResult,
    Role,
};

use crate::links;

const RULE: &str = "==================================================";
const THIN_RULE: &str = "--------------------------------------------------";

fn banner(title: &str) -> Vec<String> {
    vec![RULE.to_owned(), title.to_owned(), RULE.to_owned(), String::new()]
}

const fn mark(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}

fn describe(addr: Option<Address>) -> String {
    addr.map_or_else(|| "(not configured)".to_owned(), |a| a.to_string())
}

/// The contract set, gate requirement and explorer links.
#[must_use]
pub fn config(contracts: &ContractSet, rpc_url: Option<&str>) -> Vec<String> {
    let mut lines = banner("ToadAid Forge Configuration");
    lines.push("Contracts (Base Mainnet):".to_owned());
    for (role, addr) in contracts.iter() {
        lines.push(format!("  {:<21}{}", format!("{}:", role.label()), describe(addr)));
    }
    lines.push(String::new());
    if let Some(url) = rpc_url {
        lines.push(format!("RPC Endpoint:          {url}"));
        lines.push(String::new());
    }
    lines.push("Gate Requirements:".to_owned());
    lines.push(format!("  MPASS Minimum:       {MPASS_MIN_BALANCE} MPASS"));
    lines.push(String::new());
    lines.push("Explorer Links:".to_owned());
    for (label, role) in [("Router:", Role::RegistryRouter), ("Proxy:", Role::RegistryProxy)] {
        if let Some(addr) = contracts.get(role) {
            lines.push(format!("  {label:<9}{}", links::address(addr)));
        }
    }
    lines
}

/// Multi-line forge eligibility report.
#[must_use]
pub fn eligibility(
    wallet: Address,
    result: &EligibilityResult,
    contracts: &ContractSet,
) -> Vec<String> {
    let balance = result.mpass_balance;
    let mut lines = banner("Forge Eligibility Check");
    lines.push(format!("Wallet: {wallet}"));
    lines.push(String::new());
    lines.push(format!(
        "Registry Router:  {} ({})",
        describe(contracts.registry_router),
        if result.router_active { "active" } else { "no code deployed" }
    ));
    lines.push(format!("MPASS Token:      {}", describe(contracts.mpass_token)));
    lines.push(format!(
        "MPASS Balance:    {} (raw {}, {} decimals)",
        balance.to_f64(),
        balance.raw,
        balance.decimals
    ));
    lines.push(format!("Required:         {MPASS_MIN_BALANCE} MPASS"));
    lines.push(String::new());
    lines.push(THIN_RULE.to_owned());
    lines.push("Summary:".to_owned());
    lines.push(THIN_RULE.to_owned());
    lines.push(String::new());
    lines.push("Requirements to Forge:".to_owned());
    lines.push(format!("  {} Registry router deployed", mark(result.router_active)));
    lines.push(format!("  {} {MPASS_MIN_BALANCE} MPASS minimum", mark(result.mpass_sufficient)));
    lines.push(String::new());

    if result.ready {
        lines.push("Status: ELIGIBLE to forge".to_owned());
        lines.push(String::new());
        lines.push("Next step:".to_owned());
        lines.push(format!("  Visit {}", links::FORGE_PORTAL));
    } else {
        lines.push("Status: NOT ELIGIBLE".to_owned());
        lines.push(String::new());
        lines.push("To become eligible:".to_owned());
        if !result.mpass_sufficient {
            lines.push(format!("  - Acquire MPASS tokens (>= {MPASS_MIN_BALANCE})"));
        }
        if !result.router_active {
            lines.push("  - Wait for the registry router to be deployed".to_owned());
        }
        lines.push("  - Return to this check, then proceed to forge".to_owned());
    }
    lines
}

/// JSON eligibility document: `wallet`, `ready`, `checks`, `contracts`.
#[must_use]
pub fn eligibility_json(
    wallet: Address,
    result: &EligibilityResult,
    contracts: &ContractSet,
) -> Value {
    json!({
        "wallet": wallet,
        "ready": result.ready,
        "checks": {
            "router_active": result.router_active,
            "mpass_balance": result.mpass_balance.to_f64(),
            "mpass_raw": result.mpass_balance.raw.to_string(),
            "mpass_decimals": result.mpass_balance.decimals,
            "mpass_required": MPASS_MIN_BALANCE,
            "mpass_sufficient": result.mpass_sufficient,
        },
        "contracts": contracts,
    })
}

/// Agents owned by a wallet, with per-agent links.
#[must_use]
pub fn registration(result: &RegistrationResult) -> Vec<String> {
    let mut lines = vec![format!("Registered agents: {}", result.count), String::new()];
    for skipped in &result.skipped {
        lines.push(format!(
            "Warning: Could not fetch token {}: {}",
            skipped.index, skipped.error
        ));
    }
    if !result.skipped.is_empty() {
        lines.push(String::new());
    }

    if result.agent_ids.is_empty() {
        lines.push(format!("{} No agents found for this wallet", mark(false)));
        lines.push(String::new());
        lines.push("To register:".to_owned());
        lines.push(format!("  1. Visit {}", links::FORGE_PORTAL));
        lines.push("  2. Connect wallet".to_owned());
        lines.push("  3. Complete registration".to_owned());
    } else {
        lines.push(format!(
            "{} Found {} registered agent(s)",
            mark(true),
            result.agent_ids.len()
        ));
        for id in &result.agent_ids {
            lines.push(format!("  - Agent #{id}"));
            lines.push(format!("    {}", links::agent(*id)));
        }
    }
    lines
}

#[derive(Serialize)]
struct SkippedJson<'a> {
    index: u64,
    error: &'a str,
}

/// JSON registration document.
#[must_use]
pub fn registration_json(result: &RegistrationResult) -> Value {
    let agent_ids: Vec<String> = result.agent_ids.iter().map(ToString::to_string).collect();
    let skipped: Vec<SkippedJson<'_>> = result
        .skipped
        .iter()
        .map(|s| SkippedJson {
            index: s.index,
            error: &s.error,
        })
        .collect();
    json!({
        "wallet": result.wallet,
        "count": result.count,
        "registered": !result.agent_ids.is_empty(),
        "agent_ids": agent_ids,
        "skipped": skipped,
    })
}

/// Single-agent lookup. Failed fields are reported in place.
#[must_use]
pub fn lookup(result: &AgentLookup) -> Vec<String> {
    let mut lines = vec![format!("Agent #{}", result.agent_id)];
    lines.push(match &result.token_uri {
        Ok(uri) => format!("  Token URI: {uri}"),
        Err(e) => format!("  [!] Token URI query failed: {e}"),
    });
    lines.push(match &result.owner {
        Ok(owner) => format!("  Owner:     {owner}"),
        Err(e) => format!("  [!] Owner query failed: {e}"),
    });
    if !result.is_complete() {
        lines.push("  [!] Agent may not exist or RPC may be unavailable".to_owned());
    }
    lines
}

/// JSON lookup document; failed fields are `null` with the reason in `errors`.
#[must_use]
pub fn lookup_json(result: &AgentLookup) -> Value {
    let mut errors = serde_json::Map::new();
    if let Err(e) = &result.token_uri {
        errors.insert("token_uri".to_owned(), Value::String(e.to_string()));
    }
    if let Err(e) = &result.owner {
        errors.insert("owner".to_owned(), Value::String(e.to_string()));
    }
    json!({
        "agent_id": result.agent_id.to_string(),
        "token_uri": result.token_uri.as_ref().ok(),
        "owner": result.owner.as_ref().ok(),
        "errors": errors,
    })
}

/// JSON counterpart of the registry "Useful Links" block. Unconfigured
/// contracts are `null`.
#[must_use]
pub fn registry_links_json(contracts: &ContractSet) -> Value {
    json!({
        "registry_contract": contracts.get(Role::RegistryProxy).map(links::address),
        "implementation": contracts.get(Role::BaseImpl).map(links::address),
        "agent_directory": links::AGENT_DIRECTORY,
        "forge_portal": links::FORGE_PORTAL,
    })
}

/// `{"error": "..."}`.
#[must_use]
pub fn error_json(error: &anyhow::Error) -> Value {
    json!({ "error": format!("{error:#}") })
}
