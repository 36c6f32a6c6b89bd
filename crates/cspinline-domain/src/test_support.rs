use crate::model::{Client, ClientContext, ClientFamily};
use crate::policy::{EffectiveConfig, RulePolicy};
use cspinline_types::{InlineScriptMode, ids};
use std::collections::BTreeMap;

pub fn client(family: ClientFamily, major_version: Option<u32>) -> Client {
    Client {
        family,
        major_version,
        user_agent: format!("test-agent/{}", family.as_str()),
    }
}

pub fn context_for(family: ClientFamily, major_version: Option<u32>) -> ClientContext {
    ClientContext::with_client(client(family, major_version))
}

/// All rules enabled, seeded with nonce mode.
pub fn default_config() -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(ids::RULE_CLIENT_IE.to_string(), RulePolicy::enabled());
    rules.insert(
        ids::RULE_CLIENT_LEGACY_WEBKIT.to_string(),
        RulePolicy::enabled(),
    );

    EffectiveConfig {
        profile: "test".to_string(),
        initial_mode: InlineScriptMode::Nonce,
        rules,
    }
}

/// Only the named rule enabled.
pub fn config_with_rule(rule_id: &str) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(rule_id.to_string(), RulePolicy::enabled());

    EffectiveConfig {
        profile: "test".to_string(),
        initial_mode: InlineScriptMode::Nonce,
        rules,
    }
}
