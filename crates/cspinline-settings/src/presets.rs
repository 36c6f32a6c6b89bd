use cspinline_domain::policy::{EffectiveConfig, RulePolicy};
use cspinline_types::{InlineScriptMode, ids};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything page-specific should go into the
/// config file.
pub fn preset(profile: &str) -> EffectiveConfig {
    // Unknown names are rejected during resolution before this is called.
    match profile {
        "compat" => compat_profile(),
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        initial_mode: InlineScriptMode::Nonce,
        rules: default_rules(),
    }
}

fn compat_profile() -> EffectiveConfig {
    // Compatibility mode is for pages that cannot tag their inline scripts
    // yet; IE still gets the unsupported fallback.
    EffectiveConfig {
        profile: "compat".to_string(),
        initial_mode: InlineScriptMode::UnsafeInline,
        rules: default_rules(),
    }
}

fn default_rules() -> BTreeMap<String, RulePolicy> {
    let mut m = BTreeMap::new();
    m.insert(ids::RULE_CLIENT_IE.to_string(), RulePolicy::enabled());
    m.insert(
        ids::RULE_CLIENT_LEGACY_WEBKIT.to_string(),
        RulePolicy::enabled(),
    );
    m
}
