use cspinline_types::InlineScriptMode;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct RulePolicy {
    pub enabled: bool,
}

impl RulePolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,

    /// Candidate mode the chain is seeded with. Rules only downgrade it.
    pub initial_mode: InlineScriptMode,

    /// Map of rule_id -> policy.
    pub rules: BTreeMap<String, RulePolicy>,
}

impl EffectiveConfig {
    pub fn rule_policy(&self, rule_id: &str) -> Option<&RulePolicy> {
        self.rules.get(rule_id).filter(|p| p.enabled)
    }
}
