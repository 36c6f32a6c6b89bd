use crate::criteria::Criteria;
use crate::error::DecisionError;
use crate::model::ClientContext;
use crate::policy::EffectiveConfig;
use crate::report::Decision;
use crate::rules;

/// Evaluate the rule chain against one request context and converge on a
/// final mode.
///
/// Single synchronous pass: each rule that is enabled by policy and reports
/// itself relevant gets to process the criteria, in the fixed order from
/// `rules::ordered()`. Rule failures propagate; there is no retry or
/// background recovery for a pure computation.
pub fn decide(context: &ClientContext, cfg: &EffectiveConfig) -> Result<Decision, DecisionError> {
    let mut criteria = Criteria::new(context, cfg.initial_mode);
    let mut trace = Vec::new();
    let mut rules_evaluated: u32 = 0;

    for rule in rules::ordered() {
        if cfg.rule_policy(rule.id()).is_none() {
            continue;
        }
        if !rule.is_relevant(&criteria) {
            continue;
        }
        rules_evaluated += 1;
        rule.process(&mut criteria, &mut trace)?;
    }

    Ok(Decision {
        mode: criteria.mode(),
        trace,
        rules_evaluated,
    })
}
