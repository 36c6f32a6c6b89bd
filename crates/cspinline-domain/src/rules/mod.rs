use crate::criteria::Criteria;
use crate::error::DecisionError;
use cspinline_types::TraceEntry;

mod ie_family;
mod legacy_webkit;

#[cfg(test)]
mod tests;

/// One policy check in the decision chain.
///
/// Rules are stateless and shared across requests. `is_relevant` is a pure
/// predicate and must not mutate the criteria; `process` may only downgrade
/// `criteria.mode` and records every downgrade in `out`.
pub trait Rule: Sync {
    fn id(&self) -> &'static str;

    fn is_relevant(&self, criteria: &Criteria<'_>) -> bool;

    fn process(
        &self,
        criteria: &mut Criteria<'_>,
        out: &mut Vec<TraceEntry>,
    ) -> Result<(), DecisionError>;
}

/// Rules in evaluation order.
///
/// Ordering is a correctness contract: later rules observe the mode left by
/// earlier ones. Adding a rule means adding a module and a slot here, never
/// runtime discovery. Each rule owns its own short-circuit condition in
/// `is_relevant`; no rule is skipped on another rule's behalf.
pub fn ordered() -> [&'static dyn Rule; 2] {
    [&ie_family::IeFamily, &legacy_webkit::LegacyWebkit]
}
