use super::Rule;
use crate::criteria::Criteria;
use crate::error::DecisionError;
use crate::model::ClientFamily;
use cspinline_types::{InlineScriptMode, TraceEntry, ids};
use serde_json::json;

/// IE never implemented CSP script nonces, and its partial CSP support
/// mishandles inline allowances. Any IE-family client gets the most
/// restrictive fallback.
pub struct IeFamily;

impl Rule for IeFamily {
    fn id(&self) -> &'static str {
        ids::RULE_CLIENT_IE
    }

    // Once the chain already sits at the most restrictive fallback there is
    // nothing left for this rule to do.
    fn is_relevant(&self, criteria: &Criteria<'_>) -> bool {
        criteria.mode() != InlineScriptMode::Unsupported
    }

    fn process(
        &self,
        criteria: &mut Criteria<'_>,
        out: &mut Vec<TraceEntry>,
    ) -> Result<(), DecisionError> {
        let client = criteria
            .context()
            .client()
            .ok_or(DecisionError::MissingClient)?;

        if client.family != ClientFamily::Ie {
            return Ok(());
        }

        let mode_before = criteria.mode();
        criteria.set_mode(InlineScriptMode::Unsupported);

        out.push(TraceEntry {
            rule_id: ids::RULE_CLIENT_IE.to_string(),
            code: ids::CODE_IE_DETECTED.to_string(),
            message: "IE-family client detected; inline scripts cannot be emitted safely"
                .to_string(),
            mode_before,
            mode_after: InlineScriptMode::Unsupported,
            data: json!({
                "family": client.family.as_str(),
                "major_version": client.major_version,
            }),
        });

        Ok(())
    }
}
