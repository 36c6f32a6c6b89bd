use super::Rule;
use crate::criteria::Criteria;
use crate::error::DecisionError;
use crate::model::ClientFamily;
use cspinline_types::{InlineScriptMode, TraceEntry, ids};
use serde_json::json;

/// First WebKit release that validates CSP2 nonce source expressions.
const NONCE_SUPPORT_FLOOR: u32 = 10;

/// Pre-Safari-10 WebKit enforces CSP source lists but ignores nonces, so a
/// nonce-only policy would block every inline script. Those clients fall
/// back to `'unsafe-inline'`.
pub struct LegacyWebkit;

impl Rule for LegacyWebkit {
    fn id(&self) -> &'static str {
        ids::RULE_CLIENT_LEGACY_WEBKIT
    }

    // Only meaningful while the chain still plans to emit nonces. Anything
    // weaker than nonce mode already covers these clients.
    fn is_relevant(&self, criteria: &Criteria<'_>) -> bool {
        criteria.mode() == InlineScriptMode::Nonce
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

        if client.family != ClientFamily::Webkit {
            return Ok(());
        }
        // A WebKit client that hides its version is treated as current;
        // unknown data makes the rule not match rather than fail.
        let Some(major) = client.major_version else {
            return Ok(());
        };
        if major >= NONCE_SUPPORT_FLOOR {
            return Ok(());
        }

        let mode_before = criteria.mode();
        criteria.set_mode(InlineScriptMode::UnsafeInline);

        out.push(TraceEntry {
            rule_id: ids::RULE_CLIENT_LEGACY_WEBKIT.to_string(),
            code: ids::CODE_NO_NONCE_SUPPORT.to_string(),
            message: format!(
                "WebKit {major} predates nonce support (first supported: {NONCE_SUPPORT_FLOOR})"
            ),
            mode_before,
            mode_after: InlineScriptMode::UnsafeInline,
            data: json!({
                "family": client.family.as_str(),
                "major_version": major,
                "nonce_support_floor": NONCE_SUPPORT_FLOOR,
            }),
        });

        Ok(())
    }
}
