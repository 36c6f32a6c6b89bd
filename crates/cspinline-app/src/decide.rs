//! The `decide` use case: run the rule chain and produce a decision report.

use anyhow::Context;
use cspinline_domain::model::ClientContext;
use cspinline_settings::{Overrides, ResolvedConfig};
use cspinline_types::{DecisionData, DecisionReport, SCHEMA_DECISION_V1, ToolMeta};
use time::OffsetDateTime;

/// Input for the decide use case.
#[derive(Clone, Debug)]
pub struct DecideInput<'a> {
    /// Raw User-Agent header of the requesting client, if any.
    pub user_agent: Option<&'a str>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the decide use case.
#[derive(Clone, Debug)]
pub struct DecideOutput {
    /// The generated report.
    pub report: DecisionReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the decide use case: parse config, detect the client, evaluate the
/// rule chain, produce a report.
pub fn run_decide(input: DecideInput<'_>) -> anyhow::Result<DecideOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        cspinline_settings::CspinlineConfigV1::default()
    } else {
        cspinline_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = cspinline_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let context = match input.user_agent {
        Some(ua) => cspinline_client::client_context_from_user_agent(ua),
        None => ClientContext::default(),
    };

    let decision = cspinline_domain::decide(&context, &resolved.effective)
        .context("evaluate rule chain")?;

    let finished_at = OffsetDateTime::now_utc();

    let (client_family, client_version) = match context.client() {
        Some(client) => (client.family.as_str().to_string(), client.major_version),
        None => ("unknown".to_string(), None),
    };

    let data = DecisionData {
        profile: resolved.effective.profile.clone(),
        client_family,
        client_version,
        rules_evaluated: decision.rules_evaluated,
        rules_applied: decision.rules_applied(),
    };

    let report = DecisionReport {
        schema: SCHEMA_DECISION_V1.to_string(),
        tool: ToolMeta {
            name: "cspinline".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        mode: decision.mode,
        trace: decision.trace,
        data,
    };

    Ok(DecideOutput {
        report,
        resolved_config: resolved,
    })
}
