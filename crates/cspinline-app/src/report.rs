use anyhow::Context;
use cspinline_render::{RenderableDecision, RenderableMode, RenderableTraceEntry};
use cspinline_types::{DecisionReport, InlineScriptMode, SCHEMA_DECISION_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<DecisionReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_DECISION_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse decision report")
}

pub fn serialize_report(report: &DecisionReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &DecisionReport) -> RenderableDecision {
    let client_family = match report.data.client_family.as_str() {
        "" | "unknown" => None,
        family => Some(family.to_string()),
    };

    RenderableDecision {
        mode: renderable_mode(report.mode),
        client_family,
        trace: report
            .trace
            .iter()
            .map(|entry| RenderableTraceEntry {
                rule_id: entry.rule_id.clone(),
                code: entry.code.clone(),
                message: entry.message.clone(),
                mode_after: renderable_mode(entry.mode_after),
            })
            .collect(),
    }
}

fn renderable_mode(mode: InlineScriptMode) -> RenderableMode {
    match mode {
        InlineScriptMode::Nonce => RenderableMode::Nonce,
        InlineScriptMode::UnsafeInline => RenderableMode::UnsafeInline,
        InlineScriptMode::Unsupported => RenderableMode::Unsupported,
    }
}
