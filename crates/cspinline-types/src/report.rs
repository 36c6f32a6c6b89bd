use crate::InlineScriptMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for decision reports.
pub const SCHEMA_DECISION_V1: &str = "cspinline.decision.v1";

/// One applied downgrade recorded by a rule.
///
/// Entries appear in execution order; ordering is part of the contract
/// because later rules see the mode left by earlier ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TraceEntry {
    pub rule_id: String,
    pub code: String,
    pub message: String,

    pub mode_before: InlineScriptMode,
    pub mode_after: InlineScriptMode,

    /// Rule-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Cspinline-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct DecisionData {
    pub profile: String,

    /// Detected browser family, or "unknown" when no client was present.
    pub client_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_version: Option<u32>,

    /// Rules whose `process` step ran.
    pub rules_evaluated: u32,
    /// Rules that actually downgraded the mode.
    pub rules_applied: u32,
}

/// A generic decision envelope.
///
/// Keeping this generic allows cspinline to embed tool-specific data while
/// still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = DecisionData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// Final mode after the full rule chain ran.
    pub mode: InlineScriptMode,
    pub trace: Vec<TraceEntry>,
    pub data: TData,
}

pub type DecisionReport = ReportEnvelope<DecisionData>;
