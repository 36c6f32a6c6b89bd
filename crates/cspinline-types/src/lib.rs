//! Stable DTOs and IDs used across the cspinline workspace.
//!
//! This crate is intentionally boring:
//! - the inline-script mode enum
//! - data types for the emitted decision report
//! - stable string IDs and codes for rules
//! - explain registry for rule documentation

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod mode;
pub mod report;

pub use explain::{Explanation, lookup_explanation};
pub use mode::InlineScriptMode;
pub use report::{
    DecisionData, DecisionReport, ReportEnvelope, SCHEMA_DECISION_V1, ToolMeta, TraceEntry,
};
