//! Use case orchestration for cspinline.
//!
//! This crate provides the application layer: use cases that coordinate the
//! domain, client, settings, and render layers. It is intentionally thin and
//! delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod decide;
mod explain;
mod nonce;
mod render;
mod report;

pub use decide::{DecideInput, DecideOutput, run_decide};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use nonce::generate_nonce;
pub use render::{render_inline_script, render_script_src, render_trace_summary};
pub use report::{parse_report_json, serialize_report, to_renderable};
