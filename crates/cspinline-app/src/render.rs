//! Render use cases: directives, script elements, and summaries from
//! in-memory decisions.

use cspinline_render::RenderableDecision;

pub fn render_script_src(decision: &RenderableDecision, nonce: &str) -> Option<String> {
    cspinline_render::script_src_source(decision.mode, nonce)
}

pub fn render_inline_script(
    decision: &RenderableDecision,
    nonce: &str,
    body: &str,
) -> Option<String> {
    cspinline_render::inline_script_element(decision.mode, nonce, body)
}

pub fn render_trace_summary(decision: &RenderableDecision) -> String {
    cspinline_render::render_summary(decision)
}
