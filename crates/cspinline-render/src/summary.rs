use crate::{RenderableDecision, RenderableMode};

pub fn render_summary(decision: &RenderableDecision) -> String {
    let mut out = String::new();

    out.push_str(&format!("mode: {}\n", mode_label(decision.mode)));
    if let Some(family) = &decision.client_family {
        out.push_str(&format!("client: {}\n", family));
    }

    if decision.trace.is_empty() {
        out.push_str("no downgrades applied\n");
        return out;
    }

    out.push_str("downgrades:\n");
    for entry in &decision.trace {
        out.push_str(&format!(
            "- [{}/{}] {} -> {}\n",
            entry.rule_id,
            entry.code,
            entry.message,
            mode_label(entry.mode_after)
        ));
    }

    out
}

fn mode_label(mode: RenderableMode) -> &'static str {
    match mode {
        RenderableMode::Nonce => "nonce",
        RenderableMode::UnsafeInline => "unsafe_inline",
        RenderableMode::Unsupported => "unsupported",
    }
}
