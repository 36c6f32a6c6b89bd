use crate::RenderableMode;

/// Emit an inline `<script>` element for the chosen mode.
///
/// Returns `None` for `Unsupported`: the caller must serve the script from
/// an external resource instead. The body is guarded against early
/// terminator injection so embedded `</script` sequences cannot break out of
/// the element.
pub fn inline_script_element(mode: RenderableMode, nonce: &str, body: &str) -> Option<String> {
    let body = guard_terminator(body);
    match mode {
        RenderableMode::Nonce => {
            let nonce = escape_attribute(nonce);
            Some(format!("<script nonce=\"{nonce}\">{body}</script>"))
        }
        RenderableMode::UnsafeInline => Some(format!("<script>{body}</script>")),
        RenderableMode::Unsupported => None,
    }
}

fn guard_terminator(body: &str) -> String {
    body.replace("</script", "<\\/script")
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
