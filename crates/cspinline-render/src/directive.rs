use crate::RenderableMode;

/// Build the `script-src` source expression for the chosen mode.
///
/// `Nonce` yields a `'nonce-<value>'` expression, `UnsafeInline` yields
/// `'unsafe-inline'`, and `Unsupported` yields no inline allowance at all:
/// the response's policy must not whitelist inline script for that client.
pub fn script_src_source(mode: RenderableMode, nonce: &str) -> Option<String> {
    match mode {
        RenderableMode::Nonce => Some(format!("'nonce-{nonce}'")),
        RenderableMode::UnsafeInline => Some("'unsafe-inline'".to_string()),
        RenderableMode::Unsupported => None,
    }
}
