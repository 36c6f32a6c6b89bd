use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy for emitting executable script into a rendered page.
///
/// Variants are ordered from strongest to weakest. Within one decision run
/// the mode only ever moves toward `Unsupported`; rules never restore a
/// stronger mode once a downgrade happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InlineScriptMode {
    /// Inline scripts are emitted with a per-response `nonce` attribute and
    /// the CSP header allows exactly that nonce.
    Nonce,
    /// The client honors CSP but cannot validate nonces; inline scripts are
    /// allowed via `'unsafe-inline'`.
    UnsafeInline,
    /// Inline script cannot be emitted safely at all; scripts must be served
    /// from external resources.
    Unsupported,
}

impl InlineScriptMode {
    /// Downgrade rank. Higher means a more restrictive fallback.
    pub fn rank(self) -> u8 {
        match self {
            InlineScriptMode::Nonce => 0,
            InlineScriptMode::UnsafeInline => 1,
            InlineScriptMode::Unsupported => 2,
        }
    }

    /// Whether this is the most restrictive fallback.
    pub fn is_fallback(self) -> bool {
        matches!(self, InlineScriptMode::Unsupported)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InlineScriptMode::Nonce => "nonce",
            InlineScriptMode::UnsafeInline => "unsafe_inline",
            InlineScriptMode::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for InlineScriptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
