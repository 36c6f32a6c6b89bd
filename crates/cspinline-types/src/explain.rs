//! Explain registry for rules and trace codes.
//!
//! Maps rule IDs and codes to human-readable explanations with guidance for
//! the page-rendering layer.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// What the page-rendering layer should do when this rule fires.
    pub guidance: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try rule_id first, then code
    match identifier {
        // Rule IDs
        ids::RULE_CLIENT_IE => Some(explain_ie_family()),
        ids::RULE_CLIENT_LEGACY_WEBKIT => Some(explain_legacy_webkit()),

        // Codes
        ids::CODE_IE_DETECTED => Some(explain_ie_detected()),
        ids::CODE_NO_NONCE_SUPPORT => Some(explain_no_nonce_support()),

        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[ids::RULE_CLIENT_IE, ids::RULE_CLIENT_LEGACY_WEBKIT]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_IE_DETECTED, ids::CODE_NO_NONCE_SUPPORT]
}

// --- Rule-level explanations ---

fn explain_ie_family() -> Explanation {
    Explanation {
        title: "IE-Family Clients",
        description: "\
Forces the inline-script mode to `unsupported` when the requesting client
belongs to the Internet Explorer family (MSIE or Trident engines).

IE never implemented Content-Security-Policy script nonces, and its partial
CSP support (X-Content-Security-Policy) mishandles inline allowances. Emitting
nonce-tagged or unsafe-inline script for these clients produces pages that
either break or silently lose the CSP protection they appear to carry.",
        guidance: "\
Serve all executable script to IE-family clients from external resources.
The page layer must not emit <script> elements with inline bodies when the
decided mode is `unsupported`.",
    }
}

fn explain_legacy_webkit() -> Explanation {
    Explanation {
        title: "Legacy WebKit Without Nonce Support",
        description: "\
Downgrades the inline-script mode from `nonce` to `unsafe_inline` when the
requesting client is a WebKit browser older than the CSP2 nonce baseline
(Safari 10).

These browsers enforce CSP source lists but ignore nonce source expressions,
so a nonce-only policy would block every inline script on the page.",
        guidance: "\
Emit inline scripts without a nonce attribute and include 'unsafe-inline' in
the script-src directive for this response. Prefer externalizing scripts
where the page layer supports it.",
    }
}

// --- Code-level explanations ---

fn explain_ie_detected() -> Explanation {
    Explanation {
        title: "IE Client Detected",
        description: "\
The client's user agent identified it as Internet Explorer, so the decision
chain settled on the `unsupported` fallback.",
        guidance: "\
No inline script may be emitted for this response; externalize all script.",
    }
}

fn explain_no_nonce_support() -> Explanation {
    Explanation {
        title: "Client Lacks Nonce Support",
        description: "\
The client enforces CSP but predates nonce source expressions, so the chain
fell back from `nonce` to `unsafe_inline`.",
        guidance: "\
Emit 'unsafe-inline' in script-src for this response and drop the nonce
attribute from inline scripts.",
    }
}
