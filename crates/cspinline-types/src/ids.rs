//! Stable identifiers for rules and trace codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules
pub const RULE_CLIENT_IE: &str = "client.ie_family";
pub const RULE_CLIENT_LEGACY_WEBKIT: &str = "client.legacy_webkit";

// Codes: client.ie_family
pub const CODE_IE_DETECTED: &str = "ie_detected";

// Codes: client.legacy_webkit
pub const CODE_NO_NONCE_SUPPORT: &str = "no_nonce_support";
