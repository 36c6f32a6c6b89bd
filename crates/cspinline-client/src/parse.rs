use cspinline_domain::model::{Client, ClientContext, ClientFamily};

/// Derive a typed client descriptor from a user-agent string.
///
/// Family checks run in a fixed order because the tokens overlap: IE first
/// (MSIE / Trident), then Firefox, then the Chromium family (whose agents
/// also contain `Safari`), then genuine WebKit. Anything else is `Other`.
/// Detection never fails; unrecognized agents are a configuration concern
/// handled by the rules, not an error.
pub fn parse_user_agent(user_agent: &str) -> Client {
    let (family, major_version) = detect(user_agent);
    Client {
        family,
        major_version,
        user_agent: user_agent.to_string(),
    }
}

/// Build the request context for one decision.
///
/// An empty or whitespace-only user agent yields a context without a client,
/// which the engine surfaces as a malformed-context error instead of
/// silently picking a mode.
pub fn client_context_from_user_agent(user_agent: &str) -> ClientContext {
    if user_agent.trim().is_empty() {
        return ClientContext::default();
    }
    ClientContext::with_client(parse_user_agent(user_agent))
}

fn detect(ua: &str) -> (ClientFamily, Option<u32>) {
    if let Some(version) = detect_ie(ua) {
        return (ClientFamily::Ie, version);
    }
    if ua.contains("Firefox/") && !ua.contains("Seamonkey/") {
        return (ClientFamily::Firefox, token_major(ua, "Firefox/"));
    }
    if let Some(version) = detect_chromium(ua) {
        return (ClientFamily::Chromium, version);
    }
    if ua.contains("AppleWebKit/") && ua.contains("Safari/") {
        // Safari reports its marketing version in the `Version/` token.
        return (ClientFamily::Webkit, token_major(ua, "Version/"));
    }
    (ClientFamily::Other, None)
}

fn detect_ie(ua: &str) -> Option<Option<u32>> {
    // IE <= 10 announces itself as MSIE; IE 11 dropped that token and is
    // recognized by its Trident engine plus an rv: revision.
    if ua.contains("MSIE ") {
        return Some(token_major(ua, "MSIE "));
    }
    if ua.contains("Trident/") {
        return Some(token_major(ua, "rv:"));
    }
    None
}

fn detect_chromium(ua: &str) -> Option<Option<u32>> {
    // Chromium derivatives carry their own token ahead of Chrome's.
    for token in ["Edg/", "OPR/", "Chromium/", "Chrome/"] {
        if ua.contains(token) {
            return Some(token_major(ua, token));
        }
    }
    None
}

/// Parse the major version immediately following `prefix`, e.g. `"Firefox/"`
/// in `"... Firefox/131.0"` yields 131.
fn token_major(ua: &str, prefix: &str) -> Option<u32> {
    let rest = &ua[ua.find(prefix)? + prefix.len()..];
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
