//! Shared test utilities for the cspinline workspace.
//!
//! Real user-agent strings used across crate tests, plus JSON normalization
//! for comparing decision reports that embed timestamps and tool versions.

use serde_json::Value;

/// IE 11 on Windows 8.1 (Trident token, no MSIE token).
pub const IE11_UA: &str = "Mozilla/5.0 (Windows NT 6.3; Trident/7.0; rv:11.0) like Gecko";

/// IE 10 on Windows 7 (classic MSIE token).
pub const IE10_UA: &str = "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1; Trident/6.0)";

/// Current Firefox on Linux.
pub const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Gecko/20100101 Firefox/131.0";

/// Current Chrome on Windows.
pub const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";

/// Chromium-based Edge.
pub const EDGE_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36 Edg/130.0.0.0";

/// Safari 9 on OS X El Capitan (pre-nonce WebKit).
pub const SAFARI9_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_6) AppleWebKit/601.7.7 (KHTML, like Gecko) Version/9.1.2 Safari/601.7.7";

/// Safari 17 on macOS.
pub const SAFARI17_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";

/// A non-browser client.
pub const CURL_UA: &str = "curl/8.5.0";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced only when the root object looks like a
/// decision envelope (has `schema`, `tool`, `mode`, and `trace`), so nested
/// payloads that happen to carry a `tool` key stay untouched. Timestamp keys
/// are normalized at any depth because their placeholders cannot collide
/// with real data.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("mode")
            && obj.contains_key("trace");
        if is_envelope {
            if let Some(tool_obj) = obj.get_mut("tool").and_then(|t| t.as_object_mut()) {
                if tool_obj.contains_key("version") {
                    tool_obj.insert(
                        "version".to_string(),
                        Value::String("__VERSION__".to_string()),
                    );
                }
            }
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
