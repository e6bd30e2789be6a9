use axum::http::{HeaderMap, HeaderName};
use serde_json::{Map, Value};

/// Copies the configured headers into an opaque `info` object. Values are
/// passed through untouched; missing or non-UTF-8 headers are left out.
pub(crate) fn collect_info(headers: &HeaderMap, names: &[HeaderName]) -> Map<String, Value> {
    names
        .iter()
        .filter_map(|name| {
            let value = headers.get(name)?.to_str().ok()?;
            Some((name.as_str().to_string(), Value::String(value.to_string())))
        })
        .collect()
}
