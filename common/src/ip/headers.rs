use axum::http::{HeaderMap, HeaderName};

/// All values of `name`, folded into one comma separated chain in the order
/// they were received. Values that are not valid UTF-8 are skipped.
pub fn forwarded_chain(headers: &HeaderMap, name: &HeaderName) -> String {
    headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn header_str(headers: &HeaderMap, name: impl AsRef<str>) -> String {
    headers
        .get(name.as_ref())
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
