use crate::env::Env;
use crate::error::ServerError;
use axum::http::HeaderName;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) env: Arc<Env>,
    /// Header carrying the proxy chain.
    pub(crate) forwarded_header: HeaderName,
    /// Headers copied verbatim into the report's `info` object.
    pub(crate) enrichment_headers: Arc<Vec<HeaderName>>,
}

impl AppState {
    pub(crate) fn new(env: Env) -> Result<Self, ServerError> {
        let forwarded_header = parse_header_name("FORWARDED_HEADER", &env.forwarded_header)?;

        let enrichment_headers = env
            .enrichment_headers
            .iter()
            .map(|name| parse_header_name("ENRICHMENT_HEADERS", name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            env: Arc::new(env),
            forwarded_header,
            enrichment_headers: Arc::new(enrichment_headers),
        })
    }
}

fn parse_header_name(setting: &'static str, name: &str) -> Result<HeaderName, ServerError> {
    HeaderName::from_bytes(name.trim().as_bytes()).map_err(|_| ServerError::InvalidHeaderName {
        setting,
        name: name.to_string(),
    })
}
