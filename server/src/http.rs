use crate::enrich::collect_info;
use crate::env::{self, Env};
use crate::error::ServerError;
use crate::report::{RequestMeta, assemble};
use crate::state::AppState;
use axum::extract::{ConnectInfo, FromRequestParts, State};
use axum::http::header::{
    CACHE_CONTROL, CONTENT_TYPE, HOST, REFERRER_POLICY, USER_AGENT, X_CONTENT_TYPE_OPTIONS,
};
use axum::http::uri::Authority;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use axum_client_ip::ClientIp;
use ipcheck_common::ip::{ConnectionAddress, Resolution, forwarded_chain, header_str};
use log::debug;
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

static PERMISSIONS_POLICY: HeaderName = HeaderName::from_static("permissions-policy");

type ClientIpResult = Result<ClientIp, <ClientIp as FromRequestParts<AppState>>::Rejection>;

pub fn build_cors(env: &Env) -> Result<CorsLayer, ServerError> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    if !env.mode.is_production() {
        return Ok(cors.allow_origin(Any));
    }

    let origins = env
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ServerError::from(format!("invalid origin in ALLOWED_ORIGINS: {origin}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cors.allow_origin(AllowOrigin::list(origins)))
}

pub(crate) fn router(state: AppState) -> Result<Router, ServerError> {
    let cors = build_cors(&state.env)?;
    let ip_source = state.env.ip_source.clone();

    let app = Router::new()
        .route(
            "/api/ip",
            get(get_ip).head(not_found).fallback(not_found).layer(cors),
        )
        .route("/version", get(get_version).fallback(not_found))
        .fallback(not_found)
        .layer(ip_source.into_extension())
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store, max-age=0"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            PERMISSIONS_POLICY.clone(),
            HeaderValue::from_static("geolocation=()"),
        ))
        .with_state(state);

    Ok(app)
}

fn pretty_json<T: Serialize>(value: &T) -> Result<Response, ServerError> {
    let body = serde_json::to_string_pretty(value)?;
    Ok((
        [(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        )],
        body,
    )
        .into_response())
}

fn request_host(headers: &HeaderMap, uri: &Uri) -> String {
    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Authority>().ok())
        .or_else(|| uri.authority().cloned())
        .map(|authority| authority.host().to_string())
        .unwrap_or_default()
}

/// The port is only known when the reported address is the TCP peer itself.
fn connection_address(peer: SocketAddr, client_ip: ClientIpResult) -> ConnectionAddress {
    let peer_ip = peer.ip().to_canonical();

    match client_ip {
        Ok(ClientIp(ip)) => {
            let ip = ip.to_canonical();
            let port = (ip == peer_ip).then_some(peer.port());
            ConnectionAddress::new(ip.to_string(), port)
        }
        Err(_) => {
            debug!("configured ip source yielded no address for peer {}", peer);
            ConnectionAddress::default()
        }
    }
}

pub async fn get_ip(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    client_ip: ClientIpResult,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let connection = connection_address(peer, client_ip);
    let forwarded_for = forwarded_chain(&headers, &state.forwarded_header);
    let resolution = Resolution::new(connection, &forwarded_for);

    debug!(
        "resolved connection {} ({}) guess {:?} over {} hops",
        resolution.connection.ip,
        resolution.connection.family,
        resolution
            .chain
            .guess
            .client_ip
            .as_ref()
            .map(|ip| ip.as_str()),
        resolution.chain.chain.len(),
    );

    let meta = RequestMeta {
        host: request_host(&headers, &uri),
        time: chrono::Utc::now(),
        forwarded_for,
        user_agent: header_str(&headers, USER_AGENT),
        info: collect_info(&headers, &state.enrichment_headers),
    };

    pretty_json(&assemble(&resolution, meta))
}

pub async fn get_version() -> impl IntoResponse {
    Json(json!({
        "version": env::version(),
    }))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
