use axum_client_ip::ClientIpSource;
use envconfig::Envconfig;
use ipcheck_common::env::Mode;
use std::convert::Infallible;
use std::str::FromStr;

/// Comma separated setting; blank entries are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CommaList(pub Vec<String>);

impl FromStr for CommaList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let items = s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
        Ok(CommaList(items))
    }
}

impl CommaList {
    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[derive(Envconfig)]
pub(crate) struct Env {
    #[cfg_attr(
        debug_assertions,
        envconfig(from = "APP_MODE", default = "development")
    )]
    #[cfg_attr(
        not(debug_assertions),
        envconfig(from = "APP_MODE", default = "production")
    )]
    pub mode: Mode,

    #[envconfig(from = "IP_SOURCE", default = "ConnectInfo")]
    pub(crate) ip_source: ClientIpSource,

    #[envconfig(from = "HOST", default = "0.0.0.0")]
    pub host: String,

    #[envconfig(from = "PORT", default = "8080")]
    pub port: u16,

    #[envconfig(
        from = "ALLOWED_ORIGINS",
        default = "https://test-ipv6.jsw.ac.cn,http://test-ipv6.jsw.ac.cn"
    )]
    pub allowed_origins: CommaList,

    #[envconfig(from = "FORWARDED_HEADER", default = "x-forwarded-for")]
    pub forwarded_header: String,

    #[envconfig(from = "ENRICHMENT_HEADERS", default = "")]
    pub enrichment_headers: CommaList,
}

pub fn init() -> anyhow::Result<Env> {
    let config = Env::init_from_env()?;
    Ok(config)
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
