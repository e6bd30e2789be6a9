use chrono::{DateTime, SecondsFormat, Utc};
use ipcheck_common::ip::{AddressLiteral, Family, Resolution};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Per-request data that does not come from address resolution.
pub(crate) struct RequestMeta {
    pub host: String,
    pub time: DateTime<Utc>,
    pub forwarded_for: String,
    pub user_agent: String,
    pub info: Map<String, Value>,
}

#[derive(Serialize)]
pub(crate) struct IpReport<'a> {
    ok: bool,
    host: String,
    time: String,
    ip: &'a str,
    family: Family,
    connection: ConnectionReport<'a>,
    guess: GuessReport<'a>,
    xff: XffReport<'a>,
    info: Map<String, Value>,
    headers: HeadersReport,
}

#[derive(Serialize)]
struct ConnectionReport<'a> {
    ip: &'a str,
    family: Family,
    port: Option<u16>,
}

#[derive(Serialize)]
struct GuessReport<'a> {
    #[serde(serialize_with = "literal_or_empty")]
    client_ip: Option<&'a AddressLiteral>,
    #[serde(serialize_with = "literal_or_empty")]
    ipv4: Option<&'a AddressLiteral>,
    #[serde(serialize_with = "literal_or_empty")]
    ipv6: Option<&'a AddressLiteral>,
}

#[derive(Serialize)]
struct XffReport<'a> {
    raw: String,
    chain_raw: Vec<&'a str>,
    chain: Vec<&'a str>,
}

#[derive(Serialize)]
struct HeadersReport {
    #[serde(rename = "x-forwarded-for")]
    x_forwarded_for: String,
    #[serde(rename = "user-agent")]
    user_agent: String,
}

fn literal_or_empty<S: Serializer>(
    literal: &Option<&AddressLiteral>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(literal.map(AddressLiteral::as_str).unwrap_or_default())
}

/// Connection fields and chain guesses are reported side by side; the
/// top-level `ip`/`family` always mirror the connection.
pub(crate) fn assemble(resolution: &Resolution, meta: RequestMeta) -> IpReport<'_> {
    let connection = &resolution.connection;
    let chain = &resolution.chain.chain;
    let guess = &resolution.chain.guess;

    IpReport {
        ok: true,
        host: meta.host,
        time: meta.time.to_rfc3339_opts(SecondsFormat::Millis, true),
        ip: &connection.ip,
        family: connection.family,
        connection: ConnectionReport {
            ip: &connection.ip,
            family: connection.family,
            port: connection.port,
        },
        guess: GuessReport {
            client_ip: guess.client_ip.as_ref(),
            ipv4: guess.ipv4.as_ref(),
            ipv6: guess.ipv6.as_ref(),
        },
        xff: XffReport {
            raw: meta.forwarded_for.clone(),
            chain_raw: chain.raw(),
            chain: chain.normalized(),
        },
        info: meta.info,
        headers: HeadersReport {
            x_forwarded_for: meta.forwarded_for,
            user_agent: meta.user_agent,
        },
    }
}
