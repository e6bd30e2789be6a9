use super::literal::{AddressLiteral, Family};

/// One token of a proxy-chain header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hop {
    raw: String,
    normalized: String,
    literal: Option<AddressLiteral>,
}

impl Hop {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize_hop(raw);
        Self {
            raw: raw.to_string(),
            normalized: normalized.to_string(),
            literal: AddressLiteral::parse(normalized),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The validated address, if the normalized token is one.
    pub fn literal(&self) -> Option<&AddressLiteral> {
        self.literal.as_ref()
    }

    pub fn family(&self) -> Family {
        self.literal
            .as_ref()
            .map(AddressLiteral::family)
            .unwrap_or(Family::Unknown)
    }
}

/// Hops in the order they were received, leftmost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProxyChain {
    hops: Vec<Hop>,
}

impl ProxyChain {
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn raw(&self) -> Vec<&str> {
        self.hops.iter().map(Hop::raw).collect()
    }

    pub fn normalized(&self) -> Vec<&str> {
        self.hops.iter().map(Hop::normalized).collect()
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}

pub fn parse_chain(header: &str) -> ProxyChain {
    let hops = header
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Hop::new)
        .collect();

    ProxyChain { hops }
}

/// Strips `[...]` / `[...]:port` decoration and the port of `a.b.c.d:port`.
/// Anything else is returned untouched.
pub fn normalize_hop(token: &str) -> &str {
    if let Some(inner) = bracketed(token) {
        return inner;
    }

    if let Some(host) = dotted_quad_host(token) {
        return host;
    }

    token
}

fn is_port(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn bracketed(token: &str) -> Option<&str> {
    let rest = token.strip_prefix('[')?;
    let (inner, tail) = rest.split_once(']')?;

    if inner.is_empty() {
        return None;
    }

    match tail.strip_prefix(':') {
        None if tail.is_empty() => Some(inner),
        Some(port) if is_port(port) => Some(inner),
        _ => None,
    }
}

fn dotted_quad_host(token: &str) -> Option<&str> {
    let (host, port) = token.split_once(':')?;
    if !is_port(port) {
        return None;
    }

    let parts: Vec<&str> = host.split('.').collect();
    let dotted = parts.len() == 4
        && parts
            .iter()
            .all(|p| (1..=3).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_digit()));

    dotted.then_some(host)
}
