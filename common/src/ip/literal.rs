use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Longest string still considered as an IPv6 candidate.
const MAX_IPV6_LEN: usize = 80;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Ipv4,
    Ipv6,
    #[default]
    Unknown,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Ipv4 => "ipv4",
            Family::Ipv6 => "ipv6",
            Family::Unknown => "unknown",
        }
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A string that passed the syntax check of its family.
///
/// The family is fixed at construction and is never [`Family::Unknown`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AddressLiteral {
    value: String,
    family: Family,
}

impl AddressLiteral {
    pub fn parse(s: &str) -> Option<Self> {
        match family_of(s) {
            Family::Unknown => None,
            family => Some(Self {
                value: s.to_string(),
                family,
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn family(&self) -> Family {
        self.family
    }
}

impl Display for AddressLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub fn family_of(s: &str) -> Family {
    if is_ipv4(s) {
        Family::Ipv4
    } else if is_ipv6(s) {
        Family::Ipv6
    } else {
        Family::Unknown
    }
}

/// Dotted quad, four decimal segments in 0..=255. Leading zeros are accepted.
pub fn is_ipv4(s: &str) -> bool {
    let segments: Vec<&str> = s.split('.').collect();
    if segments.len() != 4 {
        return false;
    }

    segments.iter().all(|seg| {
        !seg.is_empty()
            && seg.bytes().all(|b| b.is_ascii_digit())
            && seg.parse::<u32>().map(|n| n <= 255).unwrap_or(false)
    })
}

/// Plausibility screen for IPv6 literals, not a full parser.
///
/// Only the presence of `::` is considered, not how many times it occurs.
pub fn is_ipv6(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_IPV6_LEN || !s.contains(':') {
        return false;
    }

    if !s.bytes().all(|b| b == b':' || b.is_ascii_hexdigit()) {
        return false;
    }

    let compressed = s.contains("::");
    let segments: Vec<&str> = s.split(':').collect();

    if !compressed && segments.len() < 3 {
        return false;
    }

    let max_segments = if compressed { 9 } else { 8 };
    if segments.len() > max_segments {
        return false;
    }

    segments.iter().all(|seg| seg.len() <= 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_accepts_dotted_quads() {
        assert!(is_ipv4("0.0.0.0"));
        assert!(is_ipv4("203.0.113.5"));
        assert!(is_ipv4("255.255.255.255"));
    }

    #[test]
    fn ipv4_accepts_leading_zeros() {
        assert!(is_ipv4("010.001.000.001"));
        assert!(is_ipv4("0000000000001.2.3.4"));
    }

    #[test]
    fn ipv4_rejects_malformed() {
        assert!(!is_ipv4(""));
        assert!(!is_ipv4("1.2.3"));
        assert!(!is_ipv4("1.2.3.4.5"));
        assert!(!is_ipv4("1.2..4"));
        assert!(!is_ipv4("1.2.3.256"));
        assert!(!is_ipv4("1.2.3.-4"));
        assert!(!is_ipv4("1.2.3.+4"));
        assert!(!is_ipv4(" 1.2.3.4"));
        assert!(!is_ipv4("1.2.3.4:80"));
        assert!(!is_ipv4("a.b.c.d"));
        assert!(!is_ipv4("99999999999999999999.1.1.1"));
    }

    #[test]
    fn ipv6_accepts_common_forms() {
        assert!(is_ipv6("::"));
        assert!(is_ipv6("::1"));
        assert!(is_ipv6("fe80::1"));
        assert!(is_ipv6("2001:4860:4860::8888"));
        assert!(is_ipv6("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
        assert!(is_ipv6("2001:DB8::ABCD"));
    }

    #[test]
    fn ipv6_segment_bounds() {
        // no compression needs at least three segments
        assert!(!is_ipv6("1:2"));
        assert!(is_ipv6("1:2:3"));
        assert!(is_ipv6("1:2:3:4:5:6:7:8"));
        assert!(!is_ipv6("1:2:3:4:5:6:7:8:9"));
        assert!(is_ipv6("1:2:3:4:5:6:7::"));
        assert!(!is_ipv6("1:2:3:4:5:6:7:8::"));
        assert!(!is_ipv6("12345::1"));
    }

    #[test]
    fn ipv6_only_checks_presence_of_compression() {
        assert!(is_ipv6("1::2::3"));
    }

    #[test]
    fn ipv6_rejects_malformed() {
        assert!(!is_ipv6(""));
        assert!(!is_ipv6("abcd"));
        assert!(!is_ipv6("[::1]"));
        assert!(!is_ipv6("::ffff:1.2.3.4"));
        assert!(!is_ipv6("fe80::1%eth0"));
        assert!(!is_ipv6("g::1"));
        assert!(!is_ipv6(&"1:".repeat(41)));
    }

    #[test]
    fn family_is_resolved_once() {
        assert_eq!(family_of("203.0.113.5"), Family::Ipv4);
        assert_eq!(family_of("2001:db8::1"), Family::Ipv6);
        assert_eq!(family_of(""), Family::Unknown);
        assert_eq!(family_of("unknown"), Family::Unknown);

        let literal = AddressLiteral::parse("2001:db8::1").unwrap();
        assert_eq!(literal.family(), Family::Ipv6);
        assert_eq!(literal.as_str(), "2001:db8::1");
        assert!(AddressLiteral::parse("example.com").is_none());
    }

    #[test]
    fn family_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Family::Ipv4).unwrap(), "\"ipv4\"");
        assert_eq!(serde_json::to_string(&Family::Ipv6).unwrap(), "\"ipv6\"");
        assert_eq!(serde_json::to_string(&Family::Unknown).unwrap(), "\"unknown\"");
        assert_eq!(Family::Ipv6.to_string(), "ipv6");
    }
}
