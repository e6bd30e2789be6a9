use super::literal::{AddressLiteral, Family, is_ipv4, is_ipv6};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Routability {
    Public,
    Private,
}

impl AddressLiteral {
    pub fn routability(&self) -> Routability {
        let public = match self.family() {
            Family::Ipv4 => is_public_ipv4(self.as_str()),
            Family::Ipv6 => is_public_ipv6(self.as_str()),
            Family::Unknown => false,
        };

        if public {
            Routability::Public
        } else {
            Routability::Private
        }
    }

    pub fn is_public(&self) -> bool {
        self.routability() == Routability::Public
    }
}

/// Anything not loopback, link-local, RFC1918, CGNAT, unspecified or
/// 224.0.0.0 and above.
pub fn is_public_ipv4(s: &str) -> bool {
    if !is_ipv4(s) {
        return false;
    }

    let mut octets = s.split('.').filter_map(|seg| seg.parse::<u32>().ok());
    let (Some(a), Some(b)) = (octets.next(), octets.next()) else {
        return false;
    };

    match (a, b) {
        (0, _) | (127, _) | (10, _) => false,
        (169, 254) => false,
        (172, 16..=31) => false,
        (192, 168) => false,
        (100, 64..=127) => false,
        (a, _) if a >= 224 => false,
        _ => true,
    }
}

/// Prefix based exclusion of loopback, unspecified, link-local (fe80::/10),
/// unique local (fc00::/7) and multicast (ff00::/8).
pub fn is_public_ipv6(s: &str) -> bool {
    if !is_ipv6(s) {
        return false;
    }

    let lower = s.to_ascii_lowercase();
    if lower == "::1" || lower == "::" {
        return false;
    }

    const EXCLUDED_PREFIXES: [&str; 7] = ["fe8", "fe9", "fea", "feb", "fc", "fd", "ff"];
    !EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}
