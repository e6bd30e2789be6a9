use super::chain::{ProxyChain, parse_chain};
use super::literal::{AddressLiteral, Family, family_of};

/// Best-effort client addresses taken from a proxy chain.
///
/// `None` means no public hop was found, which is a normal outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Guess {
    /// First public hop of either family.
    pub client_ip: Option<AddressLiteral>,
    pub ipv4: Option<AddressLiteral>,
    pub ipv6: Option<AddressLiteral>,
}

impl Guess {
    fn is_complete(&self) -> bool {
        self.client_ip.is_some() && self.ipv4.is_some() && self.ipv6.is_some()
    }
}

/// Single left-to-right scan; a slot is never overwritten once filled.
pub fn resolve(chain: &ProxyChain) -> Guess {
    let mut guess = Guess::default();

    for literal in chain.hops().iter().filter_map(|hop| hop.literal()) {
        if !literal.is_public() {
            continue;
        }

        if guess.client_ip.is_none() {
            guess.client_ip = Some(literal.clone());
        }

        let slot = match literal.family() {
            Family::Ipv4 => &mut guess.ipv4,
            Family::Ipv6 => &mut guess.ipv6,
            Family::Unknown => continue,
        };
        if slot.is_none() {
            *slot = Some(literal.clone());
        }

        if guess.is_complete() {
            break;
        }
    }

    guess
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainResult {
    pub chain: ProxyChain,
    pub guess: Guess,
}

impl ChainResult {
    pub fn from_header(header: &str) -> Self {
        let chain = parse_chain(header);
        let guess = resolve(&chain);
        Self { chain, guess }
    }
}

/// The address the transport layer observed, independent of any header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionAddress {
    pub ip: String,
    pub family: Family,
    pub port: Option<u16>,
}

impl ConnectionAddress {
    pub fn new(ip: impl Into<String>, port: Option<u16>) -> Self {
        let ip = ip.into();
        let family = family_of(&ip);
        Self { ip, family, port }
    }
}

/// Connection address and chain guesses side by side. Neither side is
/// derived from the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub connection: ConnectionAddress,
    pub chain: ChainResult,
}

impl Resolution {
    pub fn new(connection: ConnectionAddress, header: &str) -> Self {
        Self {
            connection,
            chain: ChainResult::from_header(header),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess_of(header: &str) -> Guess {
        resolve(&parse_chain(header))
    }

    fn text(slot: &Option<AddressLiteral>) -> Option<&str> {
        slot.as_ref().map(AddressLiteral::as_str)
    }

    #[test]
    fn leftmost_public_ipv4_wins() {
        let guess = guess_of("10.0.0.1, 203.0.113.9, 198.51.100.2");
        assert_eq!(text(&guess.ipv4), Some("203.0.113.9"));
        assert_eq!(text(&guess.client_ip), Some("203.0.113.9"));
        assert_eq!(guess.ipv6, None);
    }

    #[test]
    fn mixed_family_slots_fill_independently() {
        let guess = guess_of("2001:db8::1, 203.0.113.9");
        assert_eq!(text(&guess.client_ip), Some("2001:db8::1"));
        assert_eq!(text(&guess.ipv4), Some("203.0.113.9"));
        assert_eq!(text(&guess.ipv6), Some("2001:db8::1"));
    }

    #[test]
    fn private_and_empty_chains_guess_nothing() {
        assert_eq!(guess_of("10.0.0.1, 192.168.1.1"), Guess::default());
        assert_eq!(guess_of(""), Guess::default());
        assert_eq!(guess_of("fe80::1, ::1, unknown"), Guess::default());
    }

    #[test]
    fn decorated_hops_resolve_to_bare_addresses() {
        let guess = guess_of("[2001:4860:4860::8888]:443, 8.8.8.8:53");
        assert_eq!(text(&guess.ipv6), Some("2001:4860:4860::8888"));
        assert_eq!(text(&guess.ipv4), Some("8.8.8.8"));
    }

    #[test]
    fn later_hops_never_displace_earlier_ones() {
        let guess = guess_of("192.168.0.2, 198.51.100.7, 2606:4700::1, 1.1.1.1, 2001:4860::1");
        assert_eq!(text(&guess.client_ip), Some("198.51.100.7"));
        assert_eq!(text(&guess.ipv4), Some("198.51.100.7"));
        assert_eq!(text(&guess.ipv6), Some("2606:4700::1"));
    }

    #[test]
    fn resolving_twice_is_identical() {
        let chain = parse_chain("10.0.0.1, 2001:db8::1, 203.0.113.9");
        assert_eq!(resolve(&chain), resolve(&chain));
    }

    #[test]
    fn connection_is_classified_without_the_chain() {
        let resolution = Resolution::new(
            ConnectionAddress::new("192.0.2.10", Some(51234)),
            "2001:db8::1",
        );
        assert_eq!(resolution.connection.ip, "192.0.2.10");
        assert_eq!(resolution.connection.family, Family::Ipv4);
        assert_eq!(resolution.connection.port, Some(51234));
        assert_eq!(text(&resolution.chain.guess.client_ip), Some("2001:db8::1"));
    }

    #[test]
    fn empty_connection_is_unknown() {
        let connection = ConnectionAddress::new("", None);
        assert_eq!(connection.family, Family::Unknown);
        assert_eq!(ConnectionAddress::default(), connection);
    }
}
