//! Client address resolution: literal validation, routability, proxy-chain
//! parsing and the leftmost-public selection policy.

mod chain;
mod classify;
mod headers;
mod literal;
mod resolve;

pub use chain::{Hop, ProxyChain, normalize_hop, parse_chain};
pub use classify::{Routability, is_public_ipv4, is_public_ipv6};
pub use headers::{forwarded_chain, header_str};
pub use literal::{AddressLiteral, Family, family_of, is_ipv4, is_ipv6};
pub use resolve::{ChainResult, ConnectionAddress, Guess, Resolution, resolve};
