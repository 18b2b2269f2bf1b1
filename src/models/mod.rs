//! Domain models for subnet calculations.
//!
//! This module contains the core data structures:
//! - [`AddressBits`] - 32-bit MSB-first view of an IPv4 address
//! - [`PrefixLength`] and [`Ipv4Cidr`] - validated prefix and CIDR notation
//! - [`SubnetInfo`] - the derived-properties record

mod bits;
mod ipv4;
mod subnet;

// Re-export public types
pub use bits::{AddressBits, ADDRESS_BITS, OCTET_BITS};
pub use ipv4::{num_hosts, Ipv4Cidr, PrefixLength, MAX_LENGTH};
pub use subnet::SubnetInfo;
