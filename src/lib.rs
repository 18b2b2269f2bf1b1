//! IPv4 subnet calculator.
//!
//! Derives the network address, broadcast address, usable host range and
//! usable host count from a dotted-decimal address and a prefix length.
//!
//! ```
//! let info = ipv4_subnet_calc::describe_subnet("192.168.1.100", 24).unwrap();
//! assert_eq!(info.network, "192.168.1.0");
//! assert_eq!(info.usable_hosts, 254);
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod engine;
mod error;
pub mod logging;
pub mod models;
pub mod output;

pub use engine::SubnetEngine;
pub use error::{Result, SubnetError};
pub use models::{AddressBits, Ipv4Cidr, PrefixLength, SubnetInfo};

/// Validate the inputs and collect every derived property.
pub fn describe_subnet(address: &str, prefix: i64) -> Result<SubnetInfo> {
    SubnetEngine::new(address, prefix)?.describe()
}
