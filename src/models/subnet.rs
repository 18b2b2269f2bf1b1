//! Derived subnet properties record.

use serde::{Deserialize, Serialize};

/// All derived properties of one address/prefix pair, rendered for presentation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    /// The address as given, in dotted-decimal.
    pub address: String,
    /// Prefix length in slash form, e.g. "/24".
    pub prefix: String,
    /// Subnet mask in dotted-decimal, e.g. "255.255.255.0".
    pub mask: String,
    /// Network address (all host bits cleared).
    pub network: String,
    /// First usable host (network + 1).
    pub first_host: String,
    /// Last usable host (broadcast - 1).
    pub last_host: String,
    /// Broadcast address (all host bits set).
    pub broadcast: String,
    /// Usable host count, network and broadcast excluded.
    pub usable_hosts: u64,
}
