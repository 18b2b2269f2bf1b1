//! Subnet property derivation.
//!
//! A [`SubnetEngine`] holds an address and a prefix length and computes every
//! derived property on demand. The mask is rebuilt from the prefix on each
//! call and nothing else is cached.

use crate::codec;
use crate::error::{Result, SubnetError};
use crate::models::{num_hosts, AddressBits, Ipv4Cidr, PrefixLength, SubnetInfo};
use std::net::Ipv4Addr;

/// An address paired with a prefix length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetEngine {
    address: AddressBits,
    prefix: PrefixLength,
}

impl SubnetEngine {
    /// Validate a dotted-decimal address and a raw prefix length.
    pub fn new(address: &str, prefix: i64) -> Result<SubnetEngine> {
        let address = codec::address_to_bits(address)?;
        let prefix = PrefixLength::new(prefix)?;
        log::debug!("SubnetEngine::new({}{})", Ipv4Addr::from(address), prefix);
        Ok(SubnetEngine { address, prefix })
    }

    /// Build from a CIDR string such as "192.168.1.100/24".
    pub fn from_cidr(addr_cidr: &str) -> Result<SubnetEngine> {
        Ok(SubnetEngine::from(Ipv4Cidr::new(addr_cidr)?))
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address.into()
    }

    pub fn prefix(&self) -> PrefixLength {
        self.prefix
    }

    /// Mask with the first `prefix` bits set.
    pub fn build_mask(prefix: PrefixLength) -> AddressBits {
        AddressBits::new(prefix.mask())
    }

    pub fn mask(&self) -> AddressBits {
        Self::build_mask(self.prefix)
    }

    /// Inverse of the mask: host bits set, network bits clear.
    pub fn wildcard_mask(&self) -> AddressBits {
        !self.mask()
    }

    /// Address with all host bits cleared.
    pub fn network_address(&self) -> Ipv4Addr {
        (self.address & self.mask()).into()
    }

    /// Address with all host bits set.
    pub fn broadcast_address(&self) -> Ipv4Addr {
        (self.address | self.wildcard_mask()).into()
    }

    /// Network address plus one.
    ///
    /// Fails with [`SubnetError::DegenerateHostRange`] when the result would not
    /// lie strictly below the broadcast address (/31 and /32).
    pub fn first_host(&self) -> Result<Ipv4Addr> {
        let network = u32::from(self.network_address());
        let broadcast = u32::from(self.broadcast_address());
        network
            .checked_add(1)
            .filter(|host| *host < broadcast)
            .map(Ipv4Addr::from)
            .ok_or(SubnetError::DegenerateHostRange(self.prefix.value()))
    }

    /// Broadcast address minus one.
    ///
    /// Fails with [`SubnetError::DegenerateHostRange`] when the result would not
    /// lie strictly above the network address (/31 and /32).
    pub fn last_host(&self) -> Result<Ipv4Addr> {
        let network = u32::from(self.network_address());
        let broadcast = u32::from(self.broadcast_address());
        broadcast
            .checked_sub(1)
            .filter(|host| *host > network)
            .map(Ipv4Addr::from)
            .ok_or(SubnetError::DegenerateHostRange(self.prefix.value()))
    }

    /// `2^(32 - prefix) - 2`; 0 for a /31, an error for a /32.
    pub fn usable_host_count(&self) -> Result<u64> {
        num_hosts(self.prefix.value())
    }

    /// Every address in the subnet, network and broadcast included.
    pub fn total_addresses(&self) -> u64 {
        self.prefix.num_addresses()
    }

    /// Whether `addr` shares this subnet's network bits.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        AddressBits::from(addr) & self.mask() == self.address & self.mask()
    }

    /// Collect all derived properties into one record.
    pub fn describe(&self) -> Result<SubnetInfo> {
        let info = SubnetInfo {
            address: codec::bits_to_address(&self.address.to_bits())?,
            prefix: self.prefix.to_string(),
            mask: codec::bits_to_address(&self.mask().to_bits())?,
            network: self.network_address().to_string(),
            first_host: self.first_host()?.to_string(),
            last_host: self.last_host()?.to_string(),
            broadcast: self.broadcast_address().to_string(),
            usable_hosts: self.usable_host_count()?,
        };
        log::debug!("describe({}) = {:?}", Ipv4Cidr::from(*self), info);
        Ok(info)
    }
}

impl From<Ipv4Cidr> for SubnetEngine {
    fn from(cidr: Ipv4Cidr) -> Self {
        SubnetEngine {
            address: cidr.addr.into(),
            prefix: cidr.prefix,
        }
    }
}

impl From<SubnetEngine> for Ipv4Cidr {
    fn from(engine: SubnetEngine) -> Self {
        Ipv4Cidr {
            addr: engine.address(),
            prefix: engine.prefix,
        }
    }
}
