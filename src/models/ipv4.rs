//! IPv4 prefix length and CIDR notation utilities.
//!
//! Provides [`PrefixLength`] and [`Ipv4Cidr`], along with the mask helpers the
//! subnet engine is built on.

use crate::codec;
use crate::error::{Result, SubnetError};
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Splits "a.b.c.d/N" into address and length, tolerating surrounding blanks.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?P<addr>[^/\s]*)/(?P<len>[^/\s]*)\s*$").expect("Invalid Regex")
    })
}

/// Number of leading network bits, always within `0..=32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// Validate a raw prefix length.
    pub fn new(len: i64) -> Result<PrefixLength> {
        match u8::try_from(len) {
            Ok(len) if len <= MAX_LENGTH => Ok(PrefixLength(len)),
            _ => Err(SubnetError::InvalidPrefix(len)),
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Bits left over for hosts.
    pub const fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }

    /// The subnet mask as u32: `value()` leading ones, the rest zeros.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::PrefixLength;
    /// assert_eq!(PrefixLength::new(24).unwrap().mask(), 0xFFFFFF00);
    /// assert_eq!(PrefixLength::new(0).unwrap().mask(), 0);
    /// ```
    pub fn mask(self) -> u32 {
        let right_len = self.host_bits();
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        mask as u32
    }

    /// Number of addresses in the subnet, network and broadcast included.
    pub const fn num_addresses(self) -> u64 {
        1u64 << self.host_bits()
    }
}

impl TryFrom<i64> for PrefixLength {
    type Error = SubnetError;

    fn try_from(len: i64) -> Result<Self> {
        PrefixLength::new(len)
    }
}

/// Slash form, e.g. `/24`.
impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

/// Calculate the number of usable host addresses: `2^(32 - len) - 2`.
///
/// A /31 yields 0. A /32 has no room for both a network and a broadcast
/// address and is reported as [`SubnetError::DegenerateHostRange`].
pub fn num_hosts(len: u8) -> Result<u64> {
    PrefixLength::new(len.into())?
        .num_addresses()
        .checked_sub(2)
        .ok_or(SubnetError::DegenerateHostRange(len))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash, PartialEq, PartialOrd)]
pub struct Ipv4Cidr {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length.
    pub prefix: PrefixLength,
}

impl Serialize for Ipv4Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Cidr::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4Cidr {
    /// Create a new [`Ipv4Cidr`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4Cidr> {
        let caps = get_cidr_regex()
            .captures(addr_cidr)
            .ok_or_else(|| SubnetError::malformed(addr_cidr, "expected <address>/<prefix>"))?;

        let addr = Ipv4Addr::from(codec::address_to_bits(&caps["addr"])?);
        let len = parse_prefix(addr_cidr, &caps["len"])?;
        let prefix = PrefixLength::new(len)?;
        Ok(Ipv4Cidr { addr, prefix })
    }
}

impl fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.addr, self.prefix)
    }
}

/// An all-digit prefix too large for i64 is still a prefix, just out of range.
fn parse_prefix(addr_cidr: &str, len: &str) -> Result<i64> {
    len.parse().map_err(|_| {
        let digits = len.strip_prefix('-').unwrap_or(len);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            let saturated = if len.starts_with('-') { i64::MIN } else { i64::MAX };
            SubnetError::InvalidPrefix(saturated)
        } else {
            SubnetError::malformed(addr_cidr, format!("prefix '{len}' is not a number"))
        }
    })
}
