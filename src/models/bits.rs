//! Fixed-width 32-bit view of an IPv4 address.
//!
//! [`AddressBits`] stores the address as a native `u32` and exposes it as an
//! ordered sequence of 32 bits, most-significant first, grouped into 4 octets.

use std::fmt;
use std::net::Ipv4Addr;
use std::ops::{BitAnd, BitOr, Not};

/// Number of bits in an IPv4 address.
pub const ADDRESS_BITS: usize = 32;

/// Number of bits in one octet.
pub const OCTET_BITS: usize = 8;

/// A 32-bit IPv4 bit sequence, MSB first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AddressBits(u32);

impl AddressBits {
    pub const ZERO: AddressBits = AddressBits(0);
    pub const ONES: AddressBits = AddressBits(u32::MAX);

    pub const fn new(value: u32) -> Self {
        AddressBits(value)
    }

    /// The address as an unsigned integer.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Bit `i` counted from the most-significant end, or `None` past bit 31.
    pub fn bit(self, i: usize) -> Option<u8> {
        if i >= ADDRESS_BITS {
            return None;
        }
        Some(((self.0 >> (ADDRESS_BITS - 1 - i)) & 1) as u8)
    }

    /// Count of consecutive 1 bits from the most-significant end.
    pub fn leading_ones(self) -> u32 {
        self.0.leading_ones()
    }

    /// Whether every bit set in `self` is also set in `other`.
    pub fn is_subset_of(self, other: AddressBits) -> bool {
        self.0 & !other.0 == 0
    }

    /// All 32 bits as 0/1 values, MSB first.
    pub fn to_bits(self) -> [u8; ADDRESS_BITS] {
        let mut bits = [0u8; ADDRESS_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = ((self.0 >> (ADDRESS_BITS - 1 - i)) & 1) as u8;
        }
        bits
    }

    pub fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<u32> for AddressBits {
    fn from(value: u32) -> Self {
        AddressBits(value)
    }
}

impl From<Ipv4Addr> for AddressBits {
    fn from(addr: Ipv4Addr) -> Self {
        AddressBits(u32::from(addr))
    }
}

impl From<AddressBits> for Ipv4Addr {
    fn from(bits: AddressBits) -> Self {
        Ipv4Addr::from(bits.0)
    }
}

impl BitAnd for AddressBits {
    type Output = AddressBits;

    fn bitand(self, rhs: AddressBits) -> AddressBits {
        AddressBits(self.0 & rhs.0)
    }
}

impl BitOr for AddressBits {
    type Output = AddressBits;

    fn bitor(self, rhs: AddressBits) -> AddressBits {
        AddressBits(self.0 | rhs.0)
    }
}

impl Not for AddressBits {
    type Output = AddressBits;

    fn not(self) -> AddressBits {
        AddressBits(!self.0)
    }
}

/// Dotted binary form, e.g. `11000000.10101000.00000001.01100100`.
impl fmt::Display for AddressBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let octets: Vec<String> = self.octets().iter().map(|o| format!("{o:08b}")).collect();
        write!(f, "{}", octets.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_indexing_msb_first() {
        let bits = AddressBits::from(Ipv4Addr::new(128, 0, 0, 1));
        assert_eq!(bits.bit(0), Some(1));
        assert_eq!(bits.bit(1), Some(0));
        assert_eq!(bits.bit(31), Some(1));
        assert_eq!(bits.bit(32), None);
    }

    #[test]
    fn test_to_bits_matches_bit() {
        let bits = AddressBits::from(Ipv4Addr::new(192, 168, 1, 100));
        let array = bits.to_bits();
        for (i, b) in array.iter().enumerate() {
            assert_eq!(Some(*b), bits.bit(i));
        }
        assert_eq!(&array[..8], &[1, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_display_dotted_binary() {
        let bits = AddressBits::from(Ipv4Addr::new(192, 168, 1, 100));
        assert_eq!(
            bits.to_string(),
            "11000000.10101000.00000001.01100100"
        );
        assert_eq!(
            AddressBits::ZERO.to_string(),
            "00000000.00000000.00000000.00000000"
        );
    }

    #[test]
    fn test_bit_ops() {
        let a = AddressBits::new(0xC0A8_0164);
        let m = AddressBits::new(0xFFFF_FF00);
        assert_eq!(a & m, AddressBits::new(0xC0A8_0100));
        assert_eq!(a | !m, AddressBits::new(0xC0A8_01FF));
        assert!((a & m).is_subset_of(a | !m));
        assert!(!AddressBits::ONES.is_subset_of(a));
        assert_eq!(m.leading_ones(), 24);
    }
}
