//! Dotted-decimal <-> binary conversions.
//!
//! Addresses are split on `.` into four octets, each octet expanded to 8 bits
//! (MSB first), and the groups concatenated. Decoding weights each group by
//! 128, 64, ..., 1 and joins the octets back with `.`.

use crate::error::{Result, SubnetError};
use crate::models::{AddressBits, OCTET_BITS};

const SEPARATOR: char = '.';
const OCTETS: usize = 4;

/// Convert one octet value to its 8-bit representation, MSB first.
///
/// Values outside `0..=255` are rejected with [`SubnetError::OctetOutOfRange`].
pub fn octet_to_bits(n: i64) -> Result<[u8; OCTET_BITS]> {
    let octet = u8::try_from(n).map_err(|_| SubnetError::OctetOutOfRange(n))?;
    let mut bits = [0u8; OCTET_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (octet >> (OCTET_BITS - 1 - i)) & 1;
    }
    Ok(bits)
}

/// Parse a dotted-decimal address into its 32-bit sequence.
pub fn address_to_bits(address: &str) -> Result<AddressBits> {
    let parts: Vec<&str> = address.split(SEPARATOR).collect();
    if parts.len() != OCTETS {
        return Err(SubnetError::malformed(
            address,
            format!("expected {OCTETS} octets, got {}", parts.len()),
        ));
    }

    let mut value: u32 = 0;
    for part in parts {
        let n = parse_octet(address, part)?;
        let bits = octet_to_bits(n).map_err(|e| SubnetError::malformed(address, e.to_string()))?;
        for bit in bits {
            value = (value << 1) | u32::from(bit);
        }
    }
    log::trace!("address_to_bits({address}) = {:032b}", value);
    Ok(AddressBits::new(value))
}

/// Render a bit sequence as dotted-decimal.
///
/// The length must be a non-zero multiple of 8 and every element 0 or 1.
pub fn bits_to_address(bits: &[u8]) -> Result<String> {
    if bits.is_empty() || bits.len() % OCTET_BITS != 0 {
        return Err(SubnetError::MalformedBits(format!(
            "length {} is not a whole number of octets",
            bits.len()
        )));
    }
    if let Some(pos) = bits.iter().position(|b| *b > 1) {
        return Err(SubnetError::MalformedBits(format!(
            "value {} at position {pos}",
            bits[pos]
        )));
    }

    let octets: Vec<String> = bits
        .chunks(OCTET_BITS)
        .map(|group| {
            let mut weight: u32 = 128;
            let mut octet: u32 = 0;
            for bit in group {
                octet += u32::from(*bit) * weight;
                weight /= 2;
            }
            octet.to_string()
        })
        .collect();
    Ok(octets.join(&SEPARATOR.to_string()))
}

fn parse_octet(address: &str, part: &str) -> Result<i64> {
    if part.is_empty() {
        return Err(SubnetError::malformed(address, "empty octet"));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubnetError::malformed(
            address,
            format!("octet '{part}' is not a decimal number"),
        ));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(SubnetError::malformed(
            address,
            format!("octet '{part}' has a leading zero"),
        ));
    }
    // Only digits remain, so a parse failure means the value overflowed.
    part.parse::<i64>().map_err(|_| {
        SubnetError::malformed(address, format!("octet '{part}' is out of range 0..=255"))
    })
}
