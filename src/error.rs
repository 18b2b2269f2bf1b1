//! Error types for subnet calculations.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SubnetError>;

/// Every way an address/prefix pair can fail to produce subnet properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// The address is not four dot-separated decimal octets in [0,255].
    #[error("Malformed address '{address}': {reason}")]
    MalformedAddress { address: String, reason: String },

    /// The prefix length is outside [0,32].
    #[error("Invalid prefix length {0}, expected 0..=32")]
    InvalidPrefix(i64),

    /// The host portion is too small for a network/broadcast exclusive range.
    #[error("No usable host range for prefix /{0}")]
    DegenerateHostRange(u8),

    /// A single octet value does not fit in 8 bits.
    #[error("Octet value {0} is out of range 0..=255")]
    OctetOutOfRange(i64),

    /// A bit sequence is not a whole number of octets, or holds a value other than 0/1.
    #[error("Malformed bit sequence: {0}")]
    MalformedBits(String),
}

impl SubnetError {
    pub(crate) fn malformed(address: &str, reason: impl Into<String>) -> Self {
        SubnetError::MalformedAddress {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubnetError::InvalidPrefix(33).to_string(),
            "Invalid prefix length 33, expected 0..=32"
        );
        assert_eq!(
            SubnetError::DegenerateHostRange(32).to_string(),
            "No usable host range for prefix /32"
        );
        assert_eq!(
            SubnetError::malformed("1.2.3", "expected 4 octets, got 3").to_string(),
            "Malformed address '1.2.3': expected 4 octets, got 3"
        );
    }
}
