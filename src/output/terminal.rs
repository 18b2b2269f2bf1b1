//! Terminal output utilities.
//!
//! Provides formatting helpers and the colored table view.

use crate::engine::SubnetEngine;
use crate::error::Result;
use crate::models::AddressBits;
use colored::Colorize;
use std::net::Ipv4Addr;

const LABEL_WIDTH: usize = 24;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render the subnet as an aligned `label: value` table.
pub fn subnet_table(engine: &SubnetEngine, binary: bool) -> Result<String> {
    let info = engine.describe()?;
    let wildcard = Ipv4Addr::from(engine.wildcard_mask()).to_string();

    let rows = [
        ("Address", info.address.as_str()),
        ("Prefix", info.prefix.as_str()),
        ("Mask", info.mask.as_str()),
        ("Wildcard", wildcard.as_str()),
        ("Network", info.network.as_str()),
        ("First usable host", info.first_host.as_str()),
        ("Last usable host", info.last_host.as_str()),
        ("Broadcast", info.broadcast.as_str()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&table_row(label, value.green()));
    }
    out.push_str(&table_row(
        "Usable hosts",
        info.usable_hosts.to_string().yellow(),
    ));

    if binary {
        let bit_rows = [
            ("Address (binary)", AddressBits::from(engine.address())),
            ("Mask (binary)", engine.mask()),
            ("Network (binary)", AddressBits::from(engine.network_address())),
            ("Broadcast (binary)", AddressBits::from(engine.broadcast_address())),
        ];
        for (label, bits) in bit_rows {
            out.push_str(&table_row(label, bits.to_string().cyan()));
        }
    }
    Ok(out)
}

fn table_row(label: &str, value: impl std::fmt::Display) -> String {
    let label = format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH);
    format!("{}{value}\n", label.bold())
}
