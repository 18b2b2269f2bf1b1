//! Output formatting for subnet properties.
//!
//! This module renders a [`SubnetEngine`] for presentation:
//! - [`csv`] - CSV output with quoted, aligned fields
//! - [`terminal`] - Terminal table with colors
//! - JSON via `serde_json`

mod csv;
mod terminal;

use crate::engine::SubnetEngine;
use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub use csv::subnet_csv;
pub use terminal::{format_field, subnet_table};

/// Supported output formats.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{name}")
    }
}

/// Render the subnet in the requested format.
///
/// `binary` adds the bit-level view of the address, mask, network and
/// broadcast to the table output.
pub fn render(
    engine: &SubnetEngine,
    format: OutputFormat,
    binary: bool,
) -> Result<String, Box<dyn Error>> {
    log::info!("#Start render() format={format} binary={binary}");
    let output = match format {
        OutputFormat::Table => subnet_table(engine, binary)?,
        OutputFormat::Csv => subnet_csv(engine)?,
        OutputFormat::Json => {
            let info = engine.describe()?;
            let mut json = serde_json::to_string_pretty(&info)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubnetInfo;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!(" CSV ".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_render_json() {
        let engine = SubnetEngine::new("172.16.5.10", 30).unwrap();
        let json = render(&engine, OutputFormat::Json, false).unwrap();
        let info: SubnetInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.network, "172.16.5.8");
        assert_eq!(info.first_host, "172.16.5.9");
        assert_eq!(info.last_host, "172.16.5.10");
        assert_eq!(info.broadcast, "172.16.5.11");
        assert_eq!(info.usable_hosts, 2);
    }

    #[test]
    fn test_render_degenerate_fails() {
        let engine = SubnetEngine::new("192.168.1.1", 32).unwrap();
        for format in [OutputFormat::Table, OutputFormat::Csv, OutputFormat::Json] {
            let err = render(&engine, format, false).unwrap_err();
            assert_eq!(err.to_string(), "No usable host range for prefix /32");
        }
    }
}
