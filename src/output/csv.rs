//! CSV output formatting for subnet properties.

use crate::engine::SubnetEngine;
use crate::error::Result;
use std::net::Ipv4Addr;

use super::terminal::format_field;

const HEADER: &str = r#""address","prefix","mask","wildcard","network","first_host","last_host","broadcast","usable_hosts""#;

/// Render a header line and one data row.
pub fn subnet_csv(engine: &SubnetEngine) -> Result<String> {
    let info = engine.describe()?;
    log::debug!("subnet_csv({}{})", info.address, info.prefix);

    let row = format!(
        r#"{address},{prefix},{mask},{wildcard},{network},{first_host},{last_host},{broadcast},{usable_hosts}"#,
        address = format_field(&info.address, 17),
        prefix = format_field(&info.prefix, 5),
        mask = format_field(&info.mask, 17),
        wildcard = format_field(Ipv4Addr::from(engine.wildcard_mask()), 17),
        network = format_field(&info.network, 17),
        first_host = format_field(&info.first_host, 17),
        last_host = format_field(&info.last_host, 17),
        broadcast = format_field(&info.broadcast, 17),
        usable_hosts = format_field(info.usable_hosts, 12),
    );
    Ok(format!("{HEADER}\n{row}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_csv_10_slash_8() {
        let engine = SubnetEngine::new("10.0.0.5", 8).unwrap();
        let csv = subnet_csv(&engine).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER);

        let fields: Vec<&str> = lines[1].split(',').map(|f| f.trim()).collect();
        assert_eq!(
            fields,
            vec![
                "\"10.0.0.5\"",
                "\"/8\"",
                "\"255.0.0.0\"",
                "\"0.255.255.255\"",
                "\"10.0.0.0\"",
                "\"10.0.0.1\"",
                "\"10.255.255.254\"",
                "\"10.255.255.255\"",
                "\"16777214\"",
            ]
        );
    }

    #[test]
    fn test_subnet_csv_field_alignment() {
        let engine = SubnetEngine::new("1.2.3.4", 30).unwrap();
        let csv = subnet_csv(&engine).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("        \"1.2.3.4\","));
    }
}
