//! Command-line arguments.

use crate::config::Config;
use crate::engine::SubnetEngine;
use crate::error::{Result, SubnetError};
use crate::output::{self, OutputFormat};
use clap::Parser;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "subnet-calc")]
#[command(about = "Derive IPv4 subnet properties from an address and a prefix length.")]
pub struct CommandLine {
    /// Address as dotted-decimal (192.168.1.100) or CIDR (192.168.1.100/24)
    pub address: String,
    /// Prefix length, required unless ADDRESS is in CIDR form
    #[arg(short, long, allow_negative_numbers = true)]
    pub prefix: Option<i64>,
    /// Output format [default: SUBNET_CALC_FORMAT or table]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Also show address, mask, network and broadcast in binary
    #[arg(short, long)]
    pub binary: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Render the requested subnet, with `config` supplying the default format.
    pub fn run(&self, config: &Config) -> std::result::Result<String, Box<dyn Error>> {
        let engine = self.engine()?;
        let format = self.format.unwrap_or(config.format);
        output::render(&engine, format, self.binary)
    }

    /// Build the engine from either CIDR form or address plus `--prefix`.
    pub fn engine(&self) -> Result<SubnetEngine> {
        match (self.address.contains('/'), self.prefix) {
            (true, None) => SubnetEngine::from_cidr(&self.address),
            (false, Some(prefix)) => SubnetEngine::new(&self.address, prefix),
            (true, Some(_)) => Err(SubnetError::malformed(
                &self.address,
                "prefix given both in the address and with --prefix",
            )),
            (false, None) => Err(SubnetError::malformed(
                &self.address,
                "missing prefix length, use <address>/<prefix> or --prefix",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn parse(args: &[&str]) -> CommandLine {
        CommandLine::try_parse_from(std::iter::once("subnet-calc").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_cidr_argument() {
        let cli = parse(&["10.0.0.5/8"]);
        let engine = cli.engine().unwrap();
        assert_eq!(engine.network_address(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(cli.format, None);
        assert!(!cli.binary);
    }

    #[test]
    fn test_prefix_flag() {
        let cli = parse(&["192.168.1.100", "--prefix", "24", "-f", "csv", "-b"]);
        assert_eq!(cli.prefix, Some(24));
        assert_eq!(cli.format, Some(OutputFormat::Csv));
        assert!(cli.binary);
        assert_eq!(cli.engine().unwrap().prefix().value(), 24);
    }

    #[test]
    fn test_negative_prefix_is_invalid_prefix() {
        let cli = parse(&["10.0.0.1", "-p", "-3"]);
        assert_eq!(cli.engine(), Err(SubnetError::InvalidPrefix(-3)));
    }

    #[test]
    fn test_prefix_missing_or_doubled() {
        assert!(matches!(
            parse(&["10.0.0.1"]).engine(),
            Err(SubnetError::MalformedAddress { .. })
        ));
        assert!(matches!(
            parse(&["10.0.0.1/8", "-p", "8"]).engine(),
            Err(SubnetError::MalformedAddress { .. })
        ));
    }

    #[test]
    fn test_run_reports_error_message() {
        let err = parse(&["10.0.0.7/31"]).run(&Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "No usable host range for prefix /31");

        let err = parse(&["1.2.3.256/24"]).run(&Config::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed address '1.2.3.256': Octet value 256 is out of range 0..=255"
        );
    }

    #[test]
    fn test_run_uses_config_format() {
        let config = Config {
            format: OutputFormat::Json,
            ..Config::default()
        };
        let out = parse(&["172.16.5.10/30"]).run(&config).unwrap();
        assert!(out.trim_start().starts_with('{'));

        let out = parse(&["172.16.5.10/30", "-f", "csv"]).run(&config).unwrap();
        assert!(out.starts_with("\"address\""));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CommandLine::try_parse_from(["subnet-calc", "10.0.0.1/8", "-f", "xml"]).is_err());
    }
}
