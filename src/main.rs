use ipv4_subnet_calc::cli::CommandLine;
use ipv4_subnet_calc::config::Config;
use ipv4_subnet_calc::logging;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = CommandLine::parse_args();
    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CommandLine) -> Result<String, Box<dyn Error>> {
    let config = Config::from_env()?;
    logging::init(&config)?;
    log::info!("#Start main()");
    args.run(&config)
}
