use MechTranslator::cli::cli_main::{TranslatorCli, init_logger, run};
use clap::Parser;
use log::error;
use std::process::ExitCode;

pub fn main() -> ExitCode {
    let cli = TranslatorCli::parse();
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logger(&config) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
