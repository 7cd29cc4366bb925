/// command line front end: argument parsing, logger setup, one translation run
pub mod cli_main;
