//! Command line run: arguments over the config file, logger setup, translate, report.
use crate::Translator::errors::TranslatorError;
use crate::Translator::mechanism::Mechanism;
use crate::Translator::reader::{InputFormat, MechanismReader};
use crate::Utils::load_from_file::{load_mechanism_text, write_mechanism};
use crate::settings::TranslatorConfig;
use clap::Parser;
use log::{LevelFilter, info, warn};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mech-translator")]
#[command(bin_name = "mech-translator")]
#[command(about = "Translate KPP and MOZART mechanisms into MICM JSON configuration", long_about = None)]
pub struct TranslatorCli {
    /// source syntax
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,
    /// directory holding the source files
    #[arg(long)]
    pub input_dir: Option<PathBuf>,
    /// common prefix of the source file names
    #[arg(long)]
    pub input_name: Option<String>,
    /// output root directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// mechanism name, defaults to the input name
    #[arg(long)]
    pub mechanism: Option<String>,
    /// JSON configuration file, command line values take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub logfile: Option<PathBuf>,
    /// absolute tolerance of variable species
    #[arg(long)]
    pub tolerance: Option<f64>,
    #[arg(short, long)]
    pub debug: bool,
}

impl TranslatorCli {
    /// Configuration file (or defaults) with the command line laid over it.
    pub fn resolve_config(&self) -> Result<TranslatorConfig, TranslatorError> {
        let mut config = match &self.config {
            Some(path) => TranslatorConfig::load_config(path)?,
            None => TranslatorConfig::default(),
        };
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(name) = &self.input_name {
            config.input_name = name.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(mechanism) = &self.mechanism {
            config.mechanism = mechanism.clone();
        }
        if let Some(path) = &self.logfile {
            config.log_file = Some(path.clone());
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        config.debug |= self.debug;
        Ok(config)
    }
}

/// Terminal logger always, file logger when a log file is configured.
pub fn init_logger(config: &TranslatorConfig) -> Result<(), TranslatorError> {
    let level = if config.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = &config.log_file {
        let file = File::create(path).map_err(|e| TranslatorError::io(path, e))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    CombinedLogger::init(loggers)
        .map_err(|e| TranslatorError::Config(format!("logger setup failed: {}", e)))
}

/// outcome of one translation run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub mechanism: Mechanism,
    pub unknowns: Vec<String>,
    pub output_dir: PathBuf,
}

/// Reads, translates and writes the mechanism described by `config`.
pub fn translate(config: &TranslatorConfig) -> Result<RunReport, TranslatorError> {
    config.validate()?;
    let reader = config.format.reader();
    info!(
        "translating {} mechanism '{}' from '{}'",
        reader.format_name(),
        config.input_name,
        config.input_dir.display()
    );
    let text = load_mechanism_text(&config.input_dir, &config.input_name, reader.suffixes())?;
    let (mechanism, unknowns) =
        reader.translate(&text, config.mechanism_name(), config.tolerance)?;

    let undeclared = mechanism.undeclared_species();
    if !undeclared.is_empty() {
        warn!("species used in reactions but not declared: {}", undeclared.join(", "));
    }
    for name in mechanism.duplicate_reaction_names() {
        warn!("reaction name '{}' occurs more than once", name);
    }
    if !unknowns.is_empty() {
        warn!("{} reactions could not be translated", unknowns.len());
    }

    let output_dir = write_mechanism(&config.output_dir, &mechanism, &unknowns)?;
    Ok(RunReport {
        mechanism,
        unknowns,
        output_dir,
    })
}

pub fn run(config: &TranslatorConfig) -> Result<(), TranslatorError> {
    let report = translate(config)?;
    report.mechanism.pretty_print();
    println!(
        "{} reactions written to '{}', {} unknown",
        report.mechanism.reactions.len(),
        report.output_dir.display(),
        report.unknowns.len()
    );
    Ok(())
}
