//! # Settings Module
//!
//! ## Purpose
//! Run configuration of the translator: where the source mechanism lives, which
//! syntax it is written in and where the MICM files go.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "format": "kpp",
//!   "input_dir": "data/kpp",
//!   "input_name": "racm",
//!   "output_dir": "configs",
//!   "mechanism": "RACM",
//!   "tolerance": 1e-12,
//!   "log_file": null,
//!   "debug": false
//! }
//! ```
//! Every field may be left out of the file, missing fields take their default.
//! Command line values override the file.

use crate::Translator::errors::TranslatorError;
use crate::Translator::mechanism::DEFAULT_TOLERANCE;
use crate::Translator::reader::InputFormat;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub format: InputFormat,
    /// directory holding the source files
    pub input_dir: PathBuf,
    /// common file name prefix of the source files
    pub input_name: String,
    /// output root, files land in `<output_dir>/<mechanism>/`
    pub output_dir: PathBuf,
    pub mechanism: String,
    /// absolute tolerance written for every variable species
    pub tolerance: f64,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            format: InputFormat::Kpp,
            input_dir: PathBuf::from("."),
            input_name: String::new(),
            output_dir: PathBuf::from("."),
            mechanism: String::new(),
            tolerance: DEFAULT_TOLERANCE,
            log_file: None,
            debug: false,
        }
    }
}

impl TranslatorConfig {
    /// Loads a configuration file. A missing file is an error here, unlike the
    /// defaults used when no file is given at all.
    pub fn load_config(path: &Path) -> Result<Self, TranslatorError> {
        let content = fs::read_to_string(path).map_err(|e| TranslatorError::io(path, e))?;
        let config: TranslatorConfig = serde_json::from_str(&content)?;
        info!("configuration loaded from '{}'", path.display());
        Ok(config)
    }

    pub fn save_config(&self, path: &Path) -> Result<(), TranslatorError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| TranslatorError::io(path, e))?;
        Ok(())
    }

    /// The mechanism name, falling back to the input name.
    pub fn mechanism_name(&self) -> &str {
        if self.mechanism.is_empty() {
            &self.input_name
        } else {
            &self.mechanism
        }
    }

    /// Checks what a run needs before any file is touched.
    pub fn validate(&self) -> Result<(), TranslatorError> {
        if self.input_name.trim().is_empty() {
            return Err(TranslatorError::Config(
                "input name is empty, nothing to read".to_string(),
            ));
        }
        if self.mechanism_name().trim().is_empty() {
            return Err(TranslatorError::Config("mechanism name is empty".to_string()));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(TranslatorError::Config(format!(
                "absolute tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
