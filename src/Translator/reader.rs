//! Source format readers.
//!
//! A reader knows which files make up a mechanism (by suffix), which `#`
//! sections to look at and how species and equations are written there.
//! `SourceFormat` dispatches to the concrete reader the way the rest of the
//! crate dispatches over closed sets of implementations.
use crate::Translator::equations::{Translation, assemble_kpp_equations, assemble_mozart_equations};
use crate::Translator::errors::TranslatorError;
use crate::Translator::mechanism::{Mechanism, Species};
use crate::Translator::sections::{kpp_species, mozart_species, split_sections};
use enum_dispatch::enum_dispatch;
use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Sections = IndexMap<String, Vec<String>>;

#[enum_dispatch]
pub trait MechanismReader {
    fn format_name(&self) -> &'static str;
    /// file suffixes read from the input directory, in reading order
    fn suffixes(&self) -> &'static [&'static str];
    fn section_names(&self) -> &'static [&'static str];
    /// fixed species first, then the variable ones
    fn read_species(&self, sections: &Sections, tolerance: f64) -> Vec<Species>;
    fn read_equations(&self, sections: &Sections) -> Result<Translation, TranslatorError>;

    /// Builds the whole mechanism from the concatenated source text.
    /// Returns the mechanism and the labels of the reactions that could not be translated.
    fn translate(
        &self,
        text: &str,
        mechanism_name: &str,
        tolerance: f64,
    ) -> Result<(Mechanism, Vec<String>), TranslatorError> {
        let sections = split_sections(text, self.section_names());
        for (name, lines) in &sections {
            info!("{} section #{}: {} lines", self.format_name(), name, lines.len());
        }
        let mut mechanism = Mechanism::new(mechanism_name);
        mechanism.add_species(self.read_species(&sections, tolerance));
        let translation = self.read_equations(&sections)?;
        mechanism.add_reactions(translation.reactions);
        Ok((mechanism, translation.unknowns))
    }
}

fn section<'a>(sections: &'a Sections, name: &str) -> &'a [String] {
    sections.get(name).map_or(&[], |lines| lines.as_slice())
}

/// KPP: `.kpp`, `.spc`, `.eqn` and `.def` files with #DEFVAR/#DEFFIX/#EQUATIONS
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KppReader;

impl MechanismReader for KppReader {
    fn format_name(&self) -> &'static str {
        "KPP"
    }

    fn suffixes(&self) -> &'static [&'static str] {
        &[".kpp", ".spc", ".eqn", ".def"]
    }

    fn section_names(&self) -> &'static [&'static str] {
        &["ATOMS", "DEFVAR", "DEFFIX", "EQUATIONS"]
    }

    fn read_species(&self, sections: &Sections, tolerance: f64) -> Vec<Species> {
        let mut species = kpp_species(section(sections, "DEFFIX"), true, tolerance);
        species.extend(kpp_species(section(sections, "DEFVAR"), false, tolerance));
        species
    }

    fn read_equations(&self, sections: &Sections) -> Result<Translation, TranslatorError> {
        assemble_kpp_equations(section(sections, "EQUATIONS"))
    }
}

/// MOZART preprocessor input: `.spc`, `.eqn` and `.def` files with #Variable/#Fixed/#Equations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MozartReader;

impl MechanismReader for MozartReader {
    fn format_name(&self) -> &'static str {
        "MOZART"
    }

    fn suffixes(&self) -> &'static [&'static str] {
        &[".spc", ".eqn", ".def"]
    }

    fn section_names(&self) -> &'static [&'static str] {
        &["Variable", "Fixed", "Equations"]
    }

    fn read_species(&self, sections: &Sections, tolerance: f64) -> Vec<Species> {
        let mut species = mozart_species(section(sections, "Fixed"), true, tolerance);
        species.extend(mozart_species(section(sections, "Variable"), false, tolerance));
        species
    }

    fn read_equations(&self, sections: &Sections) -> Result<Translation, TranslatorError> {
        assemble_mozart_equations(section(sections, "Equations"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[enum_dispatch(MechanismReader)]
pub enum SourceFormat {
    Kpp(KppReader),
    Mozart(MozartReader),
}

/// input syntax as named in the config file and on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Kpp,
    Mozart,
}

impl InputFormat {
    pub fn reader(self) -> SourceFormat {
        match self {
            InputFormat::Kpp => SourceFormat::Kpp(KppReader),
            InputFormat::Mozart => SourceFormat::Mozart(MozartReader),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputFormat::Kpp => write!(f, "kpp"),
            InputFormat::Mozart => write!(f, "mozart"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Translator::mechanism::SpeciesKind;
    use crate::Translator::rate_law::RateLawKind;

    #[test]
    fn test_kpp_translate() {
        let text = "#DEFVAR\nO3 = IGNORE ;\nNO = IGNORE ;\nNO2 = IGNORE ;\n\
                    #DEFFIX\nM = IGNORE ;\n\
                    #EQUATIONS\n<R1> O3 + NO = NO2 : ARR_ab(3.0D-12, 1500.0_dp) ;\n\
                    <R2> NO2 = NO : EP3(1.0, 2.0) ;\n";
        let (mechanism, unknowns) = InputFormat::Kpp.reader().translate(text, "SMALL", 1e-12).unwrap();
        assert_eq!(mechanism.name, "SMALL");
        let names: Vec<&str> = mechanism.species.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["M", "O3", "NO", "NO2"]);
        assert_eq!(mechanism.species[0].kind, SpeciesKind::Fixed);
        assert_eq!(mechanism.reactions.len(), 1);
        assert_eq!(mechanism.reactions[0].rate_law.kind(), RateLawKind::Arrhenius);
        assert_eq!(unknowns, vec!["R2".to_string()]);
    }

    #[test]
    fn test_mozart_translate() {
        let text = "#Variable\nO3, O, O2\n#Fixed\nM\n#Equations\n[jo3] O3 + hv -> O + O2\n[usr] O + O2 + M -> O3 + M ; 6.0e-34, 0, 1.0, 0, 0.6\n";
        let (mechanism, unknowns) = InputFormat::Mozart.reader().translate(text, "MZ", 1e-12).unwrap();
        assert!(unknowns.is_empty());
        assert_eq!(mechanism.species[0].name, "M");
        assert_eq!(mechanism.reactions[0].rate_law.kind(), RateLawKind::Photolysis);
        assert_eq!(mechanism.reactions[1].rate_law.kind(), RateLawKind::Troe);
        assert_eq!(mechanism.reactions[1].name, "usr (1)");
    }

    #[test]
    fn test_reader_metadata() {
        let kpp = InputFormat::Kpp.reader();
        assert_eq!(kpp.format_name(), "KPP");
        assert!(kpp.suffixes().contains(&".kpp"));
        assert!(!InputFormat::Mozart.reader().suffixes().contains(&".kpp"));
        assert_eq!(InputFormat::default(), InputFormat::Kpp);
        assert_eq!(InputFormat::Mozart.to_string(), "mozart");
    }

    #[test]
    fn test_input_format_serde() {
        let format: InputFormat = serde_json::from_str("\"mozart\"").unwrap();
        assert_eq!(format, InputFormat::Mozart);
    }
}
