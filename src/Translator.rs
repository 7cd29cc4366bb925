//! Translation of KPP and MOZART chemical mechanisms into MICM JSON configuration.
//!
//! Pipeline: source files -> `#` sections -> species + equations -> rate law
//! classification -> `Mechanism` -> `species.json`, `reactions.json`.
//! Reactions whose rate law cannot be expressed in MICM are not an error:
//! their labels are collected and written to `unknowns.txt`.
//!
//! ```
//! use MechTranslator::Translator::reader::{InputFormat, MechanismReader};
//! let text = "#DEFVAR\nO3 = IGNORE ;\n#EQUATIONS\n<R1> O3 = : 1.0D-5 ;\n";
//! let (mechanism, unknowns) = InputFormat::Kpp.reader().translate(text, "TEST", 1e-12).unwrap();
//! assert_eq!(mechanism.reactions.len(), 1);
//! assert!(unknowns.is_empty());
//! ```

/// the crate's error type
pub mod errors;
/// term and number parsing: `3.5 H2O`, `2*O`, `1.0D-12`, `ARR_abc(a, b, c)`
pub mod terms;
/// MICM rate law records
pub mod rate_law;
/// Arrhenius forms, KPP and MOZART
pub mod arrhenius;
/// Troe falloff forms, KPP and MOZART
pub mod troe;
/// closed-form RACM laws k45 and k57, each emitted as two reactions
pub mod special;
/// rate expression -> rate law dispatch
pub mod classify;
/// species, reactions and the MICM documents
pub mod mechanism;
/// KPP lines and MOZART blocks -> reactions
pub mod equations;
/// `#SECTION` splitting, species declarations
pub mod sections;
/// KPP and MOZART readers behind one trait
pub mod reader;
