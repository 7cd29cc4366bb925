//! MICM data model: species, reactions and the mechanism document.
//!
//! Output layout (both files wrap their content in a "camp-data" array):
//! ```json
//! species.json   {"camp-data": [{"name": "O3", "type": "CHEM_SPEC", "absolute tolerance": 1e-12}, ...]}
//! reactions.json {"camp-data": [{"name": "RACM", "type": "MECHANISM", "reactions": [...]}]}
//! ```
use crate::Translator::errors::TranslatorError;
use crate::Translator::rate_law::RateLaw;
use indexmap::IndexMap;
use prettytable::{Table, row};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// default absolute tolerance of a solved species
pub const DEFAULT_TOLERANCE: f64 = 1.0e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeciesKind {
    /// constant concentration tracer
    Fixed,
    /// solved tracer
    Variable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub name: String,
    pub kind: SpeciesKind,
    pub tolerance: Option<f64>,
    pub formula: Option<String>,
}

impl Species {
    pub fn fixed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SpeciesKind::Fixed,
            tolerance: None,
            formula: None,
        }
    }

    pub fn variable(name: &str, tolerance: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: SpeciesKind::Variable,
            tolerance: Some(tolerance),
            formula: None,
        }
    }

    pub fn with_formula(mut self, formula: Option<String>) -> Self {
        self.formula = formula;
        self
    }
}

impl Serialize for Species {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("type", "CHEM_SPEC")?;
        if let Some(formula) = &self.formula {
            map.serialize_entry("__formula", formula)?;
        }
        match (self.kind, self.tolerance) {
            (SpeciesKind::Fixed, _) => map.serialize_entry("tracer type", "CONSTANT")?,
            (SpeciesKind::Variable, Some(tolerance)) => {
                map.serialize_entry("absolute tolerance", &tolerance)?
            }
            (SpeciesKind::Variable, None) => {}
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactant {
    pub qty: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "yield")]
    pub amount: f64,
}

/// both sides of one equation, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stoichiometry {
    pub reactants: IndexMap<String, Reactant>,
    pub products: IndexMap<String, Product>,
}

impl Stoichiometry {
    /// a species listed twice (`A + A`) adds up
    pub fn add_reactant(&mut self, species: String, qty: f64) {
        self.reactants
            .entry(species)
            .or_insert(Reactant { qty: 0.0 })
            .qty += qty;
    }

    pub fn add_product(&mut self, species: String, amount: f64) {
        self.products
            .entry(species)
            .or_insert(Product { amount: 0.0 })
            .amount += amount;
    }

    pub fn has_products(&self) -> bool {
        !self.products.is_empty()
    }
}

/// one MICM reaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(flatten)]
    pub rate_law: RateLaw,
    pub reactants: IndexMap<String, Reactant>,
    pub products: IndexMap<String, Product>,
    #[serde(rename = "MUSICA name")]
    pub name: String,
}

impl Reaction {
    pub fn new(name: String, rate_law: RateLaw, stoichiometry: &Stoichiometry) -> Self {
        Self {
            rate_law,
            reactants: stoichiometry.reactants.clone(),
            products: stoichiometry.products.clone(),
            name,
        }
    }
}

#[derive(Serialize)]
struct CampData<T: Serialize> {
    #[serde(rename = "camp-data")]
    camp_data: T,
}

#[derive(Serialize)]
struct MechanismEntry<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    entry_type: &'static str,
    reactions: &'a [Reaction],
}

/// the whole translated mechanism
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mechanism {
    pub name: String,
    pub species: Vec<Species>,
    pub reactions: Vec<Reaction>,
}

impl Mechanism {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            species: Vec::new(),
            reactions: Vec::new(),
        }
    }

    pub fn add_species(&mut self, species: Vec<Species>) {
        self.species.extend(species);
    }

    pub fn add_reactions(&mut self, reactions: Vec<Reaction>) {
        self.reactions.extend(reactions);
    }

    /// species used in some reaction but never declared, in order of first use
    pub fn undeclared_species(&self) -> Vec<String> {
        let declared: HashSet<&str> = self.species.iter().map(|s| s.name.as_str()).collect();
        let mut seen = HashSet::new();
        let mut undeclared = Vec::new();
        for reaction in &self.reactions {
            for name in reaction.reactants.keys().chain(reaction.products.keys()) {
                if !declared.contains(name.as_str()) && seen.insert(name.as_str()) {
                    undeclared.push(name.clone());
                }
            }
        }
        undeclared
    }

    /// reaction names that occur more than once
    pub fn duplicate_reaction_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for reaction in &self.reactions {
            if !seen.insert(reaction.name.as_str()) && !duplicates.contains(&reaction.name) {
                duplicates.push(reaction.name.clone());
            }
        }
        duplicates
    }

    pub fn species_json(&self) -> Result<String, TranslatorError> {
        to_pretty_json(&CampData {
            camp_data: &self.species,
        })
    }

    pub fn reactions_json(&self) -> Result<String, TranslatorError> {
        to_pretty_json(&CampData {
            camp_data: [MechanismEntry {
                name: &self.name,
                entry_type: "MECHANISM",
                reactions: &self.reactions,
            }],
        })
    }

    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["#", "reaction", "rate law", "reactants", "products"]);
        for (i, reaction) in self.reactions.iter().enumerate() {
            let reactants: Vec<&str> = reaction.reactants.keys().map(|s| s.as_str()).collect();
            let products: Vec<&str> = reaction.products.keys().map(|s| s.as_str()).collect();
            table.add_row(row![
                i + 1,
                reaction.name,
                reaction.rate_law.kind(),
                reactants.join(" + "),
                products.join(" + ")
            ]);
        }
        table
    }

    pub fn pretty_print(&self) {
        println!(
            "mechanism {}: {} species, {} reactions",
            self.name,
            self.species.len(),
            self.reactions.len()
        );
        self.summary_table().printstd();
    }
}

/// JSON with 4 space indentation, the layout MICM configs are usually written in
fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, TranslatorError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
