//! Equation assembly.
//!
//! Two source syntaxes are handled:
//!
//! KPP, one equation per line:
//! ```text
//! <R1> O3 + NO = NO2 + O2 : ARR_ab(3.0D-12, 1500.0_dp) ;
//! {002:J02} O3 + hv = O1D + O2 : j(Pj_o31d) ;
//! ```
//!
//! MOZART, labeled blocks of `->` sub-equations, products may wrap onto the
//! following lines:
//! ```text
//! [usr_O_O2]
//!   O + O2 -> O3 ; 6.0e-34, 2.4
//! [RXN1]
//!   A + B -> C
//!     + D ; 1.0e-12, 2000
//! ```
//! The n-th sub-equation of block `label` is named `label (n)`; equations with
//! no label at all are named `R<n>` after their position in the section.
//!
//! Every equation gets its stoichiometry from the term parser and its rate law
//! from the classifiers. The result is a `Translation`: the reactions that
//! could be classified plus the labels that could not.
use crate::Translator::classify::{classify_kpp, classify_mozart, is_photon};
use crate::Translator::errors::TranslatorError;
use crate::Translator::mechanism::{Reaction, Stoichiometry};
use crate::Translator::rate_law::RateLawResult;
use crate::Translator::sections::is_kpp_comment;
use crate::Translator::terms::{parse_coefficient_values, parse_term};
use log::{debug, info, warn};

/// classified reactions and rejected labels of one translation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    pub reactions: Vec<Reaction>,
    pub unknowns: Vec<String>,
}

impl Translation {
    pub fn new() -> Self {
        Self::default()
    }

    /// turns one classification into zero, one or two reactions
    pub fn record(&mut self, label: &str, result: RateLawResult, stoichiometry: &Stoichiometry) {
        match result {
            RateLawResult::Single(law) => {
                self.reactions
                    .push(Reaction::new(label.to_string(), law, stoichiometry));
            }
            RateLawResult::Pair(first, second) => {
                self.reactions.push(Reaction::new(
                    format!("{}_first_term", label),
                    first,
                    stoichiometry,
                ));
                self.reactions.push(Reaction::new(
                    format!("{}_second_term", label),
                    second,
                    stoichiometry,
                ));
            }
            RateLawResult::Unknown(reason) => {
                warn!("reaction '{}' skipped: {}", label, reason);
                self.unknowns.push(label.to_string());
            }
        }
    }

    pub fn merge(&mut self, other: Translation) {
        self.reactions.extend(other.reactions);
        self.unknowns.extend(other.unknowns);
    }
}

fn clean_term(term: &str) -> String {
    term.replace(['{', '}'], "").trim().to_string()
}

fn terms(side: &str) -> impl Iterator<Item = String> + '_ {
    side.split('+').map(clean_term).filter(|t| !t.is_empty())
}

/// Parses both sides of an equation. Returns the stoichiometry and whether
/// the photon placeholder was among the reactants.
pub fn parse_sides(
    reactants: &str,
    products: &str,
) -> Result<(Stoichiometry, bool), TranslatorError> {
    let mut stoichiometry = Stoichiometry::default();
    let mut photon = false;
    for term in terms(reactants) {
        if is_photon(&term) {
            photon = true;
            continue;
        }
        let (qty, species) = parse_term(&term)?;
        stoichiometry.add_reactant(species, qty);
    }
    for term in terms(products) {
        let (amount, species) = parse_term(&term)?;
        stoichiometry.add_product(species, amount);
    }
    Ok((stoichiometry, photon))
}

/// `<label> reactants` or `{label} reactants`, else a generated `R<index>`.
/// Only the first reactant is looked at for the closing delimiter.
fn split_kpp_label(lhs: &str, index: usize) -> (String, &str) {
    let first = lhs.split('+').next().unwrap_or("");
    let delimited = if first.contains('>') {
        lhs.split_once('>').map(|(label, rest)| (label.replace('<', ""), rest))
    } else if first.contains('}') {
        lhs.split_once('}').map(|(label, rest)| (label.replace('{', ""), rest))
    } else {
        None
    };
    match delimited {
        Some((label, rest)) => (label.trim().to_string(), rest),
        None => (format!("R{}", index), lhs),
    }
}

/// Assembles one KPP equation line. `index` is its 1-based position, used
/// when the line carries no label.
pub fn assemble_kpp_equation(line: &str, index: usize) -> Result<Translation, TranslatorError> {
    debug!("{}", line);
    let missing = |separator| TranslatorError::MissingSeparator {
        separator,
        line: line.trim().to_string(),
    };
    let (lhs, rhs) = line.split_once('=').ok_or_else(|| missing("="))?;
    let (products, rate) = rhs.split_once(':').ok_or_else(|| missing(":"))?;
    let rate = rate.split_once(';').map_or(rate, |(rate, _)| rate);

    let (label, reactants) = split_kpp_label(lhs, index);
    info!("label: {}", label);

    let (stoichiometry, photon) = parse_sides(reactants, products)?;
    let result = classify_kpp(rate, photon, stoichiometry.has_products());

    let mut translation = Translation::new();
    translation.record(&label, result, &stoichiometry);
    Ok(translation)
}

/// Assembles the lines of a KPP #EQUATIONS section.
pub fn assemble_kpp_equations(lines: &[String]) -> Result<Translation, TranslatorError> {
    let mut translation = Translation::new();
    let equations = lines.iter().filter(|line| {
        let line = line.trim();
        !line.is_empty() && !is_kpp_comment(line)
    });
    for (i, line) in equations.enumerate() {
        translation.merge(assemble_kpp_equation(line, i + 1)?);
    }
    info!(
        "KPP equations: {} reactions, {} unknown",
        translation.reactions.len(),
        translation.unknowns.len()
    );
    Ok(translation)
}

/// one `->` sub-equation of a MOZART block, possibly gathered over several lines
#[derive(Debug, Clone, PartialEq)]
struct SubEquation {
    label: String,
    reactants: String,
    products: String,
    rate: String,
    has_rate: bool,
}

impl SubEquation {
    fn new(label: String, lhs: &str, rhs: &str) -> Self {
        let (products, rate, has_rate) = match rhs.split_once(';') {
            Some((products, rate)) => (products, rate, true),
            None => (rhs, "", false),
        };
        Self {
            label,
            reactants: lhs.to_string(),
            products: products.to_string(),
            rate: rate.to_string(),
            has_rate,
        }
    }

    fn continue_with(&mut self, line: &str) {
        if self.has_rate {
            self.rate.push(' ');
            self.rate.push_str(line);
            return;
        }
        let (products, rate) = match line.split_once(';') {
            Some((products, rate)) => (products, Some(rate)),
            None => (line, None),
        };
        self.products.push(' ');
        self.products.push_str(products);
        if let Some(rate) = rate {
            self.rate = rate.to_string();
            self.has_rate = true;
        }
    }

    fn assemble(&self, translation: &mut Translation) -> Result<(), TranslatorError> {
        info!("label: {}", self.label);
        let (stoichiometry, photon) = parse_sides(&self.reactants, &self.products)?;
        let coeffs = parse_coefficient_values(&self.rate);
        debug!("{} coefficients: {:?}", self.label, coeffs);
        let result = classify_mozart(&coeffs, photon, stoichiometry.has_products());
        translation.record(&self.label, result, &stoichiometry);
        Ok(())
    }
}

/// Splits the lines of a MOZART equations section into sub-equations.
fn collect_mozart_equations(lines: &[String]) -> Result<Vec<SubEquation>, TranslatorError> {
    let mut equations: Vec<SubEquation> = Vec::new();
    // label of the open block, the line that opened it and its sub-equation count
    let mut block: Option<(String, String, usize)> = None;
    let block_without_arrow = |line: &str| TranslatorError::MissingSeparator {
        separator: "->",
        line: line.to_string(),
    };

    for raw in lines {
        let mut line = raw.split_once('!').map_or(raw.as_str(), |(text, _)| text).trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix('[') {
            if let Some((_, opened_by, 0)) = &block {
                return Err(block_without_arrow(opened_by.as_str()));
            }
            let (label, rest) = rest.split_once(']').ok_or(TranslatorError::MissingSeparator {
                separator: "]",
                line: line.to_string(),
            })?;
            block = Some((label.trim().to_string(), line.to_string(), 0));
            line = rest.trim();
            if line.is_empty() {
                continue;
            }
        }
        match line.split_once("->") {
            Some((lhs, rhs)) => {
                let label = match block.as_mut() {
                    Some((label, _, count)) => {
                        *count += 1;
                        format!("{} ({})", label, count)
                    }
                    None => format!("R{}", equations.len() + 1),
                };
                equations.push(SubEquation::new(label, lhs, rhs));
            }
            None => {
                let in_current_block = match &block {
                    Some((_, _, count)) => *count > 0,
                    None => !equations.is_empty(),
                };
                match equations.last_mut() {
                    Some(equation) if in_current_block => equation.continue_with(line),
                    _ => return Err(block_without_arrow(line)),
                }
            }
        }
    }
    if let Some((_, opened_by, 0)) = &block {
        return Err(block_without_arrow(opened_by.as_str()));
    }
    Ok(equations)
}

/// Assembles the lines of a MOZART equations section.
pub fn assemble_mozart_equations(lines: &[String]) -> Result<Translation, TranslatorError> {
    let mut translation = Translation::new();
    for equation in collect_mozart_equations(lines)? {
        equation.assemble(&mut translation)?;
    }
    info!(
        "MOZART equations: {} reactions, {} unknown",
        translation.reactions.len(),
        translation.unknowns.len()
    );
    Ok(translation)
}
