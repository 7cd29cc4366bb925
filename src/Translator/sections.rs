//! `#SECTION` splitting and species declarations.
use crate::Translator::mechanism::Species;
use indexmap::IndexMap;
use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*(\S+)\s*(.*)$").unwrap());

/// Splits a mechanism text on `#` headers.
///
/// A header is the first word after `#` and must match one of `names` exactly
/// (`#EQUATIONS` opens "EQUATIONS", `#EQUATIONSX` opens nothing). Lines under a
/// header that is not asked for are dropped. Every requested name is present
/// in the result, possibly with no lines.
pub fn split_sections(text: &str, names: &[&str]) -> IndexMap<String, Vec<String>> {
    let mut sections: IndexMap<String, Vec<String>> = names
        .iter()
        .map(|name| (name.to_string(), Vec::new()))
        .collect();
    let mut current: Option<String> = None;
    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(caps) = SECTION_HEADER.captures(trimmed) {
            let header = &caps[1];
            current = names
                .iter()
                .find(|name| **name == header)
                .map(|name| name.to_string());
            if current.is_none() {
                debug!("section '#{}' skipped", header);
            }
            // text after the header word belongs to the section
            let rest = caps[2].trim();
            if let (Some(name), false) = (&current, rest.is_empty()) {
                if let Some(lines) = sections.get_mut(name) {
                    lines.push(rest.to_string());
                }
            }
            continue;
        }
        if trimmed.is_empty() {
            continue;
        }
        if let Some(lines) = current.as_ref().and_then(|name| sections.get_mut(name)) {
            lines.push(trimmed.to_string());
        }
    }
    sections
}

/// `// text` and whole-line `{ text }` comments
pub(crate) fn is_kpp_comment(line: &str) -> bool {
    line.starts_with("//") || (line.starts_with('{') && line.ends_with('}'))
}

/// KPP `#DEFVAR`/`#DEFFIX` lines: `O3 = IGNORE ; {ozone}`. Only the name is kept.
pub fn kpp_species(lines: &[String], fixed: bool, tolerance: f64) -> Vec<Species> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !is_kpp_comment(line))
        .filter_map(|line| {
            let name = line.split_once('=').map_or(line, |(name, _)| name);
            let name = strip_braces(name);
            if name.is_empty() {
                warn!("species line without a name: {}", line);
                return None;
            }
            Some(new_species(&name, fixed, tolerance))
        })
        .collect()
}

/// MOZART species lines: comma separated `NAME` or `NAME -> FORMULA` entries.
pub fn mozart_species(lines: &[String], fixed: bool, tolerance: f64) -> Vec<Species> {
    let mut species = Vec::new();
    for entry in lines.iter().flat_map(|line| line.split(',')) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (name, formula) = match entry.split_once("->") {
            Some((name, formula)) => (strip_braces(name), Some(formula.trim().to_string())),
            None => (strip_braces(entry), None),
        };
        if name.is_empty() {
            continue;
        }
        species.push(new_species(&name, fixed, tolerance).with_formula(formula));
    }
    species
}

/// species names are written without the `{ }` that equations may carry around them
fn strip_braces(name: &str) -> String {
    name.replace(['{', '}'], "").trim().to_string()
}

fn new_species(name: &str, fixed: bool, tolerance: f64) -> Species {
    if fixed {
        Species::fixed(name)
    } else {
        Species::variable(name, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Translator::mechanism::SpeciesKind;

    const KPP: &str = "#INCLUDE atoms\n\
        #DEFVAR\n\
        O3 = IGNORE ; {ozone}\n\
        \n\
        NO = IGNORE ;\n\
        #DEFFIX\n\
        M = IGNORE ;\n\
        #EQUATIONS\n\
        <R1> O3 + NO = NO2 : 1.0 ;\n\
        #EQUATIONSX\n\
        ignored line\n";

    #[test]
    fn test_split_sections() {
        let sections = split_sections(KPP, &["DEFVAR", "DEFFIX", "EQUATIONS", "ATOMS"]);
        assert_eq!(sections["DEFVAR"], vec!["O3 = IGNORE ; {ozone}", "NO = IGNORE ;"]);
        assert_eq!(sections["DEFFIX"], vec!["M = IGNORE ;"]);
        assert_eq!(sections["EQUATIONS"], vec!["<R1> O3 + NO = NO2 : 1.0 ;"]);
        assert!(sections["ATOMS"].is_empty());
        assert_eq!(sections.keys().collect::<Vec<_>>(), vec!["DEFVAR", "DEFFIX", "EQUATIONS", "ATOMS"]);
    }

    #[test]
    fn test_header_with_inline_content() {
        let sections = split_sections("#Fixed M, N2\n#Variable O3", &["Variable", "Fixed"]);
        assert_eq!(sections["Fixed"], vec!["M, N2"]);
        assert_eq!(sections["Variable"], vec!["O3"]);
    }

    #[test]
    fn test_kpp_species() {
        let sections = split_sections(KPP, &["DEFVAR", "DEFFIX"]);
        let variable = kpp_species(&sections["DEFVAR"], false, 1e-10);
        assert_eq!(variable.len(), 2);
        assert_eq!(variable[0].name, "O3");
        assert_eq!(variable[0].tolerance, Some(1e-10));
        let fixed = kpp_species(&sections["DEFFIX"], true, 1e-10);
        assert_eq!(fixed[0].kind, SpeciesKind::Fixed);
        assert_eq!(fixed[0].tolerance, None);
    }

    #[test]
    fn test_braced_species_names() {
        let lines = vec!["{O3} = IGNORE ;".to_string(), "{ NO2 } = IGNORE ;".to_string()];
        let species = kpp_species(&lines, false, 1e-12);
        let names: Vec<&str> = species.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["O3", "NO2"]);
        let species = mozart_species(&["{CO}, {N2O5} -> N2O5".to_string()], true, 1e-12);
        assert_eq!(species[0].name, "CO");
        assert_eq!(species[1].name, "N2O5");
    }

    #[test]
    fn test_mozart_species() {
        let lines = vec!["O3, O1D -> O, N2O5".to_string(), "CH2O -> CH2O,".to_string()];
        let species = mozart_species(&lines, false, 1e-12);
        let names: Vec<&str> = species.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["O3", "O1D", "N2O5", "CH2O"]);
        assert_eq!(species[1].formula.as_deref(), Some("O"));
        assert_eq!(species[0].formula, None);
    }
}
