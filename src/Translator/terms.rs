//! Reaction terms and numeric argument lists.
//!
//! KPP and MOZART both write numbers the Fortran way: `1.0D-12`, `2.0_dp`.
//! Everything here normalizes that notation before handing it to `f64`.
use crate::Translator::errors::TranslatorError;
use log::debug;

/// rewrites a Fortran literal into something `f64::from_str` accepts:
/// spaces dropped, `_dp` kind suffix dropped, `D` exponent turned into `E`
pub fn normalize_fortran_number(text: &str) -> String {
    text.replace(' ', "").replace("_dp", "").replace('D', "E")
}

/// true if the string can be read as a float
pub fn is_float(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok()
}

/// Parses the arguments of the first call found in a rate expression.
///
/// `"ARR_abc(1.0D-12, 200.0_dp, TEMP)"` gives `[1.0e-12, 200.0]`: arguments that
/// are not numbers (temperature, air density placeholders) are skipped, the
/// remaining ones keep their left-to-right order. One extra pair of parentheses
/// around the whole call is tolerated: `"( f(1.0, 2.0) )"`.
pub fn parse_coefficient_list(text: &str) -> Vec<f64> {
    debug!("rate expression: {}", text);
    let trimmed = text.trim();
    let inner = match trimmed.strip_prefix('(') {
        Some(rest) => rest.strip_suffix(')').unwrap_or(rest),
        None => trimmed,
    };
    let Some((_, args)) = inner.split_once('(') else {
        return Vec::new();
    };
    let args = args.split_once(')').map_or(args, |(args, _)| args);
    let coeffs = parse_coefficient_values(args);
    debug!("coefficients: {:?}", coeffs);
    coeffs
}

/// comma separated numbers without the surrounding call, e.g. MOZART `1.0e-12, 2000`
pub fn parse_coefficient_values(args: &str) -> Vec<f64> {
    args.split(',')
        .map(normalize_fortran_number)
        .filter_map(|arg| arg.parse::<f64>().ok())
        .collect()
}

/// Splits a term such as `"3.5 H2O"` (KPP) or `"2*O"` (MOZART) into its
/// stoichiometric coefficient and species name.
///
/// Everything in front of the first letter is the coefficient, a missing one
/// means 1.0.
pub fn parse_term(text: &str) -> Result<(f64, String), TranslatorError> {
    let Some(n) = text.find(|c: char| c.is_alphabetic()) else {
        return Err(TranslatorError::MalformedTerm(text.to_string()));
    };
    let (prefix, species) = text.split_at(n);
    let coefficient_text = prefix.trim().trim_end_matches('*').trim_end();
    let coefficient = if coefficient_text.is_empty() {
        1.0
    } else {
        coefficient_text
            .parse::<f64>()
            .ok()
            .filter(|x| x.is_finite() && *x > 0.0)
            .ok_or_else(|| TranslatorError::InvalidCoefficient {
                term: text.to_string(),
                coefficient: coefficient_text.to_string(),
            })?
    };
    Ok((coefficient, species.trim_end().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_float() {
        assert!(!is_float("a"));
        assert!(!is_float("1a"));
        assert!(is_float("1"));
        assert!(is_float("1.0"));
        assert!(is_float("-1.0"));
        assert!(is_float(&1.0_f64.to_string()));
        assert!(is_float(" 2.5e-3 "));
    }

    #[test]
    fn test_parse_coefficient_list() {
        let coeffs = parse_coefficient_list("f(0.0, 1.0, 2.0, 3.0)");
        assert_eq!(coeffs, vec![0.0, 1.0, 2.0, 3.0]);
        let wrapped = parse_coefficient_list(" ( f(0.0, 1.0, 2.0, 3.0) )");
        assert_eq!(wrapped, coeffs);
        assert_eq!(
            parse_coefficient_list("f(0.0,1.0,2.0,3.0)"),
            parse_coefficient_list(" ( f(0.0,1.0,2.0,3.0) )")
        );
    }

    #[test]
    fn test_parse_coefficient_list_fortran_literals() {
        let coeffs = parse_coefficient_list("ARR_abc(1.0D-12, 200.0_dp, -3.0_dp)");
        assert_eq!(coeffs, vec![1.0e-12, 200.0, -3.0]);
    }

    #[test]
    fn test_parse_coefficient_list_skips_placeholders() {
        let coeffs = parse_coefficient_list("TROE(1.8D-31, 3.2_dp, 4.7D-12, 1.4_dp, TEMP, C_M)");
        assert_eq!(coeffs, vec![1.8e-31, 3.2, 4.7e-12, 1.4]);
        assert!(parse_coefficient_list("1.0e-12").is_empty());
    }

    #[test]
    fn test_parse_term() {
        for text in ["3H2O", "3 H2O", " 3 H2O"] {
            assert_eq!(parse_term(text).unwrap(), (3.0, "H2O".to_string()));
        }
        assert_eq!(parse_term("1.23H2O").unwrap(), (1.23, "H2O".to_string()));
        assert_eq!(parse_term("1.23 H2O").unwrap(), (1.23, "H2O".to_string()));
        assert_eq!(parse_term(".12H2O").unwrap(), (0.12, "H2O".to_string()));
        assert_eq!(parse_term(".12 H2O").unwrap(), (0.12, "H2O".to_string()));
    }

    #[test]
    fn test_parse_term_without_coefficient() {
        assert_eq!(parse_term("H2O").unwrap(), (1.0, "H2O".to_string()));
        assert_eq!(parse_term("O1D").unwrap(), (1.0, "O1D".to_string()));
    }

    #[test]
    fn test_parse_term_mozart_multiplier() {
        assert_eq!(parse_term("2*O").unwrap(), (2.0, "O".to_string()));
        assert_eq!(parse_term("0.5*CH2O").unwrap(), (0.5, "CH2O".to_string()));
    }

    #[test]
    fn test_parse_term_errors() {
        assert!(matches!(
            parse_term("3.0"),
            Err(TranslatorError::MalformedTerm(_))
        ));
        assert!(matches!(
            parse_term("1.2.3 NO"),
            Err(TranslatorError::InvalidCoefficient { .. })
        ));
        assert!(matches!(
            parse_term("0 NO"),
            Err(TranslatorError::InvalidCoefficient { .. })
        ));
    }
}
