//! Rate expression classification.
//!
//! The rate text is first reduced to a `RateToken` by reading the call name
//! and comparing it exactly (so `TROEE` can never be mistaken for `TROE`),
//! then each token is handed to its mapping function. Photolysis is decided
//! before anything else: a solar flux marker in the rate or an `hv` reactant.
use crate::Translator::arrhenius::{
    arrhenius_ab, arrhenius_abc, arrhenius_ac, bare_rate, mozart_arrhenius,
};
use crate::Translator::rate_law::{RateLaw, RateLawResult};
use crate::Translator::special::{k45, k57};
use crate::Translator::terms::parse_coefficient_list;
use crate::Translator::troe::{mozart_troe, troe, troe_e};
use log::debug;

/// markers of a photolysis rate in KPP (`SUN` scaled rates, `j(Pj_no2)` lookups)
pub const PHOTOLYSIS_MARKERS: [&str; 2] = ["SUN", "Pj_"];
/// photon placeholder on the reactant side
pub const PHOTON: &str = "hv";

pub fn is_photon(species: &str) -> bool {
    species.trim().eq_ignore_ascii_case(PHOTON)
}

/// closed set of rate expression shapes the translator knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateToken {
    Photolysis,
    ArrheniusAbc,
    ArrheniusAb,
    ArrheniusAc,
    Troe,
    TroeE,
    K45,
    K57,
    /// no call at all, a plain number
    Bare,
    Unrecognized(String),
}

impl RateToken {
    /// exact call name lookup
    pub fn from_call_name(name: &str) -> Self {
        match name {
            "ARR_abc" | "ARR" => RateToken::ArrheniusAbc,
            "ARR_ab" | "ARR2" => RateToken::ArrheniusAb,
            "ARR_ac" => RateToken::ArrheniusAc,
            "TROE" => RateToken::Troe,
            "TROEE" => RateToken::TroeE,
            "k45" => RateToken::K45,
            "k57" => RateToken::K57,
            other => RateToken::Unrecognized(other.to_string()),
        }
    }

    /// mapping function for the tokens that take the numeric argument list
    fn mapper(&self) -> Option<fn(&[f64]) -> RateLawResult> {
        match self {
            RateToken::ArrheniusAbc => Some(arrhenius_abc),
            RateToken::ArrheniusAb => Some(arrhenius_ab),
            RateToken::ArrheniusAc => Some(arrhenius_ac),
            RateToken::Troe => Some(troe),
            RateToken::TroeE => Some(troe_e),
            _ => None,
        }
    }
}

/// Reads the shape of a KPP rate expression.
pub fn tokenize(rate: &str, photon_reactant: bool) -> RateToken {
    if photon_reactant || PHOTOLYSIS_MARKERS.iter().any(|marker| rate.contains(marker)) {
        return RateToken::Photolysis;
    }
    let text = rate.trim().trim_start_matches('(').trim_start();
    if !text.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return RateToken::Bare;
    }
    let name_len = text
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    let (name, rest) = text.split_at(name_len);
    if rest.trim_start().starts_with('(') {
        RateToken::from_call_name(name)
    } else {
        RateToken::Bare
    }
}

/// Classifies the rate part of a KPP equation (the text between `:` and `;`).
pub fn classify_kpp(rate: &str, photon_reactant: bool, has_products: bool) -> RateLawResult {
    let token = tokenize(rate, photon_reactant);
    debug!("rate '{}' -> {:?}", rate.trim(), token);
    if let Some(mapper) = token.mapper() {
        return mapper(&parse_coefficient_list(rate));
    }
    match token {
        RateToken::Photolysis => RateLawResult::Single(RateLaw::Photolysis),
        RateToken::K45 => k45(),
        RateToken::K57 => k57(),
        RateToken::Bare => bare_rate(rate, has_products),
        RateToken::Unrecognized(name) => {
            RateLawResult::Unknown(format!("unrecognized rate law '{}'", name))
        }
        // covered by mapper()
        _ => RateLawResult::Unknown(format!("no mapping for {:?}", token)),
    }
}

/// Classifies a MOZART sub-equation by the number of coefficients after `;`.
pub fn classify_mozart(coeffs: &[f64], photon_reactant: bool, has_products: bool) -> RateLawResult {
    if photon_reactant {
        return RateLawResult::Single(RateLaw::Photolysis);
    }
    match coeffs {
        [] => RateLawResult::Unknown("no rate coefficients (user defined rate)".to_string()),
        [a] if !has_products => RateLawResult::Single(RateLaw::FirstOrderLoss { A: *a }),
        [_] | [_, _] => mozart_arrhenius(coeffs),
        [_, _, _, _, _] => mozart_troe(coeffs),
        _ => RateLawResult::Unknown(format!(
            "{} rate coefficients match no rate law",
            coeffs.len()
        )),
    }
}
