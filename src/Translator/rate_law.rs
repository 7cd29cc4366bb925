//! Target rate laws (MICM schema).
//!
//! Arrhenius in MICM:  k = A * exp(C / T) * (T / D)^B * (1 + E * P)
//!
//! Troe in MICM:
//!   k0   = k0_A   * exp(k0_C / T)   * (T / 300)^k0_B
//!   kinf = kinf_A * exp(kinf_C / T) * (T / 300)^kinf_B
//!   k    = k0 [M] / (1 + k0 [M] / kinf) * Fc^(N / (N + log10(k0 [M] / kinf)^2))
//!
//! Ternary chemical activation shares the Troe parameter set, only the
//! pressure dependence is reversed on the solver side.
#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};
use std::fmt;

/// enum for the kinds of rate law a reaction can end up with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateLawKind {
    Arrhenius,
    Troe,
    TernaryChemicalActivation,
    Photolysis,
    FirstOrderLoss,
    Unknown,
}

impl fmt::Display for RateLawKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            RateLawKind::Arrhenius => "ARRHENIUS",
            RateLawKind::Troe => "TROE",
            RateLawKind::TernaryChemicalActivation => "TERNARY_CHEMICAL_ACTIVATION",
            RateLawKind::Photolysis => "PHOTOLYSIS",
            RateLawKind::FirstOrderLoss => "FIRST_ORDER_LOSS",
            RateLawKind::Unknown => "UNKNOWN",
        };
        write!(f, "{}", tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusParams {
    pub A: f64,
    pub B: f64,
    pub C: f64,
    pub D: f64,
    pub E: f64,
}

impl Default for ArrheniusParams {
    fn default() -> Self {
        Self {
            A: 1.0,
            B: 0.0,
            C: 0.0,
            D: 300.0,
            E: 0.0,
        }
    }
}

impl ArrheniusParams {
    /// single pre-exponential factor, everything else at its default
    pub fn with_A(A: f64) -> Self {
        Self {
            A,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TroeParams {
    pub k0_A: f64,
    pub k0_B: f64,
    pub k0_C: f64,
    pub kinf_A: f64,
    pub kinf_B: f64,
    pub kinf_C: f64,
    pub Fc: f64,
    pub N: f64,
}

impl Default for TroeParams {
    fn default() -> Self {
        Self {
            k0_A: 1.0,
            k0_B: 0.0,
            k0_C: 0.0,
            kinf_A: 1.0,
            kinf_B: 0.0,
            kinf_C: 0.0,
            Fc: 0.6,
            N: 1.0,
        }
    }
}

/// rate law of one MICM reaction, serialized with its "type" tag next to the parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateLaw {
    Arrhenius(ArrheniusParams),
    Troe(TroeParams),
    TernaryChemicalActivation(TroeParams),
    Photolysis,
    FirstOrderLoss { A: f64 },
}

impl RateLaw {
    pub fn kind(&self) -> RateLawKind {
        match self {
            RateLaw::Arrhenius(_) => RateLawKind::Arrhenius,
            RateLaw::Troe(_) => RateLawKind::Troe,
            RateLaw::TernaryChemicalActivation(_) => RateLawKind::TernaryChemicalActivation,
            RateLaw::Photolysis => RateLawKind::Photolysis,
            RateLaw::FirstOrderLoss { .. } => RateLawKind::FirstOrderLoss,
        }
    }
}

/// What a classifier makes of one rate expression.
///
/// Closed-form laws defined as a sum of two components come back as a `Pair`;
/// the assembler turns those into two reactions with the same stoichiometry.
#[derive(Debug, Clone, PartialEq)]
pub enum RateLawResult {
    Single(RateLaw),
    Pair(RateLaw, RateLaw),
    /// not one of the known families, the reason goes to the log
    Unknown(String),
}

impl RateLawResult {
    pub fn kind(&self) -> RateLawKind {
        match self {
            RateLawResult::Single(law) | RateLawResult::Pair(law, _) => law.kind(),
            RateLawResult::Unknown(_) => RateLawKind::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, RateLawResult::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arrhenius_serialization() {
        let law = RateLaw::Arrhenius(ArrheniusParams {
            A: 1.0e-12,
            C: -2000.0,
            ..ArrheniusParams::default()
        });
        assert_eq!(
            serde_json::to_value(&law).unwrap(),
            json!({"type": "ARRHENIUS", "A": 1.0e-12, "B": 0.0, "C": -2000.0, "D": 300.0, "E": 0.0})
        );
    }

    #[test]
    fn test_troe_family_tags() {
        let troe = RateLaw::Troe(TroeParams::default());
        let ternary = RateLaw::TernaryChemicalActivation(TroeParams::default());
        assert_eq!(serde_json::to_value(&troe).unwrap()["type"], "TROE");
        assert_eq!(
            serde_json::to_value(&ternary).unwrap()["type"],
            "TERNARY_CHEMICAL_ACTIVATION"
        );
        assert_eq!(serde_json::to_value(&troe).unwrap()["Fc"], 0.6);
    }

    #[test]
    fn test_parameterless_and_loss() {
        assert_eq!(
            serde_json::to_value(&RateLaw::Photolysis).unwrap(),
            json!({"type": "PHOTOLYSIS"})
        );
        assert_eq!(
            serde_json::to_value(&RateLaw::FirstOrderLoss { A: 2.0e-5 }).unwrap(),
            json!({"type": "FIRST_ORDER_LOSS", "A": 2.0e-5})
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(RateLaw::Photolysis.kind(), RateLawKind::Photolysis);
        assert_eq!(RateLawResult::Unknown("x".into()).kind(), RateLawKind::Unknown);
        assert_eq!(RateLawKind::TernaryChemicalActivation.to_string(), "TERNARY_CHEMICAL_ACTIVATION");
        let pair = RateLawResult::Pair(
            RateLaw::Troe(TroeParams::default()),
            RateLaw::Photolysis,
        );
        assert_eq!(pair.kind(), RateLawKind::Troe);
        assert!(!pair.is_unknown());
    }
}
