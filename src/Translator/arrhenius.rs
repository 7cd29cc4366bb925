//! Arrhenius rate laws.
//!
//! KPP (WRF-KPP `ARR_abc`):
//!   k = A0 * exp(-B0 / T) * (T / 300)^C0
//! MICM:
//!   k = A * exp(C / T) * (T / D)^B * (1 + E * P)
//!
//! so KPP's B and C swap places and the activation term changes sign:
//! A = A0, B = C0, C = -B0, D = 300.
use crate::Translator::rate_law::{ArrheniusParams, RateLaw, RateLawResult};
use crate::Translator::terms::normalize_fortran_number;
use log::warn;

/// `ARR_abc(A0, B0, C0)` and bare `ARR(A0, B0, C0)`
pub fn arrhenius_abc(coeffs: &[f64]) -> RateLawResult {
    match coeffs {
        [a, b, c] => RateLawResult::Single(RateLaw::Arrhenius(ArrheniusParams {
            A: *a,
            B: *c,
            C: -b,
            D: 300.0,
            ..ArrheniusParams::default()
        })),
        _ => wrong_arity("ARR_abc", 3, coeffs),
    }
}

/// `ARR_ab(A0, B0)` and `ARR2(A0, B0)`: no temperature power
pub fn arrhenius_ab(coeffs: &[f64]) -> RateLawResult {
    match coeffs {
        [a, b] => RateLawResult::Single(RateLaw::Arrhenius(ArrheniusParams {
            A: *a,
            C: -b,
            D: 300.0,
            ..ArrheniusParams::default()
        })),
        _ => wrong_arity("ARR_ab", 2, coeffs),
    }
}

/// `ARR_ac(A0, C0)`: no activation term
pub fn arrhenius_ac(coeffs: &[f64]) -> RateLawResult {
    match coeffs {
        [a, c] => RateLawResult::Single(RateLaw::Arrhenius(ArrheniusParams {
            A: *a,
            B: *c,
            D: 300.0,
            ..ArrheniusParams::default()
        })),
        _ => wrong_arity("ARR_ac", 2, coeffs),
    }
}

/// MOZART `A, C` pair, already written as k = A * exp(C / T)
pub fn mozart_arrhenius(coeffs: &[f64]) -> RateLawResult {
    match coeffs {
        [a] => RateLawResult::Single(RateLaw::Arrhenius(ArrheniusParams::with_A(*a))),
        [a, c] => RateLawResult::Single(RateLaw::Arrhenius(ArrheniusParams {
            A: *a,
            C: *c,
            ..ArrheniusParams::default()
        })),
        _ => wrong_arity("MOZART Arrhenius", 2, coeffs),
    }
}

/// A rate that is just a number, e.g. `1.2D-11` or `(3.0_dp)`.
///
/// With nothing on the product side it is a first order loss. A value that
/// does not parse becomes A = 0.0 so the reaction still shows up in the output.
pub fn bare_rate(rate: &str, has_products: bool) -> RateLawResult {
    let text = normalize_fortran_number(&rate.replace(['(', ')'], ""));
    match text.parse::<f64>() {
        Ok(a) if !has_products => RateLawResult::Single(RateLaw::FirstOrderLoss { A: a }),
        Ok(a) => RateLawResult::Single(RateLaw::Arrhenius(ArrheniusParams::with_A(a))),
        Err(_) => {
            warn!("rate '{}' is not a number, using A = 0.0", rate.trim());
            RateLawResult::Single(RateLaw::Arrhenius(ArrheniusParams::with_A(0.0)))
        }
    }
}

pub(crate) fn wrong_arity(name: &str, expected: usize, coeffs: &[f64]) -> RateLawResult {
    RateLawResult::Unknown(format!(
        "{} expects {} numeric coefficients, found {}",
        name,
        expected,
        coeffs.len()
    ))
}
