//! Closed-form RACM rate laws that MICM expresses as the sum of two reactions.
//! Their arguments (T, [M]) carry no coefficients, so the constants below are
//! the whole definition.
use crate::Translator::rate_law::{ArrheniusParams, RateLaw, RateLawResult, TroeParams};

/// RACM k45(T, [M]):
///   k0 = 2.4e-14 * exp(460 / T)
///   k2 = 2.7e-17 * exp(2199 / T)
///   k3 = 6.5e-34 * exp(1335 / T) * [M]
///   k45 = k0 + k3 / (1 + k3 / k2)
/// The second term is a Troe law with Fc = 1 and N = 0.
pub fn k45() -> RateLawResult {
    let arrhenius = ArrheniusParams {
        A: 2.4e-14,
        B: 0.0,
        C: 460.0,
        ..ArrheniusParams::default()
    };
    let troe = TroeParams {
        k0_A: 6.5e-34,
        k0_B: 0.0,
        k0_C: 1335.0,
        kinf_A: 2.7e-17,
        kinf_B: 0.0,
        kinf_C: 2199.0,
        Fc: 1.0,
        N: 0.0,
    };
    RateLawResult::Pair(RateLaw::Arrhenius(arrhenius), RateLaw::Troe(troe))
}

/// RACM k57(T, [M]): a Troe falloff plus a ternary chemical activation term
pub fn k57() -> RateLawResult {
    let troe = TroeParams {
        k0_A: 5.9e-33,
        k0_B: -1.4,
        k0_C: 0.0,
        kinf_A: 1.1e-12,
        kinf_B: 1.3,
        kinf_C: 0.0,
        Fc: 0.6,
        N: 1.0,
    };
    let activation = TroeParams {
        k0_A: 1.5e-13,
        k0_B: 0.6,
        k0_C: 0.0,
        kinf_A: 2.9e9,
        kinf_B: 6.1,
        kinf_C: 0.0,
        Fc: 0.6,
        N: 1.0,
    };
    RateLawResult::Pair(
        RateLaw::Troe(troe),
        RateLaw::TernaryChemicalActivation(activation),
    )
}
