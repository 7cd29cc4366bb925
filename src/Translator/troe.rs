//! Troe falloff rate laws.
//!
//! WRF-KPP:
//!   TROE(k0, n, kinf, m, T, [M])  k0 and kinf given at 300 K, scaled by (300 / T)^n and (300 / T)^m
//!   TROEE(A, B, k0, n, kinf, m, T, [M]) = A * exp(-B / T) * TROE(...)
//!
//! MICM scales by (T / 300)^B, hence the sign flips on the exponents. The
//! TROEE prefactor is folded into the low pressure limit: k0_A = A * k0 and
//! k0_C = -B. The trailing T and [M] arguments are ignored when they are
//! given as numbers.
use crate::Translator::arrhenius::wrong_arity;
use crate::Translator::rate_law::{RateLaw, RateLawResult, TroeParams};

/// `TROE(k0, n0, kinf, ninf, ...)`
pub fn troe(coeffs: &[f64]) -> RateLawResult {
    match coeffs {
        [k0, n0, kinf, ninf] | [k0, n0, kinf, ninf, _, _] => {
            RateLawResult::Single(RateLaw::Troe(TroeParams {
                k0_A: *k0,
                k0_B: -n0,
                k0_C: 0.0,
                kinf_A: *kinf,
                kinf_B: -ninf,
                kinf_C: 0.0,
                Fc: 0.6,
                N: 1.0,
            }))
        }
        _ => wrong_arity("TROE", 4, coeffs),
    }
}

/// `TROEE(A, B, k0, n0, kinf, ninf, ...)`
pub fn troe_e(coeffs: &[f64]) -> RateLawResult {
    match coeffs {
        [a, b, k0, n0, kinf, ninf] | [a, b, k0, n0, kinf, ninf, _, _] => {
            RateLawResult::Single(RateLaw::Troe(TroeParams {
                k0_A: a * k0,
                k0_B: -n0,
                k0_C: -b,
                kinf_A: *kinf,
                kinf_B: -ninf,
                kinf_C: 0.0,
                Fc: 0.6,
                N: 1.0,
            }))
        }
        _ => wrong_arity("TROEE", 6, coeffs),
    }
}

/// MOZART `ko, n, ki, m, fc`
pub fn mozart_troe(coeffs: &[f64]) -> RateLawResult {
    match coeffs {
        [k0, n, kinf, m, fc] => RateLawResult::Single(RateLaw::Troe(TroeParams {
            k0_A: *k0,
            k0_B: -n,
            k0_C: 0.0,
            kinf_A: *kinf,
            kinf_B: -m,
            kinf_C: 0.0,
            Fc: *fc,
            N: 1.0,
        })),
        _ => wrong_arity("MOZART Troe", 5, coeffs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(result: RateLawResult) -> TroeParams {
        match result {
            RateLawResult::Single(RateLaw::Troe(p)) => p,
            other => panic!("expected Troe, got {:?}", other),
        }
    }

    #[test]
    fn test_troe_sign_flips() {
        let p = params(troe(&[1.8e-31, 3.2, 4.7e-12, 1.4]));
        assert_eq!(p.k0_A, 1.8e-31);
        assert_eq!(p.k0_B, -3.2);
        assert_eq!(p.k0_C, 0.0);
        assert_eq!(p.kinf_A, 4.7e-12);
        assert_eq!(p.kinf_B, -1.4);
        assert_eq!(p.kinf_C, 0.0);
        assert_eq!((p.Fc, p.N), (0.6, 1.0));
    }

    #[test]
    fn test_troe_e_folds_prefactor() {
        let (a, b, k0, n0, kinf, ninf) = (1.0, 2000.0, 3.0e-11, 4.0, 5.0e-12, 6.0);
        let p = params(troe_e(&[a, b, k0, n0, kinf, ninf]));
        assert_eq!(p.k0_A, a * k0);
        assert_eq!(p.k0_B, -n0);
        assert_eq!(p.k0_C, -b);
        assert_eq!(p.kinf_A, kinf);
        assert_eq!(p.kinf_B, -ninf);
        assert_eq!(p.kinf_C, 0.0);

        let p = params(troe_e(&[2.5, 10.0, 4.0e-12, 0.0, 1.0e-11, 0.0]));
        assert_relative_eq!(p.k0_A, 1.0e-11, max_relative = 1e-15);
    }

    #[test]
    fn test_mozart_troe() {
        let p = params(mozart_troe(&[6.9e-31, 1.0, 2.6e-11, 0.0, 0.6]));
        assert_eq!(p.k0_A, 6.9e-31);
        assert_eq!(p.k0_B, -1.0);
        assert_eq!(p.kinf_A, 2.6e-11);
        assert_eq!(p.kinf_B, -0.0);
        assert_eq!(p.Fc, 0.6);
    }

    #[test]
    fn test_numeric_temperature_and_density_ignored() {
        assert_eq!(
            troe(&[1.8e-30, 3.0, 2.8e-11, 0.0, 300.0, 2.0e19]),
            troe(&[1.8e-30, 3.0, 2.8e-11, 0.0])
        );
        let p = params(troe_e(&[1.0, 2000.0, 3.0e-11, 4.0, 5.0e-12, 6.0, 300.0, 2.0e19]));
        assert_eq!((p.k0_A, p.k0_B, p.k0_C), (3.0e-11, -4.0, -2000.0));
        assert_eq!((p.kinf_A, p.kinf_B), (5.0e-12, -6.0));
    }

    #[test]
    fn test_troe_wrong_arity() {
        assert!(troe(&[1.0, 2.0, 3.0]).is_unknown());
        assert!(troe_e(&[1.0, 2.0, 3.0, 4.0]).is_unknown());
        assert!(troe(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_unknown());
        assert!(troe_e(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).is_unknown());
        assert!(mozart_troe(&[1.0, 2.0, 3.0, 4.0]).is_unknown());
    }
}
