use num_complex::Complex;

use crate::coefficients::{Coefficients, SosCoefficients};

// sum of c[k] * z^-k, Horner from the highest tap down
fn polyval(c: &[f64], z_inv: Complex<f64>) -> Complex<f64> {
    c.iter()
        .rev()
        .fold(Complex::new(0.0, 0.0), |acc, tap| acc * z_inv + *tap)
}

/// `H(e^jw) = B(e^jw) / A(e^jw)` at normalized angular frequency `omega`
/// (`pi` is Nyquist).
pub fn frequency_response(coefs: &Coefficients<f64>, omega: f64) -> Complex<f64> {
    let z_inv = Complex::from_polar(1.0, -omega);
    polyval(coefs.b(), z_inv) / polyval(coefs.a(), z_inv)
}

/// product of the section responses, `1` without sections
pub fn sos_frequency_response(sos: &SosCoefficients<f64>, omega: f64) -> Complex<f64> {
    let z_inv = Complex::from_polar(1.0, -omega);
    sos.sections()
        .iter()
        .map(|s| polyval(&[s.b0, s.b1, s.b2], z_inv) / polyval(&[s.a0, s.a1, s.a2], z_inv))
        .product()
}

pub fn magnitude_db(h: Complex<f64>) -> f64 {
    20.0 * h.norm().log10()
}
