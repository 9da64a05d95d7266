use crate::number::Sample;

/// Unit impulse: `x[0] = 1.0`, silence after.
pub fn impulse<T: Sample>(len: usize) -> Vec<T> {
    let mut x = vec![T::ZERO; len];
    if let Some(first) = x.first_mut() {
        *first = T::from_f64(1.0);
    }
    x
}

/**
 * uniform white noise in [-1, 1], drawn from a wyrand generator
 * (through fastrand) so runs can be repeated with the same seed
 */
pub fn white_noise(len: usize, rng: &mut fastrand::Rng) -> Vec<f64> {
    (0..len).map(|_| rng.f64() * 2.0 - 1.0).collect()
}

/// convert a double-precision signal into any sample format
pub fn quantize_signal<T: Sample>(x: &[f64]) -> Vec<T> {
    x.iter().map(|v| T::from_f64(*v)).collect()
}
