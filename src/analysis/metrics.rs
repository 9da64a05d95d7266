use crate::number::Sample;

/// Mean of `|reference[i] - test[i]|` over the first `len` samples.
/// `len` is clamped to both buffers, an empty window gives 0.
pub fn mean_absolute_error<T: Sample>(reference: &[f64], test: &[T], len: usize) -> f64 {
    let len = len.min(reference.len()).min(test.len());
    if len == 0 {
        return 0.0;
    }
    let sum: f64 = reference[..len]
        .iter()
        .zip(&test[..len])
        .map(|(r, t)| (r - t.to_f64()).abs())
        .sum();
    sum / len as f64
}

/// Largest `|reference[i] - test[i]|` over the first `len` samples.
pub fn max_absolute_error<T: Sample>(reference: &[f64], test: &[T], len: usize) -> f64 {
    reference
        .iter()
        .zip(test)
        .take(len)
        .map(|(r, t)| (r - t.to_f64()).abs())
        .fold(0.0, f64::max)
}
