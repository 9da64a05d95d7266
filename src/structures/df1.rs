use crate::coefficients::Coefficients;
use crate::diagnostics::Diagnostics;
use crate::number::Sample;

/// Direct Form I.
///
/// Past inputs are read from `input`, past outputs from what this call has
/// already written to `output`; anything before the first sample counts as
/// silence. The accumulator has the native width and is re-saturated after
/// every step, with feed-forward and feedback terms interleaved per tap:
///
/// ```text
/// acc = 0
/// for i in 0..order, i <= n:
///     acc += b[i] * x[n - i]
///     if i > 0: acc -= a[i] * y[n - i]
/// y[n] = acc
/// ```
pub fn df1<T: Sample>(
    input: &[T],
    output: &mut [T],
    coefs: &Coefficients<T>,
    diag: &mut Diagnostics,
) {
    debug_assert_eq!(input.len(), output.len());
    let len = input.len().min(output.len());
    let (b, a) = (coefs.b(), coefs.a());
    let order = coefs.order();

    for n in 0..len {
        let mut acc = T::ZERO;
        for i in 0..order.min(n + 1) {
            acc = acc.add_sat(b[i].mul_sat(input[n - i], diag), diag);
            if i > 0 {
                acc = acc.sub_sat(a[i].mul_sat(output[n - i], diag), diag);
            }
        }
        output[n] = acc;
    }
}
