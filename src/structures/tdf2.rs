use crate::coefficients::{Coefficients, MAX_ORDER};
use crate::diagnostics::Diagnostics;
use crate::number::Sample;

/// Transposed Direct Form II.
///
/// Same delay line discipline as [`df2`](crate::structures::df2), but each
/// slot is rebuilt from its neighbour every sample instead of shifted:
///
/// ```text
/// y[n]       = w[0] + b[0]*x[n]
/// w[i]       = (w[i+1] - a[i+1]*y[n]) + b[i+1]*x[n],  i = 0..order-3
/// w[order-2] = b[order-1]*x[n] - a[order-1]*y[n]
/// ```
///
/// With a single tap there is no delay line and the filter is a gain.
pub fn tdf2<T: Sample>(
    input: &[T],
    output: &mut [T],
    coefs: &Coefficients<T>,
    diag: &mut Diagnostics,
) {
    debug_assert_eq!(input.len(), output.len());
    let (b, a) = (coefs.b(), coefs.a());
    let order = coefs.order();
    let mut w = [T::ZERO; MAX_ORDER];

    for (&x, y) in input.iter().zip(output.iter_mut()) {
        let yn = w[0].add_sat(b[0].mul_sat(x, diag), diag);

        if order > 1 {
            for i in 0..order - 2 {
                w[i] = w[i + 1]
                    .sub_sat(a[i + 1].mul_sat(yn, diag), diag)
                    .add_sat(b[i + 1].mul_sat(x, diag), diag);
            }
            w[order - 2] = b[order - 1]
                .mul_sat(x, diag)
                .sub_sat(a[order - 1].mul_sat(yn, diag), diag);
        }

        *y = yn;
    }
}
