use crate::coefficients::{Coefficients, MAX_ORDER};
use crate::diagnostics::Diagnostics;
use crate::number::Sample;

/// Direct Form II.
///
/// One delay line `w` on the stack, zeroed at entry. Per sample:
///
/// ```text
/// w[0] = x[n] - a[1]*w[1] - ... - a[order-1]*w[order-1]
/// y[n] = b[0]*w[0] + ... + b[order-1]*w[order-1]
/// w[i] = w[i-1], i = order-1 down to 1
/// ```
///
/// every step saturating.
pub fn df2<T: Sample>(
    input: &[T],
    output: &mut [T],
    coefs: &Coefficients<T>,
    diag: &mut Diagnostics,
) {
    debug_assert_eq!(input.len(), output.len());
    let (b, a) = (coefs.b(), coefs.a());
    let order = coefs.order();
    let mut w = [T::ZERO; MAX_ORDER];

    for (x, y) in input.iter().zip(output.iter_mut()) {
        let mut w0 = *x;
        for i in 1..order {
            w0 = w0.sub_sat(a[i].mul_sat(w[i], diag), diag);
        }
        w[0] = w0;

        let mut acc = T::ZERO;
        for i in 0..order {
            acc = acc.add_sat(b[i].mul_sat(w[i], diag), diag);
        }
        *y = acc;

        w.copy_within(0..order - 1, 1);
    }
}
