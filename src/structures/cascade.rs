use crate::coefficients::{Section, SosCoefficients};
use crate::diagnostics::Diagnostics;
use crate::number::Sample;
use crate::structures::CascadeArithmetic;

/// Cascade of second-order sections with uniform saturating arithmetic.
pub fn cascade<T: Sample>(
    input: &[T],
    output: &mut [T],
    sos: &SosCoefficients<T>,
    diag: &mut Diagnostics,
) {
    cascade_with(input, output, sos, CascadeArithmetic::Saturating, diag)
}

/// Cascade of second-order sections.
///
/// Each section sees the complete output of the one before it and starts
/// with `w1 = w2 = 0`:
///
/// ```text
/// wn     = in[n] - (a1*w1 + a2*w2)
/// out[n] = (b0*wn + b1*w1) + b2*w2
/// w2 = w1, w1 = wn
/// ```
///
/// A section only ever reads `in[n]` before writing `out[n]`, so the input
/// is copied into `output` once and every section runs in place there.
/// `input` is never written and no scratch buffer is needed. With no
/// sections the input is passed through.
pub fn cascade_with<T: Sample>(
    input: &[T],
    output: &mut [T],
    sos: &SosCoefficients<T>,
    arithmetic: CascadeArithmetic,
    diag: &mut Diagnostics,
) {
    debug_assert_eq!(input.len(), output.len());
    let len = input.len().min(output.len());
    let buf = &mut output[..len];
    buf.copy_from_slice(&input[..len]);

    let raw_terms = arithmetic == CascadeArithmetic::SourceFaithful && T::RAW_CASCADE_TERMS;
    for section in sos.sections() {
        if raw_terms {
            process_section::<T, true>(section, buf, diag);
        } else {
            process_section::<T, false>(section, buf, diag);
        }
    }
}

// RAW skips saturation on a1*w1, b0*wn and the final + b2*w2
#[inline(always)]
fn process_section<T: Sample, const RAW: bool>(
    s: &Section<T>,
    buf: &mut [T],
    diag: &mut Diagnostics,
) {
    let mut w1 = T::ZERO;
    let mut w2 = T::ZERO;

    for sample in buf.iter_mut() {
        let a1w1 = if RAW {
            s.a1.mul_raw(w1)
        } else {
            s.a1.mul_sat(w1, diag)
        };
        let feedback = a1w1.add_sat(s.a2.mul_sat(w2, diag), diag);
        let wn = sample.sub_sat(feedback, diag);

        let b0wn = if RAW {
            s.b0.mul_raw(wn)
        } else {
            s.b0.mul_sat(wn, diag)
        };
        let partial = b0wn.add_sat(s.b1.mul_sat(w1, diag), diag);
        let b2w2 = s.b2.mul_sat(w2, diag);
        *sample = if RAW {
            partial.add_raw(b2w2)
        } else {
            partial.add_sat(b2w2, diag)
        };

        w2 = w1;
        w1 = wn;
    }
}
