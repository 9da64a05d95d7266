//! IIR filter kernels in fixed and floating point.
//!
//! Four structures realize the same transfer function: direct form I and II,
//! transposed direct form II, and a cascade of second-order sections. They
//! are written once over [`number::Sample`] and run in
//!
//! * [`Q12`]: Q4.12 in 16 bits, 32 bit intermediates
//! * [`Q24`]: Q8.24 in 32 bits, 64 bit intermediates
//! * `f32` / `f64`: the reference the fixed-point results are judged against
//!
//! Fixed-point arithmetic saturates, and every clamp is counted in the
//! [`Diagnostics`] passed to the call.
//!
//! ```
//! use iir_kernel::{df2, Coefficients, Diagnostics, Sample, Q24};
//!
//! let coefs = Coefficients::new(vec![0.0055, 0.0111, 0.0055], vec![1.0, -1.7786, 0.8008])
//!     .unwrap()
//!     .quantize::<Q24>();
//!
//! let mut x = vec![Q24::ZERO; 64];
//! x[0] = Q24::ONE;
//! let mut y = vec![Q24::ZERO; 64];
//! let mut diag = Diagnostics::new();
//!
//! df2(&x, &mut y, &coefs, &mut diag);
//! assert!(diag.is_clean());
//! ```

#[macro_use]
extern crate lazy_static;

pub mod analysis;
pub mod coefficients;
pub mod diagnostics;
pub mod error;
pub mod number;
pub mod structures;

pub use crate::analysis::AnalysisConfig;
pub use crate::coefficients::{Coefficients, Section, SosCoefficients, MAX_ORDER};
pub use crate::diagnostics::Diagnostics;
pub use crate::error::{FilterError, Result};
pub use crate::number::{Format, Sample, Q12, Q24};
pub use crate::structures::{
    cascade, cascade_with, df1, df2, tdf2, CascadeArithmetic, DirectForm, Structure,
};
