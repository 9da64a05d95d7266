//! Number formats the filter structures run on.
//!
//! Two fixed-point Q formats and the two IEEE float widths all implement
//! [`Sample`], so every structure is written once and instantiated per
//! format. The float formats are the reference the fixed-point formats get
//! compared against.

pub mod fixed;
pub mod float;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;

pub use crate::number::fixed::{Q12, Q24};

/// the available number formats
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    F32,
    F64,
    Q12, // Q4.12 in 16 bits
    Q24, // Q8.24 in 32 bits
}

impl Format {
    pub fn is_fixed(&self) -> bool {
        matches!(self, Format::Q12 | Format::Q24)
    }

    /// short lowercase name, as used in report rows
    pub fn label(&self) -> &'static str {
        match self {
            Format::F32 => "f32",
            Format::F64 => "f64",
            Format::Q12 => "q12",
            Format::Q24 => "q24",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Conversion and arithmetic capability shared by all number formats.
///
/// The `_raw` operations never clamp: for the fixed formats they wrap to
/// the storage width, for floats they are plain IEEE arithmetic. The `_sat`
/// operations clamp fixed-point results to the representable range and
/// record every clamp in `diag`; for floats they are identical to the raw
/// ones and leave `diag` untouched.
pub trait Sample: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    const ZERO: Self;
    const FORMAT: Format;

    /// Whether the cascade's source-faithful mode skips saturation on the
    /// `a1*w1`, `b0*wn` and final `+ b2*w2` terms for this format.
    const RAW_CASCADE_TERMS: bool = false;

    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;

    fn add_raw(self, rhs: Self) -> Self;
    fn sub_raw(self, rhs: Self) -> Self;
    fn mul_raw(self, rhs: Self) -> Self;

    fn add_sat(self, rhs: Self, diag: &mut Diagnostics) -> Self;
    fn sub_sat(self, rhs: Self, diag: &mut Diagnostics) -> Self;
    fn mul_sat(self, rhs: Self, diag: &mut Diagnostics) -> Self;
}
