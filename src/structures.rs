//! The four filter structures.
//!
//! DF1, DF2 and TDF2 realize one b/a transfer function, the cascade runs a
//! chain of second-order sections. All of them are generic over [`Sample`],
//! so the same code serves as fixed-point kernel and as floating-point
//! reference. Each call starts from zeroed state and keeps nothing once it
//! returns.
//!
//! `input` and `output` must have the same length. Debug builds assert
//! this; release builds process only the common prefix.

pub mod cascade;
pub mod df1;
pub mod df2;
pub mod tdf2;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coefficients::Coefficients;
use crate::diagnostics::Diagnostics;
use crate::number::Sample;

pub use crate::structures::cascade::{cascade, cascade_with};
pub use crate::structures::df1::df1;
pub use crate::structures::df2::df2;
pub use crate::structures::tdf2::tdf2;

/// the structures that run a single b/a coefficient set
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectForm {
    Df1,
    Df2,
    Tdf2,
}

impl DirectForm {
    pub const ALL: [DirectForm; 3] = [DirectForm::Df1, DirectForm::Df2, DirectForm::Tdf2];

    pub fn label(&self) -> &'static str {
        match self {
            DirectForm::Df1 => "DF1",
            DirectForm::Df2 => "DF2",
            DirectForm::Tdf2 => "TDF2",
        }
    }

    pub fn process<T: Sample>(
        &self,
        input: &[T],
        output: &mut [T],
        coefs: &Coefficients<T>,
        diag: &mut Diagnostics,
    ) {
        match self {
            DirectForm::Df1 => df1(input, output, coefs, diag),
            DirectForm::Df2 => df2(input, output, coefs, diag),
            DirectForm::Tdf2 => tdf2(input, output, coefs, diag),
        }
    }
}

/// any of the four structures, mostly for labelling results
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Structure {
    Direct(DirectForm),
    Cascade,
}

impl Structure {
    pub fn label(&self) -> &'static str {
        match self {
            Structure::Direct(form) => form.label(),
            Structure::Cascade => "CASCADE",
        }
    }
}

impl From<DirectForm> for Structure {
    fn from(form: DirectForm) -> Self {
        Structure::Direct(form)
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the cascade accumulates each section.
///
/// `SourceFaithful` lets a few terms wrap instead of clamping, for formats
/// that set [`Sample::RAW_CASCADE_TERMS`]. For every other format both modes
/// compute the same thing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CascadeArithmetic {
    #[default]
    Saturating,
    SourceFaithful,
}
