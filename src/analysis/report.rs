use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::number::Format;
use crate::structures::Structure;

pub const PRECISION_HEADER: &str = "filter_name,type,structure,cutoff,order,signal,MAE";
pub const TIMING_HEADER: &str = "filter_name,type,structure,cutoff,order,time_seconds";
pub const OVERFLOW_HEADER: &str = "filter_name,type,structure,cutoff,order,overflow,underflow";

/// Filter family and cutoff, taken from coefficient table names such as
/// `ellip_df1_order4_cut2000`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterLabel {
    pub family: String,
    pub cutoff: Option<u32>,
}

impl FilterLabel {
    pub fn new(family: &str, cutoff: Option<u32>) -> Self {
        FilterLabel {
            family: family.to_string(),
            cutoff,
        }
    }

    /// The family is everything before the first `_`, the cutoff the digits
    /// following `_cut`, if any.
    pub fn parse(name: &str) -> Self {
        let family = name.split('_').next().unwrap_or_default();
        let cutoff = name.find("_cut").and_then(|pos| {
            let digits: String = name[pos + 4..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        });
        FilterLabel::new(family, cutoff)
    }

    /// cutoff as printed in rows, `-1` when unknown
    pub fn cutoff_field(&self) -> i64 {
        self.cutoff.map(i64::from).unwrap_or(-1)
    }
}

/// which test signal a precision row was measured with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    Impulse,
    Rand,
}

impl SignalKind {
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Impulse => "impulse",
            SignalKind::Rand => "rand",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One precision measurement: a structure in one format against the `f64`
/// reference, for one test signal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrecisionRow {
    pub filter: FilterLabel,
    pub format: Format,
    pub structure: Structure,
    pub order: usize,
    pub signal: SignalKind,
    pub mae: f64,
    /// clamps during the run being measured
    pub diagnostics: Diagnostics,
}

impl fmt::Display for PrecisionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{}",
            self.filter.family,
            self.format,
            self.structure,
            self.filter.cutoff_field(),
            self.order,
            self.signal,
            scientific(self.mae, 8)
        )
    }
}

/// Wall-clock time of one filtering call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingRow {
    pub filter: FilterLabel,
    pub format: Format,
    pub structure: Structure,
    pub order: usize,
    pub seconds: f64,
}

impl fmt::Display for TimingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{:.6}",
            self.filter.family,
            self.format,
            self.structure,
            self.filter.cutoff_field(),
            self.order,
            self.seconds
        )
    }
}

/// Saturation counts of one run on white noise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverflowRow {
    pub filter: FilterLabel,
    pub format: Format,
    pub structure: Structure,
    pub order: usize,
    pub diagnostics: Diagnostics,
}

impl fmt::Display for OverflowRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{}",
            self.filter.family,
            self.format,
            self.structure,
            self.filter.cutoff_field(),
            self.order,
            self.diagnostics.overflow,
            self.diagnostics.underflow
        )
    }
}

/// `1.23456789e-03` style: signed exponent with at least two digits.
pub fn scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        // inf / NaN
        None => formatted,
    }
}
