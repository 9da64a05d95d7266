use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::number::Format;

lazy_static! {
    // process-wide tally, one entry per number format
    static ref TOTALS: DashMap<Format, Diagnostics> = DashMap::new();
}

/// Saturation events recorded while filtering.
///
/// Every saturating primitive takes one of these by `&mut`, so independent
/// filter runs (one per thread, one per buffer, ...) keep separate counts.
/// Clamping to `MAX` counts as an overflow, clamping to `MIN` as an
/// underflow. The counts are diagnostic only, nothing in the kernel reads
/// them back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub overflow: u64,
    pub underflow: u64,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    #[inline(always)]
    pub fn record_overflow(&mut self) {
        self.overflow = self.overflow.saturating_add(1);
    }

    #[inline(always)]
    pub fn record_underflow(&mut self) {
        self.underflow = self.underflow.saturating_add(1);
    }

    /// total number of clamping events
    pub fn saturations(&self) -> u64 {
        self.overflow.saturating_add(self.underflow)
    }

    /// true if nothing was clamped
    pub fn is_clean(&self) -> bool {
        self.saturations() == 0
    }

    pub fn merge(&mut self, other: &Diagnostics) {
        self.overflow = self.overflow.saturating_add(other.overflow);
        self.underflow = self.underflow.saturating_add(other.underflow);
    }

    pub fn clear(&mut self) {
        *self = Diagnostics::default();
    }
}

/// Add the counts of a finished run to the process-wide tally of `format`.
pub fn publish(format: Format, diag: &Diagnostics) {
    TOTALS.entry(format).or_default().merge(diag);
}

/// Everything published so far for `format`.
pub fn totals(format: Format) -> Diagnostics {
    TOTALS.get(&format).map(|d| *d).unwrap_or_default()
}

pub fn reset_totals() {
    TOTALS.clear();
}
