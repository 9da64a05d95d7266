//! Precision, overflow and timing analysis on top of the structures.
//!
//! Every run compares a structure in some number format against the same
//! structure in `f64`, which serves as reference. Results come back as
//! report rows. Writing them anywhere is left to the caller.

pub mod metrics;
pub mod overflow;
pub mod precision;
pub mod report;
pub mod response;
pub mod signals;
pub mod timing;

use serde::{Deserialize, Serialize};

use crate::structures::CascadeArithmetic;

pub use crate::analysis::metrics::{max_absolute_error, mean_absolute_error};
pub use crate::analysis::overflow::{overflow_analysis, overflow_analysis_sos};
pub use crate::analysis::precision::{precision_analysis, precision_analysis_sos};
pub use crate::analysis::report::{FilterLabel, OverflowRow, PrecisionRow, SignalKind, TimingRow};
pub use crate::analysis::response::{frequency_response, magnitude_db, sos_frequency_response};
pub use crate::analysis::signals::{impulse, quantize_signal, white_noise};
pub use crate::analysis::timing::{time_cascade, time_structure};

/// samples per precision run
pub const DEFAULT_SAMPLES: usize = 4096;

/// the noise MAE only looks at the start of the response
pub const DEFAULT_RAND_WINDOW: usize = 128;

/// ten minutes at 48 kHz
pub const TIMING_SAMPLES: usize = 48_000 * 60 * 10;

/// Settings shared by all analysis runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// buffer length of every run
    pub samples: usize,
    /// number of leading samples the white-noise MAE is taken over
    pub rand_window: usize,
    /// seed of the white-noise generator, runs are reproducible
    pub seed: u64,
    pub cascade_arithmetic: CascadeArithmetic,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            samples: DEFAULT_SAMPLES,
            rand_window: DEFAULT_RAND_WINDOW,
            seed: 0x5eed,
            cascade_arithmetic: CascadeArithmetic::Saturating,
        }
    }
}

impl AnalysisConfig {
    /// defaults, but with the long buffers of the timing runs
    pub fn timing() -> Self {
        AnalysisConfig {
            samples: TIMING_SAMPLES,
            ..AnalysisConfig::default()
        }
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_rand_window(mut self, rand_window: usize) -> Self {
        self.rand_window = rand_window;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_cascade_arithmetic(mut self, arithmetic: CascadeArithmetic) -> Self {
        self.cascade_arithmetic = arithmetic;
        self
    }

    pub(crate) fn rng(&self) -> fastrand::Rng {
        fastrand::Rng::with_seed(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builders() {
        let config = AnalysisConfig::default();
        assert_eq!(config.samples, 4096);
        assert_eq!(config.rand_window, 128);

        let config = config
            .with_samples(512)
            .with_rand_window(64)
            .with_seed(7)
            .with_cascade_arithmetic(CascadeArithmetic::SourceFaithful);
        assert_eq!(config.samples, 512);
        assert_eq!(config.rand_window, 64);
        assert_eq!(config.seed, 7);
        assert_eq!(config.cascade_arithmetic, CascadeArithmetic::SourceFaithful);

        assert_eq!(AnalysisConfig::timing().samples, 28_800_000);
    }

    #[test]
    fn test_same_seed_same_noise() {
        let config = AnalysisConfig::default().with_seed(42);
        let a = white_noise(64, &mut config.rng());
        let b = white_noise(64, &mut config.rng());
        assert_eq!(a, b);
    }
}
