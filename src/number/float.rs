use crate::diagnostics::Diagnostics;
use crate::number::{Format, Sample};

// IEEE floats never saturate, so both flavours of every operation are the
// plain operator and the diagnostics stay untouched
macro_rules! float_sample {
    ($t:ty, $format:expr) => {
        impl Sample for $t {
            const ZERO: Self = 0.0;
            const FORMAT: Format = $format;

            #[inline(always)]
            fn from_f64(x: f64) -> Self {
                x as $t
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn add_raw(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn sub_raw(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn mul_raw(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn add_sat(self, rhs: Self, _: &mut Diagnostics) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn sub_sat(self, rhs: Self, _: &mut Diagnostics) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn mul_sat(self, rhs: Self, _: &mut Diagnostics) -> Self {
                self * rhs
            }
        }
    };
}

float_sample!(f32, Format::F32);
float_sample!(f64, Format::F64);
