use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::number::{Format, Sample};

/// Generates a Q-format newtype over a signed storage integer, computing in
/// a wider accumulator and shifting products right by the fractional bits.
macro_rules! q_format {
    (
        $(#[$meta:meta])*
        $name:ident, $bits:ty, $acc:ty, $frac:expr, $format:expr, $raw_cascade:expr
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(
            Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name($bits);

        impl $name {
            /// number of fractional bits
            pub const SHIFT: u32 = $frac;
            pub const ONE: $name = $name(1 << $frac);
            pub const MIN: $name = $name(<$bits>::MIN);
            pub const MAX: $name = $name(<$bits>::MAX);
            /// value of the least significant bit
            pub const LSB: f64 = 1.0 / (1i64 << $frac) as f64;

            pub const fn from_bits(bits: $bits) -> Self {
                $name(bits)
            }

            pub const fn to_bits(self) -> $bits {
                self.0
            }

            /// Scale by `ONE` in single precision and truncate toward zero.
            /// Out-of-range values wrap to the storage width, they are not
            /// clamped.
            pub fn from_f32(x: f32) -> Self {
                $name((x * (1i64 << $frac) as f32) as i64 as $bits)
            }

            /// Same as [`Self::from_f32`], scaling in double precision.
            pub fn from_f64(x: f64) -> Self {
                $name((x * (1i64 << $frac) as f64) as i64 as $bits)
            }

            pub fn to_f32(self) -> f32 {
                self.0 as f32 / (1i64 << $frac) as f32
            }

            pub fn to_f64(self) -> f64 {
                self.0 as f64 / (1i64 << $frac) as f64
            }

            /// Clamp an accumulator value to the storage range, counting the
            /// clamp in `diag`.
            #[inline(always)]
            pub fn saturate(value: $acc, diag: &mut Diagnostics) -> Self {
                if value > <$bits>::MAX as $acc {
                    diag.record_overflow();
                    $name::MAX
                } else if value < <$bits>::MIN as $acc {
                    diag.record_underflow();
                    $name::MIN
                } else {
                    $name(value as $bits)
                }
            }
        }

        impl Sample for $name {
            const ZERO: Self = $name(0);
            const FORMAT: Format = $format;
            const RAW_CASCADE_TERMS: bool = $raw_cascade;

            #[inline(always)]
            fn from_f64(x: f64) -> Self {
                $name::from_f64(x)
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                $name::to_f64(self)
            }

            #[inline(always)]
            fn add_raw(self, rhs: Self) -> Self {
                $name((self.0 as $acc + rhs.0 as $acc) as $bits)
            }

            #[inline(always)]
            fn sub_raw(self, rhs: Self) -> Self {
                $name((self.0 as $acc - rhs.0 as $acc) as $bits)
            }

            #[inline(always)]
            fn mul_raw(self, rhs: Self) -> Self {
                $name(((self.0 as $acc * rhs.0 as $acc) >> $frac) as $bits)
            }

            #[inline(always)]
            fn add_sat(self, rhs: Self, diag: &mut Diagnostics) -> Self {
                $name::saturate(self.0 as $acc + rhs.0 as $acc, diag)
            }

            #[inline(always)]
            fn sub_sat(self, rhs: Self, diag: &mut Diagnostics) -> Self {
                $name::saturate(self.0 as $acc - rhs.0 as $acc, diag)
            }

            // the shift truncates toward negative infinity, it does not round
            #[inline(always)]
            fn mul_sat(self, rhs: Self, diag: &mut Diagnostics) -> Self {
                $name::saturate((self.0 as $acc * rhs.0 as $acc) >> $frac, diag)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_f64())
            }
        }
    };
}

q_format!(
    /// Narrow format, Q4.12: 16-bit storage, 12 fractional bits,
    /// 32-bit accumulator. Range is `[-8.0, 8.0)`.
    Q12, i16, i32, 12, Format::Q12, false
);

q_format!(
    /// Wide format, Q8.24: 32-bit storage, 24 fractional bits,
    /// 64-bit accumulator. Range is `[-128.0, 128.0)`.
    Q24, i32, i64, 24, Format::Q24, true
);
