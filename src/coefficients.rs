//! Coefficient sets consumed by the filter structures.
//!
//! Both kinds are validated once on construction and then only read, so the
//! structures can index them without further checks.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::number::Sample;

/// Capacity of the DF2 / TDF2 delay lines, in taps.
pub const MAX_ORDER: usize = 64;

/// A transfer function as two parallel tap vectors.
///
/// `b` is the feed-forward part, `a` the feedback part. `a[0]` is
/// conventionally unity and never read by the recurrences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "UncheckedCoefficients<T>",
    bound(deserialize = "T: Sample + Deserialize<'de>")
)]
pub struct Coefficients<T> {
    b: Vec<T>,
    a: Vec<T>,
}

// serialized shape, validated through `Coefficients::new` before use
#[derive(Deserialize)]
struct UncheckedCoefficients<T> {
    b: Vec<T>,
    a: Vec<T>,
}

impl<T: Sample> TryFrom<UncheckedCoefficients<T>> for Coefficients<T> {
    type Error = FilterError;

    fn try_from(unchecked: UncheckedCoefficients<T>) -> Result<Self> {
        Coefficients::new(unchecked.b, unchecked.a)
    }
}

impl<T: Sample> Coefficients<T> {
    pub fn new(b: Vec<T>, a: Vec<T>) -> Result<Self> {
        if b.len() != a.len() {
            return Err(FilterError::LengthMismatch {
                b: b.len(),
                a: a.len(),
            });
        }
        if b.is_empty() {
            return Err(FilterError::EmptyCoefficients);
        }
        if b.len() > MAX_ORDER {
            return Err(FilterError::OrderTooLarge { order: b.len() });
        }
        Ok(Coefficients { b, a })
    }

    pub fn from_slices(b: &[T], a: &[T]) -> Result<Self> {
        Coefficients::new(b.to_vec(), a.to_vec())
    }

    /// `b = [1, 0, ...]`, `a = [1, 0, ...]`: passes any signal through unchanged
    pub fn identity(order: usize) -> Result<Self> {
        let one = T::from_f64(1.0);
        let mut b = vec![T::ZERO; order];
        let mut a = vec![T::ZERO; order];
        if let (Some(b0), Some(a0)) = (b.first_mut(), a.first_mut()) {
            *b0 = one;
            *a0 = one;
        }
        Coefficients::new(b, a)
    }

    pub fn b(&self) -> &[T] {
        &self.b
    }

    pub fn a(&self) -> &[T] {
        &self.a
    }

    /// number of taps, one more than the filter order
    pub fn order(&self) -> usize {
        self.b.len()
    }

    /// the filter order (degree of the polynomials)
    pub fn filter_order(&self) -> usize {
        self.b.len() - 1
    }

    /// Convert every tap into another number format.
    pub fn quantize<U: Sample>(&self) -> Coefficients<U> {
        debug!(
            "quantizing {} taps from {} to {}",
            self.order(),
            T::FORMAT,
            U::FORMAT
        );
        Coefficients {
            b: self.b.iter().map(|x| U::from_f64(x.to_f64())).collect(),
            a: self.a.iter().map(|x| U::from_f64(x.to_f64())).collect(),
        }
    }
}

/// One biquad record, `[b0, b1, b2, a0, a1, a2]`. `a0` is carried along
/// but the cascade treats it as unity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    pub b0: T,
    pub b1: T,
    pub b2: T,
    pub a0: T,
    pub a1: T,
    pub a2: T,
}

impl<T: Sample> Section<T> {
    pub fn from_array(c: [T; 6]) -> Self {
        Section {
            b0: c[0],
            b1: c[1],
            b2: c[2],
            a0: c[3],
            a1: c[4],
            a2: c[5],
        }
    }

    pub fn to_array(&self) -> [T; 6] {
        [self.b0, self.b1, self.b2, self.a0, self.a1, self.a2]
    }

    /// Lift a b/a set of at most three taps into a section, missing taps
    /// are zero.
    pub fn from_coefficients(coefs: &Coefficients<T>) -> Result<Self> {
        if coefs.order() > 3 {
            return Err(FilterError::NotABiquad {
                order: coefs.order(),
            });
        }
        let tap = |v: &[T], i: usize| v.get(i).copied().unwrap_or(T::ZERO);
        Ok(Section {
            b0: tap(coefs.b(), 0),
            b1: tap(coefs.b(), 1),
            b2: tap(coefs.b(), 2),
            a0: tap(coefs.a(), 0),
            a1: tap(coefs.a(), 1),
            a2: tap(coefs.a(), 2),
        })
    }

    fn quantize<U: Sample>(&self) -> Section<U> {
        let q = |x: T| U::from_f64(x.to_f64());
        Section {
            b0: q(self.b0),
            b1: q(self.b1),
            b2: q(self.b2),
            a0: q(self.a0),
            a1: q(self.a1),
            a2: q(self.a2),
        }
    }
}

/// Ordered second-order sections, applied first to last.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SosCoefficients<T> {
    sections: Vec<Section<T>>,
}

impl<T: Sample> SosCoefficients<T> {
    pub fn new(sections: Vec<Section<T>>) -> Self {
        SosCoefficients { sections }
    }

    /// From the flat `[b0, b1, b2, a0, a1, a2] * sections` layout.
    pub fn from_flat(flat: &[T]) -> Result<Self> {
        if flat.len() % 6 != 0 {
            return Err(FilterError::RaggedSections { len: flat.len() });
        }
        let sections = flat
            .chunks_exact(6)
            .map(|c| Section::from_array([c[0], c[1], c[2], c[3], c[4], c[5]]))
            .collect();
        Ok(SosCoefficients { sections })
    }

    pub fn from_rows(rows: &[[T; 6]]) -> Self {
        SosCoefficients {
            sections: rows.iter().map(|r| Section::from_array(*r)).collect(),
        }
    }

    pub fn to_flat(&self) -> Vec<T> {
        self.sections.iter().flat_map(|s| s.to_array()).collect()
    }

    pub fn sections(&self) -> &[Section<T>] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// two poles per section
    pub fn filter_order(&self) -> usize {
        2 * self.sections.len()
    }

    pub fn quantize<U: Sample>(&self) -> SosCoefficients<U> {
        debug!(
            "quantizing {} sections from {} to {}",
            self.len(),
            T::FORMAT,
            U::FORMAT
        );
        SosCoefficients {
            sections: self.sections.iter().map(|s| s.quantize()).collect(),
        }
    }
}
