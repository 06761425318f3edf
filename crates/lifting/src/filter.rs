//! Lifting filter: a coefficient table addressed by signed tap offset.

use std::ops::Index;

use crate::error::LiftingError;
use crate::sample::Sample;

/// A fixed set of filter taps addressed by signed offset.
///
/// A filter of length `L` with shift `S` covers offsets `S..S + L`. When a
/// lifting step filters around sample `i`, the coefficient at offset `j`
/// weights the sample at `i + j`.
///
/// # Example
///
/// ```
/// use wavelift_lifting::Filter;
///
/// // Two taps at offsets -1 and 0.
/// let f = Filter::new(-1, vec![0.25_f64, 0.75]).unwrap();
/// assert_eq!(f.start(), -1);
/// assert_eq!(f.end(), 1);
/// assert_eq!(f[-1], 0.25);
/// assert_eq!(f.coeff(1), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Filter<T> {
    shift: isize,
    coeffs: Vec<T>,
}

impl<T: Sample> Filter<T> {
    /// Creates a filter whose first coefficient sits at offset `shift`.
    ///
    /// # Errors
    ///
    /// Returns [`LiftingError::EmptyFilter`] if `coeffs` is empty.
    pub fn new(shift: isize, coeffs: Vec<T>) -> Result<Self, LiftingError> {
        if coeffs.is_empty() {
            return Err(LiftingError::EmptyFilter);
        }
        Ok(Self { shift, coeffs })
    }

    /// Creates a filter from `f64` coefficients, narrowing each to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`LiftingError::EmptyFilter`] if `coeffs` is empty.
    pub fn from_f64(shift: isize, coeffs: &[f64]) -> Result<Self, LiftingError> {
        Self::new(shift, coeffs.iter().map(|&c| T::narrow(c)).collect())
    }

    /// Returns the coefficient at signed offset `offset`, or `None` if the
    /// offset lies outside `start()..end()`.
    pub fn coeff(&self, offset: isize) -> Option<T> {
        let slot = usize::try_from(offset - self.shift).ok()?;
        self.coeffs.get(slot).copied()
    }

    /// Iterates over `(offset, coefficient)` pairs in offset order.
    pub fn taps(&self) -> impl Iterator<Item = (isize, T)> + '_ {
        self.coeffs
            .iter()
            .enumerate()
            .map(move |(slot, &c)| (self.shift + slot as isize, c))
    }

    /// Weighted sum `sum_j self[j] * read(i + j)` over every tap.
    #[inline]
    pub(crate) fn apply(&self, i: isize, read: impl Fn(isize) -> T) -> T {
        let mut sum = T::zero();
        for (slot, &c) in self.coeffs.iter().enumerate() {
            sum += c * read(i + self.shift + slot as isize);
        }
        sum
    }
}

impl<T> Filter<T> {
    /// Returns the number of taps.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always `false`: a filter holds at least one tap.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Inclusive first offset.
    pub fn start(&self) -> isize {
        self.shift
    }

    /// Exclusive last offset.
    pub fn end(&self) -> isize {
        self.shift + self.coeffs.len() as isize
    }

    /// Coefficients in offset order.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }
}

impl<T> Index<isize> for Filter<T> {
    type Output = T;

    fn index(&self, offset: isize) -> &T {
        let (start, end) = (self.start(), self.end());
        usize::try_from(offset - self.shift)
            .ok()
            .and_then(|slot| self.coeffs.get(slot))
            .unwrap_or_else(|| panic!("filter offset {offset} outside {start}..{end}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_and_length() {
        let f = Filter::new(-2, vec![1.0_f64, 2.0, 3.0]).unwrap();
        assert_eq!(f.len(), 3);
        assert!(!f.is_empty());
        assert_eq!(f.start(), -2);
        assert_eq!(f.end(), 1);
        assert_eq!(f[-2], 1.0);
        assert_eq!(f[0], 3.0);
    }

    #[test]
    fn coeff_outside_range_is_none() {
        let f = Filter::new(0, vec![0.5_f64]).unwrap();
        assert_eq!(f.coeff(0), Some(0.5));
        assert_eq!(f.coeff(-1), None);
        assert_eq!(f.coeff(1), None);
    }

    #[test]
    fn empty_filter_rejected() {
        let err = Filter::<f64>::new(0, vec![]).unwrap_err();
        assert_eq!(err, LiftingError::EmptyFilter);
    }

    #[test]
    fn taps_yield_offsets() {
        let f = Filter::new(-1, vec![1.0_f64, 2.0]).unwrap();
        let taps: Vec<_> = f.taps().collect();
        assert_eq!(taps, vec![(-1, 1.0), (0, 2.0)]);
    }

    #[test]
    fn apply_shifts_reads() {
        let f = Filter::new(-1, vec![1.0_f64, 10.0]).unwrap();
        let data = [1.0, 2.0, 3.0];
        // i = 1 reads data[0] and data[1].
        let sum = f.apply(1, |k| data[k as usize]);
        assert_eq!(sum, 1.0 + 20.0);
    }

    #[test]
    fn from_f64_narrows() {
        let f = Filter::<f32>::from_f64(0, &[0.1]).unwrap();
        assert_eq!(f[0], 0.1_f32);
    }

    #[test]
    #[should_panic(expected = "filter offset 2 outside 0..1")]
    fn index_outside_range_panics() {
        let f = Filter::new(0, vec![1.0_f64]).unwrap();
        let _ = f[2];
    }
}
