//! Owned, fixed-length sample buffer.

use std::ops::{Index, IndexMut};

use crate::error::LiftingError;
use crate::sample::Sample;

/// An owned, contiguous buffer of samples.
///
/// Cloning is a deep copy. Moving out with [`std::mem::take`] leaves an
/// empty signal behind. Indexing with `[]` panics past the end; use
/// [`Signal::try_get`] / [`Signal::try_set`] for a reported error instead.
///
/// # Example
///
/// ```
/// use wavelift_lifting::Signal;
///
/// let mut s = Signal::<f64>::from(vec![1.0, 2.0, 3.0]);
/// s[1] = 5.0;
/// assert_eq!(s.as_slice(), &[1.0, 5.0, 3.0]);
/// assert!(s.try_get(3).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Signal<T> {
    data: Vec<T>,
}

impl<T: Sample> Signal<T> {
    /// Creates a zero-filled signal of the given length.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    /// Builds a signal by narrowing every `f64` to `T`.
    pub fn from_f64_slice(values: &[f64]) -> Self {
        Self {
            data: values.iter().map(|&v| T::narrow(v)).collect(),
        }
    }

    /// Widens every sample back to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.data.iter().map(|&v| v.widen()).collect()
    }

    /// Returns the sample at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Returns the sample at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LiftingError::IndexOutOfBounds`] if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<T, LiftingError> {
        self.get(index).ok_or(LiftingError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Overwrites the sample at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LiftingError::IndexOutOfBounds`] if `index >= len()`.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), LiftingError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(LiftingError::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }
}

impl<T> Signal<T> {
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the samples as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the samples as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the signal, returning the underlying buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for Signal<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> AsRef<[T]> for Signal<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for Signal<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.data.len();
        self.data
            .get(index)
            .unwrap_or_else(|| panic!("index {index} out of bounds for signal of length {len}"))
    }
}

impl<T> IndexMut<usize> for Signal<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .unwrap_or_else(|| panic!("index {index} out of bounds for signal of length {len}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let s = Signal::<f32>::new(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_signal() {
        let s = Signal::<f64>::new(0);
        assert!(s.is_empty());
        assert_eq!(s.get(0), None);
    }

    #[test]
    fn clone_is_deep() {
        let a = Signal::from(vec![1.0_f64, 2.0]);
        let mut b = a.clone();
        b[0] = 9.0;
        assert_eq!(a[0], 1.0);
        assert_eq!(b[0], 9.0);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = Signal::from(vec![1.0_f64, 2.0, 3.0]);
        let b = std::mem::take(&mut a);
        assert!(a.is_empty());
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn try_get_and_set_report_bounds() {
        let mut s = Signal::<f64>::new(2);
        s.try_set(1, 4.0).unwrap();
        assert_eq!(s.try_get(1).unwrap(), 4.0);
        assert_eq!(
            s.try_get(2).unwrap_err(),
            LiftingError::IndexOutOfBounds { index: 2, len: 2 }
        );
        assert_eq!(
            s.try_set(5, 1.0).unwrap_err(),
            LiftingError::IndexOutOfBounds { index: 5, len: 2 }
        );
    }

    #[test]
    #[should_panic(expected = "index 4 out of bounds for signal of length 4")]
    fn index_past_end_panics() {
        let s = Signal::<f64>::new(4);
        let _ = s[4];
    }

    #[test]
    fn f64_conversion_round_trip() {
        let s = Signal::<f32>::from_f64_slice(&[0.5, -1.25, 3.0]);
        assert_eq!(s.to_f64_vec(), vec![0.5, -1.25, 3.0]);
    }

    #[test]
    fn signal_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Signal<f64>>();
    }
}
