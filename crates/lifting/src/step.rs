//! Compound predict + update + scale lifting stage.

use crate::boundary::{
    BoundaryHandler, BoundaryMode, Constant, Periodic, Reflect, Symmetric, Zero,
};
use crate::error::LiftingError;
use crate::filter::Filter;
use crate::sample::Sample;
use crate::signal::Signal;

/// One lifting stage: predict the odd channel from the even channel,
/// update the even channel from the new odd channel, then scale both.
///
/// Forward, for every `i`:
///
/// ```text
/// odd[i]  += sum_j predict[j] * H(i + j, even)
/// even[i]  = (even[i] + sum_j update[j] * H(i + j, odd)) * scale_even
/// odd[i]  *= scale_odd
/// ```
///
/// The inverse undoes those three passes in reverse order. Each pass only
/// reads the channel it does not write, so the inverse is exact up to
/// rounding.
#[derive(Clone, Debug, PartialEq)]
pub struct LiftingStep<T> {
    predict: Filter<T>,
    update: Filter<T>,
    scale_even: T,
    scale_odd: T,
}

impl<T: Sample> LiftingStep<T> {
    /// Creates a step with unit scale factors.
    pub fn new(predict: Filter<T>, update: Filter<T>) -> Self {
        Self {
            predict,
            update,
            scale_even: T::one(),
            scale_odd: T::one(),
        }
    }

    /// Replaces the scale factors.
    ///
    /// # Errors
    ///
    /// Returns [`LiftingError::ZeroScale`] if either factor is zero, since the
    /// inverse divides by both.
    pub fn with_scales(mut self, scale_even: T, scale_odd: T) -> Result<Self, LiftingError> {
        if scale_even.is_zero() {
            return Err(LiftingError::ZeroScale { parity: "even" });
        }
        if scale_odd.is_zero() {
            return Err(LiftingError::ZeroScale { parity: "odd" });
        }
        self.scale_even = scale_even;
        self.scale_odd = scale_odd;
        Ok(self)
    }

    /// Returns the predict filter.
    pub fn predict(&self) -> &Filter<T> {
        &self.predict
    }

    /// Returns the update filter.
    pub fn update(&self) -> &Filter<T> {
        &self.update
    }

    /// Returns `(scale_even, scale_odd)`.
    pub fn scales(&self) -> (T, T) {
        (self.scale_even, self.scale_odd)
    }

    /// Runs the forward stage in place using the given boundary mode.
    ///
    /// The mode is matched once here; the sample loops run over a
    /// monomorphized [`BoundaryHandler`].
    pub fn forward(&self, even: &mut Signal<T>, odd: &mut Signal<T>, boundary: BoundaryMode) {
        let (even, odd) = (even.as_mut_slice(), odd.as_mut_slice());
        match boundary {
            BoundaryMode::Reflect => self.forward_with::<Reflect>(even, odd),
            BoundaryMode::Symmetric => self.forward_with::<Symmetric>(even, odd),
            BoundaryMode::Periodic => self.forward_with::<Periodic>(even, odd),
            BoundaryMode::Zero => self.forward_with::<Zero>(even, odd),
            BoundaryMode::Constant => self.forward_with::<Constant>(even, odd),
        }
    }

    /// Runs the inverse stage in place using the given boundary mode.
    pub fn inverse(&self, even: &mut Signal<T>, odd: &mut Signal<T>, boundary: BoundaryMode) {
        let (even, odd) = (even.as_mut_slice(), odd.as_mut_slice());
        match boundary {
            BoundaryMode::Reflect => self.inverse_with::<Reflect>(even, odd),
            BoundaryMode::Symmetric => self.inverse_with::<Symmetric>(even, odd),
            BoundaryMode::Periodic => self.inverse_with::<Periodic>(even, odd),
            BoundaryMode::Zero => self.inverse_with::<Zero>(even, odd),
            BoundaryMode::Constant => self.inverse_with::<Constant>(even, odd),
        }
    }

    fn forward_with<H: BoundaryHandler>(&self, even: &mut [T], odd: &mut [T]) {
        for i in 0..odd.len() {
            let sum = self.predict.apply(i as isize, |k| H::eval(k, even));
            odd[i] += sum;
        }
        for i in 0..even.len() {
            let sum = self.update.apply(i as isize, |k| H::eval(k, odd));
            even[i] += sum;
            even[i] *= self.scale_even;
        }
        for v in odd.iter_mut() {
            *v *= self.scale_odd;
        }
    }

    fn inverse_with<H: BoundaryHandler>(&self, even: &mut [T], odd: &mut [T]) {
        for v in odd.iter_mut() {
            *v /= self.scale_odd;
        }
        for i in 0..even.len() {
            let sum = self.update.apply(i as isize, |k| H::eval(k, odd));
            even[i] /= self.scale_even;
            even[i] -= sum;
        }
        for i in 0..odd.len() {
            let sum = self.predict.apply(i as isize, |k| H::eval(k, even));
            odd[i] -= sum;
        }
    }
}
