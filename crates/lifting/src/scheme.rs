//! Ordered composition of lifting steps.

use crate::boundary::BoundaryMode;
use crate::sample::Sample;
use crate::signal::Signal;
use crate::step::LiftingStep;

/// A fixed sequence of [`LiftingStep`]s sharing one boundary mode.
///
/// `forward` runs the steps first to last; `inverse` runs each step's
/// inverse last to first. A scheme with no steps is the identity.
///
/// Both methods take the odd channel first, mirroring how the benchmark
/// driver hands over its polyphase buffers.
#[derive(Clone, Debug, PartialEq)]
pub struct LiftingScheme<T> {
    steps: Vec<LiftingStep<T>>,
    boundary: BoundaryMode,
}

impl<T: Sample> LiftingScheme<T> {
    /// Creates a scheme from its steps and boundary mode.
    pub fn new(steps: Vec<LiftingStep<T>>, boundary: BoundaryMode) -> Self {
        Self { steps, boundary }
    }

    /// Returns the steps in forward order.
    pub fn steps(&self) -> &[LiftingStep<T>] {
        &self.steps
    }

    /// Returns the boundary mode bound to this scheme.
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Forward transform in place.
    ///
    /// On return `odd` holds the detail subband and `even` the
    /// approximation subband.
    pub fn forward(&self, odd: &mut Signal<T>, even: &mut Signal<T>) {
        for step in &self.steps {
            step.forward(even, odd, self.boundary);
        }
    }

    /// Inverse transform in place, restoring the polyphase channels.
    pub fn inverse(&self, odd: &mut Signal<T>, even: &mut Signal<T>) {
        for step in self.steps.iter().rev() {
            step.inverse(even, odd, self.boundary);
        }
    }
}
