use std::iter::FusedIterator;

use smd_core::StepIntegrable;

use crate::{DampedOscillator, Error, ModelParameters, Sample};

/// Returns a lazy iterator over the samples [`integrate`](crate::integrate)
/// would produce for `params`.
///
/// Each call to `next` computes at most one new sample, so a consumer can
/// render or discard samples without the whole trajectory in memory.
///
/// # Errors
///
/// Parameters are validated on construction, so this currently never fails.
/// It returns a `Result` to match [`integrate`](crate::integrate).
pub fn steps(params: &ModelParameters) -> Result<Steps, Error> {
    Ok(Steps {
        model: DampedOscillator::new(params),
        dt: params.dt(),
        next: Sample::INITIAL,
        remaining: params.step_count(),
    })
}

/// Finite, non-restartable producer of oscillator samples.
///
/// Created by [`steps`]. Yields exactly `step_count()` samples and then
/// `None` forever.
#[derive(Debug)]
pub struct Steps {
    model: DampedOscillator,
    dt: f64,
    next: Sample,
    remaining: usize,
}

impl Iterator for Steps {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.next;
        if self.remaining > 0 {
            let derivative = self.model.derivative(&current.state);
            self.next = Sample {
                time: current.time + self.dt,
                state: current.state.step(derivative, self.dt),
            };
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Steps {}

impl FusedIterator for Steps {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_step_count_samples_then_stops() {
        let params = ModelParameters::new(1.0, 0.2, 0.25, 2.0).unwrap();
        let mut iter = steps(&params).unwrap();

        assert_eq!(iter.len(), 8);
        assert_eq!(iter.next(), Some(Sample::INITIAL));
        assert_eq!(iter.by_ref().count(), 7);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn empty_when_duration_below_dt() {
        let params = ModelParameters::new(1.0, 0.2, 0.01, 0.005).unwrap();
        assert_eq!(steps(&params).unwrap().next(), None);
    }

    #[test]
    fn size_hint_shrinks_as_consumed() {
        let params = ModelParameters::new(1.0, 0.2, 0.5, 2.0).unwrap();
        let mut iter = steps(&params).unwrap();

        iter.next();
        assert_eq!(iter.size_hint(), (3, Some(3)));
    }
}
