use crate::Sample;

/// The time-ordered samples produced by one integration run.
///
/// A trajectory is only ever built by the integrator and exposes no way to
/// change its samples afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    pub(crate) fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples, indexed by step.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// The `(time, displacement)` pairs a renderer draws.
    #[must_use]
    pub fn displacement_series(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [s.time, s.displacement()])
            .collect()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
