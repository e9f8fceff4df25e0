use smd_oscillator::{Sample, StepEvent};

/// Extracts plot coordinates from a solver event or sample.
///
/// Return `None` from [`x`][Plottable::x] to skip the value entirely, or
/// `None` in a trace slot to skip only that trace.
///
/// # Example
///
/// ```ignore
/// impl Plottable<2> for MyEvent {
///     fn x(&self) -> Option<f64> {
///         Some(self.time)
///     }
///
///     fn traces(&self) -> [Option<f64>; 2] {
///         [Some(self.displacement), Some(self.velocity)]
///     }
/// }
/// ```
pub trait Plottable<const N: usize> {
    /// The x-axis value, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

/// A sample plots as displacement over time.
impl Plottable<1> for Sample {
    fn x(&self) -> Option<f64> {
        Some(self.time)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.displacement())]
    }
}

/// A sample plots as displacement and velocity over time.
impl Plottable<2> for Sample {
    fn x(&self) -> Option<f64> {
        Some(self.time)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.displacement()), Some(self.velocity())]
    }
}

impl<const N: usize> Plottable<N> for StepEvent
where
    Sample: Plottable<N>,
{
    fn x(&self) -> Option<f64> {
        Plottable::<N>::x(&self.snapshot.input)
    }

    fn traces(&self) -> [Option<f64>; N] {
        Plottable::<N>::traces(&self.snapshot.input)
    }
}
