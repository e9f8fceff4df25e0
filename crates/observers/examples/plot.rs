//! Forward Euler against the closed-form solution.
//!
//! Integrates the damped oscillator with a chosen step size and overlays the
//! exact displacement. Drift grows with the step size.
//!
//! # Usage
//!
//! ```text
//! cargo run -p smd-observers --example plot --features plot
//! cargo run -p smd-observers --example plot --features plot -- 0.05
//! cargo run -p smd-observers --example plot --features plot -- 0.05 0.0
//! ```
//!
//! Arguments are the step size (default 0.01) and the damping ratio
//! (default 0.25). Try `0.05 0.0` to watch undamped Euler gain energy.

use std::error::Error;

use smd_observers::{PlotObserver, ShowConfig};
use smd_oscillator::{ModelParameters, StepEvent, exact, integrate_observed};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let dt = match args.next() {
        Some(arg) => arg.parse()?,
        None => ModelParameters::DEFAULT_DT,
    };
    let zeta = match args.next() {
        Some(arg) => arg.parse()?,
        None => ModelParameters::DEFAULT_ZETA,
    };

    let params = ModelParameters::new(
        ModelParameters::DEFAULT_OMEGA0,
        zeta,
        dt,
        ModelParameters::DEFAULT_DURATION,
    )?;

    let mut obs = PlotObserver::<2>::new(["Euler (numerical)", "Exact"]);
    integrate_observed(&params, |event: &StepEvent| {
        let sample = event.snapshot.input;
        obs.record(
            sample.time,
            [
                Some(sample.displacement()),
                Some(exact::displacement(&params, sample.time)),
            ],
        );
        None
    })?;

    obs.show(
        ShowConfig::displacement()
            .title(format!("Damped oscillator (ζ={zeta}, dt={dt}): Euler vs. exact"))
            .legend(),
    )?;

    Ok(())
}
