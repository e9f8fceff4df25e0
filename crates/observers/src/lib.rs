//! Observers that consume oscillator runs as they are produced.
//!
//! # Modules
//!
//! - [`Plottable`] — maps an event or sample to plot coordinates; implemented
//!   for oscillator [`Sample`]s and [`StepEvent`]s
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`], which records traces and shows them in
//!   a blocking egui window. This feature adds dependencies on `eframe` and
//!   `egui_plot`.
//!
//! [`Sample`]: smd_oscillator::Sample
//! [`StepEvent`]: smd_oscillator::StepEvent

mod plottable;

#[cfg(feature = "plot")]
mod plot;

pub use plottable::Plottable;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, ShowConfig};
