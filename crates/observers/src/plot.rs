//! Plotting observer for oscillator runs.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use smd_core::Observer;

use crate::Plottable;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed, or
/// start from [`ShowConfig::displacement`] for the standard trajectory plot.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Damped oscillator").x_label("time").grid())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
    grid: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with no title, no axis labels, no legend and
    /// no grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Displacement against time with a grid, the standard trajectory view.
    #[must_use]
    pub fn displacement() -> Self {
        Self::new()
            .title("Damped oscillator")
            .x_label("time")
            .y_label("displacement")
            .grid()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Draws grid lines on both axes.
    #[must_use]
    pub fn grid(mut self) -> Self {
        self.grid = true;
        self
    }
}

/// An observer that collects traces during a run and displays them via egui.
///
/// The const generic `N` is the number of traces. Record data by either:
///
/// - **Streaming** — pass `&mut PlotObserver` as the observer of
///   [`integrate_observed`](smd_oscillator::integrate_observed); each
///   [`StepEvent`](smd_oscillator::StepEvent) is recorded as it is produced.
/// - **After the fact** — call [`record_all`][PlotObserver::record_all] with
///   the samples of a finished trajectory, or [`record`][PlotObserver::record]
///   for arbitrary points.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["x"]);
/// smd_oscillator::integrate_observed(&params, &mut obs)?;
/// obs.show(ShowConfig::displacement())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Records every item in order, skipping those without an x value.
    pub fn record_all<'a, P, I>(&mut self, items: I)
    where
        P: Plottable<N> + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        for item in items {
            self.record_plottable(item);
        }
    }

    fn record_plottable<P: Plottable<N>>(&mut self, item: &P) {
        if let Some(x) = item.x() {
            self.record(x, item.traces());
        }
    }

    /// Number of points recorded for the trace at `index`.
    #[must_use]
    pub fn len(&self, index: usize) -> usize {
        self.data.get(index).map_or(0, Vec::len)
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record_plottable(event);
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to functions that take an
/// observer by value, so [`PlotObserver::show`] can be called afterwards.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer").show_grid(self.config.grid);
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.config.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.config.y_label {
                plot = plot.y_axis_label(label.clone());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
