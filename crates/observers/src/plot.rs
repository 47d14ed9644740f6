//! Interactive plotting of Euler solutions.
//!
//! See [`PlotObserver`], [`Plottable`], and [`show_solution`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use euler1d_core::Observer;
use euler1d_solvers::transient::euler::{self, Solution};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Euler Method Solution").axes("t", "y(t)").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with no title, no axis labels, and no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x and y axis labels.
    #[must_use]
    pub fn axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<1> for euler::Event {
    fn x(&self) -> Option<f64> {
        Some(self.t)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.y)]
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Pass `&mut PlotObserver` as
/// the solver observer when the event implements [`Plottable<N>`][Plottable],
/// or call [`record`][PlotObserver::record] from a closure to add traces the
/// solver does not produce, such as an exact solution.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["Euler"]);
/// euler::solve(&problem, &mut obs)?;
/// obs.show(ShowConfig::new().title("Euler Method Solution").legend())?;
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
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
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
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    x_label: config.x_label,
                    y_label: config.y_label,
                    legend: config.legend,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// Legend label for a solution trace, e.g. `Euler method (h = 0.5000, n = 10)`.
#[must_use]
pub fn solution_label(solution: &Solution) -> String {
    format!(
        "Euler method (h = {:.4}, n = {})",
        solution.step_size, solution.steps
    )
}

/// Plots a finished solution as `y(t)` against `t` in a blocking window.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_solution(solution: &Solution) -> Result<(), eframe::Error> {
    let label = solution_label(solution);
    let mut obs = PlotObserver::<1>::new([label.as_str()]);
    for (t, y) in solution.points() {
        obs.record(t, [Some(y)]);
    }

    obs.show(
        ShowConfig::new()
            .title("Euler Method Solution")
            .axes("t", "y(t)")
            .legend(),
    )
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("euler_plot");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.as_str());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.as_str());
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
