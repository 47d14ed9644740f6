//! Observers and output sinks for forward-Euler solutions.
//!
//! Observers plug into [`euler::solve`] and react to each computed point.
//! Sinks consume a finished [`Solution`].
//!
//! # Observers
//!
//! - [`LogObserver`] logs points through the `log` facade
//! - [`FiniteGuard`] stops integration at the first NaN or infinite value
//! - `PlotObserver` collects traces for an egui window (feature `plot`)
//!
//! # Sinks
//!
//! - [`CsvExporter`] writes `t,y(t)` rows to a file or writer
//! - [`write_table`] and [`print_table`] render a fixed-width console table
//! - `show_solution` plots a finished solution (feature `plot`)
//!
//! # Features
//!
//! - `plot` enables the egui plotting types. This feature adds dependencies
//!   on `eframe` and `egui_plot`.
//!
//! [`euler::solve`]: euler1d_solvers::transient::euler::solve
//! [`Solution`]: euler1d_solvers::transient::euler::Solution

pub mod traits;

mod export;
mod guard;
mod logger;
mod table;

#[cfg(feature = "plot")]
mod plot;

pub use export::{CsvExporter, ExportError};
pub use guard::FiniteGuard;
pub use logger::LogObserver;
pub use table::{print_table, write_table};

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig, show_solution, solution_label};
