use std::{io, path::Path};

use euler1d_solvers::transient::euler::Solution;
use log::debug;
use thiserror::Error;

/// Errors that can occur while exporting a solution.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There are no points to write.
    #[error("nothing to export: the solution has no points")]
    Empty,

    /// The mesh and value sequences are not index-aligned.
    #[error("mesh has {mesh} points but there are {values} values")]
    LengthMismatch { mesh: usize, values: usize },

    /// Creating or writing the CSV file failed.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing buffered output failed.
    #[error("failed to flush CSV output: {0}")]
    Io(#[from] io::Error),
}

/// Writes `(t, y)` pairs as CSV with a header row.
///
/// Defaults to comma-delimited output with the headers `t` and `y(t)`.
/// Each row holds one mesh point and its solution value, in mesh order.
///
/// # Example
///
/// ```
/// use euler1d_observers::CsvExporter;
///
/// let mut out = Vec::new();
/// CsvExporter::new()
///     .write(&[0.0, 0.5, 1.0], &[1.0, 1.5, 2.25], &mut out)
///     .unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "t,y(t)\n0,1\n0.5,1.5\n1,2.25\n");
/// ```
#[derive(Debug, Clone)]
pub struct CsvExporter {
    delimiter: u8,
    time_header: String,
    value_header: String,
}

impl CsvExporter {
    /// Creates an exporter with the default delimiter and headers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            time_header: "t".to_owned(),
            value_header: "y(t)".to_owned(),
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the header row.
    #[must_use]
    pub fn headers(mut self, time: impl Into<String>, value: impl Into<String>) -> Self {
        self.time_header = time.into();
        self.value_header = value.into();
        self
    }

    /// Writes a solver [`Solution`] to `path`, creating or truncating the
    /// file.
    ///
    /// # Errors
    ///
    /// - [`ExportError::Empty`] if there are no points
    /// - [`ExportError::LengthMismatch`] if mesh and values differ in length
    /// - [`ExportError::Csv`] or [`ExportError::Io`] if the file cannot be
    ///   created or written
    pub fn export(&self, solution: &Solution, path: impl AsRef<Path>) -> Result<(), ExportError> {
        self.export_points(&solution.mesh, &solution.values, path)
    }

    /// Writes `mesh` and `values` to `path`.
    ///
    /// # Errors
    ///
    /// See [`CsvExporter::export`].
    pub fn export_points(
        &self,
        mesh: &[f64],
        values: &[f64],
        path: impl AsRef<Path>,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        check_lengths(mesh, values)?;

        let writer = self.builder().from_path(path)?;
        self.write_rows(writer, mesh, values)?;

        debug!("wrote {} rows to {}", mesh.len(), path.display());
        Ok(())
    }

    /// Writes `mesh` and `values` to any [`io::Write`] sink.
    ///
    /// # Errors
    ///
    /// See [`CsvExporter::export`].
    pub fn write<W: io::Write>(
        &self,
        mesh: &[f64],
        values: &[f64],
        sink: W,
    ) -> Result<(), ExportError> {
        check_lengths(mesh, values)?;
        self.write_rows(self.builder().from_writer(sink), mesh, values)
    }

    fn builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder.delimiter(self.delimiter);
        builder
    }

    fn write_rows<W: io::Write>(
        &self,
        mut writer: csv::Writer<W>,
        mesh: &[f64],
        values: &[f64],
    ) -> Result<(), ExportError> {
        writer.write_record([&self.time_header, &self.value_header])?;
        for (t, y) in mesh.iter().zip(values) {
            writer.write_record([t.to_string(), y.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn check_lengths(mesh: &[f64], values: &[f64]) -> Result<(), ExportError> {
    if mesh.len() != values.len() {
        return Err(ExportError::LengthMismatch {
            mesh: mesh.len(),
            values: values.len(),
        });
    }
    if mesh.is_empty() {
        return Err(ExportError::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{fs, sync::Mutex};

    use approx::assert_relative_eq;
    use euler1d_core::ProblemSpec;
    use euler1d_solvers::transient::euler;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use tempfile::tempdir;

    fn read_rows(path: &Path) -> Vec<(f64, f64)> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        let headers: Vec<_> = reader.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["t", "y(t)"]);

        reader
            .records()
            .map(|record| {
                let record = record.unwrap();
                (record[0].parse().unwrap(), record[1].parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn exports_one_row_per_mesh_point() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.csv");
        let problem =
            ProblemSpec::new(|t: f64, y: f64| -y + t.cos(), 0.0, 5.0, 1.0, 10).unwrap();
        let solution = euler::solve_unobserved(&problem).unwrap();

        CsvExporter::new().export(&solution, &path).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 11);
        for ((t, y), (t_expected, y_expected)) in rows.into_iter().zip(solution.points()) {
            assert_relative_eq!(t, t_expected);
            assert_relative_eq!(y, y_expected);
        }
    }

    #[test]
    fn values_survive_text_round_trip_exactly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exact.csv");
        let mesh = [0.0, 0.1, 0.2];
        let values = [1.0 / 3.0, std::f64::consts::PI, -1e-300];

        CsvExporter::new().export_points(&mesh, &values, &path).unwrap();

        let rows = read_rows(&path);
        let read_values: Vec<_> = rows.iter().map(|(_, y)| y.to_bits()).collect();
        let expected: Vec<_> = values.iter().map(|y| y.to_bits()).collect();
        assert_eq!(read_values, expected);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.csv");
        fs::write(&path, "stale contents that are much longer than the new file\n").unwrap();

        CsvExporter::new().export_points(&[0.0], &[2.0], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "t,y(t)\n0,2\n");
    }

    #[test]
    fn custom_delimiter_and_headers() {
        let mut out = Vec::new();
        CsvExporter::new()
            .delimiter(b';')
            .headers("time", "value")
            .write(&[0.0, 1.0], &[3.0, 4.5], &mut out)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "time;value\n0;3\n1;4.5\n");
    }

    /// Records every log line so tests can check levels.
    struct Capture(Mutex<Vec<(Level, String)>>);

    impl Log for Capture {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn export_logs_only_at_debug() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);

        let dir = tempdir().unwrap();
        let path = dir.path().join("quiet.csv");
        CsvExporter::new().export_points(&[0.0, 1.0], &[1.0, 2.0], &path).unwrap();

        let shown = path.display().to_string();
        let lines: Vec<_> = CAPTURE
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, line)| line.contains(&shown))
            .cloned()
            .collect();
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|(level, _)| *level == Level::Debug));
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = CsvExporter::new()
            .write(&[0.0, 1.0], &[1.0], Vec::new())
            .unwrap_err();

        assert!(matches!(
            err,
            ExportError::LengthMismatch { mesh: 2, values: 1 }
        ));
    }

    #[test]
    fn rejects_empty_solution() {
        let err = CsvExporter::new().write(&[], &[], Vec::new()).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
    }

    #[test]
    fn reports_unwritable_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("solution.csv");

        let err = CsvExporter::new().export_points(&[0.0], &[1.0], &path).unwrap_err();

        assert!(matches!(err, ExportError::Csv(_)));
    }
}
