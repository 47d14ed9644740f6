use std::io::{self, Write};

use euler1d_solvers::transient::euler::Solution;

/// Writes one `t = .., y = ..` line per solution point.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_table<W: Write>(solution: &Solution, mut writer: W) -> io::Result<()> {
    for (t, y) in solution.points() {
        writeln!(writer, "t = {t:>5.2}, y = {y:>8.5}")?;
    }
    Ok(())
}

/// Prints the solution table to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_table(solution: &Solution) -> io::Result<()> {
    let stdout = io::stdout();
    write_table(solution, stdout.lock())
}
