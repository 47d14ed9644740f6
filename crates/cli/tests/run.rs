use std::fs;

use approx::assert_relative_eq;
use euler1d_cli::{Config, ConfigError, run};
use euler1d_core::InvalidArgument;
use euler1d_solvers::transient::euler::Status;
use tempfile::tempdir;

fn config_text(expression: &str, n: &str, csv_file: &str) -> String {
    format!(
        r#"
[mesh]
n = {n}
domain_start = 0.0
domain_end = 1.0

[initial_conditions]
y_0 = 1.0

[ode_function]
expression = {expression}

[output]
csv_file = '{csv_file}'
print_table = false
"#
    )
}

#[test]
fn solves_and_exports_csv() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("solution.csv");
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        config_text("\"y\"", "2", &csv_path.display().to_string()),
    )
    .unwrap();

    let config = Config::load(&config_path).expect("config should load");
    let solution = run(&config).expect("run should succeed");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.values, vec![1.0, 1.5, 2.25]);
    assert_eq!(
        fs::read_to_string(&csv_path).unwrap(),
        "t,y(t)\n0,1\n0.5,1.5\n1,2.25\n"
    );
}

#[test]
fn forced_decay_stays_finite() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("decay.csv");
    let text = config_text("\"-y + cos(t)\"", "10", &csv_path.display().to_string())
        .replace("domain_end = 1.0", "domain_end = 5.0");
    let config = Config::parse(&text).unwrap();

    let solution = run(&config).unwrap();

    assert_eq!(solution.values.len(), 11);
    assert_relative_eq!(solution.values[0], 1.0);
    assert!(solution.values.iter().all(|y| y.is_finite()));

    let rows = fs::read_to_string(&csv_path).unwrap().lines().count();
    assert_eq!(rows, 12);
}

#[test]
fn stop_on_non_finite_truncates_output() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("blowup.csv");
    let text = format!(
        "{}\n[solver]\nstop_on_non_finite = true\n",
        config_text("\"y * y * 1e200\"", "50", &csv_path.display().to_string())
    );
    let config = Config::parse(&text).unwrap();

    let solution = run(&config).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert!(!solution.values.last().unwrap().is_finite());
    assert_eq!(solution.mesh.len(), solution.values.len());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn non_string_expression_is_rejected_before_solving() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("never.csv");
    let text = config_text("42", "2", &csv_path.display().to_string());

    let result = Config::parse(&text);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidArgument(InvalidArgument::NotCallable))
    ));
    assert!(!csv_path.exists());
}
