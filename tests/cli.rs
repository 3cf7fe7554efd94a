use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_risk-predictor"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("couldn't launch risk-predictor")
}

fn run_with_log(args: &[&str], directive: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_risk-predictor"))
        .args(args)
        .env("RUST_LOG", directive)
        .output()
        .expect("couldn't launch risk-predictor")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn strong_student_is_stable() {
    let output = run(&["3.8", "5"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Stable\n");
}

#[test]
fn declining_student_is_at_risk() {
    let output = run(&["2.7", "-10"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "At Risk\n");
}

#[test]
fn improving_student_is_stable() {
    let output = run(&["3.6", "7"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Stable\n");
}

#[test]
fn output_is_one_of_two_labels() {
    for (gpa, trend) in [("0", "0"), ("4.0", "-20"), ("1.5", "12"), ("3.0", "-3.5")] {
        let output = run(&[gpa, trend]);

        assert!(output.status.success());
        let line = stdout(&output);
        assert!(
            line == "Stable\n" || line == "At Risk\n",
            "unexpected output {line:?} for {gpa} {trend}"
        );
    }
}

#[test]
fn repeated_runs_agree() {
    let first = run(&["3.2", "-3"]);
    let second = run(&["3.2", "-3"]);

    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn missing_trend_fails() {
    let output = run(&["3.5"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("<TREND>"));
}

#[test]
fn non_numeric_gpa_fails() {
    let output = run(&["abc", "2"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let message = stderr(&output);
    assert!(message.contains("invalid numeric value"));
    assert!(message.contains("abc"));
}

#[test]
fn no_arguments_fails() {
    let output = run(&[]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = run_with_log(&["3.8", "5"], "risk_predictor=debug");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Stable\n");
    let log = stderr(&output);
    assert!(log.contains("newton iteration"));
    assert!(log.contains("query classified"));
}

#[test]
fn default_logging_is_quiet() {
    let output = run(&["2.7", "-10"]);

    assert_eq!(stdout(&output), "At Risk\n");
    assert!(stderr(&output).is_empty());
}
