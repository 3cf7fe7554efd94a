use std::process::ExitCode;

use clap::Parser;
use risk_predictor::{
    cli::Cli, dataset::TRAINING_SAMPLES, logging, logistic_regression::LogisticRegression,
    predict_risk,
};

fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("warning: {err}");
    }

    let cli = Cli::parse();
    let classifier = LogisticRegression::default();

    match predict_risk(&classifier, &TRAINING_SAMPLES, &cli.query()) {
        Ok(label) => {
            println!("{label}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
