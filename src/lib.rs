//! # risk-predictor
//!
//! Fits a logistic-regression classifier on a fixed set of student records
//! (GPA, grade trend) and classifies one new observation as `Stable` or
//! `At Risk`.

pub mod classifier;
pub mod cli;
pub mod dataset;
pub mod errors;
pub mod logging;
pub mod logistic_regression;

use tracing::debug;

use crate::classifier::{Classifier, Model};
use crate::cli::Query;
use crate::dataset::{RiskLabel, Sample};
use crate::errors::RiskError;

/// Fit `classifier` on `samples`, then classify `query`.
pub fn predict_risk<C: Classifier>(
    classifier: &C,
    samples: &[Sample],
    query: &Query,
) -> Result<RiskLabel, RiskError> {
    let model = classifier.fit(samples)?;
    debug!(samples = samples.len(), "classifier fitted");

    let code = model.predict(&query.features())?;
    let label = RiskLabel::from_code(code)?;
    debug!(gpa = query.gpa, trend = query.trend, %label, "query classified");

    Ok(label)
}
