//! Error enumerations.

use thiserror::Error;

/// Errors raised while fitting a classifier on training samples.
#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    #[error("cannot fit: empty training data")]
    EmptyTrainingSet,

    /// Every sample carries the same label, so no decision boundary exists.
    #[error("cannot fit: single-class training data")]
    SingleClass,

    #[error("cannot fit: sample {index} has a non-finite feature")]
    NonFiniteFeature { index: usize },

    /// The Newton system could not be solved at the given iteration.
    #[error("cannot fit: singular system at iteration {iteration}")]
    Singular { iteration: usize },
}

/// Errors raised by a fitted model on a query point.
#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    #[error("cannot predict: query has {actual} features, model expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum LabelError {
    #[error("unknown class code {0}")]
    UnknownCode(u8),
}

/// Top-level error surfaced by the binary.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Predict(#[from] PredictError),

    #[error(transparent)]
    Label(#[from] LabelError),
}
