//! The fit/predict contract the binary is written against.

use crate::dataset::Sample;
use crate::errors::{FitError, PredictError};

pub trait Classifier {
    type Model: Model;

    fn fit(&self, samples: &[Sample]) -> Result<Self::Model, FitError>;
}

pub trait Model {
    /// Class code of `features`: 0 for `Stable`, 1 for `AtRisk`.
    fn predict(&self, features: &[f64]) -> Result<u8, PredictError>;
}
