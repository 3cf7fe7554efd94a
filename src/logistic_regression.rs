use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2, ArrayView1, Axis, Slice};
use tracing::{debug, warn};

use crate::classifier::{Classifier, Model};
use crate::dataset::{RiskLabel, Sample, DIMENSIONS};
use crate::errors::{FitError, PredictError};

/// Solver settings. The defaults match the usual library defaults for an
/// L2-penalised logistic regression with a fitted intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// `C`: weight of the data term against the `0.5 * ||w||^2` penalty.
    pub inverse_regularization: f64,
    pub max_iterations: usize,
    /// Largest absolute gradient component accepted as converged.
    pub tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            inverse_regularization: 1.0,
            max_iterations: 100,
            tolerance: 1e-4,
        }
    }
}

/// Binary logistic regression fitted with Newton's method.
#[derive(Debug, Clone, Default)]
pub struct LogisticRegression {
    options: FitOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    weights: Array1<f64>,
    bias: f64,
    iterations: usize,
    converged: bool,
}

const FEATURES_WITH_BIAS_DIMENSION: usize = DIMENSIONS + 1;
const BIAS_INDEX: usize = DIMENSIONS;

const ARMIJO_SLOPE: f64 = 1e-4;
const MAX_STEP_HALVINGS: usize = 30;

fn sigmoid(value: f64) -> f64 {
    if value >= 0.0 {
        1.0 / (1.0 + (-value).exp())
    } else {
        let exp = value.exp();
        exp / (1.0 + exp)
    }
}

/// `ln(1 + e^value)` without overflow for large `value`.
fn softplus(value: f64) -> f64 {
    if value > 0.0 {
        value + (-value).exp().ln_1p()
    } else {
        value.exp().ln_1p()
    }
}

fn max_abs(values: &Array1<f64>) -> f64 {
    values
        .iter()
        .fold(0.0, |current, value| f64::max(current, value.abs()))
}

impl LogisticRegression {
    pub fn new(options: FitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    fn validate(samples: &[Sample]) -> Result<(), FitError> {
        let Some(first) = samples.first() else {
            return Err(FitError::EmptyTrainingSet);
        };

        if let Some(index) = samples
            .iter()
            .position(|sample| sample.features.iter().any(|feature| !feature.is_finite()))
        {
            return Err(FitError::NonFiniteFeature { index });
        }

        if samples.iter().all(|sample| sample.label == first.label) {
            return Err(FitError::SingleClass);
        }

        Ok(())
    }

    fn design_matrix(samples: &[Sample]) -> (Array2<f64>, Array1<f64>) {
        // X with a trailing column of ones for the intercept
        let mut features = Array2::zeros((samples.len(), FEATURES_WITH_BIAS_DIMENSION));

        // y in {-1, 1}
        let mut targets = Array1::zeros(samples.len());

        for (i, sample) in samples.iter().enumerate() {
            for (j, &feature) in sample.features.iter().enumerate() {
                features[(i, j)] = feature;
            }
            features[(i, BIAS_INDEX)] = 1.0;

            targets[i] = sample.label.sign();
        }

        (features, targets)
    }

    fn objective(
        &self,
        features: &Array2<f64>,
        targets: &Array1<f64>,
        parameters: &Array1<f64>,
    ) -> f64 {
        let weights = parameters.slice_axis(Axis(0), Slice::from(..BIAS_INDEX));
        let penalty = 0.5 * weights.dot(&weights);

        let loss: f64 = features
            .rows()
            .into_iter()
            .zip(targets)
            .map(|(row, &target)| softplus(-target * row.dot(parameters)))
            .sum();

        penalty + self.options.inverse_regularization * loss
    }

    fn gradient(
        &self,
        features: &Array2<f64>,
        targets: &Array1<f64>,
        parameters: &Array1<f64>,
    ) -> Array1<f64> {
        let mut gradient = parameters.clone();
        gradient[BIAS_INDEX] = 0.0;

        for (row, &target) in features.rows().into_iter().zip(targets) {
            let margin = target * row.dot(parameters);
            let scale = -self.options.inverse_regularization * target * sigmoid(-margin);

            gradient.zip_mut_with(&row, |current_gradient, &feature_value| {
                *current_gradient += scale * feature_value;
            });
        }

        gradient
    }

    fn hessian(&self, features: &Array2<f64>, parameters: &Array1<f64>) -> Array2<f64> {
        let mut hessian = Array2::eye(FEATURES_WITH_BIAS_DIMENSION);
        hessian[(BIAS_INDEX, BIAS_INDEX)] = 0.0;

        for row in features.rows() {
            let probability = sigmoid(row.dot(parameters));
            let curvature = self.options.inverse_regularization * probability * (1.0 - probability);

            for (i, &left) in row.iter().enumerate() {
                for (j, &right) in row.iter().enumerate() {
                    hessian[(i, j)] += curvature * left * right;
                }
            }
        }

        hessian
    }

    /// Solves `H * step = g`, trying Cholesky before LU.
    fn newton_step(hessian: &Array2<f64>, gradient: &Array1<f64>) -> Option<Array1<f64>> {
        // symmetric, so the row-major iteration order is also column-major
        let hessian = DMatrix::from_vec(
            FEATURES_WITH_BIAS_DIMENSION,
            FEATURES_WITH_BIAS_DIMENSION,
            hessian.iter().copied().collect(),
        );
        let gradient = DVector::from_iterator(FEATURES_WITH_BIAS_DIMENSION, gradient.iter().copied());

        let step = match hessian.clone().cholesky() {
            Some(cholesky) => cholesky.solve(&gradient),
            None => hessian.lu().solve(&gradient)?,
        };

        if step.iter().all(|value| value.is_finite()) {
            Some(Array1::from(step.as_slice().to_vec()))
        } else {
            None
        }
    }

    /// Backtracks along the Newton direction until the objective decreases enough.
    ///
    /// Returns `None` when no step size satisfies the Armijo condition.
    fn line_search(
        &self,
        features: &Array2<f64>,
        targets: &Array1<f64>,
        parameters: &Array1<f64>,
        gradient: &Array1<f64>,
        step: &Array1<f64>,
    ) -> Option<Array1<f64>> {
        let current = self.objective(features, targets, parameters);
        let slope = gradient.dot(step);

        let mut step_size = 1.0;

        for _ in 0..MAX_STEP_HALVINGS {
            let candidate = parameters - &(step * step_size);
            let value = self.objective(features, targets, &candidate);
            if value <= current - ARMIJO_SLOPE * step_size * slope {
                return Some(candidate);
            }

            step_size /= 2.0;
        }

        None
    }

    fn build_model(parameters: &Array1<f64>, iterations: usize, converged: bool) -> LogisticModel {
        LogisticModel {
            weights: parameters
                .slice_axis(Axis(0), Slice::from(..BIAS_INDEX))
                .to_owned(),
            bias: parameters[BIAS_INDEX],
            iterations,
            converged,
        }
    }
}

impl Classifier for LogisticRegression {
    type Model = LogisticModel;

    fn fit(&self, samples: &[Sample]) -> Result<LogisticModel, FitError> {
        Self::validate(samples)?;

        let (features, targets) = Self::design_matrix(samples);
        let mut parameters = Array1::zeros(FEATURES_WITH_BIAS_DIMENSION);

        for iteration in 0..self.options.max_iterations {
            let gradient = self.gradient(&features, &targets, &parameters);
            let gradient_norm = max_abs(&gradient);

            debug!(iteration, gradient_norm, "newton iteration");

            if gradient_norm < self.options.tolerance {
                let model = Self::build_model(&parameters, iteration, true);
                debug!(weights = ?model.weights, bias = model.bias, "logistic regression converged");
                return Ok(model);
            }

            let hessian = self.hessian(&features, &parameters);
            let step =
                Self::newton_step(&hessian, &gradient).ok_or(FitError::Singular { iteration })?;

            let Some(next) = self.line_search(&features, &targets, &parameters, &gradient, &step)
            else {
                warn!(
                    iteration,
                    gradient_norm, "line search could not decrease the objective"
                );
                return Ok(Self::build_model(&parameters, iteration, false));
            };

            parameters = next;
        }

        let gradient_norm = max_abs(&self.gradient(&features, &targets, &parameters));
        let converged = gradient_norm < self.options.tolerance;
        if !converged {
            warn!(
                max_iterations = self.options.max_iterations,
                gradient_norm, "logistic regression did not converge"
            );
        }

        Ok(Self::build_model(
            &parameters,
            self.options.max_iterations,
            converged,
        ))
    }
}

impl LogisticModel {
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Number of Newton steps taken during fitting.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    /// `w . x + b`
    pub fn decision_function(&self, features: &[f64]) -> Result<f64, PredictError> {
        if features.len() != self.weights.len() {
            return Err(PredictError::DimensionMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }

        Ok(ArrayView1::from(features).dot(&self.weights) + self.bias)
    }

    /// Probability of `RiskLabel::AtRisk`.
    pub fn probability(&self, features: &[f64]) -> Result<f64, PredictError> {
        self.decision_function(features).map(sigmoid)
    }
}

impl Model for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<u8, PredictError> {
        let probability = self.probability(features)?;

        if probability > 0.5 {
            Ok(RiskLabel::AtRisk.code())
        } else {
            Ok(RiskLabel::Stable.code())
        }
    }
}
