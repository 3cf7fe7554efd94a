//! The built-in student records and their labels.

use std::fmt;

use crate::errors::LabelError;

pub const DIMENSIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLabel {
    Stable,
    AtRisk,
}

impl RiskLabel {
    pub fn code(self) -> u8 {
        match self {
            RiskLabel::Stable => 0,
            RiskLabel::AtRisk => 1,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, LabelError> {
        match code {
            0 => Ok(RiskLabel::Stable),
            1 => Ok(RiskLabel::AtRisk),
            other => Err(LabelError::UnknownCode(other)),
        }
    }

    /// Signed target used by the logistic loss: -1 for `Stable`, 1 for `AtRisk`.
    pub fn sign(self) -> f64 {
        match self {
            RiskLabel::Stable => -1.0,
            RiskLabel::AtRisk => 1.0,
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::Stable => f.write_str("Stable"),
            RiskLabel::AtRisk => f.write_str("At Risk"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// `[gpa, trend]`
    pub features: [f64; DIMENSIONS],
    pub label: RiskLabel,
}

impl Sample {
    pub const fn new(gpa: f64, trend: f64, label: RiskLabel) -> Self {
        Self {
            features: [gpa, trend],
            label,
        }
    }

    pub fn gpa(&self) -> f64 {
        self.features[0]
    }

    pub fn trend(&self) -> f64 {
        self.features[1]
    }
}

pub const TRAINING_SAMPLES: [Sample; 10] = [
    Sample::new(3.8, 5.0, RiskLabel::Stable),
    Sample::new(3.2, -2.0, RiskLabel::Stable),
    Sample::new(2.8, -8.0, RiskLabel::AtRisk),
    Sample::new(3.9, 3.0, RiskLabel::Stable),
    Sample::new(3.1, 1.0, RiskLabel::Stable),
    Sample::new(3.6, 7.0, RiskLabel::Stable),
    Sample::new(2.9, -5.0, RiskLabel::AtRisk),
    Sample::new(3.7, 4.0, RiskLabel::Stable),
    Sample::new(2.7, -10.0, RiskLabel::AtRisk),
    Sample::new(3.4, 2.0, RiskLabel::Stable),
];
