//! Command-line surface: `risk-predictor <GPA> <TREND>`.

use clap::Parser;

use crate::dataset::DIMENSIONS;

/// Classify a student as "Stable" or "At Risk" from their GPA and grade trend.
///
/// The classifier is refitted on the built-in training set on every run.
#[derive(Parser, Debug)]
#[command(name = "risk-predictor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Grade point average
    #[arg(value_name = "GPA", allow_negative_numbers = true, value_parser = parse_finite)]
    pub gpa: f64,

    /// Signed recent grade trend
    #[arg(value_name = "TREND", allow_negative_numbers = true, value_parser = parse_finite)]
    pub trend: f64,
}

/// One observation to classify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub gpa: f64,
    pub trend: f64,
}

impl Query {
    pub fn features(&self) -> [f64; DIMENSIONS] {
        [self.gpa, self.trend]
    }
}

impl Cli {
    pub fn query(&self) -> Query {
        Query {
            gpa: self.gpa,
            trend: self.trend,
        }
    }
}

fn parse_finite(value: &str) -> Result<f64, String> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| String::from("invalid numeric value"))?;

    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(String::from("invalid numeric value: must be finite"))
    }
}
