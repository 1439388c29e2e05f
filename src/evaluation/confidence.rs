//! Confidence aggregation and quality classification

use crate::types::{Axis, EvaluationMetrics, QualityRating};

impl Axis {
    /// Weight of this axis in the confidence score; weights sum to 1.0
    pub fn weight(&self) -> f64 {
        match self {
            Axis::Completeness => 0.25,
            Axis::Structure => 0.20,
            Axis::TechnicalContent => 0.30,
            Axis::References => 0.15,
            Axis::Formatting => 0.10,
        }
    }
}

/// Tier thresholds, inclusive lower bounds checked top-down
const RATING_THRESHOLDS: [(f64, QualityRating); 3] = [
    (0.8, QualityRating::Excellent),
    (0.6, QualityRating::Good),
    (0.4, QualityRating::Fair),
];

/// Round to three decimal places
///
/// Rounds the exact binary value: a sum stored as `0.79949999...` gives
/// `0.799`.
pub fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}

/// Weighted sum of the five axis scores, rounded to three decimals
pub fn confidence_score(metrics: &EvaluationMetrics) -> f64 {
    let total: f64 = metrics
        .scores()
        .iter()
        .map(|(axis, score)| axis.weight() * score)
        .sum();
    round3(total)
}

impl QualityRating {
    /// Classify a confidence score
    pub fn from_confidence(confidence: f64) -> Self {
        RATING_THRESHOLDS
            .iter()
            .find(|(threshold, _)| confidence >= *threshold)
            .map(|(_, rating)| *rating)
            .unwrap_or(QualityRating::NeedsImprovement)
    }
}
