//! Core data types for the acadeval evaluator
//!
//! This module defines the records produced by scoring an answer: the five
//! per-axis results, the combined evaluation record, the quality tiers and the
//! rolling statistics kept by the evaluation store. Field names follow the
//! persisted JSON document, so these types are the on-disk format too.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Unique identifier for evaluation records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationId(pub Uuid);

impl EvaluationId {
    /// Create a new random evaluation ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an evaluation ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for EvaluationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EvaluationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five scoring dimensions, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Completeness,
    Structure,
    TechnicalContent,
    References,
    Formatting,
}

impl Axis {
    /// All axes in the order they are scored and reported
    pub const ALL: [Axis; 5] = [
        Axis::Completeness,
        Axis::Structure,
        Axis::TechnicalContent,
        Axis::References,
        Axis::Formatting,
    ];

    /// Key used for this axis in the persisted `metrics` object
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Completeness => "completeness",
            Axis::Structure => "structure",
            Axis::TechnicalContent => "technical_content",
            Axis::References => "references",
            Axis::Formatting => "formatting",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete quality tier derived from the confidence score
///
/// Variants are declared from best to worst so that ordered maps list the
/// distribution top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityRating {
    #[serde(rename = "Excelente")]
    Excellent,

    #[serde(rename = "Boa")]
    Good,

    #[serde(rename = "Regular")]
    Fair,

    #[serde(rename = "Necessita Melhoria")]
    NeedsImprovement,
}

impl QualityRating {
    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            QualityRating::Excellent => "Excelente",
            QualityRating::Good => "Boa",
            QualityRating::Fair => "Regular",
            QualityRating::NeedsImprovement => "Necessita Melhoria",
        }
    }
}

impl std::fmt::Display for QualityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Completeness signals: length and introduction/development/conclusion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessMetrics {
    /// Length in characters
    pub length: usize,
    pub word_count: usize,
    pub paragraph_count: usize,
    pub has_introduction: bool,
    pub has_development: bool,
    pub has_conclusion: bool,
    pub score: f64,
}

/// Structural organization signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureMetrics {
    pub has_headings: bool,
    pub has_lists: bool,
    pub has_numbered_steps: bool,
    /// Band score for the mean paragraph length (0.0, 0.3, 0.7 or 1.0)
    pub paragraph_organization: f64,
    pub score: f64,
}

/// Subject-aware technical content signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalContentMetrics {
    pub has_formulas: bool,
    pub has_definitions: bool,
    pub has_examples: bool,
    /// Fraction of the subject's technical keywords found in the answer
    pub technical_depth: f64,
    pub score: f64,
}

/// Citation and source-mention signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMetrics {
    pub has_citations: bool,
    pub mentions_sources: bool,
    pub citation_quality: f64,
    pub score: f64,
}

/// Presentation signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattingMetrics {
    /// Math markup present, or not required for the subject
    pub proper_latex: bool,
    pub good_spacing: bool,
    pub clear_presentation: bool,
    pub score: f64,
}

/// The five axis results of one evaluation
///
/// Fixed shape: every record carries exactly these five keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub completeness: CompletenessMetrics,
    pub structure: StructureMetrics,
    pub technical_content: TechnicalContentMetrics,
    pub references: ReferenceMetrics,
    pub formatting: FormattingMetrics,
}

impl EvaluationMetrics {
    /// Score of a single axis
    pub fn score(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Completeness => self.completeness.score,
            Axis::Structure => self.structure.score,
            Axis::TechnicalContent => self.technical_content.score,
            Axis::References => self.references.score,
            Axis::Formatting => self.formatting.score,
        }
    }

    /// All axis scores in evaluation order
    pub fn scores(&self) -> [(Axis, f64); 5] {
        Axis::ALL.map(|axis| (axis, self.score(axis)))
    }
}

/// One immutable assessment of one answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    #[serde(default)]
    pub id: EvaluationId,
    /// Written as RFC 3339; offset-less ISO-8601 values are read as UTC
    #[serde(with = "iso_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub question: String,
    pub response: String,
    pub subject_id: String,
    pub task_type: String,
    pub metrics: EvaluationMetrics,
    pub confidence_score: f64,
    pub quality_rating: QualityRating,
    pub suggestions: Vec<String>,
}

// RFC 3339 out; RFC 3339 or naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` in
mod iso_timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", raw)))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Count and mean confidence for one subject or task type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupAggregate {
    pub count: usize,
    pub avg_score: f64,
}

/// Rolling statistics over the most recent evaluations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationStatistics {
    /// Count over the whole history, not just the window
    pub total_evaluations: usize,
    pub average_confidence: f64,
    #[serde(default)]
    pub quality_distribution: BTreeMap<QualityRating, usize>,
    #[serde(default)]
    pub by_subject: BTreeMap<String, GroupAggregate>,
    #[serde(default)]
    pub by_task_type: BTreeMap<String, GroupAggregate>,
}
