//! Response scorer: runs the five axes and assembles a record.
//!
//! Scoring is pure. The scorer holds only the subject catalog, so one
//! instance can be shared across threads.

use crate::evaluation::axes::{
    score_completeness, score_formatting, score_references, score_structure,
    score_technical_content,
};
use crate::evaluation::confidence::confidence_score;
use crate::evaluation::feature_extractor::TextFeatures;
use crate::evaluation::suggestions::generate_suggestions;
use crate::subjects::SubjectCatalog;
use crate::types::{EvaluationId, EvaluationMetrics, EvaluationRecord, QualityRating};
use chrono::Utc;
use tracing::debug;

/// Scores answers against a subject catalog
#[derive(Debug, Clone, Default)]
pub struct ResponseScorer {
    catalog: SubjectCatalog,
}

impl ResponseScorer {
    pub fn new(catalog: SubjectCatalog) -> Self {
        Self { catalog }
    }

    /// Compute the five axis results for an answer
    pub fn score(&self, response: &str, subject_id: &str) -> EvaluationMetrics {
        let features = TextFeatures::new(response);

        let metrics = EvaluationMetrics {
            completeness: score_completeness(&features),
            structure: score_structure(&features),
            technical_content: score_technical_content(&features, &self.catalog, subject_id),
            references: score_references(&features),
            formatting: score_formatting(&features, &self.catalog, subject_id),
        };

        debug!(
            "Scored response for {}: completeness={:.2} structure={:.2} technical={:.2} references={:.2} formatting={:.2}",
            subject_id,
            metrics.completeness.score,
            metrics.structure.score,
            metrics.technical_content.score,
            metrics.references.score,
            metrics.formatting.score
        );

        metrics
    }

    /// Build a complete, timestamped evaluation record
    pub fn evaluate(
        &self,
        question: &str,
        response: &str,
        subject_id: &str,
        task_type: &str,
    ) -> EvaluationRecord {
        let metrics = self.score(response, subject_id);
        let confidence = confidence_score(&metrics);
        let suggestions = generate_suggestions(&metrics);

        EvaluationRecord {
            id: EvaluationId::new(),
            timestamp: Utc::now(),
            question: question.to_string(),
            response: response.to_string(),
            subject_id: subject_id.to_string(),
            task_type: task_type.to_string(),
            metrics,
            confidence_score: confidence,
            quality_rating: QualityRating::from_confidence(confidence),
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;

    #[test]
    fn test_empty_response_for_math_subject() {
        let scorer = ResponseScorer::default();
        let record = scorer.evaluate("?", "", "matematica", "responder_pergunta_academica");

        assert_eq!(record.metrics.completeness.word_count, 0);
        assert_eq!(record.metrics.completeness.score, 0.0);
        assert_eq!(record.metrics.structure.score, 0.0);
        assert_eq!(record.metrics.technical_content.score, 0.0);
        assert_eq!(record.metrics.references.score, 0.0);
        assert!(!record.metrics.formatting.good_spacing);
        // only clear presentation survives an empty answer
        assert_eq!(record.confidence_score, 0.03);
        assert_eq!(record.quality_rating, QualityRating::NeedsImprovement);
        assert_eq!(record.suggestions.len(), 5);
        assert_eq!(
            record.suggestions[0],
            "Resposta pode ser mais completa com mais detalhes"
        );
    }

    #[test]
    fn test_empty_response_for_other_subject() {
        let scorer = ResponseScorer::default();
        let record = scorer.evaluate("?", "", "computacao", "explicar_conceito_academico");

        assert_eq!(record.metrics.technical_content.score, 0.2);
        // markup is not required, so formatting stays above the hint threshold
        assert!((record.metrics.formatting.score - 0.7).abs() < 1e-9);
        assert_eq!(record.confidence_score, 0.13);
        assert_eq!(record.quality_rating, QualityRating::NeedsImprovement);
        assert_eq!(record.suggestions.len(), 4);
        assert!(!record
            .suggestions
            .contains(&Axis::Formatting.suggestion().to_string()));
    }

    #[test]
    fn test_suggestions_follow_axis_order() {
        let scorer = ResponseScorer::default();
        let metrics = scorer.score("", "matematica");
        let expected: Vec<String> = Axis::ALL.iter().map(|a| a.suggestion().to_string()).collect();
        assert_eq!(generate_suggestions(&metrics), expected);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = ResponseScorer::default();
        let text = "# Derivadas\n\nA derivada de $x^2$ é $2x$, por exemplo.";
        let a = scorer.evaluate("q", text, "matematica", "t");
        let b = scorer.evaluate("q", text, "matematica", "t");
        assert_eq!(a.metrics, b.metrics);
        assert_eq!(a.confidence_score, b.confidence_score);
        assert_ne!(a.id, b.id);
    }
}
