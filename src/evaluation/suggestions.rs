//! Improvement hints for low-scoring axes

use crate::types::{Axis, EvaluationMetrics};

/// Axes scoring below this get a suggestion
pub const SUGGESTION_THRESHOLD: f64 = 0.6;

impl Axis {
    /// Fixed hint shown when this axis scores low
    pub fn suggestion(&self) -> &'static str {
        match self {
            Axis::Completeness => "Resposta pode ser mais completa com mais detalhes",
            Axis::Structure => "Melhore a organização com cabeçalhos e listas",
            Axis::TechnicalContent => "Inclua mais conteúdo técnico específico da disciplina",
            Axis::References => "Adicione mais referências aos materiais consultados",
            Axis::Formatting => "Melhore a formatação e apresentação do texto",
        }
    }
}

/// One hint per axis below the threshold, in axis order
pub fn generate_suggestions(metrics: &EvaluationMetrics) -> Vec<String> {
    metrics
        .scores()
        .iter()
        .filter(|(_, score)| *score < SUGGESTION_THRESHOLD)
        .map(|(axis, _)| axis.suggestion().to_string())
        .collect()
}
