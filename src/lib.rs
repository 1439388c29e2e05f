//! Acadeval - quality evaluation for academic Q&A answers
//!
//! Scores answers produced by an LLM-backed academic assistant and keeps a
//! persisted history of the results:
//! - Five heuristic axes (completeness, structure, technical content,
//!   references, formatting)
//! - Weighted confidence score and quality tier
//! - Improvement suggestions for weak axes
//! - Rolling statistics per subject and task type
//! - Subject registry over a folder-per-subject knowledge base
//!
//! # Example
//!
//! ```ignore
//! use acadeval_core::{AppConfig, EvaluationStore};
//!
//! fn main() -> acadeval_core::Result<()> {
//!     let config = AppConfig::load(None)?;
//!     let mut store = EvaluationStore::from_config(&config)?;
//!
//!     let record = store.evaluate(
//!         "Explique a segunda lei de Newton",
//!         "A força resultante é igual ao produto da massa pela aceleração...",
//!         "fisica",
//!         "explicar_conceito_academico",
//!     )?;
//!     println!("{}", record.quality_rating);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod evaluation;
pub mod subjects;
pub mod types;

// Re-export commonly used types
pub use crate::config::AppConfig;
pub use error::{AcadevalError, Result};
pub use evaluation::{EvaluationStore, ResponseScorer};
pub use subjects::{KnowledgeBase, SubjectCatalog, SubjectInfo, SubjectProfile};
pub use types::{
    Axis, EvaluationId, EvaluationMetrics, EvaluationRecord, EvaluationStatistics,
    GroupAggregate, QualityRating,
};
