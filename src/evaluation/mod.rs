//! Response quality evaluation.
//!
//! Scores a generated academic answer along five independent axes, combines
//! them into a confidence score and a quality tier, and keeps a persisted
//! history with rolling statistics.
//!
//! # Architecture
//!
//! - **patterns / feature_extractor**: table-driven text detectors
//! - **axes**: completeness, structure, technical content, references, formatting
//! - **confidence**: weighted aggregate and tier classification
//! - **suggestions**: one hint per weak axis
//! - **scorer**: runs the pipeline for one answer
//! - **store**: append-only history file plus statistics
//!
//! # Usage
//!
//! ```rust,no_run
//! use acadeval_core::evaluation::EvaluationStore;
//!
//! # fn example() -> acadeval_core::Result<()> {
//! let mut store = EvaluationStore::open("logs/evaluation_history.json")?;
//!
//! let record = store.evaluate(
//!     "O que é uma derivada?",
//!     "A derivada mede a taxa de variação...",
//!     "matematica",
//!     "responder_pergunta_academica",
//! )?;
//! println!("{} ({})", record.confidence_score, record.quality_rating);
//!
//! let stats = store.statistics();
//! println!("{} evaluations", stats.total_evaluations);
//! # Ok(())
//! # }
//! ```

pub mod axes;
pub mod confidence;
pub mod feature_extractor;
pub mod patterns;
pub mod schema;
pub mod scorer;
pub mod statistics;
pub mod store;
pub mod suggestions;

pub use confidence::confidence_score;
pub use feature_extractor::TextFeatures;
pub use schema::HistoryDocument;
pub use scorer::ResponseScorer;
pub use statistics::{compute_statistics, DEFAULT_STATISTICS_WINDOW};
pub use store::EvaluationStore;
pub use suggestions::generate_suggestions;
