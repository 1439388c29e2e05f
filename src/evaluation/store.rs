//! Evaluation store: append-only history persisted as one JSON document.
//!
//! The store owns the history and is its only writer. Every `evaluate` call
//! appends exactly one record, recomputes the rolling statistics and rewrites
//! the whole file. `evaluate` takes `&mut self`; hosts that share a store
//! between threads wrap it in a `Mutex`. Two stores opened on the same file
//! are not coordinated.

use crate::config::AppConfig;
use crate::error::Result;
use crate::evaluation::schema::HistoryDocument;
use crate::evaluation::scorer::ResponseScorer;
use crate::evaluation::statistics::{compute_statistics, DEFAULT_STATISTICS_WINDOW};
use crate::types::{EvaluationRecord, EvaluationStatistics};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persistent evaluation history plus the scorer feeding it
pub struct EvaluationStore {
    path: PathBuf,
    scorer: ResponseScorer,
    window: usize,
    document: HistoryDocument,
}

impl EvaluationStore {
    /// Open a store with the built-in subject catalog and default window
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with(path, ResponseScorer::default(), DEFAULT_STATISTICS_WINDOW)
    }

    /// Open a store using the configured path, subjects and window
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::open_with(
            config.history_path.clone(),
            ResponseScorer::new(config.subject_catalog()),
            config.statistics_window,
        )
    }

    /// Open a store, creating an empty history file if none exists
    ///
    /// A file that exists but does not parse is an error; it is never
    /// overwritten.
    pub fn open_with(path: impl Into<PathBuf>, scorer: ResponseScorer, window: usize) -> Result<Self> {
        let path = path.into();

        let document = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let document = HistoryDocument::from_json(&contents)?;
            debug!(
                "Loaded {} evaluations from {}",
                document.evaluations.len(),
                path.display()
            );
            document
        } else {
            let document = HistoryDocument::default();
            write_document(&path, &document)?;
            info!("Created evaluation history at {}", path.display());
            document
        };

        Ok(Self {
            path,
            scorer,
            window: window.max(1),
            document,
        })
    }

    /// Score an answer, append the record and persist the history
    ///
    /// If the write fails the in-memory history is restored, so memory and
    /// disk never disagree, and the I/O error is returned.
    pub fn evaluate(
        &mut self,
        question: &str,
        response: &str,
        subject_id: &str,
        task_type: &str,
    ) -> Result<EvaluationRecord> {
        let record = self
            .scorer
            .evaluate(question, response, subject_id, task_type);

        self.document.evaluations.push(record.clone());
        let refreshed = compute_statistics(&self.document.evaluations, self.window);
        let previous = std::mem::replace(&mut self.document.statistics, refreshed);

        if let Err(err) = write_document(&self.path, &self.document) {
            self.document.evaluations.pop();
            self.document.statistics = previous;
            return Err(err);
        }

        debug!(
            "Evaluation {} stored: confidence={:.3} rating={} ({} total)",
            record.id,
            record.confidence_score,
            record.quality_rating,
            self.document.evaluations.len()
        );

        Ok(record)
    }

    /// Latest statistics snapshot; zeroed when nothing was evaluated yet
    pub fn statistics(&self) -> EvaluationStatistics {
        self.document.statistics.clone().unwrap_or_default()
    }

    /// Last `limit` records, oldest first
    pub fn recent_evaluations(&self, limit: usize) -> &[EvaluationRecord] {
        let evaluations = &self.document.evaluations;
        &evaluations[evaluations.len().saturating_sub(limit)..]
    }

    /// Full history, oldest first
    pub fn evaluations(&self) -> &[EvaluationRecord] {
        &self.document.evaluations
    }

    pub fn len(&self) -> usize {
        self.document.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.evaluations.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

fn write_document(path: &Path, document: &HistoryDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, document.to_json()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_empty_history() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logs").join("evaluation_history.json");

        let store = EvaluationStore::open(&path).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.statistics(), EvaluationStatistics::default());

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({"evaluations": [], "statistics": {}}));
    }

    #[test]
    fn test_recent_evaluations_keeps_order() {
        let temp = TempDir::new().unwrap();
        let mut store = EvaluationStore::open(temp.path().join("h.json")).unwrap();
        for i in 0..5 {
            store
                .evaluate(&format!("q{}", i), "resposta", "fisica", "t")
                .unwrap();
        }

        let recent = store.recent_evaluations(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].question, "q3");
        assert_eq!(recent[1].question, "q4");
        assert_eq!(store.recent_evaluations(50).len(), 5);
        assert!(store.recent_evaluations(0).is_empty());
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("h.json");
        let mut store = EvaluationStore::open(&path).unwrap();
        store.evaluate("q", "r", "fisica", "t").unwrap();

        // Replace the file with a directory so the next write fails
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let result = store.evaluate("q2", "r", "fisica", "t");
        assert!(matches!(result, Err(crate::error::AcadevalError::Io(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.statistics().total_evaluations, 1);
    }
}
