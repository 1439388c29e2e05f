//! On-disk schema of the evaluation history file.
//!
//! ```json
//! { "evaluations": [ ... ], "statistics": { ... } }
//! ```
//!
//! `statistics` is written as `{}` until the first evaluation exists.

use crate::types::{EvaluationRecord, EvaluationStatistics};
use serde::{Deserialize, Serialize};

/// Full persisted document, rewritten on every append
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    /// Chronological order
    #[serde(default)]
    pub evaluations: Vec<EvaluationRecord>,

    #[serde(default, with = "empty_object")]
    pub statistics: Option<EvaluationStatistics>,
}

impl HistoryDocument {
    /// Parse a history document
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    /// Pretty-printed JSON, non-ASCII kept verbatim
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// `None` <-> `{}`; any non-empty object must be a full statistics snapshot
mod empty_object {
    use crate::types::EvaluationStatistics;
    use serde::de::Error as _;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(
        statistics: &Option<EvaluationStatistics>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match statistics {
            Some(stats) => stats.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<EvaluationStatistics>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(map) if map.is_empty() => Ok(None),
            _ => serde_json::from_value(value)
                .map(Some)
                .map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_shape() {
        let json = HistoryDocument::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({"evaluations": [], "statistics": {}}));
    }

    #[test]
    fn test_parse_empty_document() {
        let doc = HistoryDocument::from_json(r#"{"evaluations": [], "statistics": {}}"#).unwrap();
        assert!(doc.evaluations.is_empty());
        assert!(doc.statistics.is_none());
    }

    #[test]
    fn test_parse_statistics_snapshot() {
        let doc = HistoryDocument::from_json(
            r#"{
                "evaluations": [],
                "statistics": {
                    "total_evaluations": 3,
                    "average_confidence": 0.5,
                    "quality_distribution": {"Boa": 1, "Regular": 2},
                    "by_subject": {"fisica": {"count": 3, "avg_score": 0.5}},
                    "by_task_type": {}
                }
            }"#,
        )
        .unwrap();
        let stats = doc.statistics.unwrap();
        assert_eq!(stats.total_evaluations, 3);
        assert_eq!(stats.by_subject["fisica"].count, 3);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(HistoryDocument::from_json("{\"evaluations\": [").is_err());
        assert!(HistoryDocument::from_json(r#"{"evaluations": [], "statistics": {"total_evaluations": "x"}}"#).is_err());
    }
}
