//! Rolling statistics over the evaluation history

use crate::types::{EvaluationRecord, EvaluationStatistics, GroupAggregate};
use std::collections::BTreeMap;

/// Default number of most recent records aggregated
pub const DEFAULT_STATISTICS_WINDOW: usize = 100;

/// Recompute statistics for a history
///
/// `total_evaluations` counts the whole history; every other figure covers
/// only the last `window` records. Returns `None` for an empty history.
pub fn compute_statistics(
    evaluations: &[EvaluationRecord],
    window: usize,
) -> Option<EvaluationStatistics> {
    if evaluations.is_empty() {
        return None;
    }

    let start = evaluations.len().saturating_sub(window.max(1));
    let recent = &evaluations[start..];

    let mut stats = EvaluationStatistics {
        total_evaluations: evaluations.len(),
        average_confidence: mean(recent.iter().map(|e| e.confidence_score)),
        ..Default::default()
    };

    for evaluation in recent {
        *stats
            .quality_distribution
            .entry(evaluation.quality_rating)
            .or_insert(0) += 1;
    }

    stats.by_subject = group_by(recent, |e| &e.subject_id);
    stats.by_task_type = group_by(recent, |e| &e.task_type);

    Some(stats)
}

fn group_by<F>(records: &[EvaluationRecord], key: F) -> BTreeMap<String, GroupAggregate>
where
    F: Fn(&EvaluationRecord) -> &String,
{
    let mut sums: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(key(record).clone()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.confidence_score;
    }

    sums.into_iter()
        .map(|(group, (count, total))| {
            (
                group,
                GroupAggregate {
                    count,
                    avg_score: total / count as f64,
                },
            )
        })
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (count, total) = values.fold((0usize, 0.0), |(n, sum), v| (n + 1, sum + v));
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
