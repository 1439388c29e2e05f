//! Evaluation history commands: statistics and recent records

use acadeval_core::error::Result;

use super::helpers::{load_config, open_store, print_json, GlobalOptions};

/// Handle the stats command
pub fn handle_stats(options: &GlobalOptions) -> Result<()> {
    let config = load_config(options)?;
    let store = open_store(&config)?;
    print_json(&store.statistics())
}

/// Handle the recent command
pub fn handle_recent(options: &GlobalOptions, limit: Option<usize>, json: bool) -> Result<()> {
    let config = load_config(options)?;
    let store = open_store(&config)?;
    let recent = store.recent_evaluations(limit.unwrap_or(config.recent_limit));

    if json {
        return print_json(&recent);
    }

    if recent.is_empty() {
        println!("No evaluations recorded yet");
        return Ok(());
    }

    for record in recent {
        println!(
            "{}  {:<14} {:<30} {:.3}  {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.subject_id,
            record.task_type,
            record.confidence_score,
            record.quality_rating
        );
    }
    Ok(())
}
