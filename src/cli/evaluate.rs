//! Answer evaluation command

use acadeval_core::error::Result;
use std::path::PathBuf;
use tracing::info;

use super::helpers::{load_config, open_store, print_json, read_response, GlobalOptions};

/// Handle the evaluate command
pub fn handle(
    options: &GlobalOptions,
    question: String,
    subject: String,
    task_type: String,
    response_file: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(options)?;
    let response = read_response(response_file.as_ref())?;

    let mut store = open_store(&config)?;
    let record = store.evaluate(&question, &response, &subject, &task_type)?;

    info!(
        "Evaluated answer for '{}': {} ({:.3})",
        subject, record.quality_rating, record.confidence_score
    );

    print_json(&record)
}
