//! Configuration command

use acadeval_core::error::Result;

use super::helpers::{load_config, GlobalOptions};

/// Print the effective configuration as TOML
pub fn handle_show(options: &GlobalOptions) -> Result<()> {
    let config = load_config(options)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the subject profiles the scorers will use
pub fn handle_subjects(options: &GlobalOptions) -> Result<()> {
    let config = load_config(options)?;
    let catalog = config.subject_catalog();

    for id in catalog.subject_ids() {
        let Some(profile) = catalog.profile(id) else {
            continue;
        };
        println!(
            "{:<14} formulas:{:<5} markup:{:<5} keywords: {}",
            id,
            profile.formula_weighted,
            profile.requires_math_markup,
            profile.keywords.join(", ")
        );
    }
    Ok(())
}
