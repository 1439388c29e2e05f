//! Knowledge base subject commands

use acadeval_core::{
    error::Result,
    subjects::{human_readable_size, KnowledgeBase},
};

use anyhow::Context;

use super::helpers::{load_config, print_json, GlobalOptions};

fn open_knowledge_base(options: &GlobalOptions) -> Result<KnowledgeBase> {
    let config = load_config(options)?;
    let base = KnowledgeBase::open(&config.knowledge_root).with_context(|| {
        format!(
            "opening knowledge directory {}",
            config.knowledge_root.display()
        )
    })?;
    Ok(base)
}

/// List subjects with their document counts
pub fn handle_list(options: &GlobalOptions) -> Result<()> {
    let base = open_knowledge_base(options)?;
    let subjects = base.list_subjects()?;

    if subjects.is_empty() {
        println!("No subjects in {}", base.root().display());
        return Ok(());
    }

    for subject in subjects {
        let info = base.subject_info(&subject)?;
        let documents = base.documents(&subject)?;
        let size: u64 = documents.iter().map(|d| d.size_bytes).sum();
        println!(
            "{:<20} {:<30} {:>3} document(s)  {}",
            info.code,
            info.name,
            documents.len(),
            human_readable_size(size)
        );
    }
    Ok(())
}

/// Show one subject's metadata and documents
pub fn handle_show(options: &GlobalOptions, subject: &str) -> Result<()> {
    let base = open_knowledge_base(options)?;
    let info = base.subject_info(subject)?;
    let documents = base.documents(subject)?;

    println!("{} ({})", info.name, info.code);
    if !info.description.is_empty() {
        println!("{}", info.description);
    }
    println!();

    if documents.is_empty() {
        println!("No PDF documents");
    }
    for document in documents {
        println!(
            "  {}  {}",
            document.relative_path.display(),
            human_readable_size(document.size_bytes)
        );
    }
    Ok(())
}

/// Create a subject folder with metadata
pub fn handle_create(
    options: &GlobalOptions,
    name: &str,
    display_name: Option<&str>,
    description: Option<&str>,
    force: bool,
) -> Result<()> {
    let base = open_knowledge_base(options)?;
    let info = base.create_subject(name, display_name, description, force)?;
    println!(
        "Subject '{}' ready at {}",
        info.code,
        base.root().join(&info.code).display()
    );
    print!("{}", serde_yaml::to_string(&info)?);
    Ok(())
}

/// Document statistics for the whole knowledge base
pub fn handle_stats(options: &GlobalOptions) -> Result<()> {
    let base = open_knowledge_base(options)?;
    print_json(&base.document_statistics()?)
}
