//! Knowledge base: one folder per subject, PDFs inside
//!
//! ```text
//! knowledge/
//!   matematica/
//!     metadata.yaml      (optional: name, code, description)
//!     calculo_1.pdf
//!   fisica/
//!     ...
//! ```
//!
//! The registry only lists files; it never reads PDF contents.

use crate::error::{AcadevalError, Result};
use crate::subjects::slug::{slugify, title_from_code};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Metadata file names, checked in order
pub const METADATA_FILES: [&str; 3] = ["metadata.yaml", "subject.yaml", "info.yaml"];

/// Display information for a subject folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectInfo {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
struct SubjectMetadata {
    name: Option<String>,
    code: Option<String>,
    description: Option<String>,
}

/// One PDF backing a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub file_name: String,
    /// Path relative to the knowledge root
    pub relative_path: PathBuf,
    pub size_bytes: u64,
}

/// Document counts across the knowledge base
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    pub total_documents: usize,
    pub by_subject: BTreeMap<String, usize>,
    pub total_size: u64,
}

/// Subject registry rooted at a knowledge directory
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    root: PathBuf,
}

impl KnowledgeBase {
    /// Open a knowledge base, creating the root directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root)?;
            info!("Created knowledge directory {}", root.display());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Subject ids (folder names), sorted
    pub fn list_subjects(&self) -> Result<Vec<String>> {
        let mut subjects = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                subjects.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        subjects.sort();
        Ok(subjects)
    }

    fn subject_dir(&self, subject_id: &str) -> Result<PathBuf> {
        let dir = self.root.join(subject_id);
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(AcadevalError::SubjectNotFound(subject_id.to_string()))
        }
    }

    /// Metadata for a subject, falling back to names derived from the folder
    ///
    /// An unreadable or malformed metadata file is logged and ignored.
    pub fn subject_info(&self, subject_id: &str) -> Result<SubjectInfo> {
        let dir = self.subject_dir(subject_id)?;

        let metadata = METADATA_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .and_then(|path| match read_metadata(&path) {
                Ok(metadata) => Some(metadata),
                Err(e) => {
                    warn!("Ignoring subject metadata {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default();

        Ok(SubjectInfo {
            name: metadata
                .name
                .unwrap_or_else(|| title_from_code(subject_id)),
            code: metadata.code.unwrap_or_else(|| subject_id.to_string()),
            description: metadata.description.unwrap_or_default(),
        })
    }

    /// PDFs directly inside a subject folder, sorted by file name
    pub fn documents(&self, subject_id: &str) -> Result<Vec<DocumentEntry>> {
        let dir = self.subject_dir(subject_id)?;

        let mut documents = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            let is_pdf = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false);
            if !is_pdf || !entry.file_type()?.is_file() {
                continue;
            }
            documents.push(DocumentEntry {
                file_name: entry.file_name().to_string_lossy().to_string(),
                relative_path: path
                    .strip_prefix(&self.root)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| path.clone()),
                size_bytes: entry.metadata()?.len(),
            });
        }

        if documents.is_empty() {
            debug!("No PDF documents in subject '{}'", subject_id);
        }
        documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(documents)
    }

    /// Counts and total size of every subject's documents
    pub fn document_statistics(&self) -> Result<DocumentStatistics> {
        let mut stats = DocumentStatistics::default();
        for subject in self.list_subjects()? {
            let documents = self.documents(&subject)?;
            stats.total_documents += documents.len();
            stats.total_size += documents.iter().map(|d| d.size_bytes).sum::<u64>();
            stats.by_subject.insert(subject, documents.len());
        }
        Ok(stats)
    }

    /// Create a subject folder with a `metadata.yaml`
    ///
    /// The folder code is the slug of `name`. An existing metadata file is
    /// only replaced when `force` is set.
    pub fn create_subject(
        &self,
        name: &str,
        display_name: Option<&str>,
        description: Option<&str>,
        force: bool,
    ) -> Result<SubjectInfo> {
        let name = name.trim();
        let code = slugify(name).ok_or_else(|| {
            AcadevalError::InvalidSubject(format!("'{}' produces an empty subject code", name))
        })?;

        let dir = self.root.join(&code);
        fs::create_dir_all(&dir)?;

        let metadata_path = dir.join(METADATA_FILES[0]);
        if metadata_path.exists() && !force {
            return Err(AcadevalError::AlreadyExists(
                metadata_path.display().to_string(),
            ));
        }

        let info = SubjectInfo {
            name: display_name.unwrap_or(name).to_string(),
            code,
            description: description.unwrap_or_default().to_string(),
        };
        fs::write(&metadata_path, serde_yaml::to_string(&info)?)?;
        info!("Subject '{}' written to {}", info.code, metadata_path.display());

        Ok(info)
    }
}

fn read_metadata(path: &Path) -> Result<SubjectMetadata> {
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(SubjectMetadata::default());
    }
    Ok(serde_yaml::from_str(&contents)?)
}

/// Byte count with a binary unit, one decimal: `1536` -> `"1.5KB"`
pub fn human_readable_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.1}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1}TB", size)
}
