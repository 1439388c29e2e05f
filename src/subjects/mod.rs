//! Subjects: scoring profiles and the on-disk knowledge base.
//!
//! - **SubjectCatalog**: keyword lists and math rules the scorers consult
//! - **KnowledgeBase**: subject folders, their metadata and PDF documents

pub mod catalog;
pub mod knowledge_base;
pub mod slug;

pub use catalog::{SubjectCatalog, SubjectProfile};
pub use knowledge_base::{
    human_readable_size, DocumentEntry, DocumentStatistics, KnowledgeBase, SubjectInfo,
};
pub use slug::slugify;
