//! Text feature detection for answer scoring.
//!
//! Extracts lexical and layout signals from an answer once (lowercased text,
//! paragraphs, line statistics) so every axis scorer reads the same view.
//! All functions here are pure.

use regex::Regex;

/// Pre-computed view of an answer shared by the axis scorers
#[derive(Debug, Clone)]
pub struct TextFeatures<'a> {
    text: &'a str,
    lower: String,
    paragraphs: Vec<&'a str>,
}

impl<'a> TextFeatures<'a> {
    /// Analyze an answer
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            paragraphs: paragraphs(text),
        }
    }

    /// Original text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Lowercased text used for keyword search
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Trimmed, non-blank paragraphs
    pub fn paragraphs(&self) -> &[&'a str] {
        &self.paragraphs
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Whether any keyword occurs in the lowercased text
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        contains_any(&self.lower, keywords)
    }

    /// Whether any pattern matches the original text
    pub fn matches_any(&self, patterns: &[Regex]) -> bool {
        matches_any(self.text, patterns)
    }

    /// Lowercased leading slice covering `fraction` of the characters
    pub fn leading_lower(&self, fraction: f64) -> String {
        let take = (self.char_count() as f64 * fraction) as usize;
        self.text.chars().take(take).collect::<String>().to_lowercase()
    }

    /// Mean character length of the paragraphs, `None` when there are none
    pub fn mean_paragraph_length(&self) -> Option<f64> {
        if self.paragraphs.is_empty() {
            return None;
        }
        let total: usize = self.paragraphs.iter().map(|p| p.chars().count()).sum();
        Some(total as f64 / self.paragraphs.len() as f64)
    }

    /// Share of blank lines among all lines, `None` when there are no lines
    pub fn blank_line_ratio(&self) -> Option<f64> {
        blank_line_ratio(self.text)
    }
}

/// Split on blank-line boundaries, trim, and drop empty chunks
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Substring search of lowercase keywords in already-lowercased text
pub fn contains_any(lower_text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lower_text.contains(keyword))
}

/// Number of keywords present at least once
pub fn count_present<S: AsRef<str>>(lower_text: &str, keywords: &[S]) -> usize {
    keywords
        .iter()
        .filter(|keyword| lower_text.contains(&keyword.as_ref().to_lowercase()))
        .count()
}

pub fn matches_any(text: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(text))
}

pub fn blank_line_ratio(text: &str) -> Option<f64> {
    let mut total = 0usize;
    let mut blank = 0usize;
    for line in text.split('\n') {
        total += 1;
        if line.trim().is_empty() {
            blank += 1;
        }
    }
    if total == 0 {
        return None;
    }
    Some(blank as f64 / total as f64)
}
