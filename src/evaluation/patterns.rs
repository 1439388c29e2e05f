//! Pattern and keyword tables used by the axis scorers
//!
//! Every detector is data: a list of pre-compiled regexes or a list of
//! lowercase keywords. Scorers only ask "does any entry match", so adding a
//! signal means adding an entry here, not a branch in a scorer.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|source| Regex::new(source).expect("Valid response pattern regex"))
        .collect()
}

/// Regex tables, one accessor per detector
pub struct ResponsePatterns;

impl ResponsePatterns {
    /// Markdown headings or a line fully wrapped in bold markers
    pub fn headings() -> &'static [Regex] {
        static PATTERNS: Lazy<Vec<Regex>> =
            Lazy::new(|| compile(&[r"(?m)^#+\s", r"(?m)^\*\*.*\*\*$", r"(?m)^###?\s"]));
        &PATTERNS
    }

    /// Bulleted or dotted-number list items
    pub fn lists() -> &'static [Regex] {
        static PATTERNS: Lazy<Vec<Regex>> =
            Lazy::new(|| compile(&[r"(?m)^\s*[-*+]\s", r"(?m)^\s*\d+\.\s"]));
        &PATTERNS
    }

    /// Numbered steps: `1. ` or `1) `
    pub fn numbered_steps() -> &'static [Regex] {
        static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r"(?m)^\s*\d+[.)]\s"]));
        &PATTERNS
    }

    /// Inline math, LaTeX commands, math symbols, exponents and subscripts
    pub fn formulas() -> &'static [Regex] {
        static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
            compile(&[
                r"\$.*\$",
                r"\\[a-zA-Z]+",
                r"[∑∫∂∆λμπσ]",
                r"\^[0-9]",
                r"_[0-9]",
            ])
        });
        &PATTERNS
    }

    /// Bracketed or parenthetical spans and attribution phrases
    pub fn citations() -> &'static [Regex] {
        static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
            compile(&[
                r"(?i)\[.*\]",
                r"(?i)\(.*\)",
                r"(?i)segundo.*",
                r"(?i)de acordo com",
            ])
        });
        &PATTERNS
    }

    /// Well-formed math markup: `$...$` or `\command{...}`
    pub fn math_markup() -> &'static [Regex] {
        static PATTERNS: Lazy<Vec<Regex>> =
            Lazy::new(|| compile(&[r"\$[^$]+\$", r"\\[a-zA-Z]+\{[^}]*\}"]));
        &PATTERNS
    }

    /// Three or more consecutive periods
    pub fn ellipsis_run() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"[.]{3,}").expect("Valid ellipsis regex"));
        &PATTERN
    }

    /// Two or more consecutive exclamation marks
    pub fn exclamation_run() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"[!]{2,}").expect("Valid exclamation regex"));
        &PATTERN
    }

    /// Runs of three or more ASCII capitals
    pub fn shouting() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"[A-Z]{3,}").expect("Valid uppercase run regex"));
        &PATTERN
    }
}

/// Lowercase keyword tables, matched as substrings of the lowercased answer
pub struct ResponseKeywords;

impl ResponseKeywords {
    pub const INTRODUCTION: &'static [&'static str] =
        &["introdução", "conceito", "definição", "vamos", "primeiro"];

    pub const DEVELOPMENT: &'static [&'static str] = &[
        "exemplo",
        "por exemplo",
        "considere",
        "demonstração",
        "prova",
        "método",
    ];

    pub const CONCLUSION: &'static [&'static str] = &[
        "conclusão",
        "resumo",
        "portanto",
        "assim",
        "finalmente",
        "em suma",
    ];

    pub const DEFINITIONS: &'static [&'static str] = &[
        "define",
        "definição",
        "conceito",
        "é definido como",
        "significa",
    ];

    pub const EXAMPLES: &'static [&'static str] =
        &["exemplo", "por exemplo", "considere", "suponha", "caso"];

    pub const SOURCES: &'static [&'static str] = &[
        "documento",
        "material",
        "apostila",
        "livro",
        "fonte",
        "referência",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_match(patterns: &[Regex], text: &str) -> bool {
        patterns.iter().any(|p| p.is_match(text))
    }

    #[test]
    fn test_heading_patterns() {
        assert!(any_match(ResponsePatterns::headings(), "intro\n## Seção\ntexto"));
        assert!(any_match(ResponsePatterns::headings(), "**Resumo**"));
        assert!(!any_match(ResponsePatterns::headings(), "texto **negrito** aqui"));
        assert!(!any_match(ResponsePatterns::headings(), "#hashtag"));
    }

    #[test]
    fn test_list_and_step_patterns() {
        assert!(any_match(ResponsePatterns::lists(), "itens:\n- um\n- dois"));
        assert!(any_match(ResponsePatterns::lists(), "  3. passo"));
        assert!(!any_match(ResponsePatterns::lists(), "3) passo"));
        assert!(any_match(ResponsePatterns::numbered_steps(), "3) passo"));
        assert!(!any_match(ResponsePatterns::numbered_steps(), "- passo"));
    }

    #[test]
    fn test_formula_patterns() {
        assert!(any_match(ResponsePatterns::formulas(), "seja $x$"));
        assert!(any_match(ResponsePatterns::formulas(), "\\alpha"));
        assert!(any_match(ResponsePatterns::formulas(), "a soma ∑ dos termos"));
        assert!(any_match(ResponsePatterns::formulas(), "x^2"));
        assert!(any_match(ResponsePatterns::formulas(), "a_1"));
        assert!(!any_match(ResponsePatterns::formulas(), "nenhuma fórmula"));
    }

    #[test]
    fn test_citation_patterns_ignore_case() {
        assert!(any_match(ResponsePatterns::citations(), "Segundo o autor"));
        assert!(any_match(ResponsePatterns::citations(), "DE ACORDO COM a norma"));
        assert!(any_match(ResponsePatterns::citations(), "ver [1]"));
        assert!(any_match(ResponsePatterns::citations(), "(ver capítulo 2)"));
        assert!(!any_match(ResponsePatterns::citations(), "sem citação"));
    }

    #[test]
    fn test_math_markup_requires_content() {
        assert!(!any_match(ResponsePatterns::math_markup(), "$$"));
        assert!(any_match(ResponsePatterns::math_markup(), "$a+b$"));
        assert!(any_match(ResponsePatterns::math_markup(), "\\frac{1}{2}"));
        assert!(!any_match(ResponsePatterns::math_markup(), "\\alpha"));
    }

    #[test]
    fn test_keyword_tables_are_lowercase() {
        let tables = [
            ResponseKeywords::INTRODUCTION,
            ResponseKeywords::DEVELOPMENT,
            ResponseKeywords::CONCLUSION,
            ResponseKeywords::DEFINITIONS,
            ResponseKeywords::EXAMPLES,
            ResponseKeywords::SOURCES,
        ];
        for table in tables {
            for keyword in table {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
