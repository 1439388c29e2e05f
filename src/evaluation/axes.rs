//! The five axis scorers.
//!
//! Each scorer combines a handful of detectors into a score clamped to
//! `[0.0, 1.0]` and returns the raw signals next to it. Every contribution is
//! non-negative, so clamping from above is the only bound needed.

use crate::evaluation::feature_extractor::{count_present, TextFeatures};
use crate::evaluation::patterns::{ResponseKeywords, ResponsePatterns};
use crate::subjects::SubjectCatalog;
use crate::types::{
    CompletenessMetrics, FormattingMetrics, ReferenceMetrics, StructureMetrics,
    TechnicalContentMetrics,
};

/// Share of the answer searched for introduction keywords
const INTRODUCTION_FRACTION: f64 = 0.2;

/// Ideal mean paragraph length, in characters (inclusive)
const IDEAL_PARAGRAPH_CHARS: (f64, f64) = (100.0, 500.0);
const SHORT_PARAGRAPH_CHARS: f64 = 50.0;

/// Acceptable share of blank lines (inclusive)
const SPACING_RANGE: (f64, f64) = (0.05, 0.3);

/// Uppercase runs tolerated before presentation counts as shouting
const MAX_SHOUTING_RUNS: usize = 3;

fn flag(condition: bool, weight: f64) -> f64 {
    if condition {
        weight
    } else {
        0.0
    }
}

fn clamp_score(raw: f64) -> f64 {
    raw.min(1.0)
}

/// Length plus introduction, development and conclusion markers
pub fn score_completeness(features: &TextFeatures<'_>) -> CompletenessMetrics {
    let word_count = features.word_count();
    let intro = features.leading_lower(INTRODUCTION_FRACTION);

    let has_introduction = ResponseKeywords::INTRODUCTION
        .iter()
        .any(|keyword| intro.contains(keyword));
    let has_development = features.contains_any(ResponseKeywords::DEVELOPMENT);
    let has_conclusion = features.contains_any(ResponseKeywords::CONCLUSION);

    let raw = flag(word_count >= 50, 0.2)
        + flag(word_count >= 150, 0.2)
        + flag(has_introduction, 0.2)
        + flag(has_development, 0.2)
        + flag(has_conclusion, 0.2);

    CompletenessMetrics {
        length: features.char_count(),
        word_count,
        paragraph_count: features.paragraphs().len(),
        has_introduction,
        has_development,
        has_conclusion,
        score: clamp_score(raw),
    }
}

/// Band score for the mean paragraph length
///
/// Both 50..100 and above 500 land on 0.7.
pub fn paragraph_organization(mean_length: Option<f64>) -> f64 {
    match mean_length {
        None => 0.0,
        Some(mean) if (IDEAL_PARAGRAPH_CHARS.0..=IDEAL_PARAGRAPH_CHARS.1).contains(&mean) => 1.0,
        Some(mean) if mean < SHORT_PARAGRAPH_CHARS => 0.3,
        Some(_) => 0.7,
    }
}

/// Headings, lists, numbered steps and paragraph sizing
pub fn score_structure(features: &TextFeatures<'_>) -> StructureMetrics {
    let has_headings = features.matches_any(ResponsePatterns::headings());
    let has_lists = features.matches_any(ResponsePatterns::lists());
    let has_numbered_steps = features.matches_any(ResponsePatterns::numbered_steps());
    let organization = paragraph_organization(features.mean_paragraph_length());

    let raw = flag(has_headings, 0.3)
        + flag(has_lists, 0.2)
        + flag(has_numbered_steps, 0.2)
        + organization * 0.3;

    StructureMetrics {
        has_headings,
        has_lists,
        has_numbered_steps,
        paragraph_organization: organization,
        score: clamp_score(raw),
    }
}

/// Formulas, definitions, examples and subject keyword coverage
pub fn score_technical_content(
    features: &TextFeatures<'_>,
    catalog: &SubjectCatalog,
    subject_id: &str,
) -> TechnicalContentMetrics {
    let has_formulas = features.matches_any(ResponsePatterns::formulas());
    let has_definitions = features.contains_any(ResponseKeywords::DEFINITIONS);
    let has_examples = features.contains_any(ResponseKeywords::EXAMPLES);

    let keywords = catalog.keywords(subject_id);
    let technical_depth = if keywords.is_empty() {
        0.0
    } else {
        let found = count_present(features.lower(), keywords);
        (found as f64 / keywords.len() as f64).min(1.0)
    };

    // Subjects outside the formula-weighted set get a flat bonus whether or
    // not formulas appear.
    let formula_bonus = if catalog.is_formula_weighted(subject_id) {
        flag(has_formulas, 0.4)
    } else {
        0.2
    };

    let raw = formula_bonus
        + flag(has_definitions, 0.3)
        + flag(has_examples, 0.3)
        + technical_depth * 0.2;

    TechnicalContentMetrics {
        has_formulas,
        has_definitions,
        has_examples,
        technical_depth,
        score: clamp_score(raw),
    }
}

/// Citation-like spans and mentions of source material
pub fn score_references(features: &TextFeatures<'_>) -> ReferenceMetrics {
    let has_citations = features.matches_any(ResponsePatterns::citations());
    let mentions_sources = features.contains_any(ResponseKeywords::SOURCES);

    let citation_quality = match (has_citations, mentions_sources) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.5,
        (false, false) => 0.0,
    };

    let raw = flag(has_citations, 0.4) + flag(mentions_sources, 0.3) + citation_quality * 0.3;

    ReferenceMetrics {
        has_citations,
        mentions_sources,
        citation_quality,
        score: clamp_score(raw),
    }
}

/// Math markup, spacing and absence of noisy punctuation or shouting
pub fn score_formatting(
    features: &TextFeatures<'_>,
    catalog: &SubjectCatalog,
    subject_id: &str,
) -> FormattingMetrics {
    let proper_latex = if catalog.requires_math_markup(subject_id) {
        features.matches_any(ResponsePatterns::math_markup())
    } else {
        true
    };

    let good_spacing = features
        .blank_line_ratio()
        .map(|ratio| (SPACING_RANGE.0..=SPACING_RANGE.1).contains(&ratio))
        .unwrap_or(false);

    let text = features.text();
    let clear_presentation = !ResponsePatterns::ellipsis_run().is_match(text)
        && !ResponsePatterns::exclamation_run().is_match(text)
        && ResponsePatterns::shouting().find_iter(text).count() < MAX_SHOUTING_RUNS;

    let raw = flag(proper_latex, 0.4) + flag(good_spacing, 0.3) + flag(clear_presentation, 0.3);

    FormattingMetrics {
        proper_latex,
        good_spacing,
        clear_presentation,
        score: clamp_score(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn words(n: usize) -> String {
        vec!["palavra"; n].join(" ")
    }

    #[test]
    fn test_completeness_length_bands() {
        let m = score_completeness(&TextFeatures::new(&words(49)));
        assert!(approx(m.score, 0.0));

        let m = score_completeness(&TextFeatures::new(&words(50)));
        assert!(approx(m.score, 0.2));

        let m = score_completeness(&TextFeatures::new(&words(150)));
        assert!(approx(m.score, 0.4));
        assert_eq!(m.word_count, 150);
        assert_eq!(m.paragraph_count, 1);
    }

    #[test]
    fn test_completeness_all_signals_reach_one() {
        let text = format!(
            "Vamos ver. {} Por exemplo, o método. Portanto, fim.",
            words(160)
        );
        let m = score_completeness(&TextFeatures::new(&text));
        assert!(m.has_introduction);
        assert!(m.has_development);
        assert!(m.has_conclusion);
        assert!(approx(m.score, 1.0));
    }

    #[test]
    fn test_introduction_only_counts_in_leading_fifth() {
        let text = format!("{} vamos", words(40));
        let m = score_completeness(&TextFeatures::new(&text));
        assert!(!m.has_introduction);
    }

    #[test]
    fn test_paragraph_organization_bands() {
        assert!(approx(paragraph_organization(None), 0.0));
        assert!(approx(paragraph_organization(Some(49.9)), 0.3));
        assert!(approx(paragraph_organization(Some(50.0)), 0.7));
        assert!(approx(paragraph_organization(Some(99.0)), 0.7));
        assert!(approx(paragraph_organization(Some(100.0)), 1.0));
        assert!(approx(paragraph_organization(Some(500.0)), 1.0));
        assert!(approx(paragraph_organization(Some(500.5)), 0.7));
    }

    #[test]
    fn test_structure_signals() {
        let text = "# Título\n\n1. primeiro passo\n2) segundo passo\n- item";
        let m = score_structure(&TextFeatures::new(text));
        assert!(m.has_headings);
        assert!(m.has_lists);
        assert!(m.has_numbered_steps);
        // short paragraphs: 0.3 band
        assert!(approx(m.paragraph_organization, 0.3));
        assert!(approx(m.score, 0.3 + 0.2 + 0.2 + 0.09));
    }

    #[test]
    fn test_structure_empty_is_zero() {
        let m = score_structure(&TextFeatures::new(""));
        assert!(approx(m.score, 0.0));
        assert!(approx(m.paragraph_organization, 0.0));
    }

    #[test]
    fn test_technical_formula_bonus_depends_on_subject() {
        let catalog = SubjectCatalog::builtin();
        let plain = TextFeatures::new("texto sem nada");

        let math = score_technical_content(&plain, &catalog, "matematica");
        assert!(approx(math.score, 0.0));

        let computing = score_technical_content(&plain, &catalog, "computacao");
        assert!(approx(computing.score, 0.2));

        let with_formula = TextFeatures::new("temos $x^2$");
        let math = score_technical_content(&with_formula, &catalog, "matematica");
        assert!(math.has_formulas);
        assert!(approx(math.score, 0.4));

        let computing = score_technical_content(&with_formula, &catalog, "computacao");
        assert!(approx(computing.score, 0.2));
    }

    #[test]
    fn test_technical_depth_fraction() {
        let catalog = SubjectCatalog::builtin();
        let features = TextFeatures::new("A Derivada e a integral");
        let m = score_technical_content(&features, &catalog, "matematica");
        assert!(approx(m.technical_depth, 0.2));
        assert!(approx(m.score, 0.04));

        let unknown = score_technical_content(&features, &catalog, "historia");
        assert!(approx(unknown.technical_depth, 0.0));
    }

    #[test]
    fn test_technical_score_clamped() {
        let catalog = SubjectCatalog::builtin();
        let text = "Definição: considere $f(x)$ com derivada, integral, limite, função, \
                    matriz, determinante, vetor, equação, teorema e demonstração.";
        let m = score_technical_content(&TextFeatures::new(text), &catalog, "matematica");
        assert!(approx(m.technical_depth, 1.0));
        assert!(approx(m.score, 1.0));
    }

    #[test]
    fn test_reference_quality_levels() {
        let both = score_references(&TextFeatures::new("conforme o documento [2]"));
        assert!(approx(both.citation_quality, 1.0));
        assert!(approx(both.score, 1.0));

        let citation_only = score_references(&TextFeatures::new("De acordo com Euler"));
        assert!(approx(citation_only.citation_quality, 0.5));
        assert!(approx(citation_only.score, 0.55));

        let source_only = score_references(&TextFeatures::new("veja o livro texto"));
        assert!(approx(source_only.score, 0.45));

        let none = score_references(&TextFeatures::new("nada"));
        assert!(approx(none.score, 0.0));
    }

    #[test]
    fn test_formatting_markup_only_for_math_subjects() {
        let catalog = SubjectCatalog::builtin();
        let features = TextFeatures::new("sem fórmulas");

        let stats = score_formatting(&features, &catalog, "estatistica");
        assert!(!stats.proper_latex);

        let engineering = score_formatting(&features, &catalog, "engenharia");
        assert!(engineering.proper_latex);
    }

    #[test]
    fn test_formatting_spacing_and_clarity() {
        let catalog = SubjectCatalog::builtin();
        let spaced = "linha um\nlinha dois\nlinha três\n\nlinha quatro\nlinha cinco";
        let m = score_formatting(&TextFeatures::new(spaced), &catalog, "computacao");
        assert!(m.good_spacing);
        assert!(m.clear_presentation);
        assert!(approx(m.score, 1.0));

        let noisy = score_formatting(&TextFeatures::new("Uau!! Isso..."), &catalog, "computacao");
        assert!(!noisy.clear_presentation);

        let shouting = score_formatting(
            &TextFeatures::new("ABC e DEF e GHI"),
            &catalog,
            "computacao",
        );
        assert!(!shouting.clear_presentation);

        let two_runs = score_formatting(&TextFeatures::new("ABC e DEF"), &catalog, "computacao");
        assert!(two_runs.clear_presentation);
    }

    #[test]
    fn test_formatting_empty_response_has_no_spacing() {
        let catalog = SubjectCatalog::builtin();
        let m = score_formatting(&TextFeatures::new(""), &catalog, "matematica");
        assert!(!m.good_spacing);
        assert!(!m.proper_latex);
        assert!(m.clear_presentation);
        assert!(approx(m.score, 0.3));
    }
}
