//! Subject code normalization

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Turn a subject name into a folder code: `"Cálculo Avançado"` -> `"calculo_avancado"`
///
/// NFKD decomposition, combining marks stripped, lowercased, every run of
/// non `[a-z0-9]` characters collapsed into one underscore, underscores
/// trimmed at both ends. Returns `None` when nothing is left.
pub fn slugify(name: &str) -> Option<String> {
    static NON_ALNUM: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Valid slug separator regex"));

    let stripped: String = name
        .nfkd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    let slug = NON_ALNUM.replace_all(&stripped, "_");
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}

/// Human-readable label for a subject folder: `"calculo_avancado"` -> `"Calculo Avancado"`
pub fn title_from_code(code: &str) -> String {
    code.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
