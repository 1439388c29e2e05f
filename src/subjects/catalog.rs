//! Per-subject scoring profiles
//!
//! A profile tells the technical-content and formatting scorers which
//! keywords measure depth in a subject and which math conventions apply.
//! Built-in profiles cover the application's default subjects; configuration
//! can add subjects or replace a built-in profile.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Scoring profile for one subject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectProfile {
    /// Display name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Technical keywords (lowercase) used for depth
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Formulas earn the full formula bonus (math-heavy subjects)
    #[serde(default)]
    pub formula_weighted: bool,

    /// Formatting requires `$...$` or `\cmd{...}` markup
    #[serde(default)]
    pub requires_math_markup: bool,
}

impl SubjectProfile {
    fn builtin(keywords: &[&str], formula_weighted: bool, requires_math_markup: bool) -> Self {
        Self {
            name: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            formula_weighted,
            requires_math_markup,
        }
    }
}

static BUILTIN_PROFILES: Lazy<HashMap<String, SubjectProfile>> = Lazy::new(|| {
    let mut profiles = HashMap::new();
    profiles.insert(
        "matematica".to_string(),
        SubjectProfile::builtin(
            &[
                "derivada",
                "integral",
                "limite",
                "função",
                "matriz",
                "determinante",
                "vetor",
                "equação",
                "teorema",
                "demonstração",
            ],
            true,
            true,
        ),
    );
    profiles.insert(
        "fisica".to_string(),
        SubjectProfile::builtin(
            &[
                "força",
                "energia",
                "momento",
                "campo",
                "onda",
                "partícula",
                "velocidade",
                "aceleração",
                "massa",
                "temperatura",
            ],
            true,
            true,
        ),
    );
    profiles.insert(
        "computacao".to_string(),
        SubjectProfile::builtin(
            &[
                "algoritmo",
                "complexidade",
                "estrutura",
                "dados",
                "função",
                "classe",
                "objeto",
                "recursão",
                "iteração",
            ],
            false,
            false,
        ),
    );
    profiles.insert(
        "engenharia".to_string(),
        SubjectProfile::builtin(
            &[
                "sistema",
                "controle",
                "projeto",
                "análise",
                "design",
                "processo",
                "otimização",
                "modelo",
            ],
            false,
            false,
        ),
    );
    profiles.insert(
        "estatistica".to_string(),
        SubjectProfile::builtin(
            &[
                "probabilidade",
                "distribuição",
                "amostra",
                "hipótese",
                "correlação",
                "regressão",
                "variância",
                "média",
            ],
            false,
            true,
        ),
    );
    profiles
});

/// Lookup table of subject profiles keyed by subject id
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectCatalog {
    profiles: HashMap<String, SubjectProfile>,
}

impl SubjectCatalog {
    /// Catalog with only the built-in subjects
    pub fn builtin() -> Self {
        Self {
            profiles: BUILTIN_PROFILES.clone(),
        }
    }

    /// Built-in subjects with configured profiles layered on top
    ///
    /// A configured profile replaces the built-in profile of the same id.
    pub fn with_overrides(overrides: &BTreeMap<String, SubjectProfile>) -> Self {
        let mut catalog = Self::builtin();
        for (id, profile) in overrides {
            catalog.insert(id.clone(), profile.clone());
        }
        catalog
    }

    /// Add or replace a profile; keywords are normalized to lowercase
    pub fn insert(&mut self, id: impl Into<String>, mut profile: SubjectProfile) {
        profile.keywords = profile
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self.profiles.insert(id.into(), profile);
    }

    pub fn profile(&self, subject_id: &str) -> Option<&SubjectProfile> {
        self.profiles.get(subject_id)
    }

    /// Technical keywords for a subject; empty for unknown subjects
    pub fn keywords(&self, subject_id: &str) -> &[String] {
        self.profile(subject_id)
            .map(|p| p.keywords.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_formula_weighted(&self, subject_id: &str) -> bool {
        self.profile(subject_id)
            .map(|p| p.formula_weighted)
            .unwrap_or(false)
    }

    pub fn requires_math_markup(&self, subject_id: &str) -> bool {
        self.profile(subject_id)
            .map(|p| p.requires_math_markup)
            .unwrap_or(false)
    }

    /// Known subject ids, sorted
    pub fn subject_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for SubjectCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
