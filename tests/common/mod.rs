//! Common test utilities and helpers

#![allow(dead_code)]

use acadeval_core::EvaluationStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub const MATH: &str = "matematica";
pub const TASK: &str = "responder_pergunta_academica";

/// Create a store backed by a history file inside a fresh temp dir
pub fn create_test_store() -> (EvaluationStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store =
        EvaluationStore::open(history_path(&temp_dir)).expect("Failed to open evaluation store");
    (store, temp_dir)
}

pub fn history_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("logs").join("evaluation_history.json")
}

/// A well-built calculus answer: headings, steps, lists, LaTeX, a citation
/// and a conclusion, with paragraph sizes and blank-line spacing in range.
pub fn rich_math_response() -> String {
    [
        "# Derivada de uma função",
        "",
        "Vamos começar pelo conceito. A derivada de uma função $f$ no ponto $x_0$ é dada pelo limite $\\lim_{h \\to 0} \\frac{f(x_0 + h) - f(x_0)}{h}$, quando esse limite existe.",
        "Ela significa a taxa de variação instantânea da função em torno do ponto escolhido.",
        "",
        "## Método de cálculo",
        "1. Escreva a função e identifique o ponto de interesse.",
        "2. Aplique a definição de limite ou as regras de derivação.",
        "3. Simplifique a expressão obtida até a forma final.",
        "",
        "Por exemplo, considere $f(x) = x^2$. Pela definição, $f'(x) = 2x$, e a integral de $2x$ recupera $x^2$ a menos de uma constante.",
        "- Regra da potência: $\\frac{d}{dx} x^n = n x^{n-1}$",
        "- Regra da soma: a derivada da soma é a soma das derivadas",
        "",
        "Segundo o livro de Cálculo de Stewart [Stewart, 2013], o teorema fundamental liga derivada e integral.",
        "",
        "Portanto, em conclusão, a derivada é a ferramenta central do cálculo diferencial.",
    ]
    .join("\n")
}

/// A short, unstructured answer with no markers at all
pub fn weak_response() -> String {
    "a resposta e dois".to_string()
}
