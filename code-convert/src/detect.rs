//! Heuristic source-language detection.
//!
//! Scores keyword and symbol signals per candidate language; the highest
//! aggregate score wins. A tie for the top score resolves to `Unknown` rather
//! than an arbitrary pick.

use crate::types::Language;
use regex::Regex;
use std::sync::OnceLock;

const PYTHON_INDICATORS: &[&str] = &[
    "def ",
    "import ",
    "from ",
    "if __name__",
    "print(",
    "elif ",
    "except:",
    "with ",
    "yield ",
    "lambda ",
    "True",
    "False",
    "None",
];

const CPP_INDICATORS: &[&str] = &[
    "#include",
    "using namespace",
    "int main(",
    "std::",
    "cout",
    "cin",
    "endl",
    "public:",
    "private:",
    "protected:",
    "vector<",
    "int ",
    "float ",
    "double ",
    "void ",
    "return 0;",
];

const JAVA_INDICATORS: &[&str] = &[
    "public class",
    "public static void main",
    "System.out.println",
    "private ",
    "protected ",
    "extends ",
    "implements ",
    "package ",
    "import java.",
    "String[]",
];

const JS_INDICATORS: &[&str] = &[
    "function ",
    "var ",
    "let ",
    "const ",
    "console.log",
    "document.",
    "window.",
    "=>",
    "require(",
    "module.exports",
];

fn include_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*#include\s*<.*>").unwrap())
}

fn def_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*def\s+\w+\s*\(").unwrap())
}

fn indent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s{4,}\S").unwrap())
}

fn java_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"public\s+class\s+\w+").unwrap())
}

fn js_function_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"function\s+\w+\s*\(").unwrap())
}

fn indicator_score(code: &str, indicators: &[&str]) -> u32 {
    indicators.iter().filter(|i| code.contains(**i)).count() as u32
}

/// Guess the language of `text`. Pure; never fails. Empty or unrecognizable
/// input yields `Unknown`.
pub fn detect(text: &str) -> Language {
    let code = text.trim();
    if code.is_empty() {
        return Language::Unknown;
    }

    let mut python = indicator_score(code, PYTHON_INDICATORS);
    let mut cpp = indicator_score(code, CPP_INDICATORS);
    let mut java = indicator_score(code, JAVA_INDICATORS);
    let mut js = indicator_score(code, JS_INDICATORS);

    // Structural patterns weigh more than bare keywords
    if include_re().is_match(code) {
        cpp += 3;
    }
    if def_re().is_match(code) {
        python += 3;
    }
    if indent_re().is_match(code) {
        python += 2;
    }
    if java_class_re().is_match(code) {
        java += 3;
    }
    if js_function_re().is_match(code) {
        js += 2;
    }
    if code.contains('{') && code.contains('}') {
        cpp += 1;
        java += 1;
        js += 1;
    }

    let scores = [
        (Language::Python, python),
        (Language::Cpp, cpp),
        (Language::Java, java),
        (Language::JavaScript, js),
    ];

    let mut best = Language::Unknown;
    let mut best_score = 0;
    let mut tied = false;
    for (language, score) in scores {
        if score > best_score {
            best = language;
            best_score = score;
            tied = false;
        } else if score == best_score && score > 0 {
            tied = true;
        }
    }

    if best_score == 0 || tied {
        Language::Unknown
    } else {
        best
    }
}
