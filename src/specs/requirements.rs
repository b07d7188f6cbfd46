// src/specs/requirements.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::config::options::GradePattern;

static FLEXIBLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(GradePattern::Flexible.regex()).expect("flexible grade regex is valid")
});
static STRICT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(GradePattern::Strict.regex()).expect("strict grade regex is valid")
});
static WS_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

fn grade_regex(pattern: GradePattern) -> &'static Regex {
    match pattern {
        GradePattern::Flexible => &*FLEXIBLE_RE,
        GradePattern::Strict => &*STRICT_RE,
    }
}

/// Grade token plus the requirement sentence it came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GradeRequirement {
    pub grade: Option<String>,
    pub subject: Option<String>,
}

/// Split on whitespace runs that directly follow `.`, `!` or `?`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0usize;
    for ws in WS_RUN_RE.find_iter(text) {
        let ends_sentence = matches!(text[..ws.start()].chars().next_back(), Some('.' | '!' | '?'));
        if ends_sentence {
            out.push(&text[start..ws.start()]);
            start = ws.end();
        }
    }
    out.push(&text[start..]);
    out
}

/// Pull a grade (e.g. "AAA", "A*AA") and its sentence out of requirement text.
///
/// No grade: the whole text is the subject requirement, unless it is empty.
pub fn extract_grade_requirement(text: &str, pattern: GradePattern) -> GradeRequirement {
    let Some(m) = grade_regex(pattern).captures(text).and_then(|c| c.get(1)) else {
        return GradeRequirement {
            grade: None,
            subject: (!text.is_empty()).then(|| s!(text)),
        };
    };
    let grade = m.as_str();
    let subject = split_sentences(text)
        .into_iter()
        .find(|sentence| sentence.contains(grade))
        .map(|sentence| s!(sentence.trim()));

    GradeRequirement { grade: Some(s!(grade)), subject }
}
