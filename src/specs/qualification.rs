// src/specs/qualification.rs
use std::sync::LazyLock;

use regex::Regex;

/// Recognised qualification abbreviations, in match priority order.
pub const QUALIFICATIONS: &[&str] = &[
    "BSc", "BA", "BEng", "MEng", "MSc", "MA", "PhD", "MPhil", "LLB", "LLM",
    "MB", "MBBS", "MD", "BDS", "DDS", "PharmD", "MSCi", "MPharm", "DVM", "JD",
];

static QUALIFICATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alts = QUALIFICATIONS.join("|");
    Regex::new(&format!(r"(?i)\b({alts})\b")).expect("qualification regex is valid")
});

static EMPTY_PARENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\s*\)\s*").expect("empty parens regex is valid"));

/// First whole-word qualification token in `title`, case-insensitive.
/// Returned as written in the title ("bsc" stays "bsc").
pub fn find_qualification(title: &str) -> Option<String> {
    QUALIFICATION_RE
        .captures(title)
        .and_then(|c| c.get(1))
        .map(|m| s!(m.as_str()))
}

/// Split a course title into `(qualification, title without it)`.
///
/// Removal is case-sensitive on the returned token, so other spellings of the
/// same qualification elsewhere in the title survive.
///
/// ```
/// use degree_facts::specs::qualification::extract_qualification_type;
///
/// let (ty, title) = extract_qualification_type("MEng Chemical Engineering (International Study)");
/// assert_eq!(ty.as_deref(), Some("MEng"));
/// assert_eq!(title, "Chemical Engineering (International Study)");
/// ```
pub fn extract_qualification_type(title: &str) -> (Option<String>, String) {
    let Some(token) = find_qualification(title) else {
        return (None, s!(title));
    };

    let stripped = Regex::new(&format!(r"\b{}\b", regex::escape(&token)))
        .map(|re| re.replace_all(title, "").into_owned())
        .unwrap_or_else(|_| s!(title));

    let clean = EMPTY_PARENS_RE.replace_all(stripped.trim(), "");
    (Some(token), s!(clean.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_token() {
        let (ty, title) = extract_qualification_type("MEng Chemical Engineering (International Study)");
        assert_eq!(ty.as_deref(), Some("MEng"));
        assert_eq!(title, "Chemical Engineering (International Study)");
    }

    #[test]
    fn collapses_emptied_parenthetical() {
        let (ty, title) = extract_qualification_type("BSc ()");
        assert_eq!(ty.as_deref(), Some("BSc"));
        assert_eq!(title, "");

        let (ty, title) = extract_qualification_type("Economics (BSc)");
        assert_eq!(ty.as_deref(), Some("BSc"));
        assert_eq!(title, "Economics");
    }

    #[test]
    fn no_token_leaves_title_alone() {
        let (ty, title) = extract_qualification_type("Foundation Year in Arts ()");
        assert_eq!(ty, None);
        assert_eq!(title, "Foundation Year in Arts ()");
    }

    #[test]
    fn whole_words_only() {
        // "Mathematics" must not yield "MA"; "MBBS" must not stop at "MB"
        assert_eq!(find_qualification("Mathematics"), None);
        assert_eq!(find_qualification("Medicine MBBS").as_deref(), Some("MBBS"));
    }

    #[test]
    fn match_is_case_insensitive_but_removal_is_literal() {
        let (ty, title) = extract_qualification_type("bsc Physics / BSc");
        assert_eq!(ty.as_deref(), Some("bsc"));
        assert_eq!(title, "Physics / BSc");
    }

    #[test]
    fn every_occurrence_of_the_token_goes() {
        let (ty, title) = extract_qualification_type("MSc Data Science MSc");
        assert_eq!(ty.as_deref(), Some("MSc"));
        assert_eq!(title, "Data Science");
    }
}
