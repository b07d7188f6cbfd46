// src/core/sanitize.rs

/// XPath-style `normalize-space`: collapse runs of ASCII whitespace to one
/// space and trim. Non-breaking spaces are left alone.
pub fn normalize_space(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = true;
    for ch in s.chars() {
        if matches!(ch, ' ' | '\t' | '\r' | '\n') {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    if out.ends_with(' ') { out.pop(); }
    out
}

pub fn replace_nbsp(s: &str) -> String {
    s.replace('\u{a0}', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_space_collapses_ascii_only() {
        assert_eq!(normalize_space("  Maths \n\t and  Physics "), "Maths and Physics");
        assert_eq!(normalize_space("6\u{a0}in  HL"), "6\u{a0}in HL");
        assert_eq!(normalize_space(" \n "), "");
    }

    #[test]
    fn nbsp_becomes_plain_space() {
        assert_eq!(replace_nbsp("6\u{a0}in Maths"), "6 in Maths");
    }
}
