// src/specs/russell_group.rs

use scraper::{Html, Selector};
use tracing::debug;

use crate::config::options::GradePattern;
use crate::core::html::{compile_all, first_match, first_own_text_any, text_content};
use crate::error::Result;

use super::qualification::extract_qualification_type;
use super::requirements::extract_grade_requirement;
use super::{FactExtractor, Facts};

/// Course title candidates, most specific first.
pub const TITLE_SELECTORS: &[&str] = &[
    "#main-content > div:nth-of-type(8) > div > div > div:nth-of-type(2) > div > h1",
    "h1",
    "title",
];

/// Entry requirement block candidates, most specific first.
pub const REQUIREMENT_SELECTORS: &[&str] = &[
    "#entry > section:nth-of-type(1) > article > section:nth-of-type(1) > section:nth-of-type(1) \
     > div:nth-of-type(1) > div:nth-of-type(2) > p:nth-of-type(1)",
    "#entry-requirements",
    r#"[class*="entry-requirements"]"#,
    r#"section[id*="requirements"]"#,
    r#"div[class*="requirements"]"#,
];

/// Reads generic course pages by falling back through ordered selectors.
pub struct FallbackExtractor {
    titles: Vec<Selector>,
    requirements: Vec<Selector>,
    grade_pattern: GradePattern,
}

impl FallbackExtractor {
    pub fn new(grade_pattern: GradePattern) -> Result<Self> {
        Ok(Self {
            titles: compile_all(TITLE_SELECTORS)?,
            requirements: compile_all(REQUIREMENT_SELECTORS)?,
            grade_pattern,
        })
    }

    /// Raw course title, trimmed. `None` only if no candidate matched.
    pub fn title(&self, doc: &Html) -> Option<String> {
        first_own_text_any(doc, &self.titles).map(|t| s!(t.trim()))
    }

    /// Flattened text of the first matching requirement block, or "".
    pub fn requirement_text(&self, doc: &Html) -> String {
        match first_match(doc, &self.requirements) {
            Some(el) => s!(text_content(el).trim()),
            None => {
                debug!("no entry requirement block matched");
                s!()
            }
        }
    }
}

impl FactExtractor for FallbackExtractor {
    fn extract(&self, doc: &Html) -> Facts {
        let (degree_type, degree_title) = match self.title(doc) {
            Some(raw) => {
                let (ty, clean) = extract_qualification_type(&raw);
                (ty, Some(clean))
            }
            None => (None, None),
        };

        let req = extract_grade_requirement(&self.requirement_text(doc), self.grade_pattern);

        Facts {
            degree_type,
            degree_title,
            grade_requirement: req.grade,
            subject_requirement: req.subject,
            ..Facts::default()
        }
    }
}
