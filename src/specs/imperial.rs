// src/specs/imperial.rs

// Fixed-layout course pages. No fallbacks: a selector that misses leaves the
// field empty.

use scraper::{Html, Selector};

use crate::core::html::{compile, first_own_text, text_content};
use crate::core::sanitize::{normalize_space, replace_nbsp};
use crate::error::Result;

use super::{FactExtractor, Facts};

const TITLE: &str = "#content > section:nth-of-type(1) > div:nth-of-type(2) > div > div > h1";
const DEGREE_TYPE: &str =
    "#content > div:nth-of-type(3) > div > section:nth-of-type(2) > div > ul > li:nth-of-type(1) > ul > li > h4";
const A_LEVEL_GRADE: &str =
    "#course-entry-1 > div > div > div > div:nth-of-type(1) > div:nth-of-type(1) > p > strong";
const A_LEVEL_BULLETS: &str = "#course-entry-1 ul > li";
const IB_GRADE: &str =
    "#course-entry-2 > div > div:nth-of-type(1) > div > div:nth-of-type(1) > div:nth-of-type(1) > p > strong";
const IB_BULLETS: &str = "#course-entry-2 ul > li";

const A_LEVEL_BULLET_LIMIT: usize = 2;
const IB_BULLET_LIMIT: usize = 3;

pub struct ImperialExtractor {
    title: Selector,
    degree_type: Selector,
    a_level_grade: Selector,
    a_level_bullets: Selector,
    ib_grade: Selector,
    ib_bullets: Selector,
}

impl ImperialExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            title: compile(TITLE)?,
            degree_type: compile(DEGREE_TYPE)?,
            a_level_grade: compile(A_LEVEL_GRADE)?,
            a_level_bullets: compile(A_LEVEL_BULLETS)?,
            ib_grade: compile(IB_GRADE)?,
            ib_bullets: compile(IB_BULLETS)?,
        })
    }
}

/// First `limit` bullets, space-normalized and joined with "; ".
fn join_bullets(doc: &Html, sel: &Selector, limit: usize) -> Option<String> {
    let items: Vec<String> = doc
        .select(sel)
        .take(limit)
        .map(|li| normalize_space(&text_content(li)))
        .collect();
    (!items.is_empty()).then(|| items.join("; "))
}

impl FactExtractor for ImperialExtractor {
    fn extract(&self, doc: &Html) -> Facts {
        Facts {
            degree_type: first_own_text(doc, &self.degree_type),
            degree_title: first_own_text(doc, &self.title),
            grade_requirement: first_own_text(doc, &self.a_level_grade),
            subject_requirement: join_bullets(doc, &self.a_level_bullets, A_LEVEL_BULLET_LIMIT),
            ib_grade_requirement: first_own_text(doc, &self.ib_grade),
            ib_subject_requirement: join_bullets(doc, &self.ib_bullets, IB_BULLET_LIMIT)
                .map(|s| replace_nbsp(&s)),
        }
    }
}
