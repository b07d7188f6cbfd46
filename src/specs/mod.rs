//! # Scraping "specs" module
//!
//! This module hosts the **layout-specific extraction specifications** for course
//! pages. Each spec encodes *where the admissions facts live in the HTML* and *how
//! to pull them out tolerantly*.
//!
//! ## What lives here
//! - **Pure document queries** against an already-parsed `scraper::Html`.
//! - **Selector choice & precedence** (e.g. a known fixed position first, then
//!   `<h1>`, then `<title>` for the course title).
//! - **Light normalization**: qualification token stripping, grade and sentence
//!   picking, bullet joining.
//!
//! ## What does **not** live here
//! - **Fetching, pacing, failure handling** – see `runner`.
//! - **Output shaping** – see `store::Schema` projections and `file`.
//!
//! ## Conventions & invariants
//! - A query that matches nothing is not an error. The field is simply `None`
//!   (or the next candidate is tried).
//! - Extraction is a pure function of the document: running it twice on the
//!   same page gives identical `Facts`.
//!
//! In short: **`specs` knows how to read the pages.** Other layers decide when to
//! fetch them and where the results go.
use scraper::Html;

pub mod imperial;
pub mod qualification;
pub mod requirements;
pub mod russell_group;

pub use imperial::ImperialExtractor;
pub use russell_group::FallbackExtractor;

/// Admissions facts for one course page. Every field is independently optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Facts {
    pub degree_type: Option<String>,
    pub degree_title: Option<String>,
    pub grade_requirement: Option<String>,
    pub subject_requirement: Option<String>,
    pub ib_grade_requirement: Option<String>,
    pub ib_subject_requirement: Option<String>,
}

/// One page layout's way of reading a parsed document.
pub trait FactExtractor {
    fn extract(&self, doc: &Html) -> Facts;

    fn extract_html(&self, html: &str) -> Facts {
        self.extract(&Html::parse_document(html))
    }
}
