// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Which site layout (and therefore which output columns) a run targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schema {
    /// Generic course pages, tried against ordered fallback selectors.
    RussellGroup,
    /// Imperial's fixed layout, with an IB track alongside A-levels.
    Imperial,
}

impl Schema {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Schema::RussellGroup => &[
                "kiscourseid", "url", "degree_type", "degree_title",
                "a_level_grade_req", "a_level_subject_req",
            ],
            Schema::Imperial => &[
                "url", "degree_type", "degree_title", "a_level_grade_req",
                "a_level_subject_reqs", "ib_grade_req", "ib_subject_req",
            ],
        }
    }
}

/// Grade token pattern used on requirement text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradePattern {
    /// 3-5 chars from {A,B,C,D,E,*}. Catches "A*AA" and "AABB", but also
    /// plain words like "ACE" or "DEAD".
    #[default]
    Flexible,
    /// 3-4 chars from {A,B,C}. Misses starred grades.
    Strict,
}

impl GradePattern {
    pub fn regex(&self) -> &'static str {
        match self {
            GradePattern::Flexible => r"\b([A*BCDE]{3,5})\b",
            GradePattern::Strict => r"\b([A-C]{3,4})\b",
        }
    }
}

/// Everything a run needs that would otherwise be a literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub schema: Schema,
    /// Where the link list (CSV with a `crseurl` column) is fetched from.
    pub links_url: String,
    pub out_path: PathBuf,
    pub request_timeout: Duration,
    /// Fixed pause after every course page, success or not.
    pub request_pause: Duration,
    pub grade_pattern: GradePattern,
}

impl RunConfig {
    pub fn russell_group() -> Self {
        Self {
            schema: Schema::RussellGroup,
            links_url: s!(RUSSELL_GROUP_LINKS),
            out_path: PathBuf::from(RUSSELL_GROUP_OUT_FILE),
            request_timeout: Duration::from_secs(RUSSELL_GROUP_TIMEOUT_SECS),
            request_pause: Duration::from_millis(RUSSELL_GROUP_PAUSE_MS),
            grade_pattern: GradePattern::Flexible,
        }
    }

    pub fn imperial() -> Self {
        Self {
            schema: Schema::Imperial,
            links_url: s!(IMPERIAL_LINKS),
            out_path: PathBuf::from(IMPERIAL_OUT_FILE),
            request_timeout: Duration::from_secs(IMPERIAL_TIMEOUT_SECS),
            request_pause: Duration::from_millis(IMPERIAL_PAUSE_MS),
            grade_pattern: GradePattern::Flexible,
        }
    }

    pub fn for_schema(schema: Schema) -> Self {
        match schema {
            Schema::RussellGroup => Self::russell_group(),
            Schema::Imperial => Self::imperial(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::russell_group()
    }
}
