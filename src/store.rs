// src/store.rs
//
// In-memory result set for one run. Rows are appended once per input URL and
// never touched again; the whole table is serialized once at the end.

use crate::config::options::Schema;
use crate::specs::Facts;

/// One entry of the link list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseLink {
    pub source_id: Option<String>,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegreeFactRow {
    pub source_id: Option<String>,
    pub url: String,
    pub facts: Facts,
}

impl DegreeFactRow {
    pub fn new(link: &CourseLink, facts: Facts) -> Self {
        Self { source_id: link.source_id.clone(), url: link.url.clone(), facts }
    }

    /// Row for a page that could not be scraped: link kept, facts empty.
    pub fn failed(link: &CourseLink) -> Self {
        Self::new(link, Facts::default())
    }

    /// Project onto the schema's columns. `None` becomes an empty cell.
    pub fn to_record(&self, schema: Schema) -> Vec<String> {
        let cell = |v: &Option<String>| v.clone().unwrap_or_default();
        let f = &self.facts;
        match schema {
            Schema::RussellGroup => vec![
                cell(&self.source_id),
                self.url.clone(),
                cell(&f.degree_type),
                cell(&f.degree_title),
                cell(&f.grade_requirement),
                cell(&f.subject_requirement),
            ],
            Schema::Imperial => vec![
                self.url.clone(),
                cell(&f.degree_type),
                cell(&f.degree_title),
                cell(&f.grade_requirement),
                cell(&f.subject_requirement),
                cell(&f.ib_grade_requirement),
                cell(&f.ib_subject_requirement),
            ],
        }
    }
}

/// Append-only table of rows, in link-list order.
#[derive(Clone, Debug)]
pub struct FactTable {
    schema: Schema,
    rows: Vec<DegreeFactRow>,
}

impl FactTable {
    pub fn new(schema: Schema) -> Self {
        Self { schema, rows: Vec::new() }
    }

    pub fn with_capacity(schema: Schema, n: usize) -> Self {
        Self { schema, rows: Vec::with_capacity(n) }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn push(&mut self, row: DegreeFactRow) {
        self.rows.push(row);
    }

    pub fn headers(&self) -> Vec<String> {
        self.schema.headers().iter().map(|h| s!(*h)).collect()
    }

    pub fn records(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.to_record(self.schema)).collect()
    }
}
