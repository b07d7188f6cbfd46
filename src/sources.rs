// src/sources.rs

// Link list: a CSV with a `crseurl` column and, optionally, `kiscourseid`.

use tracing::{debug, info};

use crate::config::consts::{ID_COLUMN, URL_COLUMN};
use crate::core::net::Fetch;
use crate::csv::{column_index, parse_rows};
use crate::error::{Result, ScrapeError};
use crate::store::CourseLink;

/// Fetch and parse the link list. Any failure here ends the run.
pub fn load(fetcher: &dyn Fetch, links_url: &str) -> Result<Vec<CourseLink>> {
    let text = fetcher.get(links_url)?;
    let links = parse_links(&text)?;
    info!(count = links.len(), source = links_url, "loaded link list");
    Ok(links)
}

/// Rows keep file order. An empty id cell is treated as no id.
pub fn parse_links(text: &str) -> Result<Vec<CourseLink>> {
    let mut rows = parse_rows(text, ',').into_iter();
    let headers = rows.next().unwrap_or_default();

    let url_ix = column_index(&headers, URL_COLUMN).ok_or(ScrapeError::MissingColumn(URL_COLUMN))?;
    let id_ix = column_index(&headers, ID_COLUMN);
    if id_ix.is_none() {
        debug!("link list has no {ID_COLUMN} column");
    }

    let links = rows
        .map(|row| CourseLink {
            url: row.get(url_ix).map(|u| s!(u.trim())).unwrap_or_default(),
            source_id: id_ix
                .and_then(|i| row.get(i))
                .map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .map(String::from),
        })
        .collect();
    Ok(links)
}
