// src/runner.rs
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use scraper::Html;
use tracing::{debug, info, warn};

use crate::{
    config::options::{RunConfig, Schema},
    core::net::{Fetch, HttpFetcher},
    error::Result,
    file, sources,
    progress::Progress,
    specs::{FactExtractor, Facts, FallbackExtractor, ImperialExtractor},
    store::{CourseLink, DegreeFactRow, FactTable},
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub failed: usize,
    pub out_path: PathBuf,
}

/// The extractor matching the configured page layout.
pub fn extractor_for(config: &RunConfig) -> Result<Box<dyn FactExtractor>> {
    Ok(match config.schema {
        Schema::RussellGroup => Box::new(FallbackExtractor::new(config.grade_pattern)?),
        Schema::Imperial => Box::new(ImperialExtractor::new()?),
    })
}

/// Fetch, parse and extract one page.
pub fn scrape_page(fetcher: &dyn Fetch, extractor: &dyn FactExtractor, url: &str) -> Result<Facts> {
    let html = fetcher.get(url)?;
    let doc = Html::parse_document(&html);
    Ok(extractor.extract(&doc))
}

/// Scrape every link in order, one at a time, pausing after each page.
///
/// A page that fails still gets its row (link kept, facts empty), so the table
/// always has exactly one row per link.
pub fn scrape_all(
    links: &[CourseLink],
    fetcher: &dyn Fetch,
    extractor: &dyn FactExtractor,
    schema: Schema,
    pause: Duration,
    progress: &mut dyn Progress,
) -> (FactTable, usize) {
    let mut table = FactTable::with_capacity(schema, links.len());
    let mut failed = 0usize;

    progress.begin(links.len());

    for link in links {
        progress.item_started(&link.url);

        let row = match scrape_page(fetcher, extractor, &link.url) {
            Ok(facts) => {
                debug!(url = %link.url, ?facts, "extracted");
                DegreeFactRow::new(link, facts)
            }
            Err(e) => {
                warn!(url = %link.url, error = %e, "scrape failed; recording empty row");
                progress.item_failed(&link.url, &e);
                failed += 1;
                DegreeFactRow::failed(link)
            }
        };
        table.push(row);

        if !pause.is_zero() {
            thread::sleep(pause); // be polite
        }
    }

    (table, failed)
}

/// Top-level run: load links, scrape them all, write the CSV once.
/// Only link-list and output errors are returned.
pub fn run(config: &RunConfig, fetcher: &dyn Fetch, progress: &mut dyn Progress) -> Result<RunSummary> {
    let links = sources::load(fetcher, &config.links_url)?;
    let extractor = extractor_for(config)?;

    let (table, failed) = scrape_all(
        &links,
        fetcher,
        extractor.as_ref(),
        config.schema,
        config.request_pause,
        progress,
    );

    if table.is_empty() {
        warn!(source = %config.links_url, "link list had no courses; writing header only");
    }
    file::write_table(&config.out_path, &table)?;
    info!(rows = table.len(), failed, path = %config.out_path.display(), "wrote results");
    progress.finish();

    Ok(RunSummary { rows: table.len(), failed, out_path: config.out_path.clone() })
}

/// `run` with a real HTTP client built from the config's timeout.
pub fn run_live(config: &RunConfig, progress: &mut dyn Progress) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new(config.request_timeout)?;
    run(config, &fetcher, progress)
}
