// src/progress.rs
use crate::error::ScrapeError;

/// Lightweight progress reporting for a scrape run.
/// The console implementation prints the familiar lines; tests use `NullProgress`.
pub trait Progress {
    /// Called at the start with the number of links.
    fn begin(&mut self, _total: usize) {}

    /// Called right before a page is fetched.
    fn item_started(&mut self, _url: &str) {}

    /// Called when a page could not be scraped. Its row will be empty.
    fn item_failed(&mut self, _url: &str, _err: &ScrapeError) {}

    /// Called at the end, after the output is written.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn item_started(&mut self, url: &str) {
        println!("Scraping: {url}");
    }

    fn item_failed(&mut self, url: &str, err: &ScrapeError) {
        println!("Error scraping {url}: {err}");
    }

    fn finish(&mut self) {
        println!("Done!");
    }
}
