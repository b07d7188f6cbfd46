// src/core/net.rs

// Blocking HTTP GET behind a trait so the runner can be driven offline.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT_PREFIX;
use crate::error::Result;

/// Anything that can turn a URL into a page body.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(join!(USER_AGENT_PREFIX, env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    /// Non-2xx statuses are errors, same as a timeout or a refused connection.
    fn get(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;
    use crate::error::ScrapeError;

    /// One-shot local server: reads the request, waits `delay`, then answers.
    fn serve_once(status_line: &'static str, body: &'static str, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                thread::sleep(delay);
                let resp = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(resp.as_bytes());
            }
        });
        format!("http://{addr}/course")
    }

    #[test]
    fn ok_status_returns_body() {
        let url = serve_once("200 OK", "<h1>BSc Maths</h1>", Duration::ZERO);
        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        assert_eq!(fetcher.get(&url).unwrap(), "<h1>BSc Maths</h1>");
    }

    #[test]
    fn not_found_is_a_status_error() {
        let url = serve_once("404 Not Found", "gone", Duration::ZERO);
        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        match fetcher.get(&url) {
            Err(ScrapeError::Status { status, url: failed }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("expected 404 status error, got {other:?}"),
        }
    }

    #[test]
    fn slow_server_is_a_timeout() {
        let url = serve_once("200 OK", "late", Duration::from_millis(1_500));
        let fetcher = HttpFetcher::new(Duration::from_millis(200)).unwrap();
        match fetcher.get(&url) {
            Err(ScrapeError::Timeout { .. }) => {}
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
