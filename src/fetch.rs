// src/fetch.rs

use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;

use crate::net::{Transport, TransportError};
use crate::params::Params;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Every attempt came back with a non-200 status.
    #[error("retry budget exhausted after {attempts} attempts: {url}")]
    Exhausted { url: String, attempts: u32 },

    /// The request itself never completed. Not retried: a dead connection
    /// looks nothing like the rate limiter's non-200 answers.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Fetches the raw roster page for single dates, with a bounded retry on
/// non-200 responses and a constant pause between attempts.
pub struct SnapshotFetcher<'a> {
    transport: &'a dyn Transport,
    url_template: &'a str,
    retry: u32,
    sleep: Duration,
}

impl<'a> SnapshotFetcher<'a> {
    pub fn new(transport: &'a dyn Transport, params: &'a Params) -> Self {
        Self {
            transport,
            url_template: &params.roster_url,
            retry: params.fetch_retry,
            sleep: params.fetch_sleep,
        }
    }

    /// GET the roster page for `date`. Exactly `retry + 1` attempts before
    /// giving up with `Exhausted`.
    pub fn fetch(&self, date: NaiveDate) -> Result<String, FetchError> {
        let url = self
            .url_template
            .replace("{date}", &date.format("%d.%m.%Y").to_string());

        let attempts = self.retry + 1;
        for attempt in 0..attempts {
            let resp = self.transport.get(&url)?;
            if resp.status == 200 {
                return Ok(resp.body);
            }
            if attempt + 1 < attempts {
                thread::sleep(self.sleep);
            }
        }
        Err(FetchError::Exhausted { url, attempts })
    }
}
