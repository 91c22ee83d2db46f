// src/params.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

/// Roster endpoint. `{date}` is substituted in dd.mm.yyyy form.
pub const ROSTER_URL: &str = "http://www.landtag.sachsen.de/de/abgeordnete-fraktionen\
/abgeordnete/statistik?datestring={date}&submitDate=true";

/// Wikidata item-by-title lookup. The member name is appended as the
/// `page` query pair.
pub const LOOKUP_URL: &str = "https://www.wikidata.org/wiki/Special:ItemByTitle?site=dewiki";

pub const FETCH_RETRY: u32 = 10;
pub const FETCH_SLEEP_MS: u64 = 300;
pub const HTTP_TIMEOUT_SECS: u64 = 15;

pub const DEFAULT_SAVE_DIR: &str = "scraped_data";
pub const DEFAULT_ERROR_LOG: &str = "error.log";
pub const DEFAULT_OUT_FILE: &str = "clean_names.json";

/// First day the parliament exists; default start of the scrape window.
pub fn first_session() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 10, 27).expect("valid date")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    Scrape,
    Consolidate,
}

#[derive(Clone)]
pub struct Params {
    pub task: Task,
    pub start: NaiveDate,        // inclusive
    pub end: NaiveDate,          // exclusive
    pub roster_url: String,      // {date} placeholder, dd.mm.yyyy
    pub lookup_url: String,      // name appended as ?page=
    pub fetch_retry: u32,        // retries per date on non-200
    pub fetch_sleep: Duration,   // constant pause between retries
    pub http_timeout: Duration,
    pub save_dir: PathBuf,       // one snapshot JSON per date
    pub error_log: PathBuf,      // append-only failure log
    pub out_file: PathBuf,       // consolidated identities
}

impl Params {
    pub fn new() -> Self {
        Self {
            task: Task::Scrape,
            start: first_session(),
            end: chrono::Local::now().date_naive(),
            roster_url: s!(ROSTER_URL),
            lookup_url: s!(LOOKUP_URL),
            fetch_retry: FETCH_RETRY,
            fetch_sleep: Duration::from_millis(FETCH_SLEEP_MS),
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            error_log: PathBuf::from(DEFAULT_ERROR_LOG),
            out_file: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}
