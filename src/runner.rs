// src/runner.rs

use std::error::Error;
use std::path::PathBuf;

use crate::{
    consolidate,
    data::MemberIdentity,
    dates::DateRange,
    fetch::SnapshotFetcher,
    logf, loge,
    net::Transport,
    params::{Params, Task},
    progress::Progress,
    resolve::IdentityResolver,
    roster::{RosterTable, TableParser},
    store::{self, FailureKind, SnapshotStore},
};

/// Summary of what a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub snapshots_written: usize,
    pub dates_failed: usize,
    pub identities: usize,
    pub out_file: Option<PathBuf>,
}

/// Top-level runner: dispatch on task and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    transport: &dyn Transport,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    match params.task {
        Task::Scrape => scrape(params, transport, progress),
        Task::Consolidate => consolidate_corpus(params, transport, progress),
    }
}

/* ---------------- scrape phase ---------------- */

/// Walk the date range; each date is fetched, parsed and persisted fully
/// before the next one starts. A failed date is logged and skipped, never
/// fatal. Only a broken local disk stops the walk.
pub fn scrape(
    params: &Params,
    transport: &dyn Transport,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let range = DateRange::new(params.start, params.end);
    let fetcher = SnapshotFetcher::new(transport, params);
    let parser = TableParser::new();
    let store = SnapshotStore::new(&params.save_dir, &params.error_log);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(range.len());
    }
    logf!("scrape {} .. {} ({} days)", params.start, params.end, range.len());

    let mut written = 0usize;
    let mut failed = 0usize;

    for date in range {
        if let Some(p) = progress.as_deref_mut() {
            p.update_status(&date.to_string());
        }

        let body = match fetcher.fetch(date) {
            Ok(body) => body,
            Err(e) => {
                loge!("{date}: {e}");
                store.record_failure(date, FailureKind::Fetch);
                failed += 1;
                continue;
            }
        };

        match parser.parse(&body) {
            RosterTable::Found(members) => {
                let path = store.save(date, members)?;
                written += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&path.display().to_string());
                }
            }
            RosterTable::NoTable => {
                store.record_failure(date, FailureKind::Parse);
                failed += 1;
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("scrape done: {written} saved, {failed} failed");

    Ok(RunSummary {
        snapshots_written: written,
        dates_failed: failed,
        identities: 0,
        out_file: None,
    })
}

/* ---------------- consolidation phase ---------------- */

/// Load the corpus, dedupe members by first appearance, probe the
/// external identifier per member, write the consolidated list. A failed
/// probe is a missing id, not an error; an unreadable snapshot aborts
/// the whole run.
pub fn consolidate_corpus(
    params: &Params,
    transport: &dyn Transport,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let store = SnapshotStore::new(&params.save_dir, &params.error_log);
    let snapshots = store.load_all(progress.as_deref_mut())?;
    logf!("loaded {} snapshots from {}", snapshots.len(), params.save_dir.display());

    let members = consolidate::dedupe(&snapshots);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(members.len());
    }

    let resolver = IdentityResolver::new(transport, &params.lookup_url);
    let mut identities = Vec::with_capacity(members.len());

    for m in members {
        let external_id = resolver.resolve(&m.name).into_id();
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!(
                "On {}: {} - {}",
                m.first_seen,
                m.name,
                external_id.as_deref().unwrap_or("")
            ));
        }
        identities.push(MemberIdentity {
            name: m.name,
            external_id,
            first_seen: m.first_seen,
        });
    }

    store::save_identities(&params.out_file, &identities)?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!(
        "consolidated {} identities -> {}",
        identities.len(),
        params.out_file.display()
    );

    Ok(RunSummary {
        snapshots_written: 0,
        dates_failed: 0,
        identities: identities.len(),
        out_file: Some(params.out_file.clone()),
    })
}
