// src/consolidate.rs

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::data::Snapshot;
use crate::names;

/// A member's normalized name plus the date of the first snapshot it
/// appeared in. Precursor to MemberIdentity, before the identifier probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirstSeen {
    pub name: String,
    pub first_seen: NaiveDate,
}

/// Walk snapshots in their given (chronological) order, members in table
/// order, and emit each distinct normalized name once, tagged with the
/// date it first appeared. Later sightings are discarded.
pub fn dedupe(snapshots: &[Snapshot]) -> Vec<FirstSeen> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for snap in snapshots {
        for member in &snap.members {
            let name = names::normalize(&member.name);
            if seen.insert(name.clone()) {
                out.push(FirstSeen { name, first_seen: snap.date });
            }
        }
    }
    out
}
