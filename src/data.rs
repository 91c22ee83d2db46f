// src/data.rs
//
// Serialized shapes shared by the scrape and consolidation phases.
//
// - MemberRecord: one roster row, scraped verbatim.
// - Snapshot: the roster as published for one calendar day.
// - MemberIdentity: one deduplicated member in the consolidated output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the member table on a given date. All fields are opaque
/// display strings taken verbatim from the page; nothing is validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub name: String,
    pub party: String,
    pub office: String,
    pub gender: String,
    pub religion: String,
    /// The column label on the site is "family status"; keep it in the JSON.
    #[serde(rename = "family status")]
    pub family_status: String,
}

impl MemberRecord {
    /// Build a record from positional cells, zipped against the fixed
    /// six-field schema: extra cells are dropped, missing cells stay empty.
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        Self {
            name: cell(0),
            party: cell(1),
            office: cell(2),
            gender: cell(3),
            religion: cell(4),
            family_status: cell(5),
        }
    }
}

/// Roster snapshot for one calendar day. Written once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub members: Vec<MemberRecord>,
}

/// One deduplicated member in the consolidated output, ordered by first
/// appearance across the corpus. `external_id` is best-effort; absence is
/// a legitimate value, not a fault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberIdentity {
    pub name: String,
    pub external_id: Option<String>,
    pub first_seen: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_pads_missing_fields() {
        let cells = vec![s!("Schmidt, Hans"), s!("CDU")];
        let rec = MemberRecord::from_cells(&cells);
        assert_eq!(rec.name, "Schmidt, Hans");
        assert_eq!(rec.party, "CDU");
        assert_eq!(rec.office, "");
        assert_eq!(rec.family_status, "");
    }

    #[test]
    fn from_cells_drops_extra_cells() {
        let cells: Vec<String> = (0..9).map(|i| format!("c{i}")).collect();
        let rec = MemberRecord::from_cells(&cells);
        assert_eq!(rec.name, "c0");
        assert_eq!(rec.family_status, "c5");
    }

    #[test]
    fn snapshot_serializes_with_site_column_label() {
        let snap = Snapshot {
            date: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            members: vec![MemberRecord::from_cells(&[s!("Meier, Anna")])],
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains(r#""date":"2020-01-01""#));
        assert!(json.contains(r#""family status""#));

        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
