// src/roster.rs
// Pulls member rows out of the roster page with scraper's CSS selectors.

use scraper::{ElementRef, Html, Selector};

use crate::data::MemberRecord;

/// Parse outcome. A missing <tbody> is the site's way of saying "no data
/// for that date" (or that the rate limit kicked in), so it gets its own
/// variant instead of an error the caller would have to catch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterTable {
    Found(Vec<MemberRecord>),
    NoTable,
}

pub struct TableParser {
    tbody: Selector,
    tr: Selector,
    td: Selector,
}

impl TableParser {
    pub fn new() -> Self {
        Self {
            tbody: Selector::parse("tbody").expect("tbody selector"),
            tr: Selector::parse("tr").expect("tr selector"),
            td: Selector::parse("td").expect("td selector"),
        }
    }

    /// Read the single data table: one MemberRecord per row, cells zipped
    /// positionally against the six-field schema. Rows without any <td>
    /// (header/separator rows) are skipped, not errors.
    pub fn parse(&self, raw: &str) -> RosterTable {
        let doc = Html::parse_document(raw);
        let Some(tbody) = doc.select(&self.tbody).next() else {
            return RosterTable::NoTable;
        };

        let mut members = Vec::new();
        for row in tbody.select(&self.tr) {
            let cells: Vec<String> = row.select(&self.td).map(cell_text).collect();
            if cells.is_empty() {
                continue;
            }
            members.push(MemberRecord::from_cells(&cells));
        }
        RosterTable::Found(members)
    }
}

/// Concatenated text of all text nodes under the cell, verbatim.
fn cell_text(td: ElementRef) -> String {
    td.text().collect()
}
