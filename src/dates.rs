// src/dates.rs

use chrono::NaiveDate;

/// Lazy walk over consecutive calendar days in `[start, end)`.
/// Restartable via `Clone`; empty whenever `start >= end`.
#[derive(Clone, Copy, Debug)]
pub struct DateRange {
    cursor: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// `start` inclusive, `end` exclusive.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { cursor: start, end }
    }

    /// Days left to yield.
    pub fn len(&self) -> usize {
        if self.cursor >= self.end {
            0
        } else {
            (self.end - self.cursor).num_days() as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.cursor >= self.end {
            return None;
        }
        let d = self.cursor;
        match d.succ_opt() {
            Some(next) => self.cursor = next,
            None => self.end = d, // calendar edge; range is exhausted
        }
        Some(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn yields_every_day_once_ascending() {
        let range = DateRange::new(d(2020, 1, 1), d(2020, 1, 5));
        assert_eq!(range.len(), 4);
        let days: Vec<_> = range.collect();
        assert_eq!(
            days,
            vec![d(2020, 1, 1), d(2020, 1, 2), d(2020, 1, 3), d(2020, 1, 4)]
        );
    }

    #[test]
    fn empty_when_start_equals_end() {
        let mut range = DateRange::new(d(2020, 1, 1), d(2020, 1, 1));
        assert!(range.is_empty());
        assert_eq!(range.next(), None);
    }

    #[test]
    fn empty_when_start_after_end() {
        let mut range = DateRange::new(d(2020, 1, 2), d(2020, 1, 1));
        assert_eq!(range.len(), 0);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn crosses_month_and_leap_day() {
        let days: Vec<_> = DateRange::new(d(2020, 2, 28), d(2020, 3, 2)).collect();
        assert_eq!(
            days,
            vec![d(2020, 2, 28), d(2020, 2, 29), d(2020, 3, 1)]
        );
    }

    #[test]
    fn full_year_no_gaps_no_dups() {
        let range = DateRange::new(d(2019, 7, 1), d(2020, 7, 1));
        let days: Vec<_> = range.collect();
        assert_eq!(days.len(), range.len()); // 366, leap year included
        assert!(days.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
    }

    #[test]
    fn restartable_via_clone() {
        let range = DateRange::new(d(2020, 1, 1), d(2020, 1, 4));
        let a: Vec<_> = range.collect();
        let b: Vec<_> = range.collect(); // Copy: original untouched
        assert_eq!(a, b);
    }
}
