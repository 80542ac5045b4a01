//! Quarter start/end dates, and the date → (quarter, week) mapping built on them.

use chrono::{Datelike, Duration, NaiveDate};

use super::scalar::{DATE_FORMAT, parse_date_value};
use super::terms::parse_quarter;
use crate::error::ParsingError;

/// One archived quarter and its inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterDates {
    pub quarter: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QuarterDates {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 1-based week of `date`, counting weeks from the Monday on or before `start`.
    pub fn week_of(&self, date: NaiveDate) -> Option<u32> {
        if !self.contains(date) {
            return None;
        }
        let first_monday = self.start - Duration::days(self.start.weekday().num_days_from_monday() as i64);
        let days = (date - first_monday).num_days();
        u32::try_from(days / 7 + 1).ok()
    }
}

/// An ordered set of quarters.
///
/// Rows are searched in order, so when two ranges overlap the earlier row wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuarterCalendar {
    rows: Vec<QuarterDates>,
}

impl QuarterCalendar {
    pub fn new(rows: Vec<QuarterDates>) -> Result<Self, ParsingError> {
        for row in &rows {
            if row.start > row.end {
                let input = format!("{} - {}", row.start.format(DATE_FORMAT), row.end.format(DATE_FORMAT));
                return Err(ParsingError::malformed_range(
                    input,
                    format!("{} must start on or before the day it ends.", row.quarter),
                ));
            }
        }
        Ok(QuarterCalendar { rows })
    }

    /// Build a calendar from raw `(quarter, start date, end date)` text rows,
    /// such as the lines of a quarter-dates CSV.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use stemnorm::QuarterCalendar;
    ///
    /// let calendar = QuarterCalendar::from_rows([("F 13", "9/23/2013", "12/13/2013")]).unwrap();
    /// let date = NaiveDate::from_ymd_opt(2013, 9, 25).unwrap();
    /// assert_eq!(calendar.quarter_of(date).map(|q| q.quarter.as_str()), Some("Fall 2013"));
    /// assert_eq!(calendar.week_in_quarter(date), Some(1));
    /// ```
    pub fn from_rows<I, Q, S, E>(rows: I) -> Result<Self, ParsingError>
    where
        I: IntoIterator<Item = (Q, S, E)>,
        Q: AsRef<str>,
        S: AsRef<str>,
        E: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|(quarter, start, end)| {
                Ok(QuarterDates {
                    quarter: parse_quarter(quarter.as_ref(), true)?,
                    start: parse_date_value(start.as_ref())?,
                    end: parse_date_value(end.as_ref())?,
                })
            })
            .collect::<Result<Vec<_>, ParsingError>>()?;
        Self::new(rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuarterDates> {
        self.rows.iter()
    }

    /// Dates of a quarter by canonical name, e.g. `"Fall 2013"`.
    pub fn get(&self, quarter: &str) -> Option<&QuarterDates> {
        self.rows.iter().find(|row| row.quarter == quarter)
    }

    pub fn quarter_of(&self, date: NaiveDate) -> Option<&QuarterDates> {
        self.rows.iter().find(|row| row.contains(date))
    }

    /// Like [`quarter_of`](Self::quarter_of), but reports dates outside every quarter.
    pub fn locate(&self, date: NaiveDate) -> Result<&QuarterDates, ParsingError> {
        self.quarter_of(date).ok_or_else(|| {
            ParsingError::not_on_record(
                date.format(DATE_FORMAT).to_string(),
                "date does not fall between the dates of any archived quarter.",
            )
        })
    }

    pub fn week_in_quarter(&self, date: NaiveDate) -> Option<u32> {
        self.quarter_of(date).and_then(|row| row.week_of(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> QuarterCalendar {
        QuarterCalendar::from_rows([
            ("Summer 2013", "2013-07-01", "2013-08-09"),
            ("Fall 2013", "2013-09-23", "2013-12-13"),
            ("w 14", "1/6/2014", "3/28/2014"),
        ])
        .unwrap()
    }

    #[test]
    fn rows_are_canonicalized() {
        let cal = calendar();
        let names: Vec<&str> = cal.iter().map(|q| q.quarter.as_str()).collect();
        assert_eq!(names, ["Summer 2013", "Fall 2013", "Winter 2014"]);
    }

    #[test]
    fn endpoints_are_inclusive() {
        let cal = calendar();
        assert_eq!(cal.quarter_of(ymd(2013, 9, 23)).map(|q| q.quarter.as_str()), Some("Fall 2013"));
        assert_eq!(cal.quarter_of(ymd(2013, 12, 13)).map(|q| q.quarter.as_str()), Some("Fall 2013"));
        assert!(cal.quarter_of(ymd(2013, 12, 14)).is_none());
        assert_eq!(cal.locate(ymd(2013, 9, 1)).unwrap_err().kind(), ErrorKind::NotOnRecord);
    }

    #[test]
    fn weeks_count_from_monday_of_first_week() {
        let cal = calendar();
        // Winter 2014 starts on a Monday.
        assert_eq!(cal.week_in_quarter(ymd(2014, 1, 6)), Some(1));
        assert_eq!(cal.week_in_quarter(ymd(2014, 1, 12)), Some(1));
        assert_eq!(cal.week_in_quarter(ymd(2014, 1, 13)), Some(2));
        assert_eq!(cal.week_in_quarter(ymd(2014, 3, 28)), Some(12));
    }

    #[test]
    fn midweek_start_shares_week_one_with_its_monday() {
        // Wednesday start
        let quarter = QuarterDates { quarter: "Fall 2014".into(), start: ymd(2014, 9, 24), end: ymd(2014, 12, 12) };
        assert_eq!(quarter.week_of(ymd(2014, 9, 28)), Some(1));
        assert_eq!(quarter.week_of(ymd(2014, 9, 29)), Some(2));
        assert_eq!(quarter.week_of(ymd(2014, 9, 23)), None);
    }

    #[test]
    fn inverted_rows_are_rejected() {
        let err = QuarterCalendar::from_rows([("Fall 2013", "2013-12-13", "2013-09-23")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRange);
        assert!(QuarterCalendar::from_rows([("Autumn 2013", "2013-09-23", "2013-12-13")]).is_err());
    }

    #[test]
    fn lookup_by_name() {
        let cal = calendar();
        assert_eq!(cal.get("Winter 2014").map(|q| q.start), Some(ymd(2014, 1, 6)));
        assert!(cal.get("Spring 2014").is_none());
        assert_eq!(cal.len(), 3);
    }
}
