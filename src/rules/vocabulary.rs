//! Built-in alias tables.
//!
//! All tables are assembled once, on first use, into a single immutable
//! [`Vocabulary`]. Aliases are lower-case because parsers normalize input
//! before looking it up.

use crate::alias_table::{AliasTable, TableError};
use once_cell::sync::Lazy;

/// Academic terms in range-slicing order.
pub const TERM_ORDER: [&str; 4] = ["Winter", "Spring", "Summer", "Fall"];

/// First and last year accepted by the year table.
pub const YEAR_SPAN: (i32, i32) = (2000, 2099);

/// Names accepted by [`Vocabulary::table`].
pub const TABLE_NAMES: [&str; 14] = [
    "hours",
    "weekdays",
    "weeks_in_quarter",
    "weeks_in_summer_quarter",
    "months",
    "quarters",
    "years",
    "quarters_with_years",
    "core_subjects",
    "other_subjects",
    "subjects",
    "time_units",
    "metrics",
    "columns",
];

static STANDARD: Lazy<Vocabulary> =
    Lazy::new(|| Vocabulary::build().unwrap_or_else(|err| panic!("built-in vocabulary is malformed: {err}")));

/// The process-wide built-in vocabulary.
pub fn vocabulary() -> &'static Vocabulary {
    &STANDARD
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub hours: AliasTable,
    pub weekdays: AliasTable,
    pub weeks_in_quarter: AliasTable,
    pub weeks_in_summer_quarter: AliasTable,
    pub months: AliasTable,
    /// Term names (Fall, Winter, Spring, Summer).
    pub quarters: AliasTable,
    pub years: AliasTable,
    /// Every "Term Year" from Winter 2000 to Fall 2099, in chronological order.
    pub quarters_with_years: AliasTable,
    pub core_subjects: AliasTable,
    pub other_subjects: AliasTable,
    /// `core_subjects` followed by `other_subjects`.
    pub subjects: AliasTable,
    pub time_units: AliasTable,
    pub metrics: AliasTable,
    pub columns: AliasTable,
    quarter_order: Vec<String>,
    term_order: Vec<String>,
    year_order: Vec<i32>,
}

fn numbered(range: std::ops::RangeInclusive<u32>) -> Result<AliasTable, TableError> {
    AliasTable::new(range.map(|n| (n.to_string(), vec![n.to_string()])))
}

impl Vocabulary {
    pub fn build() -> Result<Self, TableError> {
        let weekdays = aliases! {
            "Monday" => ["1", "m", "mo", "mon", "monday"],
            "Tuesday" => ["2", "t", "tu", "tue", "tues", "tuesday"],
            "Wednesday" => ["3", "w", "we", "wed", "wednesday"],
            "Thursday" => ["4", "r", "th", "thu", "thur", "thurs", "thursday"],
            "Friday" => ["5", "f", "fr", "fri", "friday"],
            "Saturday" => ["6", "s", "sa", "sat", "saturday"],
            "Sunday" => ["7", "u", "su", "sun", "sunday"],
        }?;

        let months = aliases! {
            "January" => ["1", "jan", "january"],
            "February" => ["2", "feb", "february"],
            "March" => ["3", "mar", "march"],
            "April" => ["4", "apr", "april"],
            "May" => ["5", "may"],
            "June" => ["6", "jun", "june"],
            "July" => ["7", "jul", "july"],
            "August" => ["8", "aug", "august"],
            "September" => ["9", "sep", "sept", "september"],
            "October" => ["10", "oct", "october"],
            "November" => ["11", "nov", "november"],
            "December" => ["12", "dec", "december"],
        }?;

        // numeric codes follow the academic year, which starts in the fall
        let quarters = aliases! {
            "Fall" => ["1", "f", "fa", "fall"],
            "Winter" => ["2", "w", "wi", "win", "winter"],
            "Spring" => ["3", "s", "sp", "spr", "spring"],
            "Summer" => ["4", "u", "su", "sum", "summer"],
        }?;

        let (first_year, last_year) = YEAR_SPAN;
        let years =
            AliasTable::new((first_year..=last_year).map(|y| (y.to_string(), vec![y.to_string(), format!("{:02}", y % 100)])))?;

        let quarter_order: Vec<String> =
            (first_year..=last_year).flat_map(|y| TERM_ORDER.iter().map(move |term| format!("{term} {y}"))).collect();
        let quarters_with_years =
            AliasTable::new(quarter_order.iter().map(|name| (name.clone(), vec![name.to_lowercase()])))?;

        let core_subjects = aliases! {
            "Mathematics" => ["mat", "math", "mathematics"],
            "Physics" => ["phy", "phys", "physics"],
            "Biology" => ["bio", "biol", "biology"],
            "Chemistry" => ["che", "chem", "chemistry"],
            "Engineering" => ["eng", "engr", "engi", "engineering"],
            "Computer Science" => ["cs", "com", "c s", "comp", "comp sci", "computer science"],
        }?;

        let other_subjects = aliases! {
            "Accounting" => ["acc", "actg", "accounting"],
            "Astronomy" => ["ast", "astr", "astro", "astronomy"],
            "Anthropology" => ["ant", "anth", "anthro", "anthropology"],
            "Business" => ["bus", "busi", "business"],
            "Economics" => ["eco", "econ", "economics"],
            "Non Credit Basic Skills" => ["non", "ncbs", "non credit basic skills"],
            "Psychology" => ["psy", "psyc", "psych", "psychology"],
            "English" => ["engl", "english"],
            "History" => ["hist", "history"],
        }?;
        let subjects = AliasTable::merged(&[&core_subjects, &other_subjects])?;

        let time_units = aliases! {
            "hour" => ["hour", "hours", "hourly", "hr", "hrs"],
            "day_in_week" => [
                "day_in_week", "day in week", "day in wk", "days in week", "days in wk", "day", "days", "daily",
                "weekday", "weekdays", "wk days", "wk day", "week day", "week days", "date", "dates",
            ],
            "week_in_quarter" => [
                "week_in_quarter", "week in quarter", "week in qtr", "wk in qtr", "wk in quarter", "week", "weeks",
                "weekly", "wk", "wks",
            ],
            "month" => ["month", "months", "monthly"],
            "quarter" => ["quarter", "quarters", "quarterly", "qtr", "qtrs"],
            "year" => ["year", "years", "yearly", "yr", "yrs"],
        }?;

        let metrics = aliases! {
            "wait_time" => ["wait_time", "wait time", "waittime"],
            "demand" => ["demand"],
        }?;

        let columns = aliases! {
            "date" => ["date", "date_of_request"],
            "time_of_request" => ["time_of_request", "time of request", "start_time", "start"],
            "wait_time" => ["wait_time", "wait time", "waittime"],
            "course_name" => ["course_name", "course name"],
            "course_section" => ["course_section", "course section", "section", "sec"],
        }?;

        Ok(Vocabulary {
            hours: numbered(0..=23)?,
            weekdays,
            weeks_in_quarter: numbered(1..=12)?,
            weeks_in_summer_quarter: numbered(1..=6)?,
            months,
            quarters,
            years,
            quarters_with_years,
            core_subjects,
            other_subjects,
            subjects,
            time_units,
            metrics,
            columns,
            quarter_order,
            term_order: TERM_ORDER.iter().map(|t| t.to_string()).collect(),
            year_order: (first_year..=last_year).collect(),
        })
    }

    /// "Term Year" names in chronological order, for slicing quarter ranges.
    pub fn quarter_order(&self) -> &[String] {
        &self.quarter_order
    }

    /// Bare term names in chronological order within a year.
    pub fn term_order(&self) -> &[String] {
        &self.term_order
    }

    pub fn year_order(&self) -> &[i32] {
        &self.year_order
    }

    /// Look a table up by field name (see [`TABLE_NAMES`]).
    pub fn table(&self, name: &str) -> Option<&AliasTable> {
        let table = match name {
            "hours" => &self.hours,
            "weekdays" => &self.weekdays,
            "weeks_in_quarter" => &self.weeks_in_quarter,
            "weeks_in_summer_quarter" => &self.weeks_in_summer_quarter,
            "months" => &self.months,
            "quarters" => &self.quarters,
            "years" => &self.years,
            "quarters_with_years" => &self.quarters_with_years,
            "core_subjects" => &self.core_subjects,
            "other_subjects" => &self.other_subjects,
            "subjects" => &self.subjects,
            "time_units" => &self.time_units,
            "metrics" => &self.metrics,
            "columns" => &self.columns,
            _ => return None,
        };
        Some(table)
    }
}
