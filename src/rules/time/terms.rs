//! Academic-calendar token parsers: quarters, weekdays, weeks, years, months, hours.
//!
//! Each list parser is a thin configuration of [`parse_input`] over one table
//! of the built-in [`Vocabulary`](crate::Vocabulary), sliced by that table's
//! declared order when given a dashed range.

use crate::engine::{RANGE_MARKER, UserInput, parse_input};
use crate::error::ParsingError;
use crate::rules::vocabulary::vocabulary;
use crate::text::{normalize, pretty_list};

// --- Quarters -----------------------------------------------------------------

/// Parse a single quarter such as `F 13`, `sp 2012` or `Fall 2013`.
///
/// With `with_year`, the term must be followed by a two- or four-digit year and
/// the result is `"Term YYYY"`; otherwise only the term is resolved.
///
/// # Example
/// ```
/// use stemnorm::parse_quarter;
///
/// assert_eq!(parse_quarter("F 13", true).unwrap(), "Fall 2013");
/// assert_eq!(parse_quarter("sum", false).unwrap(), "Summer");
/// ```
pub fn parse_quarter(text: &str, with_year: bool) -> Result<String, ParsingError> {
    let token = normalize(text);
    quarter_token(&token, with_year).map_err(|err| err.verbatim(&token, text))
}

pub(crate) fn quarter_token(token: &str, with_year: bool) -> Result<String, ParsingError> {
    let vocab = vocabulary();
    let (term, year) = token.split_once(' ').unwrap_or((token, ""));

    let resolved = vocab.quarters.lookup_by_alias(term).and_then(|term| {
        if with_year { vocab.years.lookup_by_alias(year).map(|year| format!("{term} {year}")) } else { Ok(term.to_string()) }
    });

    resolved.map_err(|cause| {
        let terms: Vec<&str> = vocab.quarters.names().collect();
        let mut reason = format!("quarter name must correspond to one of {}", pretty_list(&terms, "or"));
        reason.push_str(if with_year { ", followed by a 2 or 4 digit year in the current century." } else { "." });
        ParsingError::unrecognized(token, reason).caused_by(cause)
    })
}

/// Parse one or more quarters; a dashed range expands to every quarter between
/// its endpoints, inclusive.
///
/// # Example
/// ```
/// use stemnorm::parse_quarters;
///
/// assert_eq!(
///     parse_quarters("w 14 - w 15", true).unwrap(),
///     vec!["Winter 2014", "Spring 2014", "Summer 2014", "Fall 2014", "Winter 2015"],
/// );
/// ```
pub fn parse_quarters<'a>(input: impl Into<UserInput<'a>>, with_year: bool) -> Result<Vec<String>, ParsingError> {
    let input: UserInput<'a> = input.into();
    if let UserInput::Text(text) = &input {
        let token = normalize(text);
        if let Some((left, right)) = token.split_once(RANGE_MARKER) {
            if with_year && left.split(' ').count() != right.split(' ').count() {
                return Err(ParsingError::malformed_range(
                    *text,
                    "quarters on each side of the dash must have the same number of components (eg: 'F 13 - F 14', not 'F - F 14').",
                ));
            }
        }
    }

    let vocab = vocabulary();
    let ordering = if with_year { vocab.quarter_order() } else { vocab.term_order() };
    parse_input(input, |token| quarter_token(token, with_year), ordering).map(|parsed| parsed.into_vec())
}

// --- Weekdays, weeks ----------------------------------------------------------

/// Parse weekdays (`1`-`7`, `m`, `tu`, `thurs`, `friday`, ...) to full names.
///
/// Dashed ranges run Monday through Sunday; `M-W` without spaces is rejected.
pub fn parse_days<'a>(input: impl Into<UserInput<'a>>) -> Result<Vec<String>, ParsingError> {
    let weekdays = &vocabulary().weekdays;
    let order: Vec<String> = weekdays.names().map(str::to_string).collect();
    parse_input(input, |token| weekdays.lookup_by_alias(token).map(str::to_string), &order).map(|p| p.into_vec())
}

/// Parse week numbers within a quarter: 1-12, or 1-6 for the summer session.
pub fn parse_weeks_in_quarter<'a>(input: impl Into<UserInput<'a>>, is_summer: bool) -> Result<Vec<String>, ParsingError> {
    let vocab = vocabulary();
    let weeks = if is_summer { &vocab.weeks_in_summer_quarter } else { &vocab.weeks_in_quarter };
    let order: Vec<String> = weeks.names().map(str::to_string).collect();
    parse_input(input, |token| weeks.lookup_by_alias(token).map(str::to_string), &order).map(|p| p.into_vec())
}

// --- Years, months, hours -----------------------------------------------------

/// Parse two- or four-digit years of the current century into integers.
pub fn parse_years<'a>(input: impl Into<UserInput<'a>>) -> Result<Vec<i32>, ParsingError> {
    let vocab = vocabulary();
    let year = |token: &str| {
        let name = vocab.years.lookup_by_alias(token).map_err(|cause| {
            ParsingError::unrecognized(token, "years must be in the current century with either two or four digits.")
                .caused_by(cause)
        })?;
        name.parse::<i32>().map_err(|_| ParsingError::unrecognized(token, "year is not numeric."))
    };
    parse_input(input, year, vocab.year_order()).map(|p| p.into_vec())
}

/// Parse month names, abbreviations or numbers (`1`-`12`) to full month names.
pub fn parse_months<'a>(input: impl Into<UserInput<'a>>) -> Result<Vec<String>, ParsingError> {
    let months = &vocabulary().months;
    let order: Vec<String> = months.names().map(str::to_string).collect();
    parse_input(input, |token| months.lookup_by_alias(token).map(str::to_string), &order).map(|p| p.into_vec())
}

/// Parse hours of the day (`0`-`23`).
pub fn parse_hours<'a>(input: impl Into<UserInput<'a>>) -> Result<Vec<u32>, ParsingError> {
    let hours = &vocabulary().hours;
    let order: Vec<u32> = (0..24).collect();
    let hour = |token: &str| {
        let name = hours.lookup_by_alias(token)?;
        name.parse::<u32>().map_err(|_| ParsingError::unrecognized(token, "hour is not numeric."))
    };
    parse_input(input, hour, &order).map(|p| p.into_vec())
}
