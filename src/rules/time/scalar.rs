//! Scalar date / time-of-day / datetime parsers.
//!
//! Each parser has two entry points: the plain name returns the canonical
//! string (`YYYY-MM-DD`, `HH:MM:SS`, `YYYY-MM-DD HH:MM:SS`), and the `_value`
//! variant returns the chrono value. The `*_token` functions expect input that
//! has already been normalized and are what the composite engine maps with.

use crate::engine::{ParsedInput, UserInput, parse_input};
use crate::error::ParsingError;
use crate::text::normalize;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// --- Dates --------------------------------------------------------------------

/// Parse a date such as `2021-02-22`, `2011.12.25`, `9/25/2013` or `2015-2-2`.
///
/// A four-digit first field means year-first; otherwise the order is
/// month/day/year, with a two-digit year read as 20YY.
pub fn parse_date(text: &str) -> Result<String, ParsingError> {
    parse_date_value(text).map(|date| date.format(DATE_FORMAT).to_string())
}

pub fn parse_date_value(text: &str) -> Result<NaiveDate, ParsingError> {
    let token = normalize(text);
    date_token(&token).map_err(|err| err.verbatim(&token, text))
}

pub(crate) fn date_token(token: &str) -> Result<NaiveDate, ParsingError> {
    let (date, time) = token.split_once(' ').unwrap_or((token, ""));
    if !time.trim().is_empty() {
        return Err(ParsingError::malformed_shape(token, "only date-like strings can be parsed."));
    }

    let unrecognized = || ParsingError::malformed_shape(token, "cannot be recognized as a date.");
    let caps = regex!(r"^(\d{1,4})([-/.])(\d{1,2})([-/.])(\d{1,4})$").captures(date).ok_or_else(unrecognized)?;
    if caps[2] != caps[4] {
        return Err(unrecognized());
    }

    let (first, middle, last) = (&caps[1], &caps[3], &caps[5]);
    let number = |field: &str| field.parse::<u32>().map_err(|_| unrecognized());
    let (year, month, day) = match (first.len(), last.len()) {
        (4, 1..=2) => (number(first)? as i32, number(middle)?, number(last)?),
        (1..=2, 4) => (number(last)? as i32, number(first)?, number(middle)?),
        (1..=2, 2) => (2000 + number(last)? as i32, number(first)?, number(middle)?),
        _ => return Err(unrecognized()),
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(unrecognized)
}

// --- Times of day -------------------------------------------------------------

/// Parse a time of day `H[:MM[:SS]][am|pm]` into `HH:MM:SS`.
///
/// Without an am/pm suffix the hour is read on a 24-hour clock. Spaces are
/// ignored, so `6:17 pm` and `6:17pm` are the same.
///
/// # Example
/// ```
/// use stemnorm::parse_time_of_day;
///
/// assert_eq!(parse_time_of_day("12:00am").unwrap(), "00:00:00");
/// assert_eq!(parse_time_of_day("1:01:59 PM").unwrap(), "13:01:59");
/// assert_eq!(parse_time_of_day("15").unwrap(), "15:00:00");
/// ```
pub fn parse_time_of_day(text: &str) -> Result<String, ParsingError> {
    parse_time_of_day_value(text).map(|time| time.format(TIME_FORMAT).to_string())
}

pub fn parse_time_of_day_value(text: &str) -> Result<NaiveTime, ParsingError> {
    let token = normalize(text);
    time_token(&token).map_err(|err| err.verbatim(&token, text))
}

pub(crate) fn time_token(token: &str) -> Result<NaiveTime, ParsingError> {
    let compact: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    let unrecognized = || ParsingError::malformed_shape(token, "time must be of format 'HH[:MM:SS] [am/pm]'.");

    let caps = regex!(r"^(\d{1,2})(?::(\d{1,2})(?::(\d{1,2}))?)?(am|pm)?$").captures(&compact).ok_or_else(unrecognized)?;
    let field = |idx: usize| caps.get(idx).map_or(Ok(0), |m| m.as_str().parse::<u32>().map_err(|_| unrecognized()));
    let (hour, minute, second) = (field(1)?, field(2)?, field(3)?);

    let hour = match caps.get(4).map(|m| m.as_str()) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return Err(unrecognized());
            }
            match meridiem {
                "am" => hour % 12,
                _ => hour % 12 + 12,
            }
        }
        None => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(unrecognized)
}

/// Parse a dashed time range such as `9am - 9pm` into its two endpoints.
///
/// The start must be strictly earlier than the end.
pub fn parse_time_range<'a>(input: impl Into<UserInput<'a>>) -> Result<(String, String), ParsingError> {
    let input: UserInput<'a> = input.into();
    let raw = match &input {
        UserInput::Text(text) if input.is_dashed() => text.to_string(),
        UserInput::Text(text) => {
            return Err(ParsingError::malformed_range(*text, "time range must be of the form 'start - end'."));
        }
        UserInput::Sequence(items) => {
            return Err(ParsingError::malformed_range(items.join(", "), "time range must be a single dashed string."));
        }
    };

    let to_canonical = |token: &str| time_token(token).map(|t| t.format(TIME_FORMAT).to_string());
    match parse_input(input, to_canonical, &[])? {
        ParsedInput::Endpoints(start, end) if start < end => Ok((start, end)),
        _ => Err(ParsingError::malformed_range(raw, "dashed string must be of the form 'LHS - RHS' where LHS < RHS.")),
    }
}

// --- Datetimes ----------------------------------------------------------------

/// Parse `<date> [<time>]` into `YYYY-MM-DD HH:MM:SS`; the time defaults to midnight.
pub fn parse_datetime(text: &str) -> Result<String, ParsingError> {
    parse_datetime_value(text).map(|dt| dt.format(DATETIME_FORMAT).to_string())
}

pub fn parse_datetime_value(text: &str) -> Result<NaiveDateTime, ParsingError> {
    let token = normalize(text);
    datetime_token(&token).map_err(|err| err.verbatim(&token, text))
}

pub(crate) fn datetime_token(token: &str) -> Result<NaiveDateTime, ParsingError> {
    let wrap = |cause: ParsingError| {
        ParsingError::malformed_shape(token, "must consist of a valid date followed by an optional valid time.")
            .caused_by(cause)
    };

    let (date, time) = token.split_once(' ').unwrap_or((token, ""));
    if date.is_empty() {
        return Err(ParsingError::malformed_shape(token, "a datetime requires a date."));
    }
    let date = date_token(date).map_err(wrap)?;
    let time = if time.is_empty() { NaiveTime::MIN } else { time_token(time).map_err(wrap)? };
    Ok(date.and_time(time))
}

/// Parse one or more datetimes, or a dashed datetime range.
///
/// A dashed input yields `Endpoints(start, end)` with `start < end`; any other
/// input yields `Values`. Callers branch on which one they got.
///
/// # Example
/// ```
/// use stemnorm::{ParsedInput, parse_datetime_range};
///
/// assert_eq!(
///     parse_datetime_range("2015/08/01 - 2015/08/02 3:00:42").unwrap(),
///     ParsedInput::Endpoints("2015-08-01 00:00:00".to_string(), "2015-08-02 03:00:42".to_string()),
/// );
/// assert_eq!(
///     parse_datetime_range("2011/03/20").unwrap(),
///     ParsedInput::Values(vec!["2011-03-20 00:00:00".to_string()]),
/// );
/// ```
pub fn parse_datetime_range<'a>(input: impl Into<UserInput<'a>>) -> Result<ParsedInput<String>, ParsingError> {
    let input: UserInput<'a> = input.into();
    let raw = match &input {
        UserInput::Text(text) => text.to_string(),
        UserInput::Sequence(items) => items.join(", "),
    };

    let to_canonical = |token: &str| datetime_token(token).map(|dt| dt.format(DATETIME_FORMAT).to_string());
    match parse_input(input, to_canonical, &[])? {
        ParsedInput::Endpoints(start, end) if start >= end => {
            Err(ParsingError::malformed_range(raw, "dashed string must be of the form 'LHS - RHS' where LHS < RHS."))
        }
        parsed => Ok(parsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn date_rejects_trailing_time() {
        let err = parse_date("2013-09-25 11:05").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedShape);
        assert_eq!(err.reason(), "only date-like strings can be parsed.");
    }

    #[test]
    fn date_value_is_structured() {
        assert_eq!(parse_date_value("2015-2-2").unwrap(), NaiveDate::from_ymd_opt(2015, 2, 2).unwrap());
    }

    #[test]
    fn date_rejects_mixed_separators_and_impossible_days() {
        assert!(parse_date("2021-02/22").is_err());
        assert!(parse_date("2021-02-30").is_err());
        assert!(parse_date("13/25/2013").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn twelve_hour_clock_bounds() {
        assert_eq!(parse_time_of_day("12:03:02 AM").unwrap(), "00:03:02");
        assert_eq!(parse_time_of_day("12pm").unwrap(), "12:00:00");
        assert!(parse_time_of_day("0am").is_err());
        assert!(parse_time_of_day("13pm").is_err());
    }

    #[test]
    fn twenty_four_hour_clock_bounds() {
        assert_eq!(parse_time_of_day("0:01").unwrap(), "00:01:00");
        assert_eq!(parse_time_of_day("23:59:59").unwrap(), "23:59:59");
        assert!(parse_time_of_day("24").is_err());
        assert!(parse_time_of_day("10:60").is_err());
    }

    #[test]
    fn time_rejects_unknown_shapes() {
        for input in ["", "noon", "10:", ":30", "1:2:3:4", "10.30"] {
            let err = parse_time_of_day(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedShape, "{input}");
        }
    }

    #[test]
    fn time_value_is_structured() {
        assert_eq!(parse_time_of_day_value("00:31:00").unwrap(), NaiveTime::from_hms_opt(0, 31, 0).unwrap());
    }

    #[test]
    fn datetime_wraps_scalar_failure() {
        let err = parse_datetime("2013-09-25 25:00").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedShape);
        assert_eq!(err.input(), "2013-09-25 25:00");
        assert_eq!(err.cause().map(|c| c.input()), Some("25:00"));
    }

    #[test]
    fn datetime_value_defaults_to_midnight() {
        let expected = NaiveDate::from_ymd_opt(2021, 2, 22).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(parse_datetime_value("2021-02-22").unwrap(), expected);
    }

    #[test]
    fn datetime_range_requires_increasing_endpoints() {
        let err = parse_datetime_range("2012-01-01 - 2011-01-01").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRange);
        assert!(parse_datetime_range("2012-01-01 - 2012-01-01").is_err());
    }

    #[test]
    fn time_range_returns_endpoints() {
        assert_eq!(parse_time_range("9am - 9pm").unwrap(), ("09:00:00".to_string(), "21:00:00".to_string()));
        assert_eq!(parse_time_range("6:17 pm - 18:20").unwrap(), ("18:17:00".to_string(), "18:20:00".to_string()));
        assert!(parse_time_range("16 - 15").is_err());
        assert_eq!(parse_time_range("15").unwrap_err().kind(), ErrorKind::MalformedRange);
    }
}
