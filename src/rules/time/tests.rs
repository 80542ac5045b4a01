use crate::rules::time::scalar::{parse_date, parse_datetime, parse_datetime_range, parse_time_of_day};
use crate::rules::time::terms::{parse_days, parse_quarter, parse_quarters};
use crate::{ErrorKind, ParsedInput};

#[test]
fn date_examples_matching() {
    // Array of (expected, input_string)
    let cases: Vec<(&str, &str)> = vec![
        ("2021-02-22", "2021-02-22"),
        ("2011-12-25", "2011.12.25"),
        ("2013-09-25", "9/25/2013"),
        ("2015-02-02", "2015-2-2"),
        ("2015-02-02", "2015/2/2"),
        ("2013-09-25", "9-25-13"),
        ("2013-09-25", "  9/25/2013 "),
        ("2000-01-01", "1.1.00"),
    ];

    for (expected, input) in cases {
        let parsed = parse_date(input);
        assert_eq!(parsed.as_deref(), Ok(expected), "date '{input}' parsed to {parsed:?}");
    }
}

#[test]
fn time_of_day_examples_matching() {
    let cases: Vec<(&str, &str)> = vec![
        ("00:00:00", "12:00am"),
        ("00:31:00", "00:31:00"),
        ("13:01:59", "1:01:59 PM"),
        ("15:00:00", "15"),
        ("18:17:00", "6:17 pm"),
        ("18:17:00", "6:17pm"),
        ("09:00:00", "9am"),
        ("09:05:00", "9:5"),
        ("12:00:00", "12 PM"),
        ("23:59:59", "11:59:59pm"),
    ];

    for (expected, input) in cases {
        let parsed = parse_time_of_day(input);
        assert_eq!(parsed.as_deref(), Ok(expected), "time '{input}' parsed to {parsed:?}");
    }
}

#[test]
fn datetime_examples_matching() {
    let cases: Vec<(&str, &str)> = vec![
        ("2021-02-22 00:00:00", "2021-02-22"),
        ("2013-09-25 11:05:00", "2013-09-25 11:05"),
        ("2015-08-02 03:00:42", "2015/08/02 3:00:42"),
        ("2011-12-25 18:00:00", "12/25/2011 6pm"),
    ];

    for (expected, input) in cases {
        let parsed = parse_datetime(input);
        assert_eq!(parsed.as_deref(), Ok(expected), "datetime '{input}' parsed to {parsed:?}");
    }

    assert_eq!(
        parse_datetime_range(&["2015-08-01", "2015-08-02 1pm"]).unwrap(),
        ParsedInput::Values(vec!["2015-08-01 00:00:00".to_string(), "2015-08-02 13:00:00".to_string()])
    );
}

#[test]
fn quarter_examples_matching() {
    let cases: Vec<(&str, &str)> = vec![
        ("Fall 2013", "F 13"),
        ("Fall 2013", "Fall 2013"),
        ("Fall 2013", "fall 2013"),
        ("Fall 2013", "  FA   13 "),
        ("Spring 2012", "sp 2012"),
        ("Summer 2015", "su 15"),
        ("Winter 2014", "w 14"),
        ("Winter 2014", "2 2014"),
    ];

    for (expected, input) in cases {
        let parsed = parse_quarter(input, true);
        assert_eq!(parsed.as_deref(), Ok(expected), "quarter '{input}' parsed to {parsed:?}");
    }
}

#[test]
fn quarter_list_examples_matching() {
    let cases: Vec<(Vec<&str>, &str)> = vec![
        (vec!["Fall 2013", "Winter 2014", "Spring 2014"], "F 13 - sp 2014"),
        (vec!["Winter 2014", "Spring 2014", "Summer 2014", "Fall 2014", "Winter 2015"], "w 14 - w 15"),
        (vec!["Fall 2013", "Spring 2014"], "F 13, sp 14"),
        (vec!["Summer 2015"], "summer 2015"),
    ];

    for (expected, input) in cases {
        let parsed = parse_quarters(input, true);
        assert_eq!(parsed, Ok(expected.iter().map(|q| q.to_string()).collect()), "quarters '{input}'");
    }
}

#[test]
fn day_examples_matching() {
    let cases: Vec<(Vec<&str>, &str)> = vec![
        (vec!["Monday", "Tuesday", "Wednesday"], "M - W"),
        (vec!["Monday", "Wednesday", "Friday"], "m, w, f"),
        (vec!["Thursday"], "thurs"),
        (vec!["Saturday", "Sunday"], "6 - 7"),
    ];

    for (expected, input) in cases {
        let parsed = parse_days(input);
        assert_eq!(parsed, Ok(expected.iter().map(|d| d.to_string()).collect()), "days '{input}'");
    }
}

#[test]
fn rejected_examples() {
    // (expected kind, input) for list parsers that must fail
    let quarter_cases: Vec<(ErrorKind, &str)> = vec![
        (ErrorKind::MalformedRange, "Fall 2013 - Spring 2010"),
        (ErrorKind::MalformedRange, "F - F 14"),
        (ErrorKind::UnrecognizedToken, "Autumn 2013"),
        (ErrorKind::UnrecognizedToken, "F 1913"),
    ];
    for (kind, input) in quarter_cases {
        let err = parse_quarters(input, true).unwrap_err();
        assert_eq!(err.kind(), kind, "quarters '{input}' failed with {err}");
    }

    let day_cases: Vec<(ErrorKind, &str)> = vec![
        (ErrorKind::MalformedRange, "M-W"),
        (ErrorKind::MalformedRange, "W - M"),
        (ErrorKind::UnrecognizedToken, "funday"),
    ];
    for (kind, input) in day_cases {
        let err = parse_days(input).unwrap_err();
        assert_eq!(err.kind(), kind, "days '{input}' failed with {err}");
    }
}

#[test]
fn errors_quote_input_as_typed() {
    // (reported input, error) for inputs carrying capitals and extra spaces
    let cases: Vec<(&str, crate::ParsingError)> = vec![
        ("M-W", parse_days("M-W").unwrap_err()),
        ("Funday", parse_days("mon, Funday").unwrap_err()),
        ("Autumn 2013", parse_quarter("Autumn 2013", true).unwrap_err()),
        ("Autumn  2013", parse_quarters(&["Fall 2013", "Autumn  2013"], true).unwrap_err()),
        ("Fall 2013 - Spring 2010", parse_quarters("Fall 2013 - Spring 2010", true).unwrap_err()),
        ("F - F 14", parse_quarters("F - F 14", true).unwrap_err()),
        ("2013-09-25   25:00", parse_datetime("2013-09-25   25:00").unwrap_err()),
        ("13/45/2013", parse_date("13/45/2013").unwrap_err()),
        ("25 PM", parse_time_of_day("25 PM").unwrap_err()),
    ];
    for (expected, err) in cases {
        assert_eq!(err.input(), expected, "{err}");
    }

    let err = parse_datetime("2013-09-25   25:00").unwrap_err();
    assert_eq!(err.to_string(), "'2013-09-25   25:00' is invalid - must consist of a valid date followed by an optional valid time.");
    assert_eq!(err.cause().map(|c| c.input()), Some("25:00"));
}
