//! Course name segmentation, cleanup and record validation.
//!
//! A course name has up to three space-separated components: a subject
//! (`math`, `Comp Sci`), a number starting at the first digit (`1A`) and a
//! section (`01W`). Each component has known data-entry artifacts that are
//! stripped before the subject is resolved through the subject table.

pub mod records;

use std::fmt;

use tracing::debug;

use crate::engine::{RANGE_MARKER, UserInput, parse_input};
use crate::error::ParsingError;
use crate::rules::vocabulary::vocabulary;
use crate::text::collapse_spaces;
pub use records::{CourseRecords, CourseSet};

/// A parsed course; `number` and `section` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Course {
    pub subject: String,
    pub number: String,
    pub section: String,
}

impl Course {
    /// `"Subject Number"`, or just the subject when there is no number.
    pub fn without_section(&self) -> String {
        join(&[self.subject.as_str(), self.number.as_str()])
    }
}

/// Canonical form: the non-empty components joined by single spaces.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&[self.subject.as_str(), self.number.as_str(), self.section.as_str()]))
    }
}

fn join(parts: &[&str]) -> String {
    parts.iter().filter(|part| !part.is_empty()).copied().collect::<Vec<_>>().join(" ")
}

/// Split at the first digit into (subject, number, section).
///
/// Without a digit the whole text is the subject.
pub(crate) fn split_components(text: &str) -> (&str, &str, &str) {
    match text.find(|c: char| c.is_ascii_digit()) {
        None => (text.trim(), "", ""),
        Some(position) => {
            let (subject, rest) = text.split_at(position);
            let (number, section) = rest.split_once(' ').unwrap_or((rest, ""));
            (subject.trim(), number, section.trim())
        }
    }
}

/// Parse one normalized course token, checking it against `records` when given.
pub(crate) fn course_token(token: &str, records: Option<&dyn CourseRecords>) -> Result<Course, ParsingError> {
    let (subject, number, section) = split_components(token);

    // a trailing quarter code ("math f022") leaks into the subject; number and
    // section lose zero padding, and stray periods go everywhere
    let subject = regex!(r"(\. f|\.| f)$").replace(subject, "").trim().to_string();
    let number = regex!(r"^0{0,2}|\.$").replace_all(&number.to_uppercase(), "").into_owned();
    let section = regex!(r"^0").replace(&section.to_uppercase(), "").into_owned();
    debug!(%token, %subject, %number, %section, "segmented course");

    let subject = vocabulary()
        .subjects
        .lookup_by_alias(&subject)
        .map_err(|cause| {
            ParsingError::unrecognized(token, format!("subject '{subject}' cannot be recognized.")).caused_by(cause)
        })?
        .to_string();
    let course = Course { subject, number, section };

    match records {
        Some(records) => check_records(token, course, records),
        None => Ok(course),
    }
}

fn check_records(token: &str, course: Course, records: &dyn CourseRecords) -> Result<Course, ParsingError> {
    if !records.has_subject(&course.subject) {
        debug!(subject = %course.subject, "subject not on record");
        return Err(ParsingError::not_on_record(token, format!("subject '{}' is not on record.", course.subject)));
    }
    if records.contains(&course.to_string()) {
        return Ok(course);
    }

    let without_section = course.without_section();
    let reason = if records.contains(&without_section) {
        debug!(course = %without_section, section = %course.section, "section not on record");
        format!("course '{without_section}' has no section '{}' on record.", course.section)
    } else if records.contains(&course.subject) {
        debug!(subject = %course.subject, number = %course.number, "course number not on record");
        format!("subject '{}' has no course number '{}' on record.", course.subject, course.number)
    } else {
        debug!(%token, "course not on record");
        "course name requires a recognizable subject, followed by either an existing course's number OR its number and section."
            .to_string()
    };
    Err(ParsingError::not_on_record(token, reason))
}

/// Parse a comma-delimited list or sequence of courses. Dashed input is rejected.
pub(crate) fn courses<'a>(
    input: impl Into<UserInput<'a>>,
    records: Option<&dyn CourseRecords>,
) -> Result<Vec<Course>, ParsingError> {
    let input: UserInput<'a> = input.into();
    let dashed = match &input {
        UserInput::Text(text) if input.is_dashed() => Some(*text),
        UserInput::Text(_) => None,
        UserInput::Sequence(items) => items.iter().copied().find(|item| collapse_spaces(item).contains(RANGE_MARKER)),
    };
    if let Some(text) = dashed {
        return Err(ParsingError::malformed_range(text, "course input cannot be dashed."));
    }
    parse_input(input, |token| course_token(token, records), &[]).map(|parsed| parsed.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::text::normalize;
    use proptest::prelude::*;

    fn parse(text: &str) -> Result<String, ParsingError> {
        course_token(&normalize(text), None).map(|course| course.to_string())
    }

    fn records() -> CourseSet {
        CourseSet::from_courses(["Mathematics 1A 1", "Physics 4A", "Biology"])
    }

    #[test]
    fn components_are_split_at_first_digit() {
        assert_eq!(split_components("comp sci 1b 01w"), ("comp sci", "1b", "01w"));
        assert_eq!(split_components("computer science"), ("computer science", "", ""));
        assert_eq!(split_components("math 22"), ("math", "22", ""));
    }

    #[test]
    fn artifacts_are_stripped() {
        assert_eq!(parse("MATH F022. 02").unwrap(), "Mathematics 22 2");
        assert_eq!(parse("math F0022. 2").unwrap(), "Mathematics 22 2");
        assert_eq!(parse("chem. 1A. 5").unwrap(), "Chemistry 1A 5");
        assert_eq!(parse("MATH 1A 01W").unwrap(), "Mathematics 1A 1W");
        assert_eq!(parse("phys 4A 01").unwrap(), "Physics 4A 1");
        assert_eq!(parse("phys 4a O1").unwrap(), "Physics 4A O1");
        assert_eq!(parse("phys 4A o1").unwrap(), "Physics 4A O1");
    }

    #[test]
    fn structured_course_keeps_components() {
        let course = course_token("comp sci 1b", None).unwrap();
        assert_eq!(course, Course { subject: "Computer Science".into(), number: "1B".into(), section: String::new() });
        assert_eq!(course.without_section(), "Computer Science 1B");
    }

    #[test]
    fn unknown_subject_names_the_subject() {
        let err = parse("basket weaving 101").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnrecognizedToken);
        assert_eq!(err.reason(), "subject 'basket weaving' cannot be recognized.");
        assert!(err.cause().is_some());
        assert!(parse("1A 01").is_err());
    }

    #[test]
    fn record_checks_report_most_specific_failure() {
        let records = records();
        let check = |text: &str| course_token(&normalize(text), Some(&records as &dyn CourseRecords));

        assert_eq!(check("math 1a 01").unwrap().to_string(), "Mathematics 1A 1");
        assert_eq!(check("bio").unwrap().to_string(), "Biology");

        let err = check("math 1a 2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnRecord);
        assert_eq!(err.reason(), "course 'Mathematics 1A' has no section '2' on record.");

        let err = check("phys 4b").unwrap_err();
        assert_eq!(err.reason(), "subject 'Physics' has no course number '4B' on record.");

        let err = check("chem 1a").unwrap_err();
        assert_eq!(err.reason(), "subject 'Chemistry' is not on record.");
    }

    #[test]
    fn generic_diagnostic_when_only_longer_entries_match() {
        let records: std::collections::HashSet<String> = ["Mathematics 1A 1".to_string()].into();
        let err = course_token("math 2", Some(&records as &dyn CourseRecords)).unwrap_err();
        assert!(err.reason().starts_with("course name requires a recognizable subject"));
    }

    #[test]
    fn course_lists_reject_ranges() {
        let err = courses("math 1a - math 1c", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRange);
        assert_eq!(err.reason(), "course input cannot be dashed.");

        let err = courses(&["bio", "Math 1A  -  math 2"], None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRange);
        assert_eq!(err.input(), "Math 1A  -  math 2");

        let parsed = courses("math 1a, phys 4a 01", None).unwrap();
        let names: Vec<String> = parsed.iter().map(Course::to_string).collect();
        assert_eq!(names, ["Mathematics 1A", "Physics 4A 1"]);
    }

    fn canonical_course() -> impl Strategy<Value = String> {
        let subjects: Vec<String> = vocabulary().subjects.names().map(str::to_string).collect();
        (prop::sample::select(subjects), "([1-9][0-9]?[A-Z]?)?", "([1-9][A-Z]?)?").prop_map(|(subject, number, section)| {
            if number.is_empty() { subject } else { join(&[subject.as_str(), number.as_str(), section.as_str()]) }
        })
    }

    proptest! {
        #[test]
        fn canonical_courses_reparse_to_themselves(course in canonical_course()) {
            prop_assert_eq!(parse(&course).unwrap(), course);
        }
    }
}
