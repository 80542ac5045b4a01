use crate::engine::UserInput;
use crate::error::ParsingError;
use crate::rules::course::{self, Course, CourseRecords, CourseSet};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

static DEFAULT_CONTEXT: Lazy<Context> = Lazy::new(Context::default);

/// Parsing context.
///
/// This holds the environment the course parser validates against: the set of
/// courses seen in historical records. Callers that refresh their records
/// build a new `Context` with [`Context::with_records`]; nothing is cached here.
#[derive(Clone)]
pub struct Context {
    /// Known courses, consulted when [`Options::check_records`] is set.
    pub records: Arc<dyn CourseRecords + Send + Sync>,
}

impl Context {
    pub fn with_records(records: impl CourseRecords + Send + Sync + 'static) -> Self {
        Self { records: Arc::new(records) }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::with_records(CourseSet::new())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("records", &"<course records>").finish()
    }
}

/// Options that affect parsing behavior.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Reject courses that do not appear in [`Context::records`], reporting
    /// which component (subject, number or section) is missing.
    pub check_records: bool,
}

/// Parse a course name into its canonical string, without checking records.
///
/// # Example
/// ```
/// use stemnorm::parse_course;
///
/// assert_eq!(parse_course("MATH 1A 01W").unwrap(), "Mathematics 1A 1W");
/// assert_eq!(parse_course("Comp Sci 1B").unwrap(), "Computer Science 1B");
/// ```
pub fn parse_course(text: &str) -> Result<String, ParsingError> {
    parse_course_with(text, &DEFAULT_CONTEXT, &Options::default()).map(|course| course.to_string())
}

/// Parse a course name using the provided `context`/`options`.
///
/// # Example
/// ```
/// use stemnorm::{Context, CourseSet, Options, parse_course_with};
///
/// let context = Context::with_records(CourseSet::from_courses(["Mathematics 1A"]));
/// let options = Options { check_records: true };
///
/// let course = parse_course_with("math 1a", &context, &options).unwrap();
/// assert_eq!((course.subject.as_str(), course.number.as_str()), ("Mathematics", "1A"));
///
/// let err = parse_course_with("math 1a 2", &context, &options).unwrap_err();
/// assert_eq!(err.reason(), "course 'Mathematics 1A' has no section '2' on record.");
/// ```
pub fn parse_course_with(text: &str, context: &Context, options: &Options) -> Result<Course, ParsingError> {
    let token = crate::text::normalize(text);
    course::course_token(&token, records_for(context, options)).map_err(|err| err.verbatim(&token, text))
}

/// Parse a comma-delimited list (or sequence) of course names.
///
/// Course lists are never ranges, so dashed input is rejected.
pub fn parse_courses<'a>(input: impl Into<UserInput<'a>>) -> Result<Vec<String>, ParsingError> {
    parse_courses_with(input, &DEFAULT_CONTEXT, &Options::default())
        .map(|courses| courses.iter().map(Course::to_string).collect())
}

pub fn parse_courses_with<'a>(
    input: impl Into<UserInput<'a>>,
    context: &Context,
    options: &Options,
) -> Result<Vec<Course>, ParsingError> {
    course::courses(input, records_for(context, options))
}

fn records_for<'c>(context: &'c Context, options: &Options) -> Option<&'c dyn CourseRecords> {
    if options.check_records { Some(&*context.records as &dyn CourseRecords) } else { None }
}
