#[macro_use]
mod macros;
mod alias_table;
mod api;
mod engine;
mod error;
mod rules;
mod text;

pub use alias_table::{AliasTable, TableError};
pub use api::{Context, Options, parse_course, parse_course_with, parse_courses, parse_courses_with};
pub use engine::{ParsedInput, RANGE_MARKER, UserInput, parse_input};
pub use error::{ErrorKind, ParsingError};
pub use rules::course::{Course, CourseRecords, CourseSet};
pub use rules::labels::{parse_column_name, parse_metric_type, parse_time_unit_label};
pub use rules::time::quarter_dates::{QuarterCalendar, QuarterDates};
pub use rules::time::scalar::{
    DATE_FORMAT, DATETIME_FORMAT, TIME_FORMAT, parse_date, parse_date_value, parse_datetime, parse_datetime_range,
    parse_datetime_value, parse_time_of_day, parse_time_of_day_value, parse_time_range,
};
pub use rules::time::terms::{
    parse_days, parse_hours, parse_months, parse_quarter, parse_quarters, parse_weeks_in_quarter, parse_years,
};
pub use rules::vocabulary::{TABLE_NAMES, TERM_ORDER, Vocabulary, YEAR_SPAN, vocabulary};
pub use text::{abbreviated_list, normalize, pretty_list};
