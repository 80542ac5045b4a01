mod debug_report;

use debug_report::Outcome;
use stemnorm::{
    Context, CourseSet, Options, ParsedInput, ParsingError, TABLE_NAMES, parse_column_name, parse_course_with,
    parse_courses_with, parse_date, parse_datetime, parse_datetime_range, parse_days, parse_hours, parse_metric_type,
    parse_months, parse_quarter, parse_quarters, parse_time_of_day, parse_time_range, parse_time_unit_label,
    parse_weeks_in_quarter, parse_years, vocabulary,
};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_KIND: Kind = Kind::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Course,
    Courses,
    Quarter,
    Quarters,
    Days,
    Weeks,
    Years,
    Months,
    Hours,
    Date,
    Time,
    TimeRange,
    Datetime,
    DatetimeRange,
    TimeUnit,
    Metric,
    Column,
}

const KINDS: [(&str, Kind); 17] = [
    ("course", Kind::Course),
    ("courses", Kind::Courses),
    ("quarter", Kind::Quarter),
    ("quarters", Kind::Quarters),
    ("days", Kind::Days),
    ("weeks", Kind::Weeks),
    ("years", Kind::Years),
    ("months", Kind::Months),
    ("hours", Kind::Hours),
    ("date", Kind::Date),
    ("time", Kind::Time),
    ("time-range", Kind::TimeRange),
    ("datetime", Kind::Datetime),
    ("datetime-range", Kind::DatetimeRange),
    ("time-unit", Kind::TimeUnit),
    ("metric", Kind::Metric),
    ("column", Kind::Column),
];

impl Kind {
    fn name(self) -> &'static str {
        KINDS.iter().find(|(_, kind)| *kind == self).map_or("course", |(name, _)| *name)
    }
}

fn kind_names() -> String {
    KINDS.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", ")
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "stemnorm=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let flags = config.flags;
    match config.command {
        Command::Table(name) => match vocabulary().table(&name) {
            Some(table) => debug_report::print_table(&name, table, config.color),
            None => {
                eprintln!("error: unknown table '{name}' (expected one of: {})", TABLE_NAMES.join(", "));
                std::process::exit(2);
            }
        },
        Command::Parse { kind, input, records } => {
            let context = match records {
                Some(records) => Context::with_records(records),
                None => Context::default(),
            };
            let options = Options { check_records: flags.check_records };
            let outcome = run(kind, &input, flags, &context, &options);
            let failed = outcome.is_err();
            debug_report::print_outcome(kind.name(), &input, &outcome, config.color);
            if failed {
                std::process::exit(1);
            }
        }
    }
}

fn run(kind: Kind, input: &str, flags: Flags, context: &Context, options: &Options) -> Result<Outcome, ParsingError> {
    let with_year = !flags.no_year;
    let outcome = match kind {
        Kind::Course => Outcome::single(parse_course_with(input, context, options)?),
        Kind::Courses => Outcome::values(parse_courses_with(input, context, options)?),
        Kind::Quarter => Outcome::single(parse_quarter(input, with_year)?),
        Kind::Quarters => Outcome::values(parse_quarters(input, with_year)?),
        Kind::Days => Outcome::values(parse_days(input)?),
        Kind::Weeks => Outcome::values(parse_weeks_in_quarter(input, flags.summer)?),
        Kind::Years => Outcome::values(parse_years(input)?),
        Kind::Months => Outcome::values(parse_months(input)?),
        Kind::Hours => Outcome::values(parse_hours(input)?),
        Kind::Date => Outcome::single(parse_date(input)?),
        Kind::Time => Outcome::single(parse_time_of_day(input)?),
        Kind::TimeRange => {
            let (start, end) = parse_time_range(input)?;
            Outcome::from(ParsedInput::Endpoints(start, end))
        }
        Kind::Datetime => Outcome::single(parse_datetime(input)?),
        Kind::DatetimeRange => Outcome::from(parse_datetime_range(input)?),
        Kind::TimeUnit => Outcome::single(parse_time_unit_label(input)?),
        Kind::Metric => Outcome::single(parse_metric_type(input)?),
        Kind::Column => Outcome::single(parse_column_name(input)?),
    };
    Ok(outcome)
}

enum Command {
    Parse { kind: Kind, input: String, records: Option<CourseSet> },
    Table(String),
}

#[derive(Debug, Clone, Copy, Default)]
struct Flags {
    check_records: bool,
    no_year: bool,
    summer: bool,
}

struct CliConfig {
    command: Command,
    flags: Flags,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut kind = DEFAULT_KIND;
    let mut records_path: Option<String> = None;
    let mut table: Option<String> = None;
    let mut flags = Flags::default();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("stemnorm {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--no-year" => flags.no_year = true,
            "--summer" => flags.summer = true,
            "--kind" | "-k" => {
                let value = args.next().ok_or_else(|| "error: --kind expects a value".to_string())?;
                kind = parse_kind(&value)?;
            }
            "--records" => {
                records_path = Some(args.next().ok_or_else(|| "error: --records expects a file path".to_string())?);
            }
            "--table" => {
                table = Some(args.next().ok_or_else(|| "error: --table expects a table name".to_string())?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--kind=") => {
                kind = parse_kind(arg.trim_start_matches("--kind="))?;
            }
            _ if arg.starts_with("--records=") => {
                records_path = Some(arg.trim_start_matches("--records=").to_string());
            }
            _ if arg.starts_with("--table=") => {
                table = Some(arg.trim_start_matches("--table=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(arg.trim_start_matches("--input=").to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    flags.check_records = records_path.is_some();
    if let Some(name) = table {
        if input.is_some() {
            return Err("error: --table does not take an input".to_string());
        }
        return Ok(CliConfig { command: Command::Table(name), flags, color });
    }

    let records = records_path.as_deref().map(load_records).transpose()?;
    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { command: Command::Parse { kind, input, records }, flags, color })
}

fn parse_kind(value: &str) -> Result<Kind, String> {
    KINDS
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| format!("error: invalid --kind '{value}' (expected one of: {})", kind_names()))
}

/// One course per line; blank lines are skipped.
fn load_records(path: &str) -> Result<CourseSet, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|err| format!("error: failed to read records '{path}': {err}"))?;
    let records: CourseSet = contents.lines().filter(|line| !line.trim().is_empty()).collect();
    tracing::debug!(path, entries = records.len(), "loaded course records");
    Ok(records)
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "stemnorm {version}

Normalize hand-entered course, quarter, weekday, date and time values.

Usage:
  stemnorm [OPTIONS] [--] <input...>
  stemnorm [OPTIONS] --input <text>
  stemnorm --table <name>

Options:
  -i, --input <text>         Input text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  -k, --kind <kind>          Parser to run. Default: {default_kind}
                             One of: {kinds}
  --records <file>           Newline-separated known courses; course kinds are
                             checked against them.
  --no-year                  Quarters are bare terms (Fall, Winter, ...).
  --summer                   Weeks belong to the six-week summer session.
  --table <name>             Print a built-in alias table instead of parsing.
                             One of: {tables}
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter for stderr diagnostics. Default: stemnorm=warn

Exit codes:
  0  Success.
  1  Input could not be parsed.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_kind = DEFAULT_KIND.name(),
        kinds = kind_names(),
        tables = TABLE_NAMES.join(", "),
    )
}
