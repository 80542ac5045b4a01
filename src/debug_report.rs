use std::error::Error;

use stemnorm::{AliasTable, ErrorKind, ParsedInput, ParsingError};

mod ansi {
    const RESET: &str = "\x1b[0m";
    const BOLD: &str = "\x1b[1m";
    const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Wraps text in escape codes, or passes it through when color is off.
    pub struct Palette(bool);

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self(enabled)
        }

        pub fn paint(&self, s: impl AsRef<str>, code: &str) -> String {
            if self.0 { format!("{code}{}{RESET}", s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

/// Canonical values produced by one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub values: Vec<String>,
    /// The values are the two endpoints of a dashed range.
    pub is_range: bool,
}

impl Outcome {
    pub fn single(value: impl ToString) -> Self {
        Self { values: vec![value.to_string()], is_range: false }
    }

    pub fn values<T: ToString>(values: Vec<T>) -> Self {
        Self { values: values.iter().map(ToString::to_string).collect(), is_range: false }
    }
}

impl From<ParsedInput<String>> for Outcome {
    fn from(parsed: ParsedInput<String>) -> Self {
        let is_range = parsed.is_range();
        Self { values: parsed.into_vec(), is_range }
    }
}

pub fn print_outcome(kind: &str, input: &str, outcome: &Result<Outcome, ParsingError>, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing {kind}: \"{}\"", input.trim()), ansi::CYAN)));

    match outcome {
        Ok(outcome) => {
            println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
            print_values(outcome, &palette);
        }
        Err(err) => {
            println!("\n{}", palette.paint("━━━ Error ━━━", ansi::GRAY));
            print_error_chain(err, &palette);
        }
    }
    println!();
}

fn print_values(outcome: &Outcome, palette: &ansi::Palette) {
    if outcome.values.is_empty() {
        println!("{}", palette.dim("  No values produced"));
        return;
    }

    if let [start, end] = outcome.values.as_slice() {
        if outcome.is_range {
            println!(
                "  {} {} {}",
                palette.bold(palette.paint(start, ansi::GREEN)),
                palette.dim("→"),
                palette.bold(palette.paint(end, ansi::GREEN))
            );
            return;
        }
    }

    for (idx, value) in outcome.values.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{idx}]"), ansi::GRAY), palette.bold(palette.paint(value, ansi::GREEN)));
    }
}

fn print_error_chain(err: &ParsingError, palette: &ansi::Palette) {
    println!(
        "  {} {}  {} {}",
        palette.paint(kind_label(err.kind()), ansi::RED),
        palette.bold(format!("'{}'", err.input())),
        palette.dim("│"),
        err.reason()
    );

    let mut source = err.source();
    let mut depth = 1;
    while let Some(cause) = source {
        let indent = "  ".repeat(depth);
        println!("  {indent}{} {}", palette.paint("caused by:", ansi::YELLOW), palette.dim(cause.to_string()));
        source = cause.source();
        depth += 1;
    }
}

fn kind_label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::UnrecognizedToken => "unrecognized",
        ErrorKind::MalformedRange => "malformed range",
        ErrorKind::MalformedShape => "malformed",
        ErrorKind::NotOnRecord => "not on record",
    }
}

pub fn print_table(name: &str, table: &AliasTable, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Table: {name}"), ansi::CYAN)));
    println!("{}", palette.dim(format!("  {} rows", table.len())));
    println!("\n{}", palette.paint(table.to_string(), ansi::BLUE));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_only_when_enabled() {
        assert_eq!(ansi::Palette::new(false).bold("x"), "x");
        assert_eq!(ansi::Palette::new(true).paint("x", ansi::RED), "\x1b[31mx\x1b[0m");
        assert_eq!(ansi::Palette::new(true).dim("x"), "\x1b[2mx\x1b[0m");
    }

    #[test]
    fn endpoints_mark_outcome_as_range() {
        let outcome = Outcome::from(ParsedInput::Endpoints("a".to_string(), "b".to_string()));
        assert!(outcome.is_range);
        assert_eq!(outcome.values, ["a", "b"]);
    }
}
