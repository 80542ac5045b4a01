//! Input and output shapes of the composite engine.

/// Raw user input accepted by list-style parsers.
///
/// A `Text` may be a single token, a comma-delimited list, or a dashed range;
/// a `Sequence` is an already-split list of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput<'a> {
    Text(&'a str),
    Sequence(Vec<&'a str>),
}

impl<'a> From<&'a str> for UserInput<'a> {
    fn from(text: &'a str) -> Self {
        UserInput::Text(text)
    }
}

impl<'a> From<&'a String> for UserInput<'a> {
    fn from(text: &'a String) -> Self {
        UserInput::Text(text.as_str())
    }
}

impl<'a, 'b: 'a> From<&'a [&'b str]> for UserInput<'a> {
    fn from(items: &'a [&'b str]) -> Self {
        UserInput::Sequence(items.to_vec())
    }
}

impl<'a, 'b: 'a, const N: usize> From<&'a [&'b str; N]> for UserInput<'a> {
    fn from(items: &'a [&'b str; N]) -> Self {
        UserInput::Sequence(items.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for UserInput<'a> {
    fn from(items: Vec<&'a str>) -> Self {
        UserInput::Sequence(items)
    }
}

impl<'a> From<&'a [String]> for UserInput<'a> {
    fn from(items: &'a [String]) -> Self {
        UserInput::Sequence(items.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for UserInput<'a> {
    fn from(items: &'a Vec<String>) -> Self {
        UserInput::from(items.as_slice())
    }
}

impl UserInput<'_> {
    /// True when this is text containing the range marker `" - "` (after
    /// whitespace collapsing).
    pub fn is_dashed(&self) -> bool {
        match self {
            UserInput::Text(text) => crate::text::collapse_spaces(text).contains(super::RANGE_MARKER),
            UserInput::Sequence(_) => false,
        }
    }
}

/// Result of [`parse_input`](super::parse_input).
///
/// `Endpoints` is only produced for a dashed range when no ordering was given
/// to slice; every other shape yields `Values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput<T> {
    Values(Vec<T>),
    Endpoints(T, T),
}

impl<T> ParsedInput<T> {
    pub fn is_range(&self) -> bool {
        matches!(self, ParsedInput::Endpoints(..))
    }

    /// Flatten into a list; endpoints become a two-element list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ParsedInput::Values(values) => values,
            ParsedInput::Endpoints(left, right) => vec![left, right],
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ParsedInput<U> {
        match self {
            ParsedInput::Values(values) => ParsedInput::Values(values.into_iter().map(f).collect()),
            ParsedInput::Endpoints(left, right) => ParsedInput::Endpoints(f(left), f(right)),
        }
    }
}
