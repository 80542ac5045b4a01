//! The runtime parsing error.

/// Category of a rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token did not match any alias of the table consulted.
    UnrecognizedToken,
    /// A dashed range was malformed, out of order, or not allowed here.
    MalformedRange,
    /// The input did not have any accepted shape (date, time, datetime).
    MalformedShape,
    /// A course parsed correctly but is missing from the injected records.
    NotOnRecord,
}

/// Raised for every invalid user input.
///
/// The display form quotes the offending input verbatim, followed by the reason:
/// `'M-W' is invalid - dashed input must be separated by ' - ' (including spaces).`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is invalid - {reason}")]
pub struct ParsingError {
    input: String,
    reason: String,
    kind: ErrorKind,
    #[source]
    cause: Option<Box<ParsingError>>,
}

impl ParsingError {
    pub fn new(kind: ErrorKind, input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { input: input.into(), reason: reason.into(), kind, cause: None }
    }

    pub fn unrecognized(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedToken, input, reason)
    }

    pub fn malformed_range(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedRange, input, reason)
    }

    pub fn malformed_shape(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedShape, input, reason)
    }

    pub fn not_on_record(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotOnRecord, input, reason)
    }

    /// Attach the lower-level failure this error wraps.
    pub fn caused_by(mut self, cause: ParsingError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Report `raw` instead of `token` when this error was raised on `token`.
    ///
    /// Mapping functions see normalized tokens; entry points call this so the
    /// caller reads back the text they typed. Errors raised on some other
    /// fragment (a wrapped cause, a sub-token) are left alone.
    pub(crate) fn verbatim(mut self, token: &str, raw: &str) -> Self {
        if self.input == token {
            self.input = raw.to_string();
        }
        self
    }

    /// The offending input, as the caller typed it.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The wrapped lower-level failure, if any.
    pub fn cause(&self) -> Option<&ParsingError> {
        self.cause.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_quotes_input_and_reason() {
        let err = ParsingError::unrecognized("xyz", "cannot be recognized as one of (a, b)");
        assert_eq!(err.to_string(), "'xyz' is invalid - cannot be recognized as one of (a, b)");
        assert_eq!(err.kind(), ErrorKind::UnrecognizedToken);
        assert!(err.source().is_none());
    }

    #[test]
    fn cause_is_exposed_as_source() {
        let inner = ParsingError::malformed_shape("25:00", "cannot be recognized as a time.");
        let outer = ParsingError::malformed_shape("2013-01-01 25:00", "bad datetime").caused_by(inner.clone());
        assert_eq!(outer.cause(), Some(&inner));
        assert_eq!(outer.source().map(|s| s.to_string()), Some(inner.to_string()));
    }

    #[test]
    fn verbatim_only_replaces_matching_token() {
        let err = ParsingError::unrecognized("fal 2013", "nope").verbatim("fal 2013", "FAL  2013");
        assert_eq!(err.input(), "FAL  2013");
        assert_eq!(err.kind(), ErrorKind::UnrecognizedToken);

        let err = ParsingError::unrecognized("2013", "nope").verbatim("fal 2013", "FAL  2013");
        assert_eq!(err.input(), "2013");
    }
}
