//! Shape classification and per-token mapping.

use super::input::{ParsedInput, UserInput};
use crate::error::ParsingError;
use crate::text::{collapse_spaces, normalize};
use tracing::trace;

/// Separator of a dashed range: a dash with one space on each side.
pub const RANGE_MARKER: &str = " - ";

/// Map every token of `input` through `mapping`.
///
/// - A `Sequence` maps each (normalized) element, preserving order.
/// - A `Text` containing `" - "` is a dashed range: both sides are mapped.
///   With an empty `values_to_slice` the two mapped endpoints are returned
///   unchecked; otherwise the inclusive slice of `values_to_slice` between them
///   is returned, and the left value must come strictly before the right one.
/// - A `Text` with a single bare `-` is rejected, since it is almost always a
///   range typed without the surrounding spaces.
/// - Any other `Text` is split on `,` (a text without commas yields one token).
///
/// # Example
/// ```
/// use stemnorm::{ParsedInput, parse_input};
///
/// let days = ["Mon".to_string(), "Tue".to_string(), "Wed".to_string()];
/// let capitalize = |s: &str| -> Result<String, stemnorm::ParsingError> {
///     let mut chars = s.chars();
///     Ok(chars.next().map(|c| c.to_uppercase().chain(chars).collect()).unwrap_or_default())
/// };
/// assert_eq!(parse_input("mon - wed", capitalize, &days).unwrap(), ParsedInput::Values(days.to_vec()));
/// assert_eq!(parse_input("fOo,  bar", capitalize, &[]).unwrap().into_vec(), vec!["Foo", "Bar"]);
/// ```
pub fn parse_input<'a, T, F>(
    input: impl Into<UserInput<'a>>,
    mut mapping: F,
    values_to_slice: &[T],
) -> Result<ParsedInput<T>, ParsingError>
where
    T: Clone + PartialEq,
    F: FnMut(&str) -> Result<T, ParsingError>,
{
    let input: UserInput<'a> = input.into();
    let raw = match input {
        UserInput::Sequence(items) => {
            trace!(len = items.len(), "parsing sequence input");
            let values = items
                .iter()
                .map(|item| map_token(&mut mapping, &normalize(item), item))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(ParsedInput::Values(values));
        }
        UserInput::Text(text) => text,
    };

    // Lower-casing never adds or removes spaces, dashes or commas, so the two
    // strings split at the same places.
    let shaped = collapse_spaces(raw);
    let text = shaped.to_lowercase();

    if let (Some((left, right)), Some((raw_left, raw_right))) =
        (text.split_once(RANGE_MARKER), shaped.split_once(RANGE_MARKER))
    {
        trace!(%left, %right, "parsing dashed input");
        let left_value = map_token(&mut mapping, left, raw_left)?;
        let right_value = map_token(&mut mapping, right, raw_right)?;
        if values_to_slice.is_empty() {
            return Ok(ParsedInput::Endpoints(left_value, right_value));
        }
        return slice_between(raw, &left_value, &right_value, values_to_slice).map(ParsedInput::Values);
    }

    if text.matches('-').count() == 1 {
        return Err(ParsingError::malformed_range(
            raw,
            format!("dashed input must be separated by '{RANGE_MARKER}' (including spaces)."),
        ));
    }

    trace!(%text, "parsing delimited input");
    let values = text
        .split(',')
        .zip(shaped.split(','))
        .map(|(token, raw_token)| map_token(&mut mapping, token.trim(), raw_token.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParsedInput::Values(values))
}

fn map_token<T, F>(mapping: &mut F, token: &str, raw: &str) -> Result<T, ParsingError>
where
    F: FnMut(&str) -> Result<T, ParsingError>,
{
    mapping(token).map_err(|err| err.verbatim(token, raw))
}

fn slice_between<T: Clone + PartialEq>(text: &str, left: &T, right: &T, ordering: &[T]) -> Result<Vec<T>, ParsingError> {
    let position = |value: &T| ordering.iter().position(|candidate| candidate == value);
    match (position(left), position(right)) {
        (Some(l), Some(r)) if l < r => Ok(ordering[l..=r].to_vec()),
        (Some(_), Some(_)) => Err(ParsingError::malformed_range(
            text,
            "dashed string must be of the form 'LHS - RHS' where LHS < RHS.",
        )),
        _ => Err(ParsingError::malformed_range(text, "range endpoints must both belong to the ordered values.")),
    }
}
