//! Small string helpers shared by every parser.

/// Collapse whitespace runs to single spaces, trim, and lower-case.
///
/// Every public parser applies this once to raw input before any alias lookup;
/// mapping functions further down the pipeline receive tokens in this form.
pub fn normalize(text: &str) -> String {
    collapse_spaces(text).to_lowercase()
}

/// Collapse whitespace runs to single spaces and trim, preserving case.
pub fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render names for an error message, keeping the first two and last two when
/// there are more than four, e.g. `(2000, 2001, ..., 2098, 2099)`.
pub fn abbreviated_list<S: AsRef<str>>(names: &[S]) -> String {
    let shown: Vec<&str> = if names.len() > 4 {
        let n = names.len();
        vec![names[0].as_ref(), names[1].as_ref(), "...", names[n - 2].as_ref(), names[n - 1].as_ref()]
    } else {
        names.iter().map(AsRef::as_ref).collect()
    };
    format!("({})", shown.join(", "))
}

/// Join items into a sentence fragment: `a`, `a or b`, `a, b, or c`.
pub fn pretty_list<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    let items: Vec<&str> = items.iter().map(|s| s.as_ref().trim()).collect();
    match items.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} {conjunction} {second}"),
        [init @ .., last] => format!("{}, {conjunction} {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_and_lowercases() {
        assert_eq!(normalize("  Comp   SCI\t1b  "), "comp sci 1b");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn collapse_keeps_case() {
        assert_eq!(collapse_spaces(" Fall    2013 "), "Fall 2013");
    }

    #[test]
    fn abbreviation_kicks_in_above_four() {
        assert_eq!(abbreviated_list(&["a", "b", "c", "d"]), "(a, b, c, d)");
        assert_eq!(abbreviated_list(&["a", "b", "c", "d", "e"]), "(a, b, ..., d, e)");
    }

    #[test]
    fn pretty_list_uses_oxford_comma() {
        assert_eq!(pretty_list(&["Fall"], "or"), "Fall");
        assert_eq!(pretty_list(&["Fall", "Winter"], "or"), "Fall or Winter");
        assert_eq!(pretty_list(&["Fall", "Winter", "Spring", "Summer"], "or"), "Fall, Winter, Spring, or Summer");
    }
}
