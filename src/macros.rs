#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build an [`AliasTable`](crate::AliasTable) from literal rows:
///
/// ```ignore
/// aliases! {
///     "Fall" => ["f", "fa", "fall"],
///     "Winter" => ["w", "wi", "win", "winter"],
/// }
/// ```
#[macro_export]
macro_rules! aliases {
    ( $( $name:literal => [ $($alias:literal),* $(,)? ] ),* $(,)? ) => {
        $crate::AliasTable::new(vec![ $( ($name, vec![ $($alias),* ]) ),* ])
    };
}
