//! Label parsers for report options: time units, metrics and column names.

use crate::alias_table::AliasTable;
use crate::error::ParsingError;
use crate::rules::vocabulary::vocabulary;
use crate::text::{normalize, pretty_list};

fn resolve_label(table: &AliasTable, text: &str, what: &str) -> Result<String, ParsingError> {
    let token = normalize(text);
    table.lookup_by_alias(&token).map(str::to_string).map_err(|cause| {
        let labels: Vec<&str> = table.names().collect();
        ParsingError::unrecognized(text, format!("{what} must be one of {}.", pretty_list(&labels, "or")))
            .caused_by(cause)
    })
}

/// `"hourly"` → `hour`, `"wk in qtr"` → `week_in_quarter`, ...
pub fn parse_time_unit_label(text: &str) -> Result<String, ParsingError> {
    resolve_label(&vocabulary().time_units, text, "time unit")
}

pub fn parse_metric_type(text: &str) -> Result<String, ParsingError> {
    resolve_label(&vocabulary().metrics, text, "metric")
}

pub fn parse_column_name(text: &str) -> Result<String, ParsingError> {
    resolve_label(&vocabulary().columns, text, "column name")
}
