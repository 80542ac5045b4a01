//! Ordered lookup table from canonical names to their accepted aliases.
//!
//! An [`AliasTable`] is built once from literal rows and never mutated. Each row
//! has a 1-based *ordering* (its declared position), a canonical *name*, and a
//! set of *aliases*. Lookups compare strings exactly; callers normalize first
//! (see [`crate::text::normalize`]).
//!
//! ```text
//! ***************** Alias Table *****************
//! | ORDERING |   NAME    |       ALIASES        |
//! |    1     |  Monday   | 1, m, mo, mon, monday |
//! ...
//! ```
//!
//! When the same alias is declared by more than one row, the earliest row wins.

use crate::error::ParsingError;
use crate::text::abbreviated_list;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Failure to construct an [`AliasTable`] from malformed static rows.
///
/// This is a configuration error, distinct from [`ParsingError`] which reports
/// invalid user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("cannot construct AliasTable - name '{0}' may only contain letters, digits, spaces, and underscores")]
    InvalidName(String),

    #[error(
        "cannot construct AliasTable - alias '{alias}' of '{name}' may only contain letters, digits, spaces, and underscores"
    )]
    InvalidAlias { name: String, alias: String },

    #[error("cannot construct AliasTable - name '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("cannot construct AliasTable - alias '{alias}' is repeated in row '{name}'; aliases must form a set")]
    RepeatedAlias { name: String, alias: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    name: String,
    aliases: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    rows: Vec<Row>,
    /// alias -> index of the first row declaring it
    index: HashMap<String, usize>,
}

/// Letters, digits, spaces and underscores, with at least one letter or digit.
fn is_valid_entry(s: &str) -> bool {
    s.chars().all(|c| c.is_alphanumeric() || c == ' ' || c == '_') && s.chars().any(char::is_alphanumeric)
}

impl AliasTable {
    /// Build a table from `(name, aliases)` rows in declared order.
    ///
    /// # Example
    /// ```
    /// use stemnorm::AliasTable;
    ///
    /// let table = AliasTable::new([("joe", vec!["joseph", "jose", "joe", "jo"]), ("sally", vec!["sally"])]).unwrap();
    /// assert_eq!(table.find_by_alias("jo"), Some("joe"));
    /// assert_eq!(table.find_by_ordering(2), Some("sally"));
    /// ```
    pub fn new<I, N, A, S>(rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (N, A)>,
        N: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = AliasTable { rows: Vec::new(), index: HashMap::new() };
        for (name, aliases) in rows {
            let name = name.into();
            if !is_valid_entry(&name) {
                return Err(TableError::InvalidName(name));
            }
            if table.rows.iter().any(|row| row.name == name) {
                return Err(TableError::DuplicateName(name));
            }

            let mut set = BTreeSet::new();
            for alias in aliases {
                let alias = alias.into();
                if !is_valid_entry(&alias) {
                    return Err(TableError::InvalidAlias { name, alias });
                }
                if set.contains(&alias) {
                    return Err(TableError::RepeatedAlias { name, alias });
                }
                set.insert(alias);
            }
            table.push_row(Row { name, aliases: set });
        }
        Ok(table)
    }

    /// Concatenate several tables into one, keeping declared order.
    pub fn merged(tables: &[&AliasTable]) -> Result<Self, TableError> {
        let mut merged = AliasTable { rows: Vec::new(), index: HashMap::new() };
        for row in tables.iter().flat_map(|t| t.rows.iter()) {
            if merged.rows.iter().any(|r| r.name == row.name) {
                return Err(TableError::DuplicateName(row.name.clone()));
            }
            merged.push_row(row.clone());
        }
        Ok(merged)
    }

    fn push_row(&mut self, row: Row) {
        let position = self.rows.len();
        for alias in &row.aliases {
            self.index.entry(alias.clone()).or_insert(position);
        }
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Canonical names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.name.as_str())
    }

    /// The alias set of `name`, if it is a row of this table.
    pub fn aliases(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.rows.iter().find(|row| row.name == name).map(|row| &row.aliases)
    }

    /// 1-based declared position of `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.name == name).map(|i| i + 1)
    }

    /// Name of the first row whose aliases contain `alias`, or `None`.
    pub fn find_by_alias(&self, alias: &str) -> Option<&str> {
        self.index.get(alias).map(|&i| self.rows[i].name.as_str())
    }

    /// Like [`find_by_alias`](Self::find_by_alias), but reports the valid names on failure.
    pub fn lookup_by_alias(&self, alias: &str) -> Result<&str, ParsingError> {
        self.find_by_alias(alias).ok_or_else(|| {
            let names: Vec<&str> = self.names().collect();
            ParsingError::unrecognized(alias, format!("cannot be recognized as one of {}", abbreviated_list(&names)))
        })
    }

    /// Name at 1-based `position`, or `None` when out of range (including 0).
    pub fn find_by_ordering(&self, position: usize) -> Option<&str> {
        position.checked_sub(1).and_then(|i| self.rows.get(i)).map(|row| row.name.as_str())
    }

    /// Like [`find_by_ordering`](Self::find_by_ordering), but reports the valid range on failure.
    pub fn lookup_by_ordering(&self, position: usize) -> Result<&str, ParsingError> {
        self.find_by_ordering(position).ok_or_else(|| {
            ParsingError::unrecognized(
                position.to_string(),
                format!("ordering must fall between 1 and {}.", self.rows.len()),
            )
        })
    }
}

impl fmt::Display for AliasTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid: Vec<[String; 3]> = vec![["ORDERING".into(), "NAME".into(), "ALIASES".into()]];
        for (i, row) in self.rows.iter().enumerate() {
            let mut aliases: Vec<&str> = row.aliases.iter().map(String::as_str).collect();
            aliases.sort_by_key(|a| (a.len(), *a));
            let description = if aliases.is_empty() { "--".to_string() } else { aliases.join(", ") };
            grid.push([(i + 1).to_string(), row.name.clone(), description]);
        }

        let widths: Vec<usize> =
            (0..3).map(|col| grid.iter().map(|cells| cells[col].chars().count()).max().unwrap_or(0)).collect();
        let table_width = 3 * widths.len() + widths.iter().sum::<usize>() + 1;

        writeln!(f, "{:*^table_width$}", " Alias Table ")?;
        for cells in &grid {
            let line: Vec<String> =
                cells.iter().zip(&widths).map(|(cell, &width)| format!(" {cell:^width$} ")).collect();
            writeln!(f, "|{}|", line.join("|"))?;
        }
        write!(f, "|{}|", "_".repeat(table_width - 2))
    }
}
