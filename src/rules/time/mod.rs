//! Date, time and academic-calendar parsers.

pub mod quarter_dates;
pub mod scalar;
pub mod terms;

#[cfg(test)]
mod tests;
