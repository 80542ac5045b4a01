//! Token parsers built on the composite engine and the built-in vocabulary.

pub mod course;
pub mod labels;
pub mod time;
pub mod vocabulary;
