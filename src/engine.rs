//! Composite input engine.
//!
//! Every list-accepting parser in the crate funnels through [`parse_input`],
//! which decides the *shape* of the raw input and maps each token through a
//! caller-supplied function:
//!
//! ```text
//! UserInput ──┬─ Sequence(["m", "w"])  ──> map each element ──> Values
//!             │
//!             └─ Text ── normalize ──┬─ contains " - " ──> map both sides
//!                                    │                     ├─ no ordering  ──> Endpoints(l, r)
//!                                    │                     └─ ordering     ──> Values(ordering[l..=r])
//!                                    ├─ exactly one '-'  ──> MalformedRange error
//!                                    └─ otherwise        ──> split on ',' ──> Values
//! ```
//!
//! ## Responsibilities by module
//!
//! - `input.rs`: the `UserInput` / `ParsedInput` types and their conversions.
//! - `dispatch.rs`: shape classification, range slicing and delimited mapping.
//!
//! Mapping functions receive normalized tokens (see [`crate::text::normalize`]);
//! any error they return is propagated unchanged.

#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/input.rs"]
mod input;

pub use dispatch::{RANGE_MARKER, parse_input};
pub use input::{ParsedInput, UserInput};
