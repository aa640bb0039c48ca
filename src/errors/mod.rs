//! Error types and error reporting.
//!
//! - `errors`: front-end errors carrying a source position, plus the
//!   semantic error messages produced by the checker
//! - `diagnostics`: the sink abstraction the checker reports through

pub mod diagnostics;
pub mod errors;
