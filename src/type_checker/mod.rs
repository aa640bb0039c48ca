//! Type checking and semantic analysis module.
//!
//! This module walks the parsed program once and annotates every expression
//! and declaration with its type in place, while:
//!
//! - Resolving names against a single flat symbol table
//! - Checking operators against the types of their operands
//! - Rejecting redefinitions and assignments to constants
//! - Giving uninitialized variables their type's default value
//!
//! Problems are reported through an `ErrorSink` and never stop the walk.

pub mod symbol_table;
pub mod type_checker;
