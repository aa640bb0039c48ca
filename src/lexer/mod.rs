//! Lexical analysis module.
//!
//! Converts source text into a stream of tokens for the parser:
//!
//! - Tokenization using an anchored regex pattern table
//! - Recognition of keywords, identifiers, literals and operators
//! - Byte offset and line tracking for diagnostics
//! - Comment and whitespace skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
