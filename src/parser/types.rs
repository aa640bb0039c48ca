//! Type name parsing.
//!
//! A type annotation is a single identifier. Whether it names a type is
//! decided later by the checker.

use crate::{ast::ast::Typename, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

pub fn parse_typename(parser: &mut Parser) -> Result<Typename, Error> {
    let error = parser.unexpected("expected type name");
    let token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    Ok(Typename::new(token.value.clone(), token.line()))
}
