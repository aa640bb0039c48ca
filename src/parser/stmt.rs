use crate::{
    ast::{
        ast::{Location, Stmt},
        statements::{AssignmentStatement, ConstDeclaration, PrintStatement, VarDeclaration},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_typename};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        return handler(parser);
    }

    parse_assignment_stmt(parser)
}

fn expect_identifier(parser: &mut Parser, context: &str) -> Result<String, Error> {
    let error = parser.unexpected(context);
    Ok(parser.expect_error(TokenKind::Identifier, Some(error))?.value)
}

pub fn parse_const_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let line = parser.advance().line();
    let name = expect_identifier(parser, "expected identifier during constant declaration")?;

    let error = parser.unexpected("expected rhs in constant definition");
    parser.expect_error(TokenKind::Assignment, Some(error))?;
    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Const(ConstDeclaration::new(name, expr, line)))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let line = parser.advance().line();
    let name = expect_identifier(parser, "expected identifier during variable declaration")?;

    let typename = if parser.current_token_kind() == TokenKind::Identifier {
        Some(parse_typename(parser)?)
    } else {
        None
    };

    let expr = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    if typename.is_none() && expr.is_none() {
        return Err(Error::new(ErrorImpl::ExpectedExplicitValue, parser.get_position()));
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Var(VarDeclaration::new(name, typename, expr, line)))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let line = parser.advance().line();
    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Print(PrintStatement::new(expr, line)))
}

/// `NAME = expr;`, the fallback for statements without a leading keyword.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let line = parser.current_token().line();
    let name = expect_identifier(parser, "expected statement")?;

    parser.expect(TokenKind::Assignment)?;
    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assignment(AssignmentStatement::new(Location::new(name, line), expr, line)))
}
