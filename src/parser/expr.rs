use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryOp, Literal, LiteralValue, LoadLocation, RelationalOp, UnaryOp},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("expected expression")),
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the caller, keep folding it into lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser.get_bp_lookup().get(&token_kind).unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => return Err(parser.unexpected("expected operator")),
        };
        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let line = token.line();

    let value = match token.kind {
        TokenKind::Integer => LiteralValue::Int(token.value.parse().map_err(|_| {
            Error::new(ErrorImpl::NumberParseError { token: token.value.clone() }, parser.get_position())
        })?),
        TokenKind::Float => LiteralValue::Float(token.value.parse().map_err(|_| {
            Error::new(ErrorImpl::NumberParseError { token: token.value.clone() }, parser.get_position())
        })?),
        TokenKind::String => LiteralValue::Str(token.value.clone()),
        TokenKind::Char => match token.value.chars().next() {
            Some(ch) => LiteralValue::Char(ch),
            None => return Err(parser.unexpected("empty character literal")),
        },
        TokenKind::True => LiteralValue::Bool(true),
        TokenKind::False => LiteralValue::Bool(false),
        TokenKind::Identifier => {
            parser.advance();
            return Ok(Expr::LoadLocation(LoadLocation::new(token.value, line)));
        }
        _ => return Err(parser.unexpected("expected literal or name")),
    };

    parser.advance();
    Ok(Expr::Literal(Literal::new(value, line)))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let line = operator_token.line();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::BinaryOp(BinaryOp::new(operator_token.value, left, right, line)))
}

/// Comparisons and `&&`/`||` all produce relational nodes.
pub fn parse_relational_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let line = operator_token.line();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::RelationalOp(RelationalOp::new(operator_token.value, left, right, line)))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let line = operator_token.line();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::UnaryOp(UnaryOp::new(operator_token.value, operand, line)))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
