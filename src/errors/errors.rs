use std::fmt::Display;

use thiserror::Error;

use crate::{ast::{expressions::ValueKind, types::TypeRef}, Position};

/// A front-end (lexing or parsing) failure at a source position.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} on line {}", .position.line)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedExplicitValue => "ExpectedExplicitValue",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::ExpectedExplicitValue => ErrorTip::Suggestion(String::from(
                "Expected a type name or an initial value in variable declaration",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected explicit type or value in variable declaration")]
    ExpectedExplicitValue,
}

/// Which operand of a binary or relational operator rejected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Lhs,
    Rhs,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Lhs => write!(f, "LHS"),
            Side::Rhs => write!(f, "RHS"),
        }
    }
}

/// Semantic problems found by the checker. These are reported through an
/// `ErrorSink` rather than returned, so checking carries on after each one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("name '{name}' not found")]
    NameNotFound { name: String },
    #[error("name '{name}' not defined")]
    NameNotDefined { name: String },
    #[error("cannot use {type_} outside of variable declarations")]
    TypeNameAsValue { type_: TypeRef },
    #[error("{name} is not a valid type")]
    NotAType { name: String },
    #[error("Using unrecognized type {kind}")]
    UnrecognizedType { kind: ValueKind },
    #[error("Unary operator {op} not supported")]
    UnsupportedUnaryOperator { op: String },
    #[error("Binary operator {op} does not have matching LHS/RHS types")]
    BinaryTypeMismatch { op: String },
    #[error("Binary operator {op} not supported on {side} of expression")]
    UnsupportedBinaryOperator { op: String, side: Side },
    #[error("Relational operator {op} does not have matching LHS/RHS types")]
    RelationalTypeMismatch { op: String },
    #[error("Relational operator {op} not supported on {side} of expression")]
    UnsupportedRelationalOperator { op: String, side: Side },
    #[error("Attempted to redefine const '{name}', not allowed")]
    ConstRedefinition { name: String },
    #[error("Attempted to redefine var '{name}', not allowed")]
    VarRedefinition { name: String },
    #[error("Cannot assign {value} to {declared}")]
    AssignmentTypeMismatch { value: TypeRef, declared: TypeRef },
    #[error("Cannot assign to constant {name}")]
    AssignToConstant { name: String },
}
