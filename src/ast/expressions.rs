use std::fmt::Display;

use super::{ast::Expr, types::TypeRef};

// LITERALS

/// The raw value written in a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Char(char),
}

/// The runtime kind of a literal value, before any language type is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Float,
    Str,
    Bool,
    Char,
}

impl LiteralValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            LiteralValue::Int(_) => ValueKind::Int,
            LiteralValue::Float(_) => ValueKind::Float,
            LiteralValue::Str(_) => ValueKind::Str,
            LiteralValue::Bool(_) => ValueKind::Bool,
            LiteralValue::Char(_) => ValueKind::Char,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Int => write!(f, "integer"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Str => write!(f, "str"),
            ValueKind::Bool => write!(f, "boolean"),
            ValueKind::Char => write!(f, "char"),
        }
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Int(value) => write!(f, "{}", value),
            LiteralValue::Float(value) => write!(f, "{:?}", value),
            LiteralValue::Str(value) => write!(f, "{:?}", value),
            LiteralValue::Bool(value) => write!(f, "{}", value),
            LiteralValue::Char(value) => write!(f, "{:?}", value),
        }
    }
}

/// Literal Expression
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub check_type: Option<TypeRef>,
    pub line: u32,
}

impl Literal {
    pub fn new(value: LiteralValue, line: u32) -> Self {
        Literal { value, check_type: None, line }
    }

    /// A literal whose type is already known, such as a synthesized default.
    ///
    /// # Arguments
    ///
    /// * `value` - The literal value
    /// * `check_type` - The type the literal is annotated with
    /// * `line` - Source line the literal is attributed to
    pub fn typed(value: LiteralValue, check_type: TypeRef, line: u32) -> Self {
        Literal { value, check_type: Some(check_type), line }
    }
}

/// Load Expression
/// Reads the current value of a named variable or constant.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadLocation {
    pub name: String,
    pub check_type: Option<TypeRef>,
    pub line: u32,
}

impl LoadLocation {
    pub fn new(name: String, line: u32) -> Self {
        LoadLocation { name, check_type: None, line }
    }
}

// OPERATORS

/// Unary Expression (`-x`, `+x`, `!x`)
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub op: String,
    pub operand: Box<Expr>,
    pub check_type: Option<TypeRef>,
    pub line: u32,
}

impl UnaryOp {
    /// Creates an unchecked unary node.
    ///
    /// # Arguments
    ///
    /// * `op` - Operator text (`+`, `-` or `!`)
    /// * `operand` - The expression the operator applies to
    /// * `line` - Line of the operator token
    pub fn new(op: String, operand: Expr, line: u32) -> Self {
        UnaryOp { op, operand: Box::new(operand), check_type: None, line }
    }
}

/// Binary Expression
/// Arithmetic and concatenation (`+ - * /`).
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub op: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub check_type: Option<TypeRef>,
    pub line: u32,
}

impl BinaryOp {
    /// Creates an unchecked binary node.
    ///
    /// # Arguments
    ///
    /// * `op` - Operator text
    /// * `left` - Left operand
    /// * `right` - Right operand
    /// * `line` - Line of the operator token
    pub fn new(op: String, left: Expr, right: Expr, line: u32) -> Self {
        BinaryOp { op, left: Box::new(left), right: Box::new(right), check_type: None, line }
    }
}

/// Relational Expression
/// Comparisons and the logical connectives (`< <= > >= == != && ||`).
#[derive(Debug, Clone, PartialEq)]
pub struct RelationalOp {
    pub op: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub check_type: Option<TypeRef>,
    pub line: u32,
}

impl RelationalOp {
    pub fn new(op: String, left: Expr, right: Expr, line: u32) -> Self {
        RelationalOp { op, left: Box::new(left), right: Box::new(right), check_type: None, line }
    }
}
