//! Core tree definitions: the program, and the closed statement and
//! expression kinds the checker matches on.

use super::{
    expressions::{BinaryOp, Literal, LoadLocation, RelationalOp, UnaryOp},
    statements::{AssignmentStatement, ConstDeclaration, PrintStatement, VarDeclaration},
    types::TypeRef,
};

/// A whole source file: statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Creates a program from parsed statements.
    ///
    /// # Arguments
    ///
    /// * `statements` - Statements in source order
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }
}

/// Statement kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Const(ConstDeclaration),
    Var(VarDeclaration),
    Assignment(AssignmentStatement),
    Print(PrintStatement),
}

impl Stmt {
    pub fn line(&self) -> u32 {
        match self {
            Stmt::Const(decl) => decl.line,
            Stmt::Var(decl) => decl.line,
            Stmt::Assignment(assignment) => assignment.line,
            Stmt::Print(print) => print.line,
        }
    }
}

/// Expression kinds. Every kind carries the type inferred for it by the
/// checker; `None` means it has not been checked or could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    LoadLocation(LoadLocation),
    UnaryOp(UnaryOp),
    BinaryOp(BinaryOp),
    RelationalOp(RelationalOp),
}

impl Expr {
    pub fn check_type(&self) -> Option<TypeRef> {
        match self {
            Expr::Literal(literal) => literal.check_type,
            Expr::LoadLocation(load) => load.check_type,
            Expr::UnaryOp(unary) => unary.check_type,
            Expr::BinaryOp(binary) => binary.check_type,
            Expr::RelationalOp(relational) => relational.check_type,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            Expr::Literal(literal) => literal.line,
            Expr::LoadLocation(load) => load.line,
            Expr::UnaryOp(unary) => unary.line,
            Expr::BinaryOp(binary) => binary.line,
            Expr::RelationalOp(relational) => relational.line,
        }
    }
}

/// An identifier used as an assignment target.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub check_type: Option<TypeRef>,
    pub line: u32,
}

impl Location {
    pub fn new(name: String, line: u32) -> Self {
        Location { name, check_type: None, line }
    }
}

/// The type name written in a variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Typename {
    pub name: String,
    pub check_type: Option<TypeRef>,
    pub line: u32,
}

impl Typename {
    pub fn new(name: String, line: u32) -> Self {
        Typename { name, check_type: None, line }
    }
}
