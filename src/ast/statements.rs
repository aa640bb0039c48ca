use super::{
    ast::{Expr, Location, Typename},
    types::TypeRef,
};

/// `const NAME = expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDeclaration {
    pub name: String,
    pub expr: Expr,
    pub check_type: Option<TypeRef>,
    pub line: u32,
}

impl ConstDeclaration {
    pub fn new(name: String, expr: Expr, line: u32) -> Self {
        ConstDeclaration { name, expr, check_type: None, line }
    }
}

/// `var NAME [TYPE] [= expr];`
///
/// The parser guarantees at least one of `typename` and `expr` is present.
/// After checking, a declaration with a resolvable type and no initializer has
/// one: a literal holding the type's default value.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    pub name: String,
    pub typename: Option<Typename>,
    pub expr: Option<Expr>,
    pub check_type: Option<TypeRef>,
    pub line: u32,
}

impl VarDeclaration {
    /// Creates an unchecked variable declaration.
    ///
    /// # Arguments
    ///
    /// * `name` - The declared name
    /// * `typename` - Optional type annotation
    /// * `expr` - Optional initializer
    /// * `line` - Line of the `var` keyword
    ///
    /// # Returns
    ///
    /// A declaration with no type assigned yet.
    pub fn new(name: String, typename: Option<Typename>, expr: Option<Expr>, line: u32) -> Self {
        VarDeclaration { name, typename, expr, check_type: None, line }
    }
}

/// `NAME = expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStatement {
    pub location: Location,
    pub expr: Expr,
    pub line: u32,
}

impl AssignmentStatement {
    pub fn new(location: Location, expr: Expr, line: u32) -> Self {
        AssignmentStatement { location, expr, line }
    }
}

/// `print expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStatement {
    pub expr: Expr,
    pub line: u32,
}

impl PrintStatement {
    pub fn new(expr: Expr, line: u32) -> Self {
        PrintStatement { expr, line }
    }
}
