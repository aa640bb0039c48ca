/// AST (Abstract Syntax Tree) module
///
/// Submodules:
/// - ast: program, statement and expression enums, plus shared node structs
/// - expressions: literal, load and operator nodes
/// - statements: declaration, assignment and print nodes
/// - types: the built-in types and the literal-kind to type map
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
