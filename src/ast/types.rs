//! Built-in types of the language.
//!
//! There are exactly four types and each exists once, as a `'static`. A type
//! knows which operators it accepts and what value a variable of that type
//! holds when declared without an initializer. Literal values are mapped to
//! types by their [`ValueKind`].

use std::{collections::HashMap, fmt};

use lazy_static::lazy_static;

use super::expressions::{LiteralValue, ValueKind};

pub type TypeRef = &'static Type;

pub struct Type {
    name: &'static str,
    kind: ValueKind,
    unary_ops: &'static [&'static str],
    binary_ops: &'static [&'static str],
    relational_ops: &'static [&'static str],
}

const COMPARISONS: &[&str] = &["<", "<=", ">", ">=", "==", "!="];
const ARITHMETIC: &[&str] = &["+", "-", "*", "/"];

pub static INT_TYPE: Type = Type {
    name: "int",
    kind: ValueKind::Int,
    unary_ops: &["+", "-"],
    binary_ops: ARITHMETIC,
    relational_ops: COMPARISONS,
};

pub static FLOAT_TYPE: Type = Type {
    name: "float",
    kind: ValueKind::Float,
    unary_ops: &["+", "-"],
    binary_ops: ARITHMETIC,
    relational_ops: COMPARISONS,
};

pub static STRING_TYPE: Type = Type {
    name: "string",
    kind: ValueKind::Str,
    unary_ops: &[],
    binary_ops: &["+"],
    relational_ops: COMPARISONS,
};

pub static BOOL_TYPE: Type = Type {
    name: "bool",
    kind: ValueKind::Bool,
    unary_ops: &[],
    binary_ops: &[],
    relational_ops: &["==", "!=", "&&", "||"],
};

lazy_static! {
    static ref LITERAL_TYPES: HashMap<ValueKind, TypeRef> = HashMap::from([
        (ValueKind::Int, &INT_TYPE),
        (ValueKind::Float, &FLOAT_TYPE),
        (ValueKind::Str, &STRING_TYPE),
        (ValueKind::Bool, &BOOL_TYPE),
    ]);
}

impl Type {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn supports_unary(&self, op: &str) -> bool {
        self.unary_ops.contains(&op)
    }

    pub fn supports_binary(&self, op: &str) -> bool {
        self.binary_ops.contains(&op)
    }

    pub fn supports_relational(&self, op: &str) -> bool {
        self.relational_ops.contains(&op)
    }

    /// Value given to a variable declared with this type and no initializer.
    pub fn default_value(&self) -> LiteralValue {
        match self.kind {
            ValueKind::Int => LiteralValue::Int(0),
            ValueKind::Float => LiteralValue::Float(0.0),
            ValueKind::Str => LiteralValue::Str(String::new()),
            ValueKind::Bool => LiteralValue::Bool(false),
            ValueKind::Char => LiteralValue::Char('\0'),
        }
    }
}

/// The built-in types, in the order they are seeded into a symbol table.
pub fn builtin_types() -> [TypeRef; 4] {
    [&INT_TYPE, &FLOAT_TYPE, &STRING_TYPE, &BOOL_TYPE]
}

/// Language type of a literal of the given kind, if the language has one.
pub fn type_for_kind(kind: ValueKind) -> Option<TypeRef> {
    LITERAL_TYPES.get(&kind).copied()
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Type {}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_sets() {
        assert!(INT_TYPE.supports_unary("-"));
        assert!(FLOAT_TYPE.supports_binary("/"));
        assert!(!STRING_TYPE.supports_unary("-"));
        assert!(STRING_TYPE.supports_binary("+"));
        assert!(!STRING_TYPE.supports_binary("*"));
        assert!(STRING_TYPE.supports_relational("<"));
        assert!(!BOOL_TYPE.supports_unary("!"));
        assert!(!BOOL_TYPE.supports_binary("+"));
        assert!(BOOL_TYPE.supports_relational("&&"));
        assert!(!BOOL_TYPE.supports_relational("<"));
        assert!(!INT_TYPE.supports_relational("||"));
    }

    #[test]
    fn test_default_values() {
        assert_eq!(INT_TYPE.default_value(), LiteralValue::Int(0));
        assert_eq!(FLOAT_TYPE.default_value(), LiteralValue::Float(0.0));
        assert_eq!(STRING_TYPE.default_value(), LiteralValue::Str(String::new()));
        assert_eq!(BOOL_TYPE.default_value(), LiteralValue::Bool(false));
    }

    #[test]
    fn test_type_for_kind() {
        assert_eq!(type_for_kind(ValueKind::Int), Some(&INT_TYPE));
        assert_eq!(type_for_kind(ValueKind::Str), Some(&STRING_TYPE));
        assert_eq!(type_for_kind(ValueKind::Char), None);
    }

    #[test]
    fn test_identity_and_formatting() {
        let names: Vec<_> = builtin_types().iter().map(|ty| ty.name()).collect();
        assert_eq!(names, vec!["int", "float", "string", "bool"]);
        assert_ne!(INT_TYPE, FLOAT_TYPE);
        assert_eq!(INT_TYPE.to_string(), "int");
        assert_eq!(format!("{:?}", &BOOL_TYPE), "Type(bool)");
    }
}
