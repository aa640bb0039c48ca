use std::collections::{hash_map::Iter, HashMap};

use crate::ast::types::{builtin_types, TypeRef};

/// What a declared name refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub line: u32,
    pub check_type: Option<TypeRef>,
}

impl Binding {
    pub fn new(name: &str, line: u32, check_type: Option<TypeRef>) -> Self {
        Binding { name: name.to_string(), line, check_type }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    /// A built-in type name.
    Type(TypeRef),
    Const(Binding),
    Var(Binding),
    /// Left behind by an assignment statement: the name now stands for the
    /// assigned expression.
    Value(Binding),
}

impl Symbol {
    /// Type attached to the entry. Type names carry none, they are not values.
    pub fn check_type(&self) -> Option<TypeRef> {
        match self {
            Symbol::Type(_) => None,
            Symbol::Const(binding) | Symbol::Var(binding) | Symbol::Value(binding) => binding.check_type,
        }
    }
}

/// One flat namespace for types, constants and variables.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// A table holding only the built-in type names.
    pub fn new() -> Self {
        let symbols = builtin_types()
            .into_iter()
            .map(|ty| (ty.name().to_string(), Symbol::Type(ty)))
            .collect();

        SymbolTable { symbols }
    }

    /// Binds `name`, replacing any previous entry.
    pub fn define(&mut self, name: &str, symbol: Symbol) {
        self.symbols.insert(name.to_string(), symbol);
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Symbol> {
        self.symbols.iter()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
