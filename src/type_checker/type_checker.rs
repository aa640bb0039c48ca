use tracing::{debug, debug_span, info, trace};

use crate::{
    ast::{
        ast::{Expr, Location, Program, Stmt, Typename},
        expressions::{BinaryOp, Literal, LoadLocation, RelationalOp, UnaryOp},
        statements::{AssignmentStatement, ConstDeclaration, PrintStatement, VarDeclaration},
        types::{type_for_kind, TypeRef, BOOL_TYPE},
    },
    errors::{
        diagnostics::ErrorSink,
        errors::{SemanticError, Side},
    },
};

use super::symbol_table::{Binding, Symbol, SymbolTable};

/// Walks a program, annotating every node with its type and reporting
/// semantic errors to a sink. Errors never stop the walk.
pub struct Checker<'a> {
    symtab: SymbolTable,
    sink: &'a mut dyn ErrorSink,
    errors_reported: usize,
}

impl<'a> Checker<'a> {
    pub fn new(sink: &'a mut dyn ErrorSink) -> Self {
        Checker {
            symtab: SymbolTable::new(),
            sink,
            errors_reported: 0,
        }
    }

    /// Checks `program` in place and hands back the final symbol table.
    pub fn check(mut self, program: &mut Program) -> SymbolTable {
        let span = debug_span!("check_program", statements = program.statements.len());
        let _enter = span.enter();

        self.visit_program(program);

        info!(
            errors = self.errors_reported,
            symbols = self.symtab.len(),
            "semantic check finished"
        );
        self.symtab
    }

    fn report(&mut self, line: u32, error: SemanticError) {
        debug!(line, %error, "semantic error");
        self.errors_reported += 1;
        self.sink.error(line, error.to_string());
    }

    fn visit_program(&mut self, program: &mut Program) {
        for stmt in program.statements.iter_mut() {
            self.visit_stmt(stmt);

            // After an assignment the target name denotes the assigned value
            if let Stmt::Assignment(assignment) = stmt {
                let name = &assignment.location.name;
                let binding = Binding::new(name, assignment.line, assignment.expr.check_type());
                self.symtab.define(name, Symbol::Value(binding));
            }
        }
    }

    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Const(decl) => self.visit_const_decl(decl),
            Stmt::Var(decl) => self.visit_var_decl(decl),
            Stmt::Assignment(assignment) => self.visit_assignment(assignment),
            Stmt::Print(print) => self.visit_print(print),
        }
    }

    fn visit_expr(&mut self, expr: &mut Expr) {
        match expr {
            Expr::Literal(literal) => self.visit_literal(literal),
            Expr::LoadLocation(load) => self.visit_load_location(load),
            Expr::UnaryOp(unary) => self.visit_unary(unary),
            Expr::BinaryOp(binary) => self.visit_binary(binary),
            Expr::RelationalOp(relational) => self.visit_relational(relational),
        }
    }

    // STATEMENTS

    fn visit_print(&mut self, print: &mut PrintStatement) {
        self.visit_expr(&mut print.expr);
    }

    fn visit_const_decl(&mut self, decl: &mut ConstDeclaration) {
        // Reported, but the constant is still rebound below
        if self.symtab.lookup(&decl.name).is_some() {
            self.report(decl.line, SemanticError::ConstRedefinition { name: decl.name.clone() });
        }
        self.symtab.define(&decl.name, Symbol::Const(Binding::new(&decl.name, decl.line, None)));

        self.visit_expr(&mut decl.expr);
        decl.check_type = decl.expr.check_type();

        debug!(name = %decl.name, check_type = ?decl.check_type, "const declared");
        self.symtab.define(
            &decl.name,
            Symbol::Const(Binding::new(&decl.name, decl.line, decl.check_type)),
        );
    }

    fn visit_var_decl(&mut self, decl: &mut VarDeclaration) {
        if self.symtab.lookup(&decl.name).is_some() {
            decl.check_type = None;
            self.report(decl.line, SemanticError::VarRedefinition { name: decl.name.clone() });
            return;
        }
        self.symtab.define(&decl.name, Symbol::Var(Binding::new(&decl.name, decl.line, None)));

        let declared = match &mut decl.typename {
            Some(typename) => {
                self.visit_typename(typename);
                typename.check_type
            }
            None => None,
        };
        // The initializer already sees the declared type
        self.symtab.define(&decl.name, Symbol::Var(Binding::new(&decl.name, decl.line, declared)));

        let mut check_type = declared;
        if let Some(expr) = &mut decl.expr {
            self.visit_expr(expr);
            let value = expr.check_type();

            if let (Some(declared), Some(value)) = (declared, value) {
                if declared != value {
                    self.report(decl.line, SemanticError::AssignmentTypeMismatch { value, declared });
                }
            }

            if decl.typename.is_none() {
                check_type = value;
            }
        } else if let Some(ty) = declared {
            decl.expr = Some(Expr::Literal(Literal::typed(ty.default_value(), ty, decl.line)));
        }

        decl.check_type = check_type;

        debug!(name = %decl.name, check_type = ?decl.check_type, "var declared");
        self.symtab.define(
            &decl.name,
            Symbol::Var(Binding::new(&decl.name, decl.line, decl.check_type)),
        );
    }

    fn visit_assignment(&mut self, assignment: &mut AssignmentStatement) {
        let symbol = self.symtab.lookup(&assignment.location.name).cloned();
        if symbol.is_none() {
            self.report(
                assignment.line,
                SemanticError::NameNotDefined { name: assignment.location.name.clone() },
            );
        }

        self.visit_expr(&mut assignment.expr);
        let value = assignment.expr.check_type();

        let symbol = match symbol {
            Some(symbol) => symbol,
            None => {
                assignment.location.check_type = None;
                return;
            }
        };
        self.visit_location(&mut assignment.location);

        match symbol {
            Symbol::Var(binding) => {
                if let (Some(declared), Some(value)) = (binding.check_type, value) {
                    if declared != value {
                        self.report(assignment.line, SemanticError::AssignmentTypeMismatch { value, declared });
                        return;
                    }
                }
            }
            Symbol::Const(binding) => {
                self.report(assignment.line, SemanticError::AssignToConstant { name: binding.name });
                return;
            }
            Symbol::Type(_) | Symbol::Value(_) => {}
        }

        if let (Some(declared), Some(value)) = (assignment.location.check_type, value) {
            if declared != value {
                self.report(assignment.line, SemanticError::AssignmentTypeMismatch { value, declared });
            }
        }
    }

    // NAMES

    fn visit_typename(&mut self, typename: &mut Typename) {
        typename.check_type = match self.symtab.lookup(&typename.name) {
            Some(Symbol::Type(ty)) => Some(*ty),
            _ => None,
        };

        if typename.check_type.is_none() {
            self.report(typename.line, SemanticError::NotAType { name: typename.name.clone() });
        }
    }

    fn visit_location(&mut self, location: &mut Location) {
        let found = self.symtab.lookup(&location.name).map(|symbol| symbol.check_type());
        location.check_type = found.flatten();

        if found.is_none() {
            self.report(location.line, SemanticError::NameNotFound { name: location.name.clone() });
        }
    }

    fn visit_load_location(&mut self, load: &mut LoadLocation) {
        let (check_type, error) = match self.symtab.lookup(&load.name) {
            None => (None, Some(SemanticError::NameNotFound { name: load.name.clone() })),
            Some(Symbol::Type(ty)) => (None, Some(SemanticError::TypeNameAsValue { type_: *ty })),
            Some(symbol) => (symbol.check_type(), None),
        };

        load.check_type = check_type;
        trace!(name = %load.name, check_type = ?load.check_type, "name loaded");
        if let Some(error) = error {
            self.report(load.line, error);
        }
    }

    // EXPRESSIONS

    fn visit_literal(&mut self, literal: &mut Literal) {
        let kind = literal.value.kind();
        literal.check_type = type_for_kind(kind);

        if literal.check_type.is_none() {
            self.report(literal.line, SemanticError::UnrecognizedType { kind });
        }
    }

    fn visit_unary(&mut self, unary: &mut UnaryOp) {
        self.visit_expr(&mut unary.operand);
        let operand = unary.operand.check_type();

        if let Some(ty) = operand {
            if !ty.supports_unary(&unary.op) {
                self.report(unary.line, SemanticError::UnsupportedUnaryOperator { op: unary.op.clone() });
            }
        }

        unary.check_type = operand;
    }

    fn visit_binary(&mut self, binary: &mut BinaryOp) {
        self.visit_expr(&mut binary.left);
        self.visit_expr(&mut binary.right);

        binary.check_type = match (binary.left.check_type(), binary.right.check_type()) {
            (Some(left), Some(right)) => {
                if left != right {
                    self.report(binary.line, SemanticError::BinaryTypeMismatch { op: binary.op.clone() });
                } else if let Some(side) = unsupported_side(left, right, |ty| ty.supports_binary(&binary.op)) {
                    self.report(
                        binary.line,
                        SemanticError::UnsupportedBinaryOperator { op: binary.op.clone(), side },
                    );
                }
                Some(left)
            }
            _ => None,
        };
    }

    fn visit_relational(&mut self, relational: &mut RelationalOp) {
        self.visit_expr(&mut relational.left);
        self.visit_expr(&mut relational.right);

        relational.check_type = match (relational.left.check_type(), relational.right.check_type()) {
            (Some(left), Some(right)) if left != right => {
                self.report(
                    relational.line,
                    SemanticError::RelationalTypeMismatch { op: relational.op.clone() },
                );
                Some(left)
            }
            (Some(left), Some(right)) => {
                if let Some(side) = unsupported_side(left, right, |ty| ty.supports_relational(&relational.op)) {
                    self.report(
                        relational.line,
                        SemanticError::UnsupportedRelationalOperator { op: relational.op.clone(), side },
                    );
                }
                Some(&BOOL_TYPE)
            }
            _ => None,
        };
    }
}

/// The side whose type rejects the operator. The right side is checked last
/// and wins when both reject it.
fn unsupported_side(left: TypeRef, right: TypeRef, supports: impl Fn(TypeRef) -> bool) -> Option<Side> {
    let mut side = None;
    if !supports(left) {
        side = Some(Side::Lhs);
    }
    if !supports(right) {
        side = Some(Side::Rhs);
    }
    side
}

/// Checks `program`, reporting every problem to `sink`, and returns the
/// symbol table as it stands after the last statement.
pub fn check_program(program: &mut Program, sink: &mut dyn ErrorSink) -> SymbolTable {
    Checker::new(sink).check(program)
}
