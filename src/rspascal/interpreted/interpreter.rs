use std::collections::HashMap;

use crate::rspascal::common;
use crate::rspascal::common::error::{PascalError, PascalResult};
use crate::rspascal::interpreted::ast::{Atom, BinaryOperator, Expression, Program, Statement, UnaryOperator};
use crate::rspascal::interpreted::interpreter::RuntimeError::{DivisionByZero, UndefinedVariable};

#[derive(Debug, PartialEq, Clone)]
pub enum RuntimeError {
    UndefinedVariable(String),
    DivisionByZero,
}

impl PascalError for RuntimeError {
    fn get_message(&self) -> String {
        match self {
            UndefinedVariable(name) => format!("Undefined variable: {}", name),
            DivisionByZero => "Division by zero".to_owned(),
        }
    }
}

type InterpretResult<A> = Result<A, RuntimeError>;

/// Run-scoped symbol table, keyed by the upper-cased variable name.
#[derive(Debug, Default)]
pub struct GlobalScope {
    values: HashMap<String, i64>,
}

impl GlobalScope {
    pub fn new() -> Self { GlobalScope { values: HashMap::new() } }
    pub fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item=(&str, i64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
    fn define(&mut self, key: String, value: i64) {
        self.values.insert(key, value);
    }
}

// One interpreter evaluates exactly one program; create a fresh one (and hence
// a fresh scope) per evaluated text.
pub struct Interpreter {
    global_scope: GlobalScope,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter { global_scope: GlobalScope::new() }
    }

    pub fn interpret(&mut self, program: &Program) -> PascalResult<()> {
        common::error::convert_error(self.execute(&program.compound))
    }

    pub fn global_scope(&self) -> &GlobalScope { &self.global_scope }

    pub fn into_global_scope(self) -> GlobalScope { self.global_scope }

    fn execute(&mut self, statement: &Statement) -> InterpretResult<()> {
        match statement {
            Statement::Compound(statements) => {
                for s in statements {
                    self.execute(s)?;
                }
                Ok(())
            }
            Statement::Assign(name, e) => {
                let value = self.evaluate(e)?;
                self.global_scope.define(name.to_uppercase(), value);
                Ok(())
            }
            Statement::NoOp => Ok(()),
        }
    }

    fn evaluate(&self, expression: &Expression) -> InterpretResult<i64> {
        match expression {
            Expression::Atomic(atom) => match atom {
                Atom::Number(n) => Ok(*n),
                Atom::Identifier(name) =>
                    self.global_scope
                        .get(&name.to_uppercase())
                        .ok_or_else(|| UndefinedVariable(name.to_owned())),
            },
            Expression::Unary(op, e) => {
                let x = self.evaluate(e)?;
                Ok(match op {
                    UnaryOperator::Plus => x,
                    UnaryOperator::Minus => -x,
                })
            }
            Expression::Binary(op, e1, e2) => {
                let x1 = self.evaluate(e1)?;
                let x2 = self.evaluate(e2)?;
                match op {
                    BinaryOperator::Plus => Ok(x1 + x2),
                    BinaryOperator::Minus => Ok(x1 - x2),
                    BinaryOperator::Mult => Ok(x1 * x2),
                    // DIV truncates toward zero.
                    BinaryOperator::Div =>
                        if x2 == 0 { Err(DivisionByZero) } else { Ok(x1 / x2) },
                }
            }
        }
    }
}
