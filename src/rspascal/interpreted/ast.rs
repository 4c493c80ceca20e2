#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub compound: Statement,
}

impl Program {
    pub fn new(compound: Statement) -> Self { Program { compound } }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Compound(Vec<Statement>),
    Assign(String, Expression),
    NoOp,
}

impl Statement {
    pub fn assign<S: Into<String>>(str: S, expr: Expression) -> Self {
        Statement::Assign(str.into(), expr)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Unary(UnaryOperator, Box<Expression>),
    Binary(BinaryOperator, Box<Expression>, Box<Expression>),
    Atomic(Atom),
}

impl Expression {
    pub fn number(n: i64) -> Self { Expression::Atomic(Atom::Number(n)) }
    pub fn identifier<S: Into<String>>(str: S) -> Self {
        Expression::Atomic(Atom::Identifier(str.into()))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Atom {
    Number(i64),
    Identifier(String),
}

impl Atom {
    pub fn identifier<S: Into<String>>(str: S) -> Self { Atom::Identifier(str.into()) }
}

#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Mult,
    Div,
}
