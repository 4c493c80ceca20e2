use std::fmt::Debug;

use nonempty::NonEmpty;

use crate::rspascal::common::lexer::{LexError, Token};

pub trait PascalError: Debug {
    fn get_message(&self) -> String;
}

pub type PascalResult<A> = Result<A, NonEmpty<Box<dyn PascalError>>>;

pub fn convert_errors<A, E: PascalError + 'static>(result: Result<A, NonEmpty<E>>) -> PascalResult<A> {
    result.map_err(|e| e.map::<Box<dyn PascalError>, _>(|a| Box::new(a)))
}

pub fn convert_error<A, E: PascalError + 'static>(result: Result<A, E>) -> PascalResult<A> {
    convert_errors(result.map_err(|e| NonEmpty::new(e)))
}

#[derive(Debug, PartialEq, Clone)]
pub struct ParserError {
    pub message: String,
    pub token: Token,
}

impl ParserError {
    pub fn new<S: Into<String>>(message: S, token: Token) -> Self {
        ParserError { message: message.into(), token }
    }
}

impl PascalError for ParserError {
    fn get_message(&self) -> String {
        self.message.to_owned()
    }
}

// Scanning and parsing failures share a single surface, since the parser pulls
// tokens on demand and either can abort a parse.
#[derive(Debug)]
pub enum SyntaxError {
    Lex(LexError),
    Parse(ParserError),
}

impl PascalError for SyntaxError {
    fn get_message(&self) -> String {
        match self {
            SyntaxError::Lex(e) => e.get_message(),
            SyntaxError::Parse(e) => e.get_message(),
        }
    }
}

impl From<LexError> for SyntaxError {
    fn from(e: LexError) -> Self { SyntaxError::Lex(e) }
}

impl From<ParserError> for SyntaxError {
    fn from(e: ParserError) -> Self { SyntaxError::Parse(e) }
}
