use std::fmt;
use std::fmt::{Display, Formatter};

use crate::rspascal::common;
use crate::rspascal::common::error::{PascalError, PascalResult};

pub fn tokenize(source: &str) -> PascalResult<Vec<Token>> {
    common::error::convert_error(Lexer::new(source).get_lexems())
}

type LexResult<A> = Result<A, LexError>;

#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    // Single-character tokens.
    Plus,
    Minus,
    Star,
    OpenParen,
    CloseParen,
    Semicolon,
    Dot,
    // Two-character tokens.
    Assign,
    // Keywords.
    Begin,
    End,
    Div,

    IntegerLiteral(i64),
    Identifier(String),

    Eof,
}

impl TokenType {
    pub fn integer_literal(n: i64) -> Self { TokenType::IntegerLiteral(n) }
    pub fn identifier<S: Into<String>>(str: S) -> Self { TokenType::Identifier(str.into()) }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:?}", self))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub line: usize,
    pub r#type: TokenType,
}

impl Token {
    pub fn new(line: usize, r#type: TokenType) -> Self {
        Token { line, r#type }
    }
    pub fn get_type(&self) -> &TokenType { &self.r#type }
}

#[derive(Debug, PartialEq, Clone)]
pub struct LexError {
    line: usize,
    message: String,
}

impl LexError {
    fn error(line: usize, message: String) -> LexError {
        LexError { line, message }
    }
}

impl PascalError for LexError {
    fn get_message(&self) -> String {
        format!("[line {}] {}", self.line, self.message)
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.line, self.message)
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    current: usize,
    start: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            current: 0,
            start: 0,
            line: 1,
        }
    }

    pub fn get_lexems(mut self) -> LexResult<Vec<Token>> {
        let mut lexems = Vec::new();
        loop {
            let token = self.get_next_token()?;
            if token.get_type() == &TokenType::Eof {
                return Ok(lexems);
            }
            lexems.push(token);
        }
    }

    /// Returns the next token in the source; once the input is exhausted, every
    /// subsequent call keeps returning Eof.
    pub fn get_next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace();
        if self.is_at_end() {
            return Ok(self.token(TokenType::Eof));
        }
        self.start = self.current;
        let c = self.advance();
        match c {
            '+' => Ok(self.token(TokenType::Plus)),
            '-' => Ok(self.token(TokenType::Minus)),
            '*' => Ok(self.token(TokenType::Star)),
            '(' => Ok(self.token(TokenType::OpenParen)),
            ')' => Ok(self.token(TokenType::CloseParen)),
            ';' => Ok(self.token(TokenType::Semicolon)),
            '.' => Ok(self.token(TokenType::Dot)),

            // A lone ':' is not a token; only ':=' is.
            ':' =>
                if self.matches('=') {
                    Ok(self.token(TokenType::Assign))
                } else {
                    self.error("Error parsing input")
                },

            c =>
                if c.is_ascii_digit() {
                    let num = self.read_integer_literal()?;
                    Ok(self.token(num))
                } else if c.is_ascii_alphabetic() {
                    let ident = self.read_identifier();
                    Ok(self.token(ident))
                } else {
                    self.error("Error parsing input")
                },
        }
    }

    fn is_at_end(&self) -> bool { self.current >= self.source.len() }

    fn token(&self, tt: TokenType) -> Token {
        Token::new(self.line, tt)
    }

    fn error<A>(&self, msg: &str) -> LexResult<A> {
        Err(LexError::error(self.line, msg.to_owned()))
    }

    fn advance(&mut self) -> char {
        let result = self.source.chars().nth(self.current);
        self.current += 1;
        result.expect("Advanced past end of source")
    }

    fn matches(&mut self, expected: char) -> bool {
        let result = self.source.chars().nth(self.current) == Some(expected);
        if result {
            self.current += 1;
        }
        result
    }

    fn skip_whitespace(&mut self) {
        while self.peek_test(|e: char| e.is_ascii_whitespace()) {
            if self.peek_test('\n') {
                self.line += 1;
            }
            self.advance();
        }
    }

    fn peek_test<F: CharTest>(&self, f: F) -> bool {
        self.source.chars().nth(self.current).map(|e| f.char_test(e)).unwrap_or(false)
    }

    fn read_integer_literal(&mut self) -> LexResult<TokenType> {
        while self.peek_test(|e: char| e.is_ascii_digit()) {
            self.advance();
        }
        let lexeme = self.current_lexeme();
        lexeme
            .parse::<i64>()
            .map(TokenType::IntegerLiteral)
            .map_err(|_| LexError::error(self.line, format!("Invalid integer literal '{}'", lexeme)))
    }

    fn read_identifier(&mut self) -> TokenType {
        while self.peek_test(|e: char| e.is_ascii_alphanumeric()) {
            self.advance();
        }
        let word = self.current_lexeme();
        Lexer::get_keyword(word).unwrap_or(TokenType::identifier(word))
    }

    fn current_lexeme(&self) -> &str {
        return &self.source[self.start..self.current];
    }

    // Reserved words are matched case-sensitively: "begin" is a plain identifier.
    fn get_keyword(word: &str) -> Option<TokenType> {
        match word {
            "BEGIN" => Some(TokenType::Begin),
            "END" => Some(TokenType::End),
            "DIV" => Some(TokenType::Div),
            _ => None,
        }
    }
}

trait CharTest {
    fn char_test(&self, c: char) -> bool;
}

impl CharTest for char {
    fn char_test(&self, c: char) -> bool { self == &c }
}

impl<F> CharTest for F where F: Fn(char) -> bool {
    fn char_test(&self, c: char) -> bool { self(c) }
}
