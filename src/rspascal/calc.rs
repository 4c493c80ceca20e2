use std::io;
use std::io::{BufRead, Write};

use crate::rspascal::common;
use crate::rspascal::common::error::{ParserError, PascalError, PascalResult, SyntaxError};
use crate::rspascal::common::lexer::{Lexer, Token, TokenType};

// Standalone line calculator: a bare integer, or the sum of two integers.
// Independent of the Pascal front end, but shares its lexer.
pub fn run_prompt() -> () {
    let stdin = io::stdin();
    let mut line_read: String = "".to_owned();
    loop {
        print!("calc> ");
        io::stdout().flush().expect("Failed to flush stdout");
        line_read.clear();
        let read = stdin.lock().read_line(&mut line_read).expect("Failed to read line from input");
        if read == 0 {
            break;
        }
        if line_read.trim().is_empty() {
            continue;
        }
        match eval_line(&line_read) {
            Ok(result) => println!("{}", result),
            Err(errors) =>
                for error in errors {
                    eprintln!("{}", error.get_message());
                },
        }
    }
}

pub fn eval_line(line: &str) -> PascalResult<i64> {
    common::error::convert_error(eval_go(line))
}

type CalcResult<A> = Result<A, SyntaxError>;

fn eval_go(line: &str) -> CalcResult<i64> {
    let mut lexer = Lexer::new(line);
    let left = expect_integer(&mut lexer)?;
    let op = lexer.get_next_token()?;
    if op.get_type() == &TokenType::Eof {
        return Ok(left);
    }
    if op.get_type() != &TokenType::Plus {
        return error(format!("Expected {}, but encountered {}", TokenType::Plus, op.get_type()), op);
    }
    let right = expect_integer(&mut lexer)?;
    let end = lexer.get_next_token()?;
    if end.get_type() != &TokenType::Eof {
        return error(format!("Expected end of input, but encountered {}", end.get_type()), end);
    }
    Ok(left + right)
}

fn expect_integer(lexer: &mut Lexer) -> CalcResult<i64> {
    let token = lexer.get_next_token()?;
    if let TokenType::IntegerLiteral(n) = token.get_type() {
        return Ok(*n);
    }
    error(format!("Expected integer, but encountered {}", token.get_type()), token)
}

fn error<A>(message: String, token: Token) -> CalcResult<A> {
    Err(ParserError::new(message, token).into())
}
