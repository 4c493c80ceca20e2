use std::mem;

use crate::rspascal::common;
use crate::rspascal::common::error::{ParserError, PascalResult, SyntaxError};
use crate::rspascal::common::lexer::{Lexer, Token, TokenType};
use crate::rspascal::interpreted::ast::{Atom, BinaryOperator, Expression, Program, Statement, UnaryOperator};

pub fn parse(source: &str) -> PascalResult<Program> {
    common::error::convert_error(Parser::parse(source))
}

type ParseResult<A> = Result<A, SyntaxError>;

// Pulls tokens from the lexer on demand, holding exactly one token of
// lookahead. Aborts on the first syntax error; no recovery, no partial AST.
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    pub fn parse(source: &'a str) -> ParseResult<Program> {
        let mut lexer = Lexer::new(source);
        let current = lexer.get_next_token()?;
        let mut parser = Parser { lexer, current };
        parser.program()
    }

    // program := compound_statement DOT
    fn program(&mut self) -> ParseResult<Program> {
        let compound = self.compound_statement()?;
        self.eat(TokenType::Dot, None)?;
        self.eat(TokenType::Eof, Some("end of input".to_owned()))?;
        Ok(Program::new(compound))
    }

    // compound_statement := BEGIN statement_list END
    fn compound_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenType::Begin, None)?;
        let statements = self.statement_list()?;
        self.eat(TokenType::End, None)?;
        Ok(Statement::Compound(statements))
    }

    // statement_list := statement (SEMI statement)*
    fn statement_list(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = vec![self.statement()?];
        while self.matches_single(TokenType::Semicolon)? {
            statements.push(self.statement()?);
        }
        Ok(statements)
    }

    // statement := compound_statement | assignment_statement | λ
    fn statement(&mut self) -> ParseResult<Statement> {
        if self.current.get_type() == &TokenType::Begin {
            self.compound_statement()
        } else if matches!(self.current.get_type(), TokenType::Identifier(_)) {
            self.assignment_statement()
        } else {
            Ok(Statement::NoOp)
        }
    }

    // assignment_statement := ID ASSIGN expr
    fn assignment_statement(&mut self) -> ParseResult<Statement> {
        let token = self.advance()?;
        let name = if let TokenType::Identifier(name) = token.get_type() {
            name.to_owned()
        } else {
            return Parser::error(
                format!("Expected identifier, but encountered {}", token.get_type()),
                token,
            );
        };
        self.eat(TokenType::Assign, None)?;
        let value = self.expr()?;
        Ok(Statement::assign(name, value))
    }

    // expr := term ((PLUS|MINUS) term)*
    fn expr(&mut self) -> ParseResult<Expression> {
        self.binary(
            |e| match e {
                TokenType::Plus => Some(BinaryOperator::Plus),
                TokenType::Minus => Some(BinaryOperator::Minus),
                _ => None,
            },
            |e| e.term(),
        )
    }

    // term := factor ((MUL|DIV) factor)*
    fn term(&mut self) -> ParseResult<Expression> {
        self.binary(
            |e| match e {
                TokenType::Star => Some(BinaryOperator::Mult),
                TokenType::Div => Some(BinaryOperator::Div),
                _ => None,
            },
            |e| e.factor(),
        )
    }

    // factor := PLUS factor | MINUS factor | INTEGER | ID | LPAREN expr RPAREN
    fn factor(&mut self) -> ParseResult<Expression> {
        if let Some(operator) = self.matches(|e| match e {
            TokenType::Plus => Some(UnaryOperator::Plus),
            TokenType::Minus => Some(UnaryOperator::Minus),
            _ => None,
        })? {
            let operand = self.factor()?;
            return Ok(Expression::Unary(operator, Box::new(operand)));
        }
        if let Some(atom) = self.matches(|e| match e {
            TokenType::IntegerLiteral(n) => Some(Atom::Number(*n)),
            TokenType::Identifier(name) => Some(Atom::identifier(name.as_str())),
            _ => None,
        })? {
            return Ok(Expression::Atomic(atom));
        }
        self.eat(TokenType::OpenParen, Some("expression".to_owned()))?;
        let expr = self.expr()?;
        self.eat(TokenType::CloseParen, None)?;
        Ok(expr)
    }

    // Left-folds repeated binary operators of equal precedence, so equal
    // precedence groups left-to-right without deep recursion.
    fn binary<F, Next>(&mut self, func: F, next: Next) -> ParseResult<Expression>
        where F: Fn(&TokenType) -> Option<BinaryOperator>,
              Next: Fn(&mut Parser<'a>) -> ParseResult<Expression> {
        let mut expr = next(self)?;
        while let Some(operator) = self.matches(&func)? {
            let right = next(self)?;
            expr = Expression::Binary(operator, Box::new(expr), Box::new(right));
        }
        Ok(expr)
    }

    fn eat(&mut self, expected: TokenType, msg: Option<String>) -> ParseResult<Token> {
        if self.current.get_type() == &expected {
            self.advance()
        } else {
            let expected_msg = msg.unwrap_or(expected.to_string());
            let p = self.current.clone();
            Parser::error(
                format!(
                    "Expected {}, but encountered {} at line {}",
                    expected_msg,
                    p.get_type(),
                    p.line,
                ),
                p,
            )
        }
    }

    fn matches_single(&mut self, expected: TokenType) -> ParseResult<bool> {
        if self.current.get_type() == &expected {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn matches<F, A>(&mut self, func: F) -> ParseResult<Option<A>>
        where F: Fn(&TokenType) -> Option<A>
    {
        match func(self.current.get_type()) {
            Some(a) => {
                self.advance()?;
                Ok(Some(a))
            }
            None => Ok(None),
        }
    }

    fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.get_next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    fn error<A>(message: String, token: Token) -> ParseResult<A> {
        Err(ParserError::new(message, token).into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions_sorted::assert_eq;

    use crate::rspascal::common::error::PascalError;
    use crate::rspascal::interpreted::ast::Expression::{Binary, Unary};
    use crate::rspascal::interpreted::tests::unsafe_parse;

    use super::*;

    fn parse_program(program: Vec<&str>) -> Statement {
        unsafe_parse(program).compound
    }

    fn parse_expression(expr: &str) -> Expression {
        let line = format!("BEGIN result := {} END.", expr);
        match parse_program(vec![line.as_ref()]) {
            Statement::Compound(statements) => match statements.into_iter().next() {
                Some(Statement::Assign(_, e)) => e,
                s => panic!("Expected an assignment, got {:?}", s),
            },
            s => panic!("Expected a compound statement, got {:?}", s),
        }
    }

    #[test]
    fn single_assignment() {
        let statement = parse_program(vec!["BEGIN a := 3 END."]);
        let expected = Statement::Compound(vec![
            Statement::assign("a", Expression::number(3)),
        ]);
        assert_eq!(statement, expected);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse_expression("2 + 7 * 4");
        let expected = Binary(
            BinaryOperator::Plus,
            Box::new(Expression::number(2)),
            Box::new(Binary(
                BinaryOperator::Mult,
                Box::new(Expression::number(7)),
                Box::new(Expression::number(4)),
            )),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn equal_precedence_groups_left_to_right() {
        let expr = parse_expression("10 - 3 - 2");
        let expected = Binary(
            BinaryOperator::Minus,
            Box::new(Binary(
                BinaryOperator::Minus,
                Box::new(Expression::number(10)),
                Box::new(Expression::number(3)),
            )),
            Box::new(Expression::number(2)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn parentheses_override_precedence() {
        let expr = parse_expression("(3 + 2) * 5");
        let expected = Binary(
            BinaryOperator::Mult,
            Box::new(Binary(
                BinaryOperator::Plus,
                Box::new(Expression::number(3)),
                Box::new(Expression::number(2)),
            )),
            Box::new(Expression::number(5)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn unary_sign_chain() {
        let expr = parse_expression("- - + 3");
        let expected = Unary(
            UnaryOperator::Minus,
            Box::new(Unary(
                UnaryOperator::Minus,
                Box::new(Unary(
                    UnaryOperator::Plus,
                    Box::new(Expression::number(3)),
                )),
            )),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn variable_read_in_expression() {
        let expr = parse_expression("number + 1");
        let expected = Binary(
            BinaryOperator::Plus,
            Box::new(Expression::identifier("number")),
            Box::new(Expression::number(1)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn empty_compound() {
        let statement = parse_program(vec!["BEGIN END."]);
        assert_eq!(statement, Statement::Compound(vec![Statement::NoOp]));
    }

    #[test]
    fn trailing_semicolon_yields_no_op() {
        let statement = parse_program(vec!["BEGIN a := 1; END."]);
        let expected = Statement::Compound(vec![
            Statement::assign("a", Expression::number(1)),
            Statement::NoOp,
        ]);
        assert_eq!(statement, expected);
    }

    #[test]
    fn nested_compound() {
        let statement = parse_program(vec![
            "BEGIN",
            "    BEGIN",
            "        a := 1",
            "    END;",
            "    b := 2",
            "END.",
        ]);
        let expected = Statement::Compound(vec![
            Statement::Compound(vec![Statement::assign("a", Expression::number(1))]),
            Statement::assign("b", Expression::number(2)),
        ]);
        assert_eq!(statement, expected);
    }

    #[test]
    fn dangling_operator_is_an_error() {
        assert!(parse("BEGIN a := 10 * ; END.").is_err());
    }

    #[test]
    fn integer_followed_by_parenthesis_is_an_error() {
        assert!(parse("BEGIN a := 1 (1 + 2); END.").is_err());
    }

    #[test]
    fn missing_dot_is_an_error() {
        assert!(parse("BEGIN a := 1 END").is_err());
    }

    #[test]
    fn leftover_tokens_after_dot_are_an_error() {
        assert!(parse("BEGIN a := 1 END. b := 2").is_err());
    }

    #[test]
    fn missing_assignment_target_is_an_error() {
        assert!(parse("BEGIN 1 := 2 END.").is_err());
    }

    #[test]
    fn unclosed_parenthesis_is_an_error() {
        assert!(parse("BEGIN a := (1 + 2 END.").is_err());
    }

    #[test]
    fn lex_error_surfaces_through_parse() {
        let errors = parse("BEGIN a := 3 @ END.").unwrap_err();
        assert!(errors.first().get_message().contains("Error parsing input"));
    }

    #[test]
    fn lone_colon_surfaces_through_parse() {
        assert!(parse("BEGIN a : 1 END.").is_err());
    }
}
