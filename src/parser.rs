//! AST constructor: recursive descent over the parenthesized token stream,
//! layered by precedence (spec §4.3) — biconditional, then implication,
//! then disjunction, then conjunction, then negation, then primary. A
//! primary is `(expr)`, `true`, `false`, or a variable identifier.

use crate::ast::Expr;
use crate::error::{ParseError, ParseResult};
use crate::paren::parenthesize;
use crate::token::{tokenize, Token, TokenSpan};

const RESERVED_WORDS: &[&str] = &[
    "and", "or", "not", "imp", "implies", "iff", "equiv", "true", "false", "v",
];

fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name.to_ascii_lowercase().as_str())
}

/// A valid variable identifier: `[A-Za-z][A-Za-z0-9_]*`, not a reserved
/// word. The tokenizer has already folded reserved-word synonyms into
/// their own token kinds, so any `Token::Ident` reaching this check is a
/// plain identifier unless it happens to collide case-insensitively with
/// a synonym the tokenizer didn't classify as such (e.g. mixed case like
/// `Iff`, which the tokenizer *does* fold — this check exists as a second
/// line of defense and to produce a precise error for the rare case of a
/// name that is purely digits with no leading letter).
fn validate_identifier(name: &str, index: usize) -> ParseResult<()> {
    let mut chars = name.chars();
    let first_ok = chars.next().map(|c| c.is_ascii_alphabetic()).unwrap_or(false);
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !first_ok || !rest_ok {
        return Err(ParseError::UnexpectedToken { index, lexeme: name.to_string() });
    }
    if is_reserved(name) {
        return Err(ParseError::UnexpectedToken { index, lexeme: name.to_string() });
    }
    Ok(())
}

struct Parser<'a> {
    tokens: &'a [TokenSpan],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [TokenSpan]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn peek_span(&self) -> Option<&TokenSpan> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&TokenSpan> {
        let t = self.tokens.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn end_index(&self) -> usize {
        self.tokens.last().map(|t| t.index + t.lexeme.chars().count()).unwrap_or(0)
    }

    fn expect_operand(&self, op_lexeme: &str) -> ParseError {
        let index = self.peek_span().map(|t| t.index).unwrap_or_else(|| self.end_index());
        ParseError::MissingOperand { op: op_lexeme.to_string(), index }
    }

    fn parse_iff(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_imp()?;
        while matches!(self.peek(), Some(Token::Iff)) {
            let op = self.advance().unwrap().clone();
            if self.peek().is_none() {
                return Err(self.expect_operand(&op.lexeme));
            }
            let right = self.parse_imp()?;
            left = Expr::iff(left, right);
        }
        Ok(left)
    }

    fn parse_imp(&mut self) -> ParseResult<Expr> {
        let left = self.parse_or()?;
        if matches!(self.peek(), Some(Token::Imp)) {
            let op = self.advance().unwrap().clone();
            if self.peek().is_none() {
                return Err(self.expect_operand(&op.lexeme));
            }
            let right = self.parse_imp()?; // right-associative
            return Ok(Expr::imp(left, right));
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_and()?;
        while matches!(self.peek(), Some(Token::Or)) {
            let op = self.advance().unwrap().clone();
            if self.peek().is_none() {
                return Err(self.expect_operand(&op.lexeme));
            }
            let right = self.parse_and()?;
            left = Expr::or(left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_negation()?;
        while matches!(self.peek(), Some(Token::And)) {
            let op = self.advance().unwrap().clone();
            if self.peek().is_none() {
                return Err(self.expect_operand(&op.lexeme));
            }
            let right = self.parse_negation()?;
            left = Expr::and(left, right);
        }
        Ok(left)
    }

    fn parse_negation(&mut self) -> ParseResult<Expr> {
        if matches!(self.peek(), Some(Token::Not)) {
            let op = self.advance().unwrap().clone();
            if self.peek().is_none() {
                return Err(self.expect_operand(&op.lexeme));
            }
            let inner = self.parse_negation()?;
            return Ok(Expr::not(inner));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let span = match self.advance() {
            Some(s) => s.clone(),
            None => return Err(ParseError::Empty),
        };
        match span.token {
            Token::LParen => {
                let inner = self.parse_iff()?;
                match self.advance() {
                    Some(t) if t.token == Token::RParen => Ok(inner),
                    Some(t) => Err(ParseError::UnexpectedToken { index: t.index, lexeme: t.lexeme.clone() }),
                    None => Err(ParseError::UnbalancedParens),
                }
            }
            Token::True => Ok(Expr::TrueConstant),
            Token::False => Ok(Expr::FalseConstant),
            Token::Ident(name) => {
                validate_identifier(&name, span.index)?;
                Ok(Expr::Variable(name))
            }
            other => Err(ParseError::UnexpectedToken { index: span.index, lexeme: other.to_string() }),
        }
    }
}

/// Parse a free-form propositional-logic string into a canonical AST.
pub fn parse(input: &str) -> ParseResult<Expr> {
    let raw = tokenize(input);
    let tokens = parenthesize(&raw)?;
    let mut parser = Parser::new(&tokens);
    let expr = parser.parse_iff()?;
    if parser.pos != tokens.len() {
        let t = &tokens[parser.pos];
        return Err(ParseError::TrailingTokens { index: t.index });
    }
    Ok(expr)
}
