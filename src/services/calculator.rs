/// Arithmetic expression evaluator
///
/// Recursive descent over `+ - * / ( )` and decimal literals. Nothing else is
/// accepted, so there is no way to reach a general-purpose evaluator.
///
/// Grammar:
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := ('+' | '-') factor | primary
/// primary:= number | '(' expr ')'
/// ```

use crate::services::ExpressionEvaluator;
use thiserror::Error;

/// Deepest nesting of parentheses and unary signs the parser will follow
pub const MAX_NESTING: usize = 256;

/// Why an expression could not be evaluated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("expression is empty")]
    EmptyExpression,

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    #[error("unexpected '{0}'")]
    UnexpectedToken(String),

    #[error("expression ended early")]
    UnexpectedEnd,

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("division by zero")]
    DivisionByZero,

    #[error("expression nested more than {MAX_NESTING} levels deep")]
    TooDeep,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    fn symbol(&self) -> String {
        match self {
            Token::Number(n) => format_number(*n),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => {
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                // Rust's float parser takes "1." and ".5" but not "." or "1.2.3"
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalcError::MalformedNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            other => return Err(CalcError::UnexpectedCharacter(other)),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    // open parentheses, for telling a stray ')' from a misplaced one
    depth: usize,
    // parentheses plus unary signs; bounds the recursion
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> Result<(), CalcError> {
        if self.nesting >= MAX_NESTING {
            return Err(CalcError::TooDeep);
        }
        self.nesting += 1;
        Ok(())
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            value = if op == Token::Star {
                value * rhs
            } else {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                value / rhs
            };
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(sign @ (Token::Plus | Token::Minus)) => {
                self.pos += 1;
                self.descend()?;
                let value = self.factor()?;
                self.nesting -= 1;
                Ok(if sign == Token::Minus { -value } else { value })
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, CalcError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                self.descend()?;
                self.depth += 1;
                let value = self.expr()?;
                match self.next() {
                    Some(Token::RParen) => {
                        self.depth -= 1;
                        self.nesting -= 1;
                        Ok(value)
                    }
                    None => Err(CalcError::UnbalancedParentheses),
                    Some(other) => Err(CalcError::UnexpectedToken(other.symbol())),
                }
            }
            Some(Token::RParen) if self.depth == 0 => Err(CalcError::UnbalancedParentheses),
            Some(other) => Err(CalcError::UnexpectedToken(other.symbol())),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}

/// Evaluate an arithmetic expression
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        nesting: 0,
    };
    let value = parser.expr()?;

    match parser.peek() {
        None => Ok(value),
        Some(Token::RParen) if parser.depth == 0 => Err(CalcError::UnbalancedParentheses),
        Some(other) => Err(CalcError::UnexpectedToken(other.symbol())),
    }
}

/// Render a result: integral values without a fractional part
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        // -0.0 would print as "-0"
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Default evaluator backed by `evaluate`
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl ExpressionEvaluator for Calculator {
    fn evaluate(&self, expression: &str) -> Result<f64, CalcError> {
        evaluate(expression)
    }
}
