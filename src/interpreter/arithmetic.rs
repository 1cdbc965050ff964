use std::iter::Peekable;

use logos::Logos;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, lexer::Token, store::VariableStore, value::Value},
    util::num::{f64_to_i64_truncated, i64_to_f64_checked},
};

/// Intermediate numeric operand used while folding an expression.
#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Real(f64),
}

/// The four supported binary operators.
#[derive(Debug, Clone, Copy)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

type TokenIter = Peekable<std::vec::IntoIter<Token>>;

/// Evaluates an arithmetic sub-expression against the store.
///
/// The expression is tokenized with the arithmetic lexer and folded by
/// recursive descent: `*` and `/` bind tighter than `+` and `-`, both levels
/// associate left-to-right, and parenthesised groups nest. Identifiers
/// resolve to their numeric binding at evaluation time. Integer operands use
/// checked 64 bit arithmetic (division truncates); once a float participates,
/// both sides are promoted to `f64`.
///
/// The final result is always truncated to `Value::Integer`, matching how
/// results of mixed arithmetic are rendered everywhere else in the language.
///
/// # Errors
/// Any lexing or parsing failure, an unknown or non-numeric identifier,
/// division by zero, overflow, or a non-finite final value.
///
/// # Example
/// ```
/// use swiftlet::{
///     Value, VariableStore,
///     interpreter::arithmetic::evaluate_arithmetic,
/// };
///
/// let mut store = VariableStore::new();
/// store.set("x", Value::Integer(4));
///
/// let result = evaluate_arithmetic("2 + x * 3", &store).unwrap();
/// assert_eq!(result, Value::Integer(14));
/// ```
pub fn evaluate_arithmetic(text: &str, store: &VariableStore) -> EvalResult<Value> {
    let mut tokens = Vec::new();

    for token in Token::lexer(text) {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(RuntimeError::MalformedArithmetic { text: text.to_string() }),
        }
    }

    let mut iter = tokens.into_iter().peekable();
    let result = parse_sum(&mut iter, text, store)?;

    if iter.peek().is_some() {
        return Err(RuntimeError::MalformedArithmetic { text: text.to_string() });
    }

    match result {
        Number::Int(n) => Ok(Value::Integer(n)),
        Number::Real(r) => {
            Ok(Value::Integer(f64_to_i64_truncated(r).ok_or(RuntimeError::Overflow)?))
        },
    }
}

/// Parses an additive chain: `sum := term (('+' | '-') term)*`.
fn parse_sum(tokens: &mut TokenIter, text: &str, store: &VariableStore) -> EvalResult<Number> {
    let mut left = parse_term(tokens, text, store)?;

    while let Some(token) = tokens.peek() {
        let op = match token {
            Token::Plus => ArithOp::Add,
            Token::Minus => ArithOp::Sub,
            _ => break,
        };
        tokens.next();

        let right = parse_term(tokens, text, store)?;
        left = apply(op, left, right)?;
    }

    Ok(left)
}

/// Parses a multiplicative chain: `term := factor (('*' | '/') factor)*`.
fn parse_term(tokens: &mut TokenIter, text: &str, store: &VariableStore) -> EvalResult<Number> {
    let mut left = parse_factor(tokens, text, store)?;

    while let Some(token) = tokens.peek() {
        let op = match token {
            Token::Star => ArithOp::Mul,
            Token::Slash => ArithOp::Div,
            _ => break,
        };
        tokens.next();

        let right = parse_factor(tokens, text, store)?;
        left = apply(op, left, right)?;
    }

    Ok(left)
}

/// Parses a single operand: a literal, an identifier, a negation, or a
/// parenthesised group.
fn parse_factor(tokens: &mut TokenIter, text: &str, store: &VariableStore) -> EvalResult<Number> {
    match tokens.next() {
        Some(Token::Integer(n)) => Ok(Number::Int(n)),
        Some(Token::Float(r)) => Ok(Number::Real(r)),
        Some(Token::Identifier(name)) => resolve_numeric(&name, store),
        Some(Token::Minus) => {
            let inner = parse_factor(tokens, text, store)?;
            negate(inner)
        },
        Some(Token::LParen) => {
            let inner = parse_sum(tokens, text, store)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(inner),
                _ => Err(RuntimeError::MalformedArithmetic { text: text.to_string() }),
            }
        },
        _ => Err(RuntimeError::MalformedArithmetic { text: text.to_string() }),
    }
}

/// Resolves an identifier against the store, requiring a numeric binding.
fn resolve_numeric(name: &str, store: &VariableStore) -> EvalResult<Number> {
    match store.get(name) {
        Some(Value::Integer(n)) => Ok(Number::Int(*n)),
        Some(Value::Float(r)) => Ok(Number::Real(*r)),
        Some(_) => Err(RuntimeError::NonNumericVariable { name: name.to_string() }),
        None => Err(RuntimeError::UnknownVariable { name: name.to_string() }),
    }
}

fn negate(operand: Number) -> EvalResult<Number> {
    match operand {
        Number::Int(n) => Ok(Number::Int(n.checked_neg().ok_or(RuntimeError::Overflow)?)),
        Number::Real(r) => Ok(Number::Real(-r)),
    }
}

/// Applies one binary operator to two operands.
///
/// Integer pairs stay in checked 64 bit arithmetic; a float on either side
/// promotes both operands to `f64`. Division by zero is checked explicitly
/// for both numeric categories.
fn apply(op: ArithOp, left: Number, right: Number) -> EvalResult<Number> {
    use ArithOp::{Add, Div, Mul, Sub};

    match (left, right) {
        (Number::Int(a), Number::Int(b)) => {
            let result = match op {
                Add => a.checked_add(b),
                Sub => a.checked_sub(b),
                Mul => a.checked_mul(b),
                Div => {
                    if b == 0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    a.checked_div(b)
                },
            };
            Ok(Number::Int(result.ok_or(RuntimeError::Overflow)?))
        },
        _ => {
            let a = to_real(left)?;
            let b = to_real(right)?;

            Ok(Number::Real(match op {
                               Add => a + b,
                               Sub => a - b,
                               Mul => a * b,
                               Div => {
                                   if b == 0.0 {
                                       return Err(RuntimeError::DivisionByZero);
                                   }
                                   a / b
                               },
                           }))
        },
    }
}

fn to_real(operand: Number) -> EvalResult<f64> {
    match operand {
        Number::Int(n) => i64_to_f64_checked(n, RuntimeError::Overflow),
        Number::Real(r) => Ok(r),
    }
}
