use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier, parse_params, peek},
        },
    },
};

/// Parses prefix operators.
///
/// `-` and `!` are right-recursive, so `--x` and `!!x` nest. Anything else
/// falls through to the postfix level.
///
/// Grammar: `unary := ("-" | "!") unary | postfix`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// An `Expr::UnaryOp` or the postfix expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let op = match peek(tokens) {
        (Token::Minus, _) => UnaryOperator::Negate,
        (Token::Bang, _) => UnaryOperator::Not,
        _ => return parse_postfix(tokens),
    };
    tokens.next();
    let operand = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       operand: Box::new(operand) })
}

/// Parses a primary expression followed by any chain of calls, index
/// operations and member accesses.
///
/// Supported suffixes, applied left to right:
///
/// - `callee(arg1, arg2, ...)`
/// - `object[index]`
/// - `object.property`
///
/// Grammar: `postfix := primary ("(" args ")" | "[" expression "]" | "." identifier)*`
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut expr = parse_primary(tokens)?;
    loop {
        expr = match peek(tokens) {
            (Token::LParen, _) => {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                Expr::Call { callee: Box::new(expr),
                             arguments }
            },
            (Token::LBracket, _) => {
                tokens.next();
                let index = parse_expression(tokens)?;
                expect(tokens, &Token::RBracket)?;
                Expr::Index { object: Box::new(expr),
                              index:  Box::new(index), }
            },
            (Token::Dot, _) => {
                tokens.next();
                let property = parse_identifier(tokens)?;
                Expr::Member { object: Box::new(expr),
                               property }
            },
            _ => return Ok(expr),
        };
    }
}

/// Parses a primary expression.
///
/// Alternatives, in order: number, string, `true`/`false`, `null`,
/// identifier, array literal, object literal, function expression and a
/// parenthesised expression.
///
/// # Errors
/// Returns `ParseError` when the next token cannot start an expression.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let (token, position) = peek(tokens);
    let literal = match token {
        Token::Number(n) => LiteralValue::Number(*n),
        Token::Str(s) => LiteralValue::Str(s.clone()),
        Token::True => LiteralValue::Bool(true),
        Token::False => LiteralValue::Bool(false),
        Token::Null => LiteralValue::Null,
        Token::Identifier(name) => {
            tokens.next();
            return Ok(Expr::Identifier(name.clone()));
        },
        Token::LBracket => return parse_array_literal(tokens),
        Token::LBrace => return parse_object_literal(tokens),
        Token::Fn => return parse_function_expression(tokens),
        Token::LParen => return parse_grouping(tokens),
        _ => return Err(ParseError::unexpected("expression", token, *position)),
    };
    tokens.next();
    Ok(Expr::Literal(literal))
}

/// Parses an array literal of the form `[expr1, expr2, ..., exprN]`.
///
/// An empty array `[]` is accepted.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`
///
/// # Returns
/// An [`Expr::ArrayLiteral`] node containing the parsed elements.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::LBracket)?;
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
    Ok(Expr::ArrayLiteral { elements })
}

/// Parses an object literal of the form `{ key: value, ... }`.
///
/// Keys are bare identifiers. An empty object `{}` is accepted.
///
/// Grammar: `object := "{" (identifier ":" expression ("," identifier ":" expression)*)? "}"`
fn parse_object_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::LBrace)?;
    let properties = parse_comma_separated(tokens,
                                           |tokens| {
                                               let key = parse_identifier(tokens)?;
                                               expect(tokens, &Token::Colon)?;
                                               Ok((key, parse_expression(tokens)?))
                                           },
                                           &Token::RBrace)?;
    Ok(Expr::ObjectLiteral { properties })
}

/// Parses an anonymous function `fn(params) { body }`.
fn parse_function_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::Fn)?;
    let params = parse_params(tokens)?;
    let body = parse_block(tokens)?;
    Ok(Expr::Function(Rc::new(FunctionDef { params, body })))
}

/// Parses a parenthesized expression.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}
