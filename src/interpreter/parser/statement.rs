use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{ElseBranch, FunctionDef, IfStatement, Statement},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, parse_params, peek, skip_semicolon},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `let` or `const` declaration,
/// - an `if`, `while` or `for` statement,
/// - a named function declaration (`fn name(...)`),
/// - a `return` statement,
/// - an expression used as a statement.
///
/// The choice is made on the leading token; `fn` followed by `(` is an
/// anonymous function used as an expression statement. A leading `{` is an
/// object literal, never a block. One trailing `;` is consumed if present.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let statement = match peek(tokens) {
        (Token::Let, _) => parse_declaration(tokens, false)?,
        (Token::Const, _) => parse_declaration(tokens, true)?,
        (Token::If, _) => Statement::If(parse_if(tokens)?),
        (Token::While, _) => parse_while(tokens)?,
        (Token::For, _) => parse_for(tokens)?,
        (Token::Fn, _) if is_function_declaration(tokens) => parse_function_declaration(tokens)?,
        (Token::Return, _) => parse_return(tokens)?,
        _ => Statement::Expression(parse_expression(tokens)?),
    };
    skip_semicolon(tokens);
    Ok(statement)
}

/// Returns `true` when the `fn` at the front is followed by a name.
fn is_function_declaration<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    matches!(lookahead.next(), Some((Token::Identifier(_), _)))
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let <identifier> = <expression>` or
/// `const <identifier> = <expression>`. The initializer is mandatory.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `let` or `const`.
/// - `constant`: Whether the keyword was `const`.
///
/// # Errors
/// Returns a `ParseError` if the name, the `=` or the initializer is
/// missing or malformed.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>, constant: bool) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    tokens.next();
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals)?;
    let value = parse_expression(tokens)?;

    Ok(if constant {
           Statement::Const { name, value }
       } else {
           Statement::Let { name, value }
       })
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if (<condition>) { ... }
///     else if (<condition>) { ... }
///     else { ... }
/// ```
/// Nested `else if` constructs are parsed recursively.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// The parsed [`IfStatement`].
///
/// # Errors
/// - `UnexpectedToken` if a parenthesis, a brace, or the branch after
///   `else` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<IfStatement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::If)?;
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    let consequence = parse_block(tokens)?;

    let alternative = match peek(tokens) {
        (Token::Else, _) => {
            tokens.next();
            match peek(tokens) {
                (Token::If, _) => Some(ElseBranch::If(Box::new(parse_if(tokens)?))),
                _ => Some(ElseBranch::Block(parse_block(tokens)?)),
            }
        },
        _ => None,
    };

    Ok(IfStatement { condition,
                     consequence,
                     alternative })
}

/// Parses `while (<condition>) { ... }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::While)?;
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition, body })
}

/// Parses a C-style `for` loop.
///
/// Every clause of the header is optional, the two `;` separators are not:
///
/// ```text
///     for (<init>; <condition>; <update>) { ... }
/// ```
///
/// `<init>` is either a `let` declaration or an expression.
///
/// # Errors
/// Returns a `ParseError` if a separator, the closing `)` or the body is
/// missing.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::For)?;
    expect(tokens, &Token::LParen)?;

    let init = match peek(tokens) {
        (Token::Semicolon, _) => None,
        (Token::Let, _) => Some(Box::new(parse_declaration(tokens, false)?)),
        _ => Some(Box::new(Statement::Expression(parse_expression(tokens)?))),
    };
    expect(tokens, &Token::Semicolon)?;

    let condition = match peek(tokens) {
        (Token::Semicolon, _) => None,
        _ => Some(parse_expression(tokens)?),
    };
    expect(tokens, &Token::Semicolon)?;

    let update = match peek(tokens) {
        (Token::RParen, _) => None,
        _ => Some(parse_expression(tokens)?),
    };
    expect(tokens, &Token::RParen)?;

    let body = parse_block(tokens)?;

    Ok(Statement::For { init,
                        condition,
                        update,
                        body })
}

/// Parses a function declaration of the form
/// `fn <name>(param1, param2, ...) { ... }`.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::Fn)?;
    let name = parse_identifier(tokens)?;
    let params = parse_params(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::Function { name,
                             def: Rc::new(FunctionDef { params, body }) })
}

/// Parses `return` with an optional value.
///
/// The value is omitted when the keyword is directly followed by `;`, `}`
/// or the end of input.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::Return)?;
    let value = match peek(tokens) {
        (Token::Semicolon | Token::RBrace | Token::Eof, _) => None,
        _ => Some(parse_expression(tokens)?),
    };

    Ok(Statement::Return(value))
}
