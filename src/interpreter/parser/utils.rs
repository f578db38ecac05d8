use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Position, Spanned, Token},
        parser::core::ParseResult,
    },
};

/// Stand-in returned when the iterator is exhausted. Token lists built by
/// `tokenize` end with their own `Eof`, which the parser never consumes.
static END: Spanned = (Token::Eof, Position::new(0, 0));

/// Returns the next token without consuming it.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> &'a Spanned
    where I: Iterator<Item = &'a Spanned> + Clone
{
    tokens.peek().copied().unwrap_or(&END)
}

/// Consumes the next token if it equals `expected`.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns a `ParseError` naming `expected` and the token actually found.
/// Nothing is consumed in that case.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let (token, position) = peek(tokens);
    if token == expected {
        tokens.next();
        Ok(*position)
    } else {
        Err(ParseError::unexpected(expected.to_string(), token, *position))
    }
}

/// Consumes a single `;` if one follows.
pub(in crate::interpreter::parser) fn skip_semicolon<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Spanned> + Clone
{
    if let (Token::Semicolon, _) = peek(tokens) {
        tokens.next();
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, object literals, call
/// arguments and parameter lists. It repeatedly calls `parse_item` to parse
/// one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. A comma
/// directly before the closing token is rejected.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut items = Vec::new();
    if peek(tokens).0 == *closing {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match peek(tokens) {
            (Token::Comma, _) => {
                tokens.next();
            },
            (tok, _) if tok == closing => {
                tokens.next();
                break;
            },
            (tok, position) => {
                return Err(ParseError::unexpected(format!("',' or {closing}"), tok, *position));
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    match peek(tokens) {
        (Token::Identifier(name), _) => {
            tokens.next();
            Ok(name.clone())
        },
        (tok, position) => Err(ParseError::unexpected("identifier", tok, *position)),
    }
}

/// Parses a parenthesised parameter list `(a, b, c)`.
///
/// Shared by function declarations and function expressions.
pub(in crate::interpreter::parser) fn parse_params<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::LParen)?;
    parse_comma_separated(tokens, parse_identifier, &Token::RParen)
}
