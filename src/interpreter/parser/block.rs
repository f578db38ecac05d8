use std::iter::Peekable;

use crate::{
    ast::Block,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, peek},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// closing `}` token is encountered; reaching the end of input first is an
/// error.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// A [`Block`] containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::LBrace)?;

    let mut statements = Vec::new();
    loop {
        match peek(tokens) {
            (Token::RBrace, _) => {
                tokens.next();
                break;
            },
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(Block { statements })
}
