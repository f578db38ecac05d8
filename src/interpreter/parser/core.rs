use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{binary::parse_logical_or, statement::parse_statement, utils::peek},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token list into a [`Program`].
///
/// Parsing does not stop at the first syntax error. When a top-level
/// statement fails, its error is recorded, the parser skips ahead to a likely
/// statement boundary and continues, so one pass reports every independent
/// mistake. The returned program is only trustworthy when the error list is
/// empty.
///
/// # Parameters
/// - `tokens`: Positioned tokens as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize), ending with
///   [`Token::Eof`].
///
/// # Returns
/// The statements that parsed and the errors in source order.
///
/// # Example
/// ```
/// use mylang::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let lexed = tokenize("let x = 1; x + 2;");
/// let (program, errors) = parse_program(&lexed.tokens);
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
/// ```
#[must_use]
pub fn parse_program(tokens: &[Spanned]) -> (Program, Vec<ParseError>) {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while !matches!(peek(&mut iter).0, Token::Eof) {
        let remaining = iter.len();
        match parse_statement(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                tracing::debug!(%error, "recovering from syntax error");
                errors.push(error);
                let consumed = &tokens[tokens.len() - remaining..tokens.len() - iter.len()];
                synchronize(&mut iter, open_braces(consumed), !consumed.is_empty());
            },
        }
    }

    tracing::debug!(statements = statements.len(), errors = errors.len(), "parsed program");
    (Program { statements }, errors)
}

/// Counts the blocks opened by `tokens` that are still open at its end.
fn open_braces(tokens: &[Spanned]) -> usize {
    tokens.iter().fold(0, |depth, (token, _)| match token {
                     Token::LBrace => depth + 1,
                     Token::RBrace => depth.saturating_sub(1),
                     _ => depth,
                 })
}

/// Skips tokens after a syntax error until a plausible statement start.
///
/// `depth` is the number of blocks the failed statement left open. Skipping
/// runs to the `}` closing the outermost of them (and one `;` after it).
/// Outside any block it stops just past a `;` or `}`, or in front of a
/// statement keyword. When the failed statement consumed nothing, the
/// offending token is skipped first so the caller always makes progress.
fn synchronize<'a, I>(tokens: &mut Peekable<I>, mut depth: usize, progressed: bool)
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut skipped = progressed;
    loop {
        match peek(tokens).0 {
            Token::Eof => return,
            Token::LBrace => {
                tokens.next();
                depth += 1;
            },
            Token::RBrace => {
                tokens.next();
                if depth <= 1 {
                    if matches!(peek(tokens).0, Token::Semicolon) {
                        tokens.next();
                    }
                    return;
                }
                depth -= 1;
            },
            Token::Semicolon if depth == 0 => {
                tokens.next();
                return;
            },
            Token::Let
            | Token::Const
            | Token::If
            | Token::While
            | Token::For
            | Token::Fn
            | Token::Return
                if skipped && depth == 0 =>
            {
                return;
            },
            _ => {
                tokens.next();
                skipped = true;
            },
        }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_assignment(tokens)
}

/// Parses a right-associative assignment.
///
/// The left-hand side is parsed as an ordinary logical-OR expression. An
/// `=` is only consumed when that expression is a bare identifier; otherwise
/// the expression is returned untouched and the `=` is left for the caller,
/// which reports it. So `a = b = 1` assigns both names, while `arr[0] = 1`
/// is a syntax error at the `=`.
///
/// Grammar: `assignment := logical_or ("=" assignment)?`
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let target = parse_logical_or(tokens)?;

    if let (Token::Equals, _) = peek(tokens)
       && let Some(name) = target.as_identifier()
    {
        let name = name.to_string();
        tokens.next();
        let value = parse_assignment(tokens)?;
        return Ok(Expr::Assignment { name,
                                     value: Box::new(value) });
    }

    Ok(target)
}
