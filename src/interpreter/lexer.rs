use std::fmt;

use logos::Logos;

use crate::{error::LexError, util::num::format_number};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords are plain `#[token]` patterns next to the identifier regex.
/// Logos always prefers the longest match, so `letter` is one identifier and
/// never `let` followed by `ter`; on equal length the literal keyword wins.
/// The same rule makes `<=` a single token rather than `<` then `=`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `return`
    #[token("return")]
    Return,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `null`
    #[token("null")]
    Null,
    /// Numeric literal tokens, such as `42` or `3.14`. No sign, no exponent.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens in double or single quotes. The payload is the
    /// raw text between the quotes; escape sequences are kept verbatim.
    #[regex(r#""([^"\\]|\\.)*""#, strip_quotes, allow_greedy = true)]
    #[regex(r"'([^'\\]|\\.)*'", strip_quotes, allow_greedy = true)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// End of input. Never produced by the scanner itself; [`tokenize`]
    /// appends it so the parser always has a position to report.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Number(n) => return write!(f, "'{}'", format_number(*n)),
            Self::Str(s) => return write!(f, "'\"{s}\"'"),
            Self::Identifier(name) => return write!(f, "'{name}'"),
            Self::Eof => return write!(f, "end of input"),
            Self::Let => "let",
            Self::Const => "const",
            Self::If => "if",
            Self::Else => "else",
            Self::Fn => "fn",
            Self::Return => "return",
            Self::While => "while",
            Self::For => "for",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::Comment => "comment",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Bang => "!",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Equals => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Dot => ".",
        };
        write!(f, "'{text}'")
    }
}

/// A 1-based line and column in the source text.
///
/// Columns count characters, not bytes, from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token paired with the position of its first character.
pub type Spanned = (Token, Position);

/// The output of [`tokenize`].
///
/// When `errors` is non-empty the token list is incomplete and should not be
/// handed to the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    /// Tokens in source order, always terminated by [`Token::Eof`].
    pub tokens: Vec<Spanned>,
    /// Every unrecognised slice of input, in source order.
    pub errors: Vec<LexError>,
}

/// Converts source text into positioned tokens.
///
/// Whitespace and `//` comments are skipped. An unrecognised character
/// records a [`LexError`] and scanning resumes right after it, so all such
/// errors in the input are reported at once.
///
/// # Parameters
/// - `source`: The raw program text.
///
/// # Returns
/// A [`Lexed`] holding the token list and the lexing errors.
///
/// # Example
/// ```
/// use mylang::interpreter::lexer::{Position, Token, tokenize};
///
/// let lexed = tokenize("let x = 10;");
/// assert!(lexed.errors.is_empty());
/// assert_eq!(lexed.tokens[0], (Token::Let, Position::new(1, 1)));
/// assert_eq!(lexed.tokens[3], (Token::Number(10.0), Position::new(1, 9)));
/// assert_eq!(lexed.tokens.last().map(|(t, _)| t), Some(&Token::Eof));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Lexed {
    let lines = LineIndex::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let position = lines.position(source, lexer.span().start);
        match result {
            Ok(token) => tokens.push((token, position)),
            Err(()) if lexer.slice().starts_with(['"', '\'']) => {
                errors.push(LexError::UnterminatedString { position });
            },
            Err(()) => errors.push(LexError::UnexpectedCharacter { slice: lexer.slice().to_string(),
                                                                   position }),
        }
    }

    tokens.push((Token::Eof, lines.position(source, source.len())));

    tracing::trace!(tokens = tokens.len(), errors = errors.len(), "tokenized source");
    Lexed { tokens, errors }
}

/// Byte offsets of every line start, for offset to position lookups.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
                                       .collect();
        Self { starts }
    }

    fn position(&self, source: &str, offset: usize) -> Position {
        let line = self.starts.partition_point(|&start| start <= offset);
        let line_start = self.starts[line.saturating_sub(1)];
        let column = source.get(line_start..offset)
                           .map_or(0, |prefix| prefix.chars().count());
        Position::new(line, column + 1)
    }
}

/// Parses a number literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which the regex rules out.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quote characters from a string literal slice.
fn strip_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
