use logos::Logos;

use crate::{
    error::ParseError,
    source::{Position, Source, Span},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// A literal accepts at most one decimal point; a second point ends the
    /// literal, so `1.2.3` lexes as the two adjacent literals `1.2` and
    /// `.3`. Every literal produces a floating-point value, including
    /// integral-looking ones.
    #[regex(r"[0-9]+\.?[0-9]*", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Reserved words: `if` and `unless`. The grammar does not use them
    /// yet, but they are kept out of the identifier space.
    #[token("if", parse_name)]
    #[token("unless", parse_name)]
    Keyword(String),
    /// Identifier tokens; variable names such as `x` or `offset_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", parse_name)]
    Identifier(String),
    /// `$`, the sigil introducing a variable access or assignment.
    #[token("$")]
    Sigil,
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
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Line breaks are consumed silently but advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    Newline,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Whitespace,

    /// The zero-width end-of-input marker; [`tokenize`] appends it after
    /// the last real token. The scanner only matches it for an embedded
    /// NUL byte, which [`tokenize`] rejects like any other character
    /// outside the alphabet.
    #[token("\0")]
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "'{value}'"),
            Self::Keyword(name) | Self::Identifier(name) => write!(f, "'{name}'"),
            Self::Sigil => write!(f, "'$'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::Equals => write!(f, "'='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Newline | Self::Whitespace => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset of the start of that
/// line, so every token position can be computed without rescanning the
/// text. Updated as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current 0-based line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset at which the current line begins.
    pub line_start: usize,
}

/// Splits a source into its tokens, each paired with its span.
///
/// The returned sequence is terminated by a zero-width [`Token::Eof`].
/// Tokenization is all-or-nothing: the first unrecognized character aborts
/// the scan with an Illegal Character error at that character's
/// single-column span, and no tokens are returned.
///
/// # Errors
/// Returns [`ParseError::IllegalCharacter`] for the first character outside
/// the language's alphabet.
///
/// # Example
/// ```
/// use sigil::{interpreter::lexer::{Token, tokenize}, source::Source};
///
/// let tokens = tokenize(&Source::new("<doc>", "1.2.3")).unwrap();
/// let kinds: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();
///
/// // Two adjacent literals; the second point ended the first one.
/// assert_eq!(kinds,
///            [&Token::Number(1.2), &Token::Number(0.3), &Token::Eof]);
/// ```
pub fn tokenize(source: &Source) -> Result<Vec<(Token, Span)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(&source.text, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let span = token_span(&source.text, &lexer);
        match result {
            // An `Eof` from the scanner is an embedded NUL byte, not the
            // end of input; it is as illegal as any unmatched character.
            Ok(Token::Eof) | Err(()) => {
                let character = source.text[lexer.span()].chars().next().unwrap_or_default();
                let mut end = span.start;
                end.advance(character);

                return Err(ParseError::IllegalCharacter { character,
                                                          span: Span::new(span.start, end), });
            },
            Ok(token) => tokens.push((token, span)),
        }
    }

    let end = position_at(&source.text, &lexer.extras, source.text.len());
    tokens.push((Token::Eof, Span::new(end, end)));

    Ok(tokens)
}

/// Computes the span of the token the lexer last produced.
///
/// Tokens never contain a line break, so the whole span lies on the line
/// the extras currently describe.
fn token_span(text: &str, lexer: &logos::Lexer<Token>) -> Span {
    let range = lexer.span();
    let start = position_at(text, &lexer.extras, range.start);

    let mut end = start;
    for character in text[range].chars() {
        end.advance(character);
    }

    Span::new(start, end)
}

fn position_at(text: &str, extras: &LexerExtras, index: usize) -> Position {
    let column = text[extras.line_start..index].chars().count();
    Position::new(index, extras.line, column)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Copies the current token slice into an owned name.
fn parse_name(lex: &logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}
