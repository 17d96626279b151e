use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_arithmetic},
    source::Span,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program: one expression spanning the whole input.
///
/// The token sequence must be the output of
/// [`tokenize`](crate::interpreter::lexer::tokenize), terminated by
/// [`Token::Eof`]. Parsing must consume every token up to the terminator;
/// anything left over fails with an "expected an operator" error at the
/// first unconsumed token.
///
/// # Errors
/// Returns a [`ParseError`] when the input is not a single well-formed
/// expression.
///
/// # Example
/// ```
/// use sigil::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse},
///     source::Source,
/// };
///
/// let tokens = tokenize(&Source::new("<doc>", "1 + 2")).unwrap();
/// let node = parse(&tokens).unwrap();
///
/// assert!(matches!(node, Node::BinaryOp { .. }));
/// ```
pub fn parse(tokens: &[(Token, Span)]) -> ParseResult<Node> {
    let mut iter = tokens.iter().peekable();
    let node = parse_expression(&mut iter)?;

    match iter.peek() {
        Some((Token::Eof, _)) | None => Ok(node),
        Some((token, span)) => {
            Err(ParseError::ExpectedOperator { found: token.to_string(),
                                               span:  *span, })
        },
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing and the
/// lowest-precedence level. An expression is either an assignment
/// (`$name = expression`) or a left-associative chain of `+`/`-` over
/// terms.
///
/// Grammar:
/// ```text
///     expression := '$' (identifier | keyword) '=' expression
///                 | term (("+" | "-") term)*
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some(node) = parse_assignment(tokens)? {
        return Ok(node);
    }
    parse_arithmetic(tokens)
}

/// Parses an assignment expression, if one starts here.
///
/// The sigil is ambiguous: `$x` on its own reads a variable, while
/// `$x = 1` binds one. The function performs a limited lookahead on a
/// clone of the iterator and only commits once `$`, a name, and `=` are
/// all present; otherwise it consumes nothing and returns `Ok(None)`, so
/// the sigil is left for the atom rule.
///
/// Once committed, any failure is final: `$x = )` reports the error inside
/// the value expression rather than reparsing `$x` as a plain read.
///
/// # Returns
/// - `Ok(Some(Node::VariableAssignment))` if an assignment was parsed,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the committed form is malformed or its value
/// expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Node>>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some((Token::Sigil, _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Identifier(_) | Token::Keyword(_), _)) = lookahead.peek() {
            lookahead.next();

            if let Some((Token::Equals, _)) = lookahead.peek() {
                let start = match tokens.next() {
                    Some((Token::Sigil, span)) => span.start,
                    _ => unreachable!(),
                };
                let name = match tokens.next() {
                    Some((Token::Identifier(name) | Token::Keyword(name), _)) => name.clone(),
                    _ => unreachable!(),
                };
                match tokens.next() {
                    Some((Token::Equals, _)) => {},
                    Some((token, span)) => {
                        return Err(ParseError::ExpectedEquals { found: token.to_string(),
                                                                span:  *span, });
                    },
                    None => {
                        return Err(ParseError::ExpectedEquals {
                            found: Token::Eof.to_string(),
                            span: Span::new(start, start),
                        });
                    },
                }

                let value = parse_expression(tokens)?;
                let span = Span::new(start, value.span().end);

                return Ok(Some(Node::VariableAssignment { name,
                                                          value: Box::new(value),
                                                          span }));
            }
        }
    }

    Ok(None)
}
