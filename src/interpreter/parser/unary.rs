use std::iter::Peekable;

use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
        },
    },
    source::Span,
};

/// Parses a factor: a prefix-signed expression.
///
/// Supports the prefix operators `+` (identity) and `-` (negation). The
/// rule recurses for chained signs, so `--x` parses as `-(-x)`, and
/// delegates to the exponentiation level otherwise. A sign therefore binds
/// looser than `^`: `-2 ^ 2` is the negation of `2 ^ 2`.
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor | power
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A `Node::UnaryOp` or the underlying power expression.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some((Token::Plus, span)) = tokens.peek() {
        let start = span.start;
        tokens.next();
        let operand = parse_factor(tokens)?;
        let span = Span::new(start, operand.span().end);
        Ok(Node::UnaryOp { op: UnaryOperator::Plus,
                           operand: Box::new(operand),
                           span })
    } else if let Some((Token::Minus, span)) = tokens.peek() {
        let start = span.start;
        tokens.next();
        let operand = parse_factor(tokens)?;
        let span = Span::new(start, operand.span().end);
        Ok(Node::UnaryOp { op: UnaryOperator::Negate,
                           operand: Box::new(operand),
                           span })
    } else {
        parse_power(tokens)
    }
}

/// Parses an atomic expression.
///
/// Atoms form the base of the expression grammar:
/// - numeric literals
/// - variable reads through the `$` sigil (`$x`; reserved words are
///   allowed as names here)
/// - bare identifiers (how the preloaded `true` and `false` are reached)
/// - parenthesized expressions, which are returned as-is with no wrapper
///   node
///
/// Grammar:
/// ```text
///     atom := number
///           | "$" (identifier | keyword)
///           | identifier
///           | "(" expression ")"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an atom.
///
/// # Returns
/// The parsed atom.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the sigil is not followed by a name,
/// - a parenthesized expression is not closed with `)`,
/// - the token cannot begin an atom.
pub(in crate::interpreter::parser) fn parse_atom<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(value), span)) => {
            let node = Node::Number { value: *value,
                                      span:  *span, };
            tokens.next();
            Ok(node)
        },

        Some((Token::Identifier(name), span)) => {
            let node = Node::VariableAccess { name: name.clone(),
                                              span: *span, };
            tokens.next();
            Ok(node)
        },

        Some((Token::Sigil, span)) => {
            let start = span.start;
            tokens.next();

            match tokens.next() {
                Some((Token::Identifier(name) | Token::Keyword(name), span)) => {
                    Ok(Node::VariableAccess { name: name.clone(),
                                              span: Span::new(start, span.end), })
                },
                Some((token, span)) => {
                    Err(ParseError::ExpectedIdentifier { found: token.to_string(),
                                                         span:  *span, })
                },
                None => {
                    Err(ParseError::ExpectedIdentifier { found: Token::Eof.to_string(),
                                                         span:  Span::new(start, start), })
                },
            }
        },

        Some((Token::LParen, _)) => {
            tokens.next();
            let node = parse_expression(tokens)?;

            match tokens.peek() {
                Some((Token::RParen, _)) => {
                    tokens.next();
                    Ok(node)
                },
                Some((token, span)) => {
                    Err(ParseError::ExpectedClosingParen { found: token.to_string(),
                                                           span:  *span, })
                },
                None => {
                    Err(ParseError::ExpectedClosingParen { found: Token::Eof.to_string(),
                                                           span:  node.span(), })
                },
            }
        },

        Some((token, span)) => {
            Err(ParseError::UnexpectedToken { found: token.to_string(),
                                              span:  *span, })
        },

        None => {
            Err(ParseError::UnexpectedToken { found: Token::Eof.to_string(),
                                              span:  Span::default(), })
        },
    }
}
