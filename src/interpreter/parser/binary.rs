use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_atom, parse_factor},
        },
    },
    source::Span,
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. This is the
/// arithmetic body of the expression rule, below the assignment form.
///
/// The rule is: `arithmetic := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// A `Node::BinaryOp` tree representing the parsed expression.
pub fn parse_arithmetic<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_binary_fold(tokens,
                      parse_term,
                      &[BinaryOperator::Add, BinaryOperator::Sub],
                      parse_term)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*` and `/`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_binary_fold(tokens,
                      parse_factor,
                      &[BinaryOperator::Mul, BinaryOperator::Div],
                      parse_factor)
}

/// Parses exponentiation expressions.
///
/// `^` is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`. The
/// right operand re-enters the factor rule, which both produces the right
/// associativity and lets a unary sign bind tighter on the right than on
/// the left: `-2 ^ 2` is `-(2 ^ 2)` while `2 ^ -2` is `2 ^ (-2)`.
///
/// The rule is: `power := atom ("^" factor)?`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_binary_fold(tokens, parse_atom, &[BinaryOperator::Pow], parse_factor)
}

/// Parses one binary-operator precedence level.
///
/// The shared shape of every binary level: parse one left operand via
/// `parse_left`, then while the lookahead is one of the accepted operator
/// kinds, consume it, parse a right operand via `parse_right`, and fold
/// the pair into a `Node::BinaryOp` left-associatively. The two sub-rules
/// differ only for exponentiation, whose right side re-enters the factor
/// rule.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `parse_left`: Rule for the leftmost operand.
/// - `accepted`: Operator kinds folded at this level.
/// - `parse_right`: Rule for each right operand.
///
/// # Returns
/// The folded expression tree.
pub(in crate::interpreter::parser) fn parse_binary_fold<'a, I>(
    tokens: &mut Peekable<I>,
    parse_left: impl Fn(&mut Peekable<I>) -> ParseResult<Node>,
    accepted: &[BinaryOperator],
    parse_right: impl Fn(&mut Peekable<I>) -> ParseResult<Node>)
    -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_left(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && accepted.contains(&op)
        {
            tokens.next();
            let right = parse_right(tokens)?;
            let span = left.span().to(right.span());
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    span };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the
/// binary operators `+`, `-`, `*`, `/`, `^`, and `None` for all other
/// tokens.
///
/// # Example
/// ```
/// use sigil::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
