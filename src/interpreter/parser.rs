/// Binary operator parsing.
///
/// Implements the left-associative fold shared by the additive and
/// multiplicative levels, the right-associative exponentiation level, and
/// the token-to-operator mapping.
pub mod binary;

/// Core parsing logic.
///
/// Contains the parse entry point, the expression rule, and the assignment
/// lookahead.
pub mod core;

/// Unary operator and atom parsing.
///
/// Handles the prefix `+`/`-` rule and the atomic expressions: literals,
/// variable reads, and parenthesized groups.
pub mod unary;
