//! # sigil
//!
//! sigil is a tiny arithmetic expression language interpreter written in
//! Rust. It evaluates numeric literals, the operators `+ - * / ^` (unary
//! and binary), parenthesized grouping, and variable bindings introduced
//! through the `$` sigil, with source-mapped diagnostics for every stage
//! of the pipeline.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::core::Evaluator, lexer, parser, value::core::Value},
    source::Source,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operator types that
/// represent the syntactic structure of an expression as a tree. The AST
/// is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines node variants for every language construct.
/// - Attaches a source span to every node for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing,
/// parsing, or evaluating code, and the rendering of full diagnostics:
/// kind, message, location, underlined source excerpt, and traceback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches exact source spans and, for runtime failures, frame chains.
/// - Renders reports against a [`Source`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and error handling to provide a complete runtime for
/// expression evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Source text, positions, and spans.
///
/// Declares the `Source` label/text pair and the copyable `Position` and
/// `Span` types attached to every token, node, value, and error.
pub mod source;

/// Evaluates one source to completion and returns the computed value.
///
/// Runs the full pipeline: text → lexer → tokens → parser → AST →
/// interpreter → value. Each invocation evaluates against a fresh
/// environment holding only the preloaded globals `true` (1) and `false`
/// (0); nothing is shared between invocations.
///
/// # Errors
/// Returns an [`Error`] when any stage fails: an illegal character, a
/// syntax error, or a runtime failure. The stages short-circuit, so the
/// result is always either one complete value or exactly one error.
///
/// # Examples
/// ```
/// use sigil::source::Source;
///
/// let value = sigil::run(&Source::new("<doc>", "2 + 3 * 4")).unwrap();
/// assert_eq!(value.to_string(), "14");
///
/// // Assignment is an expression and later reads see the binding.
/// let value = sigil::run(&Source::new("<doc>", "($x = 5) + $x")).unwrap();
/// assert_eq!(value.to_string(), "10");
///
/// // 'y' was never bound, so evaluation fails.
/// assert!(sigil::run(&Source::new("<doc>", "$y")).is_err());
/// ```
pub fn run(source: &Source) -> Result<Value, Error> {
    let tokens = lexer::tokenize(source)?;
    debug!(source = %source.name, tokens = tokens.len(), "tokenized");

    let node = parser::core::parse(&tokens)?;
    debug!(source = %source.name, "parsed");

    let mut evaluator = Evaluator::new();
    let value = evaluator.eval(&node)?;
    debug!(source = %source.name, value = %value, "evaluated");

    Ok(value)
}
