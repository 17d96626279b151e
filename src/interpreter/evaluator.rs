/// Binary operation evaluation.
///
/// Evaluates both operands left to right and routes the pair through the
/// value model.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the environment (frame arena plus preloaded globals), the
/// evaluator itself, and the node dispatch.
pub mod core;

/// Unary operation evaluation.
///
/// Negation and the identity sign.
pub mod unary;
