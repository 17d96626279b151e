/// Value dispatch.
///
/// Defines the closed `Value` enum and routes pairwise operations to the
/// concrete variant. Numbers are the only variant today; the enum is the
/// seam where further variants would be added.
pub mod core;

/// Number values.
///
/// The concrete numeric value: a double-precision float stamped with its
/// source span and owning frame, with the pairwise arithmetic used by the
/// evaluator.
pub mod number;
