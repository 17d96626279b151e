use crate::source::{Position, Span};

/// One frame of a materialized traceback.
///
/// The innermost entry carries the position of the failure itself; each
/// enclosing entry carries the position at which the next-inner frame was
/// entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    /// Position within this frame.
    pub position: Position,
    /// The frame's display name.
    pub frame:    String,
}

/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the span of the failing source range and the
/// active frame chain, innermost first, captured when the error was
/// constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The divisor's span.
        span:  Span,
        /// The active frame chain, innermost first.
        trace: Vec<TraceEntry>,
    },
    /// Tried to read a variable that has no binding.
    UndefinedVariable {
        /// The name of the variable.
        name:  String,
        /// The span of the access.
        span:  Span,
        /// The active frame chain, innermost first.
        trace: Vec<TraceEntry>,
    },
    /// An operation was applied to operands it is not defined for.
    ///
    /// Numbers are the only values today, so nothing in the language can
    /// reach this; it is the seam through which further value variants
    /// report their unsupported pairings.
    InvalidOperation {
        /// The operation attempted, e.g. `+`.
        operation: String,
        /// Type name of the left operand.
        left:      &'static str,
        /// Type name of the right operand.
        right:     &'static str,
        /// The span of the whole operation.
        span:      Span,
        /// The active frame chain, innermost first.
        trace:     Vec<TraceEntry>,
    },
}

impl RuntimeError {
    /// The diagnostic kind name this error renders under.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        "Runtime Error"
    }

    /// The source range the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::DivisionByZero { span, .. }
            | Self::UndefinedVariable { span, .. }
            | Self::InvalidOperation { span, .. } => *span,
        }
    }

    /// The frame chain active when the error occurred, innermost first.
    #[must_use]
    pub fn trace(&self) -> &[TraceEntry] {
        match self {
            Self::DivisionByZero { trace, .. }
            | Self::UndefinedVariable { trace, .. }
            | Self::InvalidOperation { trace, .. } => trace,
        }
    }

    /// The human-readable message, without the kind name.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::DivisionByZero { .. } => "Division by zero.".to_string(),

            Self::UndefinedVariable { name, .. } => format!("Variable '{name}' is not defined"),

            Self::InvalidOperation { operation,
                                     left,
                                     right,
                                     .. } => {
                format!("Cannot apply '{operation}' to {left} and {right}.")
            },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.details())
    }
}

impl std::error::Error for RuntimeError {}
