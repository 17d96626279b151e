use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Environment, EvalResult, FrameId},
        value::number::Number,
    },
    source::Span,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a computation can produce. Numbers are the
/// sole variant today; keeping the enum closed makes operation dispatch
/// exhaustive, so a new variant extends the matches below instead of
/// falling into a runtime "no handler" path.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double-precision floating-point).
    Number(Number),
}

impl Value {
    /// The value's type name, as used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
        }
    }

    /// The source span the value is currently stamped with.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Number(number) => number.span,
        }
    }

    /// Applies a binary operation between this value and `right`.
    ///
    /// Both operands being numbers routes to the pairwise arithmetic on
    /// [`Number`]; any pairing a future variant does not support reports an
    /// [`InvalidOperation`](crate::error::RuntimeError::InvalidOperation)
    /// naming the operation and both operand type names.
    ///
    /// # Errors
    /// Returns a `RuntimeError` when the concrete operation fails, e.g. on
    /// division by zero.
    pub fn apply_binary(&self,
                        op: BinaryOperator,
                        right: &Self,
                        env: &Environment)
                        -> EvalResult<Self> {
        match (self, right) {
            (Self::Number(left), Self::Number(right)) => {
                left.apply(op, right, env).map(Self::Number)
            },
        }
    }

    /// Re-stamps the value with a new span and owning frame.
    ///
    /// Every operation result and every variable read is stamped at the
    /// site that produced it, so errors always point at the use, never at
    /// a definition.
    #[must_use]
    pub fn stamped(self, span: Span, frame: FrameId) -> Self {
        match self {
            Self::Number(mut number) => {
                number.span = span;
                number.frame = frame;
                Self::Number(number)
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}
