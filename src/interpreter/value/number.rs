use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Environment, EvalResult, FrameId},
    source::Span,
};

/// A numeric value: a double-precision float stamped with the source span
/// it came from and the frame that owns it.
///
/// Both stamps are rewritten on every operation result, so they are always
/// the merge/propagation of the operands and never stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    /// The numeric value.
    pub value: f64,
    /// The span of the source range that produced this value.
    pub span:  Span,
    /// The frame the value belongs to, used for tracebacks.
    pub frame: FrameId,
}

impl Number {
    /// Creates a number stamped with a span and an owning frame.
    #[must_use]
    pub const fn new(value: f64, span: Span, frame: FrameId) -> Self {
        Self { value, span, frame }
    }

    /// Applies a pairwise arithmetic operation against another number.
    ///
    /// The result's span merges the left operand's start and the right
    /// operand's end; its frame is inherited from the left operand.
    /// Division checks for a zero divisor before anything else and fails
    /// with the dedicated divide-by-zero error at the divisor's span,
    /// carrying the left operand's frame chain.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] when dividing by exactly
    /// zero.
    pub fn apply(&self,
                 op: BinaryOperator,
                 right: &Self,
                 env: &Environment)
                 -> EvalResult<Self> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        if matches!(op, Div) && right.value == 0.0 {
            return Err(RuntimeError::DivisionByZero { span:  right.span,
                                                      trace: env.traceback(self.frame,
                                                                           right.span.start), });
        }

        let value = match op {
            Add => self.value + right.value,
            Sub => self.value - right.value,
            Mul => self.value * right.value,
            Div => self.value / right.value,
            Pow => self.value.powf(right.value),
        };

        Ok(Self::new(value, self.span.to(right.span), self.frame))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // f64's Display renders integral values without a fractional part.
        write!(f, "{}", self.value)
    }
}
