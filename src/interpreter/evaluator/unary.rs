use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, FrameId},
        value::{core::Value, number::Number},
    },
    source::Span,
};

impl Evaluator {
    /// Evaluates a unary operation node.
    ///
    /// `-` multiplies the operand by `-1`; `+` passes it through
    /// unchanged. Either way the result is re-stamped with the node's
    /// span, so `-x` points at the whole expression including the sign.
    pub(in crate::interpreter::evaluator) fn eval_unary(&mut self,
                                                        op: UnaryOperator,
                                                        operand: &Node,
                                                        span: Span,
                                                        frame: FrameId)
                                                        -> EvalResult<Value> {
        let value = self.eval_node(operand, frame)?;

        let value = match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => match &value {
                Value::Number(number) => {
                    let negative_one = Number::new(-1.0, number.span, number.frame);
                    Value::Number(number.apply(BinaryOperator::Mul, &negative_one, &self.env)?)
                },
            },
        };

        Ok(value.stamped(span, frame))
    }
}
