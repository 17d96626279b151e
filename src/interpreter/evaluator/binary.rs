use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, FrameId},
        value::core::Value,
    },
    source::Span,
};

impl Evaluator {
    /// Evaluates a binary operation node.
    ///
    /// The left operand is evaluated first, then the right; the first
    /// failure aborts. The operand pair is routed through the value
    /// model's dispatch and the result is re-stamped with the node's full
    /// span and the current frame.
    pub(in crate::interpreter::evaluator) fn eval_binary(&mut self,
                                                         left: &Node,
                                                         op: BinaryOperator,
                                                         right: &Node,
                                                         span: Span,
                                                         frame: FrameId)
                                                         -> EvalResult<Value> {
        let left = self.eval_node(left, frame)?;
        let right = self.eval_node(right, frame)?;

        let result = left.apply_binary(op, &right, &self.env)?;
        Ok(result.stamped(span, frame))
    }
}
