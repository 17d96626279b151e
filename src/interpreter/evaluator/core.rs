use std::collections::HashMap;

use crate::{
    ast::Node,
    error::{RuntimeError, runtime_error::TraceEntry},
    interpreter::value::{core::Value, number::Number},
    source::{Position, Span},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Index of a frame in an [`Environment`]'s arena.
///
/// Frames are append-only, so an id stays valid for the lifetime of its
/// environment and parent links are acyclic by construction: a frame can
/// only ever point at an earlier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameId(usize);

/// One evaluation scope.
///
/// A frame holds its own bindings, an optional parent frame, a display
/// name, and the source position at which it was entered from its caller.
/// The chain of frames is what tracebacks render. Exactly one frame
/// (`Program`) exists per top-level evaluation in this language, but the
/// structure supports nesting.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The name tracebacks display for this frame.
    pub name:   String,
    /// The enclosing frame, if any.
    pub parent: Option<FrameId>,
    /// Where this frame was entered from its caller.
    pub entry:  Option<Position>,
    symbols:    HashMap<String, Value>,
}

/// The evaluator's symbol state: an arena of frames over an immutable
/// globals table.
///
/// Reads resolve through the frame chain and fall back to the globals;
/// writes always land in the named frame's own table, never in an ancestor
/// and never in the globals. Fresh environments share nothing, which keeps
/// concurrent evaluations of independent inputs safe.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    globals: HashMap<String, Value>,
    frames:  Vec<Frame>,
}

impl Environment {
    /// Creates an empty environment with no frames and no globals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame to the arena and returns its id.
    pub fn push_frame(&mut self,
                      name: impl Into<String>,
                      parent: Option<FrameId>,
                      entry: Option<Position>)
                      -> FrameId {
        let id = FrameId(self.frames.len());
        self.frames.push(Frame { name: name.into(),
                                 parent,
                                 entry,
                                 symbols: HashMap::new() });
        id
    }

    /// Preloads a global binding.
    ///
    /// Globals root every lookup chain and are never written to by user
    /// code.
    pub fn define_global(&mut self, name: &str, value: Value) {
        self.globals.insert(name.to_string(), value);
    }

    /// Creates or updates a binding in `frame`'s own table.
    ///
    /// Ancestor frames are never touched.
    pub fn define(&mut self, frame: FrameId, name: &str, value: Value) {
        self.frames[frame.0].symbols.insert(name.to_string(), value);
    }

    /// Resolves a name through the frame chain, then the globals.
    #[must_use]
    pub fn lookup(&self, frame: FrameId, name: &str) -> Option<&Value> {
        let mut current = Some(frame);
        while let Some(id) = current {
            let frame = &self.frames[id.0];
            if let Some(value) = frame.symbols.get(name) {
                return Some(value);
            }
            current = frame.parent;
        }
        self.globals.get(name)
    }

    /// Materializes the frame chain for a traceback, innermost first.
    ///
    /// The innermost entry carries `position` (where the failure
    /// happened); each enclosing entry carries the position at which the
    /// next-inner frame was entered.
    #[must_use]
    pub fn traceback(&self, frame: FrameId, position: Position) -> Vec<TraceEntry> {
        let mut entries = Vec::new();
        let mut position = position;
        let mut current = Some(frame);

        while let Some(id) = current {
            let frame = &self.frames[id.0];
            entries.push(TraceEntry { position,
                                      frame: frame.name.clone() });
            position = frame.entry.unwrap_or(position);
            current = frame.parent;
        }

        entries
    }
}

/// Walks an AST and computes its value.
///
/// A fresh evaluator owns a fresh environment holding one `Program` frame
/// layered over the preloaded globals `true` (1) and `false` (0). Nothing
/// is shared between evaluators.
pub struct Evaluator {
    /// The symbol state the run mutates.
    pub env: Environment,
    program: FrameId,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates an evaluator with the preloaded global bindings and an
    /// empty `Program` frame.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        let program = env.push_frame("Program", None, None);

        for (name, value) in [("true", 1.0), ("false", 0.0)] {
            env.define_global(name, Value::Number(Number::new(value, Span::default(), program)));
        }

        Self { env, program }
    }

    /// Evaluates an expression tree against the `Program` frame.
    ///
    /// Evaluation is strictly left-to-right and eager, aborting on the
    /// first failure.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for division by zero or an undefined
    /// variable.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Value> {
        self.eval_node(node, self.program)
    }

    /// Dispatches one node by kind.
    ///
    /// The match is exhaustive over the closed node enum; a node kind
    /// without a handler cannot compile.
    pub(in crate::interpreter::evaluator) fn eval_node(&mut self,
                                                       node: &Node,
                                                       frame: FrameId)
                                                       -> EvalResult<Value> {
        match node {
            Node::Number { value, span } => {
                Ok(Value::Number(Number::new(*value, *span, frame)))
            },
            Node::UnaryOp { op, operand, span } => self.eval_unary(*op, operand, *span, frame),
            Node::BinaryOp { left, op, right, span } => {
                self.eval_binary(left, *op, right, *span, frame)
            },
            Node::VariableAccess { name, span } => self.eval_variable(name, *span, frame),
            Node::VariableAssignment { name, value, .. } => {
                self.eval_assignment(name, value, frame)
            },
        }
    }

    /// Reads a variable.
    ///
    /// A successful read returns a copy of the stored value re-stamped
    /// with the access site's span and the reading frame, so a later error
    /// points at the use rather than the definition.
    fn eval_variable(&self, name: &str, span: Span, frame: FrameId) -> EvalResult<Value> {
        match self.env.lookup(frame, name) {
            Some(value) => Ok(value.clone().stamped(span, frame)),
            None => {
                Err(RuntimeError::UndefinedVariable { name:  name.to_string(),
                                                      span,
                                                      trace: self.env
                                                                 .traceback(frame, span.start), })
            },
        }
    }

    /// Evaluates the value expression, stores the result in the current
    /// frame's own table, and yields the stored value. Assignment is an
    /// expression.
    fn eval_assignment(&mut self, name: &str, value: &Node, frame: FrameId) -> EvalResult<Value> {
        let value = self.eval_node(value, frame)?;
        self.env.define(frame, name, value.clone());
        Ok(value)
    }
}
