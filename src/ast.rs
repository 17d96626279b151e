use crate::source::Span;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Node` covers every construct of the language: numeric literals, unary
/// and binary operations, variable access through the `$` sigil or a bare
/// name, and variable assignment. Each variant carries the span of its full
/// source extent, from its leftmost to its rightmost token.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal.
    Number {
        /// The literal's value. All literals are floating-point, including
        /// integral-looking ones.
        value: f64,
        /// Source extent of the literal token.
        span:  Span,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Source extent from the operator to the end of the operand.
        span:    Span,
    },
    /// A binary operation (addition, exponentiation, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Source extent from the left to the right operand.
        span:  Span,
    },
    /// A read of a variable by name.
    VariableAccess {
        /// Name of the variable.
        name: String,
        /// Source extent of the access, including the sigil when present.
        span: Span,
    },
    /// A binding of a name to the result of an expression.
    ///
    /// Assignment is itself an expression and yields the stored value.
    VariableAssignment {
        /// Name of the variable.
        name:  String,
        /// The expression whose result is stored.
        value: Box<Self>,
        /// Source extent from the sigil to the end of the value expression.
        span:  Span,
    },
}

impl Node {
    /// Gets the source span from `self`.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Number { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::BinaryOp { span, .. }
            | Self::VariableAccess { span, .. }
            | Self::VariableAssignment { span, .. } => *span,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`); passes its operand through unchanged.
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}
