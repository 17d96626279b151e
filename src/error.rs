/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code: the single lexical error (an illegal character) and the
/// syntax errors the parser raises when a grammar rule cannot complete.
pub mod parse_error;
/// Diagnostic rendering.
///
/// Turns an error plus its source into the full report shown to the user:
/// kind, message, location, underlined source excerpt, and (for runtime
/// failures) the traceback.
pub mod report;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or reading an undefined variable, each carrying the
/// active frame chain for the traceback.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{RuntimeError, TraceEntry};

use crate::source::{Source, Span};

/// Any failure an evaluation can produce, from any stage of the pipeline.
///
/// A caller receives either a complete value or exactly one `Error`, never
/// both and never a partial result. `Display` gives the one-line form;
/// [`Error::report`] renders the full diagnostic against the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A lexical or syntax error; the input never ran.
    Parse(ParseError),
    /// A failure during evaluation.
    Runtime(RuntimeError),
}

impl Error {
    /// The diagnostic kind name this error renders under.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Parse(error) => error.kind(),
            Self::Runtime(error) => error.kind(),
        }
    }

    /// The source range the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Parse(error) => error.span(),
            Self::Runtime(error) => error.span(),
        }
    }

    /// The human-readable message, without the kind name.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::Parse(error) => error.details(),
            Self::Runtime(error) => error.details(),
        }
    }

    /// Renders the full diagnostic for this error against its source.
    ///
    /// See [`report::render`].
    #[must_use]
    pub fn report(&self, source: &Source) -> String {
        report::render(self, source)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
