/// A unit of program text paired with the label used in diagnostics.
///
/// The label is a file name for scripts or a session tag such as `<stdin>`
/// for interactive input. Positions and spans never carry the text
/// themselves; anything that renders a diagnostic takes a `&Source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// The diagnostic label.
    pub name: String,
    /// The full source text.
    pub text: String,
}

impl Source {
    /// Creates a source from a label and its text.
    ///
    /// # Example
    /// ```
    /// use sigil::source::Source;
    ///
    /// let source = Source::new("<stdin>", "1 + 2");
    /// assert_eq!(source.name, "<stdin>");
    /// ```
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(),
               text: text.into(), }
    }
}

/// A location in the source text.
///
/// Holds the absolute byte `index` together with the 0-based `line` and the
/// 0-based `column`, counted in characters from the start of the line.
/// `Position` is `Copy`, so a stored position is always an independent
/// snapshot and never aliases a mutating cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the text.
    pub index:  usize,
    /// 0-based line number.
    pub line:   usize,
    /// 0-based column, in characters from the start of the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from its raw parts.
    #[must_use]
    pub const fn new(index: usize, line: usize, column: usize) -> Self {
        Self { index, line, column }
    }

    /// Advances past one character.
    ///
    /// Only a `\n` moves the position to the next line and resets the
    /// column; every other character advances the column by one.
    ///
    /// # Example
    /// ```
    /// use sigil::source::Position;
    ///
    /// let mut position = Position::default();
    /// position.advance('a');
    /// position.advance('\n');
    ///
    /// assert_eq!(position.line, 1);
    /// assert_eq!(position.column, 0);
    /// assert_eq!(position.index, 2);
    /// ```
    pub const fn advance(&mut self, character: char) {
        self.index += character.len_utf8();
        self.column += 1;

        if character == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }
}

/// A source range delimited by a start and an (exclusive) end position.
///
/// Every token, AST node, value, and error carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Where the range begins.
    pub start: Position,
    /// The first position past the range.
    pub end:   Position,
}

impl Span {
    /// Creates a span from its endpoints.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Merges two spans into one covering both, keeping the start of `self`
    /// and the end of `other`.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self::new(self.start, other.end)
    }
}
