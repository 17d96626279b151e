use crate::{
    error::Error,
    source::{Source, Span},
};

/// Renders the full diagnostic for an error against its source.
///
/// The report contains the error-kind name, the message, the source label
/// with the 1-based start and end line and column, and an excerpt of the
/// source with the error span underlined on each affected line. Runtime
/// failures are preceded by a traceback, one row per frame, outermost
/// first.
///
/// # Example
/// ```
/// use sigil::source::Source;
///
/// let source = Source::new("<doc>", "(2 + 3");
/// let error = sigil::run(&source).unwrap_err();
/// let report = error.report(&source);
///
/// assert!(report.starts_with("Invalid Syntax: Expected ')'"));
/// assert!(report.contains("(2 + 3\n      ^"));
/// ```
#[must_use]
pub fn render(error: &Error, source: &Source) -> String {
    let mut out = String::new();

    if let Error::Runtime(error) = error {
        out.push_str("Traceback (most recent call last):\n");
        for entry in error.trace().iter().rev() {
            out.push_str(&format!("  File {}, line {}, in {}\n",
                                  source.name,
                                  entry.position.line + 1,
                                  entry.frame));
        }
    }

    let span = error.span();
    out.push_str(&format!("{}: {}\n", error.kind(), error.details()));
    out.push_str(&format!("File {}, line {}, column {} to line {}, column {}\n\n",
                          source.name,
                          span.start.line + 1,
                          span.start.column + 1,
                          span.end.line + 1,
                          span.end.column + 1));
    out.push_str(&underline(&source.text, span));

    out
}

/// Copies every line the span touches, placing a caret row under each.
///
/// On the first line the carets begin at the span's start column; on the
/// last they stop at its end column. At least one caret is always printed,
/// so zero-width spans (the end-of-input token) stay visible.
fn underline(text: &str, span: Span) -> String {
    let mut out = String::new();

    for (number, line) in text.lines().enumerate() {
        if number < span.start.line || number > span.end.line {
            continue;
        }

        let from = if number == span.start.line { span.start.column } else { 0 };
        let to = if number == span.end.line {
            span.end.column.max(from + 1)
        } else {
            line.chars().count().max(from + 1)
        };

        out.push_str(line);
        out.push('\n');
        for _ in 0..from {
            out.push(' ');
        }
        for _ in from..to {
            out.push('^');
        }
        out.push('\n');
    }

    if out.is_empty() {
        // The span lies past the last line, e.g. at the end of input on an
        // empty source.
        out.push_str("^\n");
    }

    out
}
