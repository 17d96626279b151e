use sigil::{
    error::{Error, RuntimeError, TraceEntry},
    source::{Position, Source, Span},
};

fn report_for(text: &str) -> String {
    let source = Source::new("<test>", text);
    let error = sigil::run(&source).unwrap_err();
    error.report(&source)
}

#[test]
fn runtime_reports_carry_a_traceback() {
    let report = report_for("$x");

    assert!(report.starts_with("Traceback (most recent call last):\n"));
    assert!(report.contains("  File <test>, line 1, in Program\n"));
    assert!(report.contains("Runtime Error: Variable 'x' is not defined\n"));
    assert!(report.contains("File <test>, line 1, column 1 to line 1, column 3\n"));
    assert!(report.ends_with("$x\n^^\n"));
}

#[test]
fn division_by_zero_underlines_the_divisor() {
    let report = report_for("6 / 0");

    assert!(report.contains("Runtime Error: Division by zero.\n"));
    assert!(report.ends_with("6 / 0\n    ^\n"));
}

#[test]
fn syntax_reports_have_no_traceback() {
    let report = report_for("(2 + 3");

    assert!(report.starts_with("Invalid Syntax: Expected ')'"));
    assert!(!report.contains("Traceback"));
    assert!(report.ends_with("(2 + 3\n      ^\n"));
}

#[test]
fn illegal_characters_render_under_their_own_column() {
    let report = report_for("1 + ~");

    assert!(report.starts_with("Illegal Character: '~'\n"));
    assert!(report.contains("File <test>, line 1, column 5 to line 1, column 6\n"));
    assert!(report.ends_with("1 + ~\n    ^\n"));
}

#[test]
fn errors_on_later_lines_use_one_based_locations() {
    let report = report_for("1 /\n0");

    assert!(report.contains("  File <test>, line 2, in Program\n"));
    assert!(report.contains("File <test>, line 2, column 1 to line 2, column 2\n"));
    assert!(report.ends_with("0\n^\n"));
}

#[test]
fn one_line_display_carries_kind_and_message() {
    let source = Source::new("<test>", "$q");
    let error = sigil::run(&source).unwrap_err();

    assert_eq!(error.to_string(), "Runtime Error: Variable 'q' is not defined");

    let source = Source::new("<test>", "(1");
    let error = sigil::run(&source).unwrap_err();

    assert_eq!(error.to_string(),
               "Invalid Syntax: Expected ')', found end of input.");
}

#[test]
fn invalid_operations_name_both_operand_types() {
    // Numbers are the only values today, so this error cannot be produced
    // from source; the rendering seam still has to hold for future value
    // variants.
    let source = Source::new("<test>", "1 + 2");
    let value = sigil::run(&source).unwrap();
    let span = value.span();
    assert_eq!(span.start.column, 0);
    assert_eq!(span.end.column, 5);

    let error = Error::Runtime(RuntimeError::InvalidOperation {
        operation: "+".to_string(),
        left: value.type_name(),
        right: value.type_name(),
        span,
        trace: vec![TraceEntry { position: span.start,
                                 frame:    "Program".to_string(), }],
    });

    assert_eq!(error.to_string(),
               "Runtime Error: Cannot apply '+' to number and number.");

    let report = error.report(&source);
    assert!(report.starts_with("Traceback (most recent call last):\n"));
    assert!(report.ends_with("1 + 2\n^^^^^\n"));
}

#[test]
fn multi_line_spans_underline_every_affected_line() {
    let source = Source::new("<test>", "1 +\n2 + 3");
    let span = Span::new(Position::new(0, 0, 0), Position::new(9, 1, 5));
    let error = Error::Runtime(RuntimeError::InvalidOperation {
        operation: "+".to_string(),
        left: "number",
        right: "number",
        span,
        trace: vec![TraceEntry { position: span.start,
                                 frame:    "Program".to_string(), }],
    });

    let report = error.report(&source);
    assert!(report.ends_with("1 +\n^^^\n2 + 3\n^^^^^\n"));
}
