use sigil::{
    error::{Error, ParseError, RuntimeError},
    interpreter::value::core::Value,
    source::Source,
};

fn eval(text: &str) -> Result<Value, Error> {
    sigil::run(&Source::new("<test>", text))
}

fn assert_number(text: &str, expected: f64) {
    match eval(text) {
        Ok(Value::Number(number)) => {
            assert_eq!(number.value, expected, "wrong result for {text:?}");
        },
        Err(error) => panic!("Script failed: {text:?}: {error}"),
    }
}

fn assert_failure(text: &str) {
    if eval(text).is_ok() {
        panic!("Script succeeded but was expected to fail: {text:?}");
    }
}

#[test]
fn numeric_literals() {
    assert_number("42", 42.0);
    assert_number("3.14", 3.14);
    assert_number(".5", 0.5);
    assert_number("1.", 1.0);
    assert_number("007", 7.0);
}

#[test]
fn basic_arithmetic() {
    assert_number("1 + 2", 3.0);
    assert_number("8 - 5", 3.0);
    assert_number("7 * 9", 63.0);
    assert_number("6 / 3", 2.0);
    assert_number("10 / 4", 2.5);
}

#[test]
fn precedence_and_associativity() {
    assert_number("2 + 3 * 4", 14.0);
    assert_number("(2 + 3) * 4", 20.0);
    assert_number("10 - 2 - 3", 5.0);
    assert_number("20 / 2 / 5", 2.0);
    assert_number("2 + 10 / 2 - 3", 4.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_number("2 ^ 3 ^ 2", 512.0);
    assert_number("(2 ^ 3) ^ 2", 64.0);
    assert_number("2 ^ -1", 0.5);
}

#[test]
fn unary_operators() {
    assert_number("-5", -5.0);
    assert_number("--5", 5.0);
    assert_number("+5", 5.0);
    assert_number("-+5", -5.0);
    assert_number("5 * -2", -10.0);
    // The sign binds looser than '^', so this is -(2 ^ 2).
    assert_number("-2 ^ 2", -4.0);
}

#[test]
fn assignment_is_an_expression() {
    assert_number("$x = 5", 5.0);
    assert_number("($x = 5) + $x", 10.0);
    assert_number("$x = $y = 3", 3.0);
    assert_number("($a = 2) ^ ($a + 1)", 8.0);
}

#[test]
fn keywords_are_valid_variable_names() {
    assert_number("$if = 3", 3.0);
    assert_number("($unless = 2) + $unless", 4.0);
    assert_failure("if");
}

#[test]
fn preloaded_constants() {
    assert_number("true", 1.0);
    assert_number("false", 0.0);
    assert_number("true + true", 2.0);
    // Shadowing a global only affects the current evaluation.
    assert_number("($true = 5) + $true", 10.0);
    assert_number("true", 1.0);
}

#[test]
fn division_by_zero_is_a_dedicated_error() {
    for text in ["6 / 0", "0 / 0", "1 / (2 - 2)"] {
        match eval(text) {
            Err(Error::Runtime(RuntimeError::DivisionByZero { .. })) => {},
            other => panic!("expected a division-by-zero error for {text:?}, got {other:?}"),
        }
    }
}

#[test]
fn undefined_variable_points_at_the_access() {
    match eval("$x") {
        Err(Error::Runtime(RuntimeError::UndefinedVariable { name, span, .. })) => {
            assert_eq!(name, "x");
            assert_eq!(span.start.column, 0);
            assert_eq!(span.end.column, 2);
        },
        other => panic!("expected an undefined-variable error, got {other:?}"),
    }
}

#[test]
fn missing_closing_paren_is_reported_at_end_of_input() {
    match eval("(2 + 3") {
        Err(Error::Parse(ParseError::ExpectedClosingParen { span, .. })) => {
            // The unconsumed token is the zero-width end-of-input marker.
            assert_eq!(span.start.column, 6);
            assert_eq!(span.end.column, 6);
        },
        other => panic!("expected a missing-paren error, got {other:?}"),
    }
}

#[test]
fn illegal_character_has_a_single_column_span() {
    match eval("  @") {
        Err(Error::Parse(ParseError::IllegalCharacter { character, span })) => {
            assert_eq!(character, '@');
            assert_eq!(span.start.column, 2);
            assert_eq!(span.end.column, 3);
        },
        other => panic!("expected an illegal-character error, got {other:?}"),
    }
}

#[test]
fn two_adjacent_literals_are_rejected_by_the_parser() {
    // `1.2.3` lexes as the literals `1.2` and `.3`; with no operator
    // between them the parser rejects the program.
    match eval("1.2.3") {
        Err(Error::Parse(ParseError::ExpectedOperator { span, .. })) => {
            assert_eq!(span.start.column, 3);
        },
        other => panic!("expected a trailing-token error, got {other:?}"),
    }
}

#[test]
fn trailing_tokens_after_an_expression() {
    assert!(matches!(eval("x = 5"),
                     Err(Error::Parse(ParseError::ExpectedOperator { .. }))));
    assert!(matches!(eval("1 2"),
                     Err(Error::Parse(ParseError::ExpectedOperator { .. }))));
}

#[test]
fn sigil_requires_a_name() {
    assert!(matches!(eval("$ 5"),
                     Err(Error::Parse(ParseError::ExpectedIdentifier { .. }))));
    assert!(matches!(eval("2 + $"),
                     Err(Error::Parse(ParseError::ExpectedIdentifier { .. }))));
}

#[test]
fn incomplete_expressions_fail() {
    assert_failure("");
    assert_failure("2 +");
    assert_failure("* 3");
    assert_failure("$x =");
}

#[test]
fn committed_assignments_report_their_value_error() {
    // Once `$x =` is seen the parser stays on the assignment form, so the
    // failure comes from the value expression, not from reparsing `$x`.
    assert!(matches!(eval("$x = )"),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn line_breaks_are_whitespace() {
    assert_number("1 +\n2", 3.0);

    match eval("1 +\n@") {
        Err(Error::Parse(ParseError::IllegalCharacter { span, .. })) => {
            assert_eq!(span.start.line, 1);
            assert_eq!(span.start.column, 0);
        },
        other => panic!("expected an illegal-character error, got {other:?}"),
    }
}

#[test]
fn integral_results_display_without_a_fraction() {
    assert_eq!(eval("6 / 3").unwrap().to_string(), "2");
    assert_eq!(eval("10 / 4").unwrap().to_string(), "2.5");
    assert_eq!(eval("-2 ^ 2").unwrap().to_string(), "-4");
}
