//! Assertion engine behavior: reporting contract, message overrides,
//! coercion policies, pattern matching, `fail` and `throws`.

mod common;

use common::capture;
use pramana::value::{Thrown, Value};
use pramana::AssertError;

// ============================================================================
// REPORTING CONTRACT
// ============================================================================

#[test]
fn pass_lines_always_use_the_generated_description() {
    let (mut h, buffer) = capture();
    h.equal(1, 1, Some("custom message is ignored on pass"))
        .unwrap();
    let buf = buffer.borrow();
    assert_eq!(buf.texts(), vec!["Pass: equal(1 == 1)"]);
}

#[test]
fn fail_lines_prefer_the_caller_message() {
    let (mut h, buffer) = capture();
    h.equal(1, 2, Some("boom")).unwrap();
    h.equal(1, 2, None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(buf.texts(), vec!["Fail: boom", "Fail: equal(1 == 2)"]);
}

// ============================================================================
// EQUALITY FAMILIES
// ============================================================================

#[test]
fn loose_equal_coerces_and_strict_does_not() {
    let (mut h, buffer) = capture();
    h.equal(1, "1", None).unwrap();
    h.strict_equal(1, "1", None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec!["Pass: equal(1 == 1)", "Fail: strictEqual(1 === 1)"]
    );
}

#[test]
fn null_and_undefined_are_loosely_but_not_strictly_equal() {
    let (mut h, buffer) = capture();
    h.equal(Value::Null, Value::Undefined, None).unwrap();
    h.strict_equal(Value::Null, Value::Undefined, None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec![
            "Pass: equal(null == undefined)",
            "Fail: strictEqual(null === undefined)"
        ]
    );
}

#[test]
fn not_equal_and_not_strict_equal() {
    let (mut h, buffer) = capture();
    h.not_equal(1, 2, None).unwrap();
    h.not_strict_equal(1, "1", None).unwrap();
    h.not_equal(1, "1", None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec![
            "Pass: notEqual(1 != 2)",
            "Pass: notStrictEqual(1 !== 1)",
            "Fail: notEqual(1 != 1)"
        ]
    );
}

#[test]
fn strict_equality_on_compound_values_is_reference_identity() {
    let (mut h, buffer) = capture();
    let list = Value::list([1, 2, 3]);
    let alias = list.clone();
    let rebuilt = Value::list([1, 2, 3]);
    h.strict_equal(&list, &alias, None).unwrap();
    h.strict_equal(&list, &rebuilt, None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec![
            "Pass: strictEqual(1,2,3 === 1,2,3)",
            "Fail: strictEqual(1,2,3 === 1,2,3)"
        ]
    );
}

// ============================================================================
// RELATIONAL FAMILY
// ============================================================================

#[test]
fn numeric_ordering() {
    let (mut h, buffer) = capture();
    h.greater_than(2, 1, None).unwrap();
    h.greater_than_or_equal(42, 42, None).unwrap();
    h.less_than(3, 4, None).unwrap();
    h.less_than(4, 3, None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec![
            "Pass: greaterThan(2 > 1)",
            "Pass: greaterThanOrEqual(42 >= 42)",
            "Pass: lessThan(3 < 4)",
            "Fail: lessThan(4 < 3)"
        ]
    );
}

#[test]
fn string_ordering_is_lexicographic() {
    let (mut h, buffer) = capture();
    h.less_than_or_equal("A", "B", None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(buf.texts(), vec!["Pass: lessThanOrEqual(A <= B)"]);
}

#[test]
fn nan_passes_every_relational_assertion() {
    // the assertions fail on the negated operator, and no relational
    // operator holds against NaN
    let (mut h, buffer) = capture();
    h.greater_than(f64::NAN, 5, None).unwrap();
    h.less_than(f64::NAN, 5, None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec!["Pass: greaterThan(NaN > 5)", "Pass: lessThan(NaN < 5)"]
    );
}

#[test]
fn numeric_looking_strings_still_compare_lexicographically() {
    let (mut h, buffer) = capture();
    h.greater_than("10", "9", None).unwrap();
    let buf = buffer.borrow();
    // string/string stays lexicographic: "10" < "9"
    assert_eq!(buf.texts(), vec!["Fail: greaterThan(10 > 9)"]);
}

// ============================================================================
// TRUTHINESS
// ============================================================================

#[test]
fn ok_and_not_ok() {
    let (mut h, buffer) = capture();
    h.ok(true, None).unwrap();
    h.ok(0, None).unwrap();
    h.ok("", Some("empty string is falsy")).unwrap();
    h.not_ok(false, None).unwrap();
    h.not_ok(Value::list(Vec::<Value>::new()), None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec![
            "Pass: ok(true)",
            "Fail: ok(0)",
            "Fail: empty string is falsy",
            "Pass: notOk(false)",
            // an empty list is still truthy
            "Fail: notOk()"
        ]
    );
}

// ============================================================================
// PATTERN MATCHING
// ============================================================================

#[test]
fn match_against_a_regular_expression() {
    let (mut h, buffer) = capture();
    let re = Value::regexp("pass", "").unwrap();
    h.matches("I will pass", &re, None).unwrap();
    let miss = Value::regexp("different", "").unwrap();
    h.matches("I will pass", &miss, None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec![
            "Pass: The input 'I will pass' match the regular expression /pass/",
            "Fail: The input 'I will pass' did not match the regular expression /different/"
        ]
    );
}

#[test]
fn match_requires_a_regexp_expectation() {
    let (mut h, buffer) = capture();
    let err = h.matches("x", "not-a-regexp", None).unwrap_err();
    assert_eq!(err, AssertError::MatcherNotRegexp);
    assert_eq!(err.to_string(), "expected argument must be RegExp");
    // the validation error fires before anything is reported
    assert!(buffer.borrow().texts().is_empty());
}

#[test]
fn not_match_and_its_alias() {
    let (mut h, buffer) = capture();
    let re = Value::regexp("different", "").unwrap();
    h.not_match("I will pass", &re, None).unwrap();
    h.does_not_match("I will pass", &re, None).unwrap();
    let hit = Value::regexp("pass", "").unwrap();
    h.not_match("I will pass", &hit, None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec![
            "Pass: The input 'I will pass' did not match the regular expression /different/",
            "Pass: The input 'I will pass' did not match the regular expression /different/",
            "Fail: The input 'I will pass' did match the regular expression /pass/"
        ]
    );
}

#[test]
fn match_flags_are_honored() {
    let (mut h, buffer) = capture();
    let re = Value::regexp("PASS", "i").unwrap();
    h.matches("I will pass", &re, None).unwrap();
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec!["Pass: The input 'I will pass' match the regular expression /PASS/i"]
    );
}

// ============================================================================
// FAIL AND THROWS
// ============================================================================

#[test]
fn fail_reports_then_raises() {
    let (mut h, buffer) = capture();
    let err = h.fail(Some("x")).unwrap_err();
    assert_eq!(err.to_string(), "AssertionFail: x");
    let err = h.fail(None).unwrap_err();
    assert_eq!(err.to_string(), "AssertionFail");
    let buf = buffer.borrow();
    assert_eq!(buf.texts(), vec!["Fail: x", "Fail"]);
}

#[test]
fn throws_with_a_matching_message() {
    let (mut h, buffer) = capture();
    let thrower = Value::function("thrower", |_| {
        Err(Thrown(Value::error("TypeError", "Wrong value")))
    });
    assert!(h.throws(&thrower, "Wrong value", None).unwrap());
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec!["Pass: throws get the expected error TypeError(Wrong value)"]
    );
}

#[test]
fn throws_on_a_function_that_does_not_throw() {
    let (mut h, buffer) = capture();
    let calm = Value::function("calm", |_| Ok(Value::Undefined));
    assert!(!h.throws(&calm, "Wrong value", None).unwrap());
    let buf = buffer.borrow();
    assert_eq!(buf.texts(), vec!["Fail: throws get no error"]);
}

#[test]
fn throws_with_a_regexp_expectation() {
    let (mut h, buffer) = capture();
    let thrower = Value::function("thrower", |_| {
        Err(Thrown(Value::error("Error", "something went wrong")))
    });
    let re = Value::regexp("went wrong", "").unwrap();
    assert!(h.throws(&thrower, &re, None).unwrap());
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec!["Pass: throws get the expected error Error(something went wrong)"]
    );
}

#[test]
fn throws_with_an_error_expectation_matches_by_identity() {
    let (mut h, _buffer) = capture();
    let err = Value::error("Error", "m");
    let thrown = err.clone();
    let thrower = Value::function("thrower", move |_| Err(Thrown(thrown.clone())));
    assert!(h.throws(&thrower, &err, None).unwrap());
    // an equal-looking but distinct error does not match
    let lookalike = Value::error("Error", "m");
    assert!(!h.throws(&thrower, &lookalike, None).unwrap());
}

#[test]
fn throws_with_a_wrong_expectation_reports_the_unexpected_error() {
    let (mut h, buffer) = capture();
    let thrower = Value::function("thrower", |_| {
        Err(Thrown(Value::error("TypeError", "Wrong value")))
    });
    assert!(!h.throws(&thrower, "Other value", None).unwrap());
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec!["Fail: throws get the unexpected error TypeError(Wrong value)"]
    );
}

#[test]
fn throws_with_a_falsy_expectation_accepts_any_throw() {
    let (mut h, buffer) = capture();
    let thrower = Value::function("thrower", |_| {
        Err(Thrown(Value::error("RangeError", "out of range")))
    });
    assert!(h.throws(&thrower, Value::Undefined, None).unwrap());
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec!["Pass: throws get the expected error RangeError(out of range)"]
    );
}

#[test]
fn throws_on_a_non_callable_target_is_silent() {
    let (mut h, buffer) = capture();
    assert!(!h.throws(&Value::from(5), "x", None).unwrap());
    assert!(buffer.borrow().texts().is_empty());
}

#[test]
fn a_thrown_non_error_value_never_matches_an_expectation() {
    let (mut h, buffer) = capture();
    let thrower = Value::function("thrower", |_| Err(Thrown(Value::from("boom"))));
    assert!(!h.throws(&thrower, "boom", None).unwrap());
    let buf = buffer.borrow();
    assert_eq!(
        buf.texts(),
        vec!["Fail: throws get the unexpected error undefined(undefined)"]
    );
}
