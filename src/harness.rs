//! The assertion engine.
//!
//! A [`Harness`] owns the shared logging sink and the two classification
//! fields, and exposes every assertion operation as a method. Each operation
//! evaluates its condition and routes the outcome to the pass/fail
//! reporters: a pass always logs the generated description; a fail logs the
//! caller-supplied message verbatim when one was given, otherwise the
//! generated description. Comparison assertions never fail the calling
//! code; only `fail()` raises the assertion-failure signal, and `throws`
//! reports without raising.

use crate::compare::{deep_eq, ge, gt, le, lt, loose_eq, strict_eq};
use crate::errors::{AssertError, AssertResult};
use crate::json;
use crate::output::{LogSink, SharedLog, StdoutSink};
use crate::predicate;
use crate::value::{Thrown, Value};

/// The assertion and grouping engine. One instance per run; state is the
/// sink handle plus the two advisory classification strings.
pub struct Harness {
    pub(crate) log: SharedLog,
    pub(crate) runtime_category: String,
    pub(crate) risk_level: String,
}

impl Harness {
    pub fn new<S: LogSink + 'static>(sink: S) -> Self {
        Self::with_shared(SharedLog::new(sink))
    }

    pub fn with_shared(log: SharedLog) -> Self {
        Self {
            log,
            runtime_category: crate::classify::RUNTIME_CATEGORY_SHORT.to_string(),
            risk_level: crate::classify::RISK_LEVEL_HARMLESS.to_string(),
        }
    }

    /// The sink handle, for hosts that want to write through the same
    /// channel the reporters use.
    pub fn log(&self) -> &SharedLog {
        &self.log
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(StdoutSink::new())
    }
}

// ============================================================================
// PASS/FAIL REPORTERS
// ============================================================================

impl Harness {
    pub(crate) fn pass_out(&self, text: Option<&str>) {
        match text {
            Some(t) => self.log.log_line(&format!("Pass: {}", t)),
            None => self.log.log_line("Pass"),
        }
    }

    pub(crate) fn fail_out(&self, text: Option<&str>) {
        match text {
            Some(t) => self.log.log_line(&format!("Fail: {}", t)),
            None => self.log.log_line("Fail"),
        }
    }

    fn report(&self, held: bool, message: Option<&str>, describe: impl FnOnce() -> String) {
        if held {
            self.pass_out(Some(&describe()));
        } else {
            match message {
                Some(m) => self.fail_out(Some(m)),
                None => self.fail_out(Some(&describe())),
            }
        }
    }
}

// ============================================================================
// EQUALITY ASSERTIONS
// ============================================================================

impl Harness {
    /// Loose equality between `actual` and `expected`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pramana::{BufferSink, Harness};
    /// let mut h = Harness::new(BufferSink::new());
    /// h.equal(1, "1", None).unwrap();
    /// ```
    pub fn equal(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        self.report(loose_eq(&actual, &expected), message, || {
            format!("equal({} == {})", actual, expected)
        });
        Ok(())
    }

    pub fn not_equal(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        self.report(!loose_eq(&actual, &expected), message, || {
            format!("notEqual({} != {})", actual, expected)
        });
        Ok(())
    }

    /// Strict equality: same variant and value for primitives, reference
    /// identity for compound values.
    pub fn strict_equal(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        self.report(strict_eq(&actual, &expected), message, || {
            format!("strictEqual({} === {})", actual, expected)
        });
        Ok(())
    }

    pub fn not_strict_equal(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        self.report(!strict_eq(&actual, &expected), message, || {
            format!("notStrictEqual({} !== {})", actual, expected)
        });
        Ok(())
    }

    /// Structural equality; descriptions render both sides as JSON.
    pub fn deep_equal(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        self.report(deep_eq(&actual, &expected), message, || {
            format!(
                "deepEqual({} == {})",
                json::stringify(&actual),
                json::stringify(&expected)
            )
        });
        Ok(())
    }

    pub fn not_deep_equal(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        self.report(!deep_eq(&actual, &expected), message, || {
            format!(
                "notDeepEqual({} != {})",
                json::stringify(&actual),
                json::stringify(&expected)
            )
        });
        Ok(())
    }
}

// ============================================================================
// RELATIONAL ASSERTIONS
// ============================================================================
//
// Each relational assertion fails on the negated operator, so a NaN operand
// makes every relational comparison false and the assertion passes.

impl Harness {
    pub fn greater_than(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        self.report(!le(&actual, &expected), message, || {
            format!("greaterThan({} > {})", actual, expected)
        });
        Ok(())
    }

    pub fn greater_than_or_equal(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        self.report(!lt(&actual, &expected), message, || {
            format!("greaterThanOrEqual({} >= {})", actual, expected)
        });
        Ok(())
    }

    pub fn less_than(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        self.report(!ge(&actual, &expected), message, || {
            format!("lessThan({} < {})", actual, expected)
        });
        Ok(())
    }

    pub fn less_than_or_equal(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        self.report(!gt(&actual, &expected), message, || {
            format!("lessThanOrEqual({} <= {})", actual, expected)
        });
        Ok(())
    }
}

// ============================================================================
// TRUTHINESS ASSERTIONS
// ============================================================================

impl Harness {
    pub fn ok(&mut self, value: impl Into<Value>, message: Option<&str>) -> AssertResult<()> {
        let value = value.into();
        self.report(value.is_truthy(), message, || format!("ok({})", value));
        Ok(())
    }

    pub fn not_ok(&mut self, value: impl Into<Value>, message: Option<&str>) -> AssertResult<()> {
        let value = value.into();
        self.report(!value.is_truthy(), message, || format!("notOk({})", value));
        Ok(())
    }
}

// ============================================================================
// PATTERN MATCHING
// ============================================================================

impl Harness {
    /// Expects `actual` to match the regular expression `expected`. A
    /// non-regexp expectation is a validation error raised before any
    /// matching runs.
    pub fn matches(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        let re = self.require_regexp(&expected)?;
        if re.test(&actual.to_string()) {
            self.pass_out(Some(&format!(
                "The input '{}' match the regular expression {}",
                actual, expected
            )));
        } else {
            match message {
                Some(m) => self.fail_out(Some(m)),
                None => self.fail_out(Some(&format!(
                    "The input '{}' did not match the regular expression {}",
                    actual, expected
                ))),
            }
        }
        Ok(())
    }

    /// Expects `actual` not to match the regular expression `expected`.
    pub fn not_match(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        let (actual, expected) = (actual.into(), expected.into());
        let re = self.require_regexp(&expected)?;
        if re.test(&actual.to_string()) {
            match message {
                Some(m) => self.fail_out(Some(m)),
                None => self.fail_out(Some(&format!(
                    "The input '{}' did match the regular expression {}",
                    actual, expected
                ))),
            }
        } else {
            self.pass_out(Some(&format!(
                "The input '{}' did not match the regular expression {}",
                actual, expected
            )));
        }
        Ok(())
    }

    /// Pure forwarding alias for [`Harness::not_match`].
    pub fn does_not_match(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<()> {
        self.not_match(actual, expected, message)
    }

    fn require_regexp<'a>(
        &self,
        expected: &'a Value,
    ) -> AssertResult<&'a crate::value::RegexpData> {
        if !predicate::is_regexp(Some(expected))? {
            return Err(AssertError::MatcherNotRegexp);
        }
        // the predicate accepts anything classed "RegExp"; only a real
        // regexp value carries a pattern to test with
        match expected {
            Value::Regexp(re) => Ok(re.as_ref()),
            _ => Err(AssertError::MatcherNotRegexp),
        }
    }
}

// ============================================================================
// FAILURE AND THROWS
// ============================================================================

impl Harness {
    /// Reports a failure and raises the assertion-failure signal, which the
    /// nearest enclosing group boundary catches and logs.
    pub fn fail(&mut self, message: Option<&str>) -> AssertResult<()> {
        self.fail_out(message);
        Err(AssertError::AssertionFail {
            message: message.map(str::to_string),
        })
    }

    /// Expects the function `target` to throw. When `expected` is truthy the
    /// thrown error must match it: a string compares against the error
    /// message, a regexp tests the message, an error matches by identity.
    /// A non-callable `target` yields `false` with nothing invoked and
    /// nothing reported. Returns whether the expected error was thrown.
    pub fn throws(
        &mut self,
        target: &Value,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult<bool> {
        let expected = expected.into();
        let Value::Function(f) = target else {
            return Ok(false);
        };
        let mut thrown_value: Option<Value> = None;
        let mut thrown = false;
        if let Err(Thrown(v)) = f.call(&[]) {
            thrown = true;
            thrown_value = Some(v);
        }
        if thrown && expected.is_truthy() {
            thrown = matches!(&thrown_value, Some(v) if error_matches(v, &expected));
        }
        if thrown {
            if let Some(v) = &thrown_value {
                self.pass_out(Some(&format!(
                    "throws get the expected error {}",
                    error_label(v)
                )));
            }
        } else {
            match message {
                Some(m) => self.fail_out(Some(m)),
                None => match &thrown_value {
                    Some(v) => self.fail_out(Some(&format!(
                        "throws get the unexpected error {}",
                        error_label(v)
                    ))),
                    None => self.fail_out(Some("throws get no error")),
                },
            }
        }
        Ok(thrown)
    }
}

fn error_matches(actual: &Value, expected: &Value) -> bool {
    let Value::Error(err) = actual else {
        return false;
    };
    match expected {
        Value::String(s) => err.message() == s,
        Value::Regexp(re) => re.test(err.message()),
        Value::Error(_) => strict_eq(actual, expected),
        _ => false,
    }
}

fn error_label(thrown: &Value) -> String {
    match thrown {
        Value::Error(e) => format!("{}({})", e.name(), e.message()),
        // a thrown non-error has no name or message to show
        _ => "undefined(undefined)".to_string(),
    }
}
