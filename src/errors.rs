//! Error types shared by the predicate library and the assertion engine.
//!
//! Three kinds of failure travel through [`AssertError`]: arity violations
//! (programmer misuse, always surfaced to the immediate caller), matcher
//! validation, and the explicit assertion-failure signal raised by `fail()`.
//! Group boundaries convert the last kind into a logged line; the first two
//! are never swallowed by the engine itself.

use miette::Diagnostic;
use thiserror::Error;

pub type AssertResult<T> = Result<T, AssertError>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum AssertError {
    /// A one-argument operation was called with its argument omitted.
    #[error("Argument missing at {operation}")]
    #[diagnostic(code(pramana::argument_missing))]
    MissingArgument { operation: &'static str },

    /// A multi-argument operation was called with a required slot omitted.
    #[error("Arguments missing at {operation}")]
    #[diagnostic(code(pramana::arguments_missing))]
    MissingArguments { operation: &'static str },

    /// `match`/`notMatch` were handed a non-regexp expectation.
    #[error("expected argument must be RegExp")]
    #[diagnostic(code(pramana::matcher_not_regexp))]
    MatcherNotRegexp,

    /// Constructor access on `null`/`undefined`; a caller error the
    /// predicate library deliberately does not guard against.
    #[error("Cannot read property 'constructor' of null or undefined at {operation}")]
    #[diagnostic(code(pramana::property_of_null))]
    PropertyOfNull { operation: &'static str },

    /// The explicit failure signal raised by `fail()`, caught at the
    /// nearest enclosing group boundary.
    #[error("{}", assertion_fail_text(.message))]
    #[diagnostic(code(pramana::assertion_fail))]
    AssertionFail { message: Option<String> },
}

fn assertion_fail_text(message: &Option<String>) -> String {
    match message {
        Some(m) => format!("AssertionFail: {}", m),
        None => "AssertionFail".to_string(),
    }
}

/// Coarse error category, mirroring the propagation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arity,
    Validation,
    Assertion,
}

impl AssertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. } | Self::MissingArguments { .. } => ErrorCategory::Arity,
            Self::MatcherNotRegexp | Self::PropertyOfNull { .. } => ErrorCategory::Validation,
            Self::AssertionFail { .. } => ErrorCategory::Assertion,
        }
    }
}
