//! Pramana: a lightweight, synchronous assertion and test-grouping engine
//! for embedding in scripting hosts.
//!
//! The engine has three layers: a predicate library of type-classification
//! checks over a dynamic [`Value`](value::Value) model, an assertion engine
//! with a uniform pass/fail reporting contract (including recursive deep
//! equality), and nestable `describe`/`test` grouping with data tables,
//! skip variants, and two advisory classification fields. All output flows
//! through a host-supplied [`LogSink`](output::LogSink); a failing block
//! never aborts the run.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use pramana::{BufferSink, Harness, SharedLog};
//!
//! let buffer = Rc::new(RefCell::new(BufferSink::new()));
//! let mut h = Harness::with_shared(SharedLog(buffer.clone()));
//!
//! h.describe("strings", |h| {
//!     h.test("concatenation", |h| {
//!         h.equal(format!("{}{}", "ab", "cd"), "abcd", None)?;
//!         h.ok(true, None)
//!     });
//!     Ok(())
//! });
//!
//! assert!(buffer.borrow().text().contains("Pass: ok(true)"));
//! ```

pub mod classify;
pub mod compare;
pub mod errors;
mod group;
pub mod harness;
pub mod json;
pub mod output;
pub mod predicate;
pub mod value;

pub use crate::errors::{AssertError, AssertResult, ErrorCategory};
pub use crate::harness::Harness;
pub use crate::output::{BufferSink, CountingSink, Level, LogSink, NullSink, SharedLog, StdoutSink};
pub use crate::value::{FunctionValue, Thrown, Value};
