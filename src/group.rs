//! Grouping primitives: `describe`/`test` nesting, data tables, and skip
//! variants.
//!
//! A body is any closure over the harness returning [`AssertResult`]. The
//! group boundary converts an `Err` into one logged error line and returns
//! normally, so sibling and parent blocks always keep running and a
//! `describe` always closes its marker. Data tables run their rows in array
//! order inside a single boundary: the first failing row stops the rest,
//! exactly as a throw inside the row loop would.

use crate::errors::AssertResult;
use crate::harness::Harness;
use crate::value::Value;

impl Harness {
    fn run_boundary(&mut self, body: impl FnOnce(&mut Harness) -> AssertResult<()>) {
        if let Err(err) = body(self) {
            self.log.error_line(&err.to_string());
        }
    }

    /// Creates a block that groups several related tests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pramana::{BufferSink, Harness};
    /// let mut h = Harness::new(BufferSink::new());
    /// h.describe("arithmetic", |h| {
    ///     h.test("addition", |h| h.equal(1 + 1, 2, None));
    ///     Ok(())
    /// });
    /// ```
    pub fn describe(&mut self, name: &str, body: impl FnOnce(&mut Harness) -> AssertResult<()>) {
        self.log.log_line(&format!("> {}", name));
        self.run_boundary(body);
        self.log.log_line(&format!("< {}", name));
    }

    /// Like [`Harness::describe`], but invokes the body once per table row,
    /// spreading the row's values as the body's arguments.
    pub fn describe_each<F>(&mut self, table: &[Vec<Value>], name: &str, mut body: F)
    where
        F: FnMut(&mut Harness, &[Value]) -> AssertResult<()>,
    {
        self.log.log_line(&format!("> {}", name));
        let mut outcome = Ok(());
        for row in table {
            outcome = body(self, row);
            if outcome.is_err() {
                break;
            }
        }
        if let Err(err) = outcome {
            self.log.error_line(&err.to_string());
        }
        self.log.log_line(&format!("< {}", name));
    }

    /// Skips the block: logs a single marker, never invokes the body.
    pub fn describe_skip(
        &mut self,
        name: &str,
        _body: impl FnOnce(&mut Harness) -> AssertResult<()>,
    ) {
        self.log.log_line(&format!("Skipped: {}", name));
    }

    pub fn describe_each_skip<F>(&mut self, _table: &[Vec<Value>], name: &str, _body: F)
    where
        F: FnMut(&mut Harness, &[Value]) -> AssertResult<()>,
    {
        self.log.log_line(&format!("Skipped: {}", name));
    }

    /// Creates a test block: a single name line, no closing marker.
    pub fn test(&mut self, name: &str, body: impl FnOnce(&mut Harness) -> AssertResult<()>) {
        self.log.log_line(name);
        self.run_boundary(body);
    }

    /// Data-table variant of [`Harness::test`]; the row loop is wrapped in
    /// an open/close marker pair.
    pub fn test_each<F>(&mut self, table: &[Vec<Value>], name: &str, mut body: F)
    where
        F: FnMut(&mut Harness, &[Value]) -> AssertResult<()>,
    {
        self.log.log_line(&format!("> {}", name));
        let mut outcome = Ok(());
        for row in table {
            outcome = body(self, row);
            if outcome.is_err() {
                break;
            }
        }
        if let Err(err) = outcome {
            self.log.error_line(&err.to_string());
        }
        self.log.log_line(&format!("< {}", name));
    }

    pub fn test_skip(&mut self, name: &str, _body: impl FnOnce(&mut Harness) -> AssertResult<()>) {
        self.log.log_line(&format!("Skipped: {}", name));
    }

    pub fn test_each_skip<F>(&mut self, _table: &[Vec<Value>], name: &str, _body: F)
    where
        F: FnMut(&mut Harness, &[Value]) -> AssertResult<()>,
    {
        self.log.log_line(&format!("Skipped: {}", name));
    }

    /// Marks work that still needs doing.
    pub fn test_todo(&mut self, text: &str) {
        self.log.log_line(&format!("Todo: {}", text));
    }
}
