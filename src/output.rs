//! Handles all host-facing output for the engine.
//!
//! The engine imposes no format beyond the literal lines it composes; a
//! [`LogSink`] is any three-channel text receiver the host supplies. Stock
//! sinks cover the common hosts: a colorizing stdout/stderr sink, a string
//! buffer for capture in tests, a null sink, and a counting wrapper that
//! tallies reporter lines as they stream through.

use std::cell::RefCell;
use std::rc::Rc;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Three-channel text output supplied by the host.
pub trait LogSink {
    fn log_line(&mut self, text: &str);
    fn warn_line(&mut self, text: &str);
    fn error_line(&mut self, text: &str);
}

/// Ergonomic, shareable handle over a mutable sink.
#[derive(Clone)]
pub struct SharedLog(pub Rc<RefCell<dyn LogSink>>);

impl SharedLog {
    /// Create a new SharedLog from any LogSink.
    pub fn new<T: LogSink + 'static>(sink: T) -> Self {
        SharedLog(Rc::new(RefCell::new(sink)))
    }

    pub fn log_line(&self, text: &str) {
        self.0.borrow_mut().log_line(text);
    }

    pub fn warn_line(&self, text: &str) {
        self.0.borrow_mut().warn_line(text);
    }

    pub fn error_line(&self, text: &str) {
        self.0.borrow_mut().error_line(text);
    }
}

// ============================================================================
// STOCK SINKS
// ============================================================================

/// Writes log lines to stdout and warn/error lines to stderr, colorized
/// yellow/red when stderr is a terminal.
pub struct StdoutSink {
    use_colors: bool,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }

    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    fn stderr_colored(&self, text: &str, color: Color) {
        let mut stderr = StandardStream::stderr(if self.use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        });
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(color)));
        eprintln!("{}", text);
        let _ = stderr.reset();
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StdoutSink {
    fn log_line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warn_line(&mut self, text: &str) {
        self.stderr_colored(text, Color::Yellow);
    }

    fn error_line(&mut self, text: &str) {
        self.stderr_colored(text, Color::Red);
    }
}

/// Output channel a buffered line arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
}

/// BufferSink: collects lines for testing or programmatic capture.
#[derive(Default)]
pub struct BufferSink {
    lines: Vec<(Level, String)>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(Level, String)] {
        &self.lines
    }

    /// All line texts in arrival order, channel-agnostic.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, text)| text.as_str()).collect()
    }

    /// All lines joined with newlines.
    pub fn text(&self) -> String {
        self.texts().join("\n")
    }
}

impl LogSink for BufferSink {
    fn log_line(&mut self, text: &str) {
        self.lines.push((Level::Log, text.to_string()));
    }

    fn warn_line(&mut self, text: &str) {
        self.lines.push((Level::Warn, text.to_string()));
    }

    fn error_line(&mut self, text: &str) {
        self.lines.push((Level::Error, text.to_string()));
    }
}

/// A null sink for running without output.
pub struct NullSink;

impl LogSink for NullSink {
    fn log_line(&mut self, _text: &str) {}
    fn warn_line(&mut self, _text: &str) {}
    fn error_line(&mut self, _text: &str) {}
}

// ============================================================================
// SUMMARY BY LOG-STREAM INSPECTION
// ============================================================================

/// Wraps a sink and tallies reporter lines as they stream through. The
/// engine itself produces no summary object; this is the collaborator that
/// builds one by reading the log stream.
pub struct CountingSink<S> {
    inner: S,
    passed: usize,
    failed: usize,
    errored: usize,
}

impl<S> CountingSink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            passed: 0,
            failed: 0,
            errored: 0,
        }
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn errored(&self) -> usize {
        self.errored
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.errored > 0
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: LogSink> LogSink for CountingSink<S> {
    fn log_line(&mut self, text: &str) {
        if text == "Pass" || text.starts_with("Pass: ") {
            self.passed += 1;
        } else if text == "Fail" || text.starts_with("Fail: ") {
            self.failed += 1;
        }
        self.inner.log_line(text);
    }

    fn warn_line(&mut self, text: &str) {
        self.inner.warn_line(text);
    }

    fn error_line(&mut self, text: &str) {
        self.errored += 1;
        self.inner.error_line(text);
    }
}
