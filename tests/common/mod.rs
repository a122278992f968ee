//! Shared helpers for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use pramana::{BufferSink, Harness, SharedLog};

/// A harness wired to a readable buffer sink.
pub fn capture() -> (Harness, Rc<RefCell<BufferSink>>) {
    let buffer = Rc::new(RefCell::new(BufferSink::new()));
    let harness = Harness::with_shared(SharedLog(buffer.clone()));
    (harness, buffer)
}
