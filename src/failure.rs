use serde::Serialize;
use thiserror::Error;

use crate::engine::message::Message;

/// Receives assertion failures.
///
/// Messages arrive unrendered; a sink that drops them never pays the
/// formatting cost.
pub trait FailureSink {
    fn fail(&mut self, message: Message<'_>);
}

/// Renders the message and panics, aborting the surrounding test.
///
/// This is the stock libtest integration: the first failure unwinds, so
/// later checks of the same call do not run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicSink;

impl FailureSink for PanicSink {
    #[track_caller]
    fn fail(&mut self, message: Message<'_>) {
        panic!("{message}");
    }
}

/// Records every failure so one call can surface several mismatches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureLog {
    failures: Vec<String>,
}

impl FailureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered failure messages in arrival order.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// `Ok` when nothing failed, the full report otherwise.
    pub fn into_result(self) -> Result<(), CheckFailure> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(CheckFailure {
                failures: self.failures,
            })
        }
    }
}

impl FailureSink for FailureLog {
    fn fail(&mut self, message: Message<'_>) {
        self.failures.push(message.render());
    }
}

/// One or more recorded assertion failures.
#[derive(Debug, Clone, Error, Serialize, PartialEq, Eq)]
#[error("{}", .failures.join("\n"))]
pub struct CheckFailure {
    pub failures: Vec<String>,
}
