use std::fmt;

use crate::domain::errors::ValidationErrors;

/// Self-validating domain record.
///
/// The `Display` form is what failure messages print for the record itself,
/// so implement it with whatever identifies the record to a test author.
/// Other assertion arguments render through `Debug` instead.
pub trait Validate: fmt::Display {
    /// Reruns every check, replacing the previously recorded error set, and
    /// reports whether the record passed.
    fn validate(&mut self) -> bool;

    /// Errors recorded by the most recent [`Validate::validate`] call.
    fn errors(&self) -> &ValidationErrors;
}
