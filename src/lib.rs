//! Assertion helpers layered over the standard test macros.
//!
//! The aim is more specific failure messages and richer checks than a bare
//! `assert!` gives: collection membership, pattern occurrence counts, and
//! validity checks against self-validating records.
//!
//! Everything is driven through a [`FailureSink`]. Importing [`Assertions`]
//! gives any sink the five assertion methods; [`PanicSink`] is the stock
//! libtest integration and [`FailureLog`] collects failures for inspection.
//!
//! ```
//! use assertq::{Assertions, PanicSink};
//!
//! let mut t = PanicSink;
//! t.assert_include(&[1, 2, 3][..], &2, "");
//! t.assert_not_include("haystack", "needle", "");
//! ```

pub mod domain;
pub mod engine;
pub mod failure;

pub use domain::errors::ValidationErrors;
pub use domain::record::Validate;
pub use engine::checks::{Assertions, Contains};
pub use engine::message::{Arg, Message};
pub use failure::{CheckFailure, FailureLog, FailureSink, PanicSink};
