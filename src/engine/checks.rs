use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use regex::Regex;

use crate::domain::record::Validate;
use crate::engine::message::{Arg, Message};
use crate::failure::FailureSink;

/// Membership test used by the containment assertions.
///
/// Implementations delegate to the collection's native notion of
/// membership, including substring search for string haystacks.
pub trait Contains<E: ?Sized> {
    fn contains_element(&self, element: &E) -> bool;
}

impl<T: PartialEq> Contains<T> for [T] {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq, const N: usize> Contains<T> for [T; N] {
    fn contains_element(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: PartialEq> Contains<T> for Vec<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: PartialEq> Contains<T> for VecDeque<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: Ord> Contains<T> for BTreeSet<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Contains<T> for HashSet<T, S> {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl Contains<str> for str {
    fn contains_element(&self, element: &str) -> bool {
        self.contains(element)
    }
}

impl Contains<char> for str {
    fn contains_element(&self, element: &char) -> bool {
        self.contains(*element)
    }
}

impl Contains<str> for String {
    fn contains_element(&self, element: &str) -> bool {
        self.as_str().contains(element)
    }
}

impl Contains<char> for String {
    fn contains_element(&self, element: &char) -> bool {
        self.as_str().contains(*element)
    }
}

/// The assertion mixin.
///
/// Blanket-implemented for every [`FailureSink`], so a harness type only
/// implements the sink and picks these methods up by importing the trait.
/// Each method either returns silently or hands the sink a lazily rendered
/// [`Message`]; an empty `msg` selects the stock template, a non-empty one
/// replaces the rendered text verbatim.
pub trait Assertions: FailureSink {
    /// Asserts that `element` is a member of `collection`.
    #[track_caller]
    fn assert_include<C, E>(&mut self, collection: &C, element: &E, msg: &str)
    where
        C: Contains<E> + fmt::Debug + ?Sized,
        E: fmt::Debug + ?Sized,
    {
        if !collection.contains_element(element) {
            self.fail(Message::build(
                msg,
                "<?> expected to be included in \n<?>.",
                vec![Arg::debug(element), Arg::debug(collection)],
            ));
        }
    }

    /// Asserts that `element` is not a member of `collection`.
    #[track_caller]
    fn assert_not_include<C, E>(&mut self, collection: &C, element: &E, msg: &str)
    where
        C: Contains<E> + fmt::Debug + ?Sized,
        E: fmt::Debug + ?Sized,
    {
        if collection.contains_element(element) {
            self.fail(Message::build(
                msg,
                "<?> expected not to be included in \n<?>.",
                vec![Arg::debug(element), Arg::debug(collection)],
            ));
        }
    }

    /// Asserts that `pattern` matches exactly `expected` times in `haystack`.
    ///
    /// Matches are counted the way the regex engine scans: non-overlapping,
    /// leftmost-first.
    #[track_caller]
    fn assert_count(&mut self, expected: usize, pattern: &Regex, haystack: &str, msg: &str) {
        let actual = pattern.find_iter(haystack).count();
        if actual != expected {
            self.fail(Message::build(
                msg,
                "<?> expected to occur ? time(s), but occurred ? time(s) in \n<?>.",
                vec![
                    Arg::display(pattern),
                    Arg::display(&expected),
                    Arg::display(&actual),
                    Arg::display(haystack),
                ],
            ));
        }
    }

    /// Asserts that `record` validates cleanly.
    ///
    /// Validation runs exactly once; the failure text lists every recorded
    /// error message.
    #[track_caller]
    fn assert_valid<R>(&mut self, record: &mut R, msg: &str)
    where
        R: Validate + ?Sized,
    {
        let valid = record.validate();
        if !valid {
            let record = &*record;
            self.fail(Message::build(
                msg,
                "? expected to be valid, but has the following errors: \n ?.",
                vec![
                    Arg::display(record),
                    Arg::from_fn(|| record.errors().full_messages().join("\n ")),
                ],
            ));
        }
    }

    /// Asserts that `record` fails validation.
    ///
    /// With a non-empty `expected_invalid`, exactly those fields must carry
    /// errors: every expected-but-clean field and every errored-but-unlisted
    /// field is reported as its own failure, so one call surfaces all
    /// mismatches. With an empty `expected_invalid`, only the invalidity of
    /// the record itself is asserted.
    #[track_caller]
    fn assert_not_valid<R>(&mut self, record: &mut R, expected_invalid: &[&str])
    where
        R: Validate + ?Sized,
    {
        if record.validate() {
            let record = &*record;
            self.fail(Message::build(
                "",
                "? expected to be invalid, but is valid.",
                vec![Arg::display(record)],
            ));
            return;
        }
        if expected_invalid.is_empty() {
            return;
        }
        let expected: BTreeSet<&str> = expected_invalid.iter().copied().collect();
        let record = &*record;
        expected_fields_have_errors(self, record, &expected);
        other_fields_have_no_errors(self, record, &expected);
    }
}

impl<S: FailureSink + ?Sized> Assertions for S {}

fn expected_fields_have_errors<S, R>(sink: &mut S, record: &R, expected: &BTreeSet<&str>)
where
    S: FailureSink + ?Sized,
    R: Validate + ?Sized,
{
    for field in expected {
        if record.errors().on(field).is_empty() {
            sink.fail(Message::build(
                "",
                "Attribute <?> expected to be invalid, but is valid.",
                vec![Arg::display(*field)],
            ));
        }
    }
}

fn other_fields_have_no_errors<S, R>(sink: &mut S, record: &R, expected: &BTreeSet<&str>)
where
    S: FailureSink + ?Sized,
    R: Validate + ?Sized,
{
    for (field, message) in record.errors().iter() {
        if !expected.contains(field) {
            sink.fail(Message::build(
                "",
                "Attribute <?> not declared as invalid attribute, but has the following error: \n?.",
                vec![Arg::display(field), Arg::display(message)],
            ));
        }
    }
}
