use assertq::{Assertions, FailureLog, PanicSink};
use predicates::prelude::*;

use crate::support::Signup;

#[test]
fn valid_record_passes_and_validates_once() {
    let mut record = Signup::new("Ada", "ada@example.org");
    let mut log = FailureLog::new();
    log.assert_valid(&mut record, "");

    assert!(log.is_empty());
    assert_eq!(record.validate_calls, 1);
}

#[test]
fn invalid_record_reports_every_error_message() {
    let mut record = Signup::new("", "nope");
    let mut log = FailureLog::new();
    log.assert_valid(&mut record, "");

    assert_eq!(
        log.failures(),
        ["Signup() expected to be valid, but has the following errors: \n \
          email is not a valid address\n name can't be blank."]
    );
    assert_eq!(record.validate_calls, 1);
}

#[test]
fn not_valid_without_fields_only_requires_invalidity() {
    let mut record = Signup::new("", "nope");
    let mut log = FailureLog::new();
    log.assert_not_valid(&mut record, &[]);

    assert!(log.is_empty());
    assert_eq!(record.validate_calls, 1);
}

#[test]
fn unexpectedly_valid_record_fails_without_field_checks() {
    let mut record = Signup::new("Ada", "ada@example.org");
    let mut log = FailureLog::new();
    log.assert_not_valid(&mut record, &["name"]);

    assert_eq!(
        log.failures(),
        ["Signup(Ada) expected to be invalid, but is valid."]
    );
    let field_check = predicate::str::contains("Attribute");
    assert!(log.failures().iter().all(|failure| !field_check.eval(failure)));
}

#[test]
fn exact_invalid_field_set_passes() {
    let mut record = Signup::new("", "nope");
    let mut log = FailureLog::new();
    log.assert_not_valid(&mut record, &["email", "name"]);

    assert!(log.is_empty());
}

#[test]
fn unexpected_error_field_is_named_with_its_error() {
    let mut record = Signup::new("", "nope");
    let mut log = FailureLog::new();
    log.assert_not_valid(&mut record, &["name"]);

    assert_eq!(
        log.failures(),
        ["Attribute <email> not declared as invalid attribute, \
          but has the following error: \nis not a valid address."]
    );
}

#[test]
fn expected_but_clean_field_is_reported() {
    let mut record = Signup::new("", "ada@example.org");
    let mut log = FailureLog::new();
    log.assert_not_valid(&mut record, &["email", "name"]);

    assert_eq!(
        log.failures(),
        ["Attribute <email> expected to be invalid, but is valid."]
    );
}

#[test]
fn every_field_mismatch_is_surfaced_in_one_pass() {
    let mut record = Signup::new("", "nope");
    let mut log = FailureLog::new();
    log.assert_not_valid(&mut record, &["phone"]);

    assert_eq!(
        log.failures(),
        [
            "Attribute <phone> expected to be invalid, but is valid.",
            "Attribute <email> not declared as invalid attribute, \
             but has the following error: \nis not a valid address.",
            "Attribute <name> not declared as invalid attribute, \
             but has the following error: \ncan't be blank.",
        ]
    );
}

#[test]
fn duplicate_expected_fields_collapse_to_a_set() {
    let mut record = Signup::new("", "ada@example.org");
    let mut log = FailureLog::new();
    log.assert_not_valid(&mut record, &["name", "name"]);

    assert!(log.is_empty());
}

#[test]
fn caller_message_replaces_the_validity_template() {
    let mut record = Signup::new("", "nope");
    let mut log = FailureLog::new();
    log.assert_valid(&mut record, "signup fixtures must be valid");

    assert_eq!(log.failures(), ["signup fixtures must be valid"]);
}

#[test]
#[should_panic(expected = "expected to be invalid, but is valid")]
fn panic_sink_aborts_on_unexpectedly_valid_record() {
    let mut record = Signup::new("Ada", "ada@example.org");
    PanicSink.assert_not_valid(&mut record, &["name"]);
}
