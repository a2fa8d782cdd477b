use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-field validation messages, ordered by field name.
///
/// A field key is present iff the most recent validation attached at least
/// one message to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one message against `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Drops every recorded message.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded messages across all fields.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Messages recorded against `field`; empty when the field is clean.
    pub fn on(&self, field: &str) -> &[String] {
        match self.entries.get(field) {
            Some(messages) => messages,
            None => &[],
        }
    }

    /// Fields carrying at least one message, in name order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Flattened `(field, message)` pairs in field-then-message order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(field, messages)| {
            messages
                .iter()
                .map(move |message| (field.as_str(), message.as_str()))
        })
    }

    /// `"{field} {message}"` lines in field-then-message order.
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .map(|(field, message)| format!("{field} {message}"))
            .collect()
    }
}
