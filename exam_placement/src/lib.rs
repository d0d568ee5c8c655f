mod layout;
use log::debug;

use std::collections::HashMap;

use rand::seq::SliceRandom;

pub use crate::layout::*;

/// A registered student, as read from the input lists.
///
/// A student has no identity of its own: the registration key that points
/// to it in the [Registry] is the only identity in the system.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Student {
    pub last: String,
    pub first: String,
}

/// The merged collection of all known students, keyed by their
/// registration number, plus the topic of the examination.
///
/// Registration keys are opaque strings. They are never parsed as numbers:
/// leading zeros and alphanumeric keys must round-trip exactly as they
/// appear in the input sheets.
#[derive(Debug, Default)]
pub struct Registry {
    topic: Option<String>,
    students: HashMap<String, Student>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Inserts or overwrites the student registered under `key`.
    ///
    /// Duplicate keys across input files are not an error: the last write
    /// wins, silently. This mirrors the merge policy of the portal exports.
    pub fn add(&mut self, key: String, student: Student) {
        if let Some(prev) = self.students.insert(key.clone(), student) {
            debug!("add: key {:?} already present, replacing {:?}", key, prev);
        }
    }

    /// Sets the examination topic, unless one is already known.
    /// The topic comes from the first input file only.
    pub fn set_topic_once(&mut self, topic: String) {
        if self.topic.is_none() {
            self.topic = Some(topic);
        }
    }

    pub fn has_topic(&self) -> bool {
        self.topic.is_some()
    }

    /// The examination topic, or the empty string when no input file
    /// carried one yet.
    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.students.keys()
    }

    pub fn students(&self) -> impl Iterator<Item = (&String, &Student)> {
        self.students.iter()
    }

    /// The student registered under `key`.
    ///
    /// Looking up a key that is not present is a programming error (the
    /// renderers only ever see keys produced by [Registry::shuffled_keys])
    /// and fails loudly.
    pub fn student(&self, key: &str) -> &Student {
        self.students
            .get(key)
            .unwrap_or_else(|| panic!("student: unknown registration key {:?}", key))
    }

    /// Returns all registration keys in a fresh uniform random order.
    ///
    /// Every key appears exactly once. Each call draws an independent
    /// permutation (Fisher-Yates via `rand`); there is no seeding.
    pub fn shuffled_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.students.keys().cloned().collect();
        keys.shuffle(&mut rand::rng());
        keys
    }
}
