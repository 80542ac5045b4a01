//! Known-course record sets consulted by record-checked course parsing.

use std::collections::{BTreeSet, HashSet};
use std::ops::Bound;

use super::split_components;
use crate::text::collapse_spaces;

/// Read-only view over the set of courses seen in historical records.
///
/// Entries are canonical course strings at any granularity: `"Mathematics"`,
/// `"Mathematics 1A"` or `"Mathematics 1A 2"`.
pub trait CourseRecords {
    fn contains(&self, course: &str) -> bool;

    /// True when `subject` is on record, standalone or as the subject of a longer entry.
    fn has_subject(&self, subject: &str) -> bool;
}

fn prefixes(entry: &str, subject: &str) -> bool {
    entry.strip_prefix(subject).is_some_and(|rest| rest.starts_with(' '))
}

impl CourseRecords for HashSet<String> {
    fn contains(&self, course: &str) -> bool {
        HashSet::contains(self, course)
    }

    fn has_subject(&self, subject: &str) -> bool {
        HashSet::contains(self, subject) || self.iter().any(|entry| prefixes(entry, subject))
    }
}

impl CourseRecords for BTreeSet<String> {
    fn contains(&self, course: &str) -> bool {
        BTreeSet::contains(self, course)
    }

    fn has_subject(&self, subject: &str) -> bool {
        // every entry prefixed by "subject " sorts directly after "subject"
        self.range::<str, _>((Bound::Included(subject), Bound::Unbounded))
            .take_while(|entry| entry.starts_with(subject))
            .any(|entry| entry.len() == subject.len() || prefixes(entry, subject))
    }
}

/// Known courses, expanded so every entry is also on record at each coarser
/// granularity.
///
/// # Example
/// ```
/// use stemnorm::{CourseRecords, CourseSet};
///
/// let records = CourseSet::from_courses(["Mathematics 1A 2", "Physics 4A"]);
/// assert!(records.contains("Mathematics"));
/// assert!(records.contains("Mathematics 1A"));
/// assert!(records.contains("Mathematics 1A 2"));
/// assert!(!records.contains("Mathematics 1A 3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSet {
    courses: BTreeSet<String>,
}

impl CourseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_courses<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        courses.into_iter().collect()
    }

    /// Record `course` along with its subject and subject + number forms.
    pub fn insert(&mut self, course: &str) {
        let course = collapse_spaces(course);
        if course.is_empty() {
            return;
        }

        let (subject, number, section) = split_components(&course);
        if !subject.is_empty() {
            self.courses.insert(subject.to_string());
        }
        if !number.is_empty() {
            self.courses.insert(format!("{subject} {number}").trim().to_string());
        }
        if !section.is_empty() {
            self.courses.insert(course);
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for CourseSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = CourseSet::new();
        for course in iter {
            set.insert(course.as_ref());
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for CourseSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for course in iter {
            self.insert(course.as_ref());
        }
    }
}

impl CourseRecords for CourseSet {
    fn contains(&self, course: &str) -> bool {
        self.courses.contains(course)
    }

    fn has_subject(&self, subject: &str) -> bool {
        self.courses.has_subject(subject)
    }
}
