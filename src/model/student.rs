use indexmap::{IndexMap, IndexSet};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub i64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    subjects: IndexSet<String>,
    /// Kept in the order marks were first recorded; report rows follow it.
    marks: IndexMap<String, f64>,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subjects: IndexSet::new(),
            marks: IndexMap::new(),
        }
    }

    pub fn is_assigned(&self, subject: &str) -> bool {
        self.subjects.contains(subject)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(String::as_str)
    }

    pub fn mark(&self, subject: &str) -> Option<f64> {
        self.marks.get(subject).copied()
    }

    pub fn marks(&self) -> impl Iterator<Item = (&str, f64)> {
        self.marks.iter().map(|(subject, &mark)| (subject.as_str(), mark))
    }

    pub fn has_marks(&self) -> bool {
        !self.marks.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.marks().map(|(_, m)| m).sum()
    }

    pub fn average(&self) -> Option<f64> {
        if !self.has_marks() {
            return None;
        }
        Some(self.total() / self.marks.len() as f64)
    }

    /// Assigning again drops the subject's mark, so a later one goes last.
    pub(super) fn assign(&mut self, subject: String) {
        self.marks.shift_remove(&subject);
        self.subjects.insert(subject);
    }

    /// Callers check that the subject is assigned and the value in range.
    pub(super) fn set_mark(&mut self, subject: &str, mark: f64) {
        if self.subjects.contains(subject) {
            self.marks.insert(subject.to_owned(), mark);
        }
    }
}
