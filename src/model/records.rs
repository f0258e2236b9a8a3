use super::{Student, StudentId};
use crate::error::{RecordError, Result};
use crate::grade::Grade;
use indexmap::IndexMap;
use tracing::info;

/// All students known to the session, in the order they were added.
#[derive(Debug, Default)]
pub struct Records {
    students: IndexMap<StudentId, Student>,
}

/// One line of the class summary.
#[derive(Debug, PartialEq)]
pub struct Performance<'a> {
    pub id: StudentId,
    pub name: &'a str,
    pub average: f64,
    pub grade: Grade,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    pub fn student(&self, id: StudentId) -> Result<&Student> {
        self.students.get(&id).ok_or(RecordError::NotFound(id))
    }

    fn student_mut(&mut self, id: StudentId) -> Result<&mut Student> {
        self.students.get_mut(&id).ok_or(RecordError::NotFound(id))
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn add(&mut self, id: StudentId, name: impl Into<String>) -> Result<&Student> {
        if self.contains(id) {
            return Err(RecordError::AlreadyExists(id));
        }
        let student = self
            .students
            .entry(id)
            .or_insert_with(|| Student::new(id, name));
        let student = &*student;
        info!(%id, name = %student.name, "student added");
        Ok(student)
    }

    pub fn rename(&mut self, id: StudentId, name: impl Into<String>) -> Result<()> {
        let student = self.student_mut(id)?;
        student.name = name.into();
        info!(%id, name = %student.name, "student renamed");
        Ok(())
    }

    pub fn delete(&mut self, id: StudentId) -> Result<Student> {
        let student = self
            .students
            .shift_remove(&id)
            .ok_or(RecordError::NotFound(id))?;
        info!(%id, subjects = student.subjects().count(), "student deleted");
        Ok(student)
    }

    /// Assigning a subject again clears the mark recorded for it.
    pub fn assign_subject(&mut self, id: StudentId, subject: impl Into<String>) -> Result<()> {
        let subject = subject.into();
        let student = self.student_mut(id)?;
        info!(%id, %subject, "subject assigned");
        student.assign(subject);
        Ok(())
    }

    pub fn check_assigned(&self, id: StudentId, subject: &str) -> Result<&Student> {
        let student = self.student(id)?;
        if student.is_assigned(subject) {
            Ok(student)
        } else {
            Err(RecordError::SubjectNotAssigned {
                id,
                subject: subject.to_owned(),
            })
        }
    }

    pub fn record_mark(&mut self, id: StudentId, subject: &str, mark: f64) -> Result<()> {
        let previous = self.check_assigned(id, subject)?.mark(subject);
        if !(0.0..=100.0).contains(&mark) {
            return Err(RecordError::MarkOutOfRange);
        }
        self.student_mut(id)?.set_mark(subject, mark);
        info!(%id, subject, mark, ?previous, "mark recorded");
        Ok(())
    }

    /// Students without marks average 0.
    pub fn class_performance(&self) -> Vec<Performance<'_>> {
        self.students()
            .map(|s| {
                let average = s.average().unwrap_or(0.0);
                Performance {
                    id: s.id,
                    name: &s.name,
                    average,
                    grade: Grade::from_score(average),
                }
            })
            .collect()
    }
}
