use crate::model::StudentId;
use thiserror::Error;

/// Recoverable failures of a single menu operation. None of them is fatal:
/// the operation is dropped and the records are left as they were.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("Invalid input. Student ID must be a number.")]
    InvalidId,

    #[error("Invalid input. Marks must be a number.")]
    InvalidMark,

    #[error("Student ID {0} not found.")]
    NotFound(StudentId),

    #[error("Student ID {0} already exists.")]
    AlreadyExists(StudentId),

    #[error("Subject {subject} not assigned to Student ID {id}.")]
    SubjectNotAssigned { id: StudentId, subject: String },

    #[error("Marks must be between 0 and 100.")]
    MarkOutOfRange,
}

pub type Result<T> = std::result::Result<T, RecordError>;

pub fn parse_id(input: &str) -> Result<StudentId> {
    input
        .trim()
        .parse()
        .map(StudentId)
        .map_err(|_| RecordError::InvalidId)
}

pub fn parse_mark(input: &str) -> Result<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| RecordError::InvalidMark)
}
