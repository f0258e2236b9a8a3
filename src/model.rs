pub use self::records::Records;
pub use self::student::{Student, StudentId};

mod records;
mod student;
