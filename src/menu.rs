use crate::config::Config;
use crate::display;
use crate::error::{self, RecordError};
use crate::model::Records;
use crate::table::TableFormat;
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Choice {
    AddStudent,
    UpdateStudent,
    DeleteStudent,
    AssignSubject,
    InputMarks,
    ReportCard,
    ClassPerformance,
    Exit,
}

impl Choice {
    /// Menu order; an entry's number is its position plus one.
    const ALL: [Choice; 8] = [
        Choice::AddStudent,
        Choice::UpdateStudent,
        Choice::DeleteStudent,
        Choice::AssignSubject,
        Choice::InputMarks,
        Choice::ReportCard,
        Choice::ClassPerformance,
        Choice::Exit,
    ];

    pub fn parse(input: &str) -> Option<Choice> {
        let n = input.trim().parse::<usize>().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Choice::AddStudent => "Add Student",
            Choice::UpdateStudent => "Update Student",
            Choice::DeleteStudent => "Delete Student",
            Choice::AssignSubject => "Assign Subject",
            Choice::InputMarks => "Input Marks",
            Choice::ReportCard => "Generate Report Card",
            Choice::ClassPerformance => "View Class Performance",
            Choice::Exit => "Exit",
        }
    }
}

/// Why an operation stopped before completing.
#[derive(Debug)]
enum Abort {
    Rejected(RecordError),
    EndOfInput,
    Io(io::Error),
}

impl From<RecordError> for Abort {
    fn from(e: RecordError) -> Self {
        Abort::Rejected(e)
    }
}

impl From<io::Error> for Abort {
    fn from(e: io::Error) -> Self {
        Abort::Io(e)
    }
}

type Outcome = Result<(), Abort>;

/// One interactive session: the records live exactly as long as this does.
pub struct Session<R, W> {
    records: Records,
    input: R,
    output: W,
    title: String,
    table_format: TableFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            records: Records::new(),
            input,
            output,
            title: config.menu.title.clone(),
            table_format: config.report.table_format,
        }
    }

    /// Runs until the user exits or input runs out. Only console I/O
    /// failures are returned; every data error is reported and recovered.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let choice = match self.prompt("Enter your choice: ") {
                Ok(line) => Choice::parse(&line),
                Err(Abort::Io(e)) => return Err(e),
                Err(_) => break,
            };
            let Some(choice) = choice else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };
            trace!(?choice, students = self.records.len(), "menu selection");
            if choice == Choice::Exit {
                break;
            }
            match self.dispatch(choice) {
                Ok(()) => {}
                Err(Abort::Rejected(e)) => {
                    debug!(?choice, error = ?e, "operation rejected");
                    writeln!(self.output, "Error: {}", e)?;
                }
                Err(Abort::EndOfInput) => {
                    debug!(?choice, "end of input during operation");
                    break;
                }
                Err(Abort::Io(e)) => return Err(e),
            }
        }
        writeln!(self.output, "Exiting the system. Goodbye!")?;
        self.output.flush()
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- {} ---", self.title)?;
        for (n, choice) in Choice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", n + 1, choice.label())?;
        }
        Ok(())
    }

    /// Reads one line, without its line terminator.
    fn prompt(&mut self, label: &str) -> Result<String, Abort> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Abort::EndOfInput);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    fn dispatch(&mut self, choice: Choice) -> Outcome {
        match choice {
            Choice::AddStudent => self.add_student(),
            Choice::UpdateStudent => self.update_student(),
            Choice::DeleteStudent => self.delete_student(),
            Choice::AssignSubject => self.assign_subject(),
            Choice::InputMarks => self.input_marks(),
            Choice::ReportCard => self.report_card(),
            Choice::ClassPerformance => self.class_performance(),
            Choice::Exit => Ok(()),
        }
    }

    fn add_student(&mut self) -> Outcome {
        let id = error::parse_id(&self.prompt("Enter Student ID: ")?)?;
        if self.records.contains(id) {
            return Err(RecordError::AlreadyExists(id).into());
        }
        let name = self.prompt("Enter Student Name: ")?;
        self.records.add(id, name.as_str())?;
        writeln!(self.output, "Student {} added successfully.", name)?;
        Ok(())
    }

    fn update_student(&mut self) -> Outcome {
        let id = error::parse_id(&self.prompt("Enter Student ID to update: ")?)?;
        self.records.student(id)?;
        let name = self.prompt("Enter New Name: ")?;
        self.records.rename(id, name.as_str())?;
        writeln!(self.output, "Student ID {} updated to {}.", id, name)?;
        Ok(())
    }

    fn delete_student(&mut self) -> Outcome {
        let id = error::parse_id(&self.prompt("Enter Student ID to delete: ")?)?;
        self.records.delete(id)?;
        writeln!(self.output, "Student ID {} deleted successfully.", id)?;
        Ok(())
    }

    fn assign_subject(&mut self) -> Outcome {
        let id = error::parse_id(&self.prompt("Enter Student ID: ")?)?;
        self.records.student(id)?;
        let subject = self.prompt("Enter Subject Name: ")?;
        self.records.assign_subject(id, subject.as_str())?;
        writeln!(
            self.output,
            "Subject {} assigned to Student ID {}.",
            subject, id
        )?;
        Ok(())
    }

    fn input_marks(&mut self) -> Outcome {
        let id = error::parse_id(&self.prompt("Enter Student ID: ")?)?;
        self.records.student(id)?;
        let subject = self.prompt("Enter Subject Name: ")?;
        self.records.check_assigned(id, &subject)?;
        let label = format!("Enter Marks for {}: ", subject);
        let mark = error::parse_mark(&self.prompt(&label)?)?;
        self.records.record_mark(id, &subject, mark)?;
        writeln!(self.output, "Marks for {} added to Student ID {}.", subject, id)?;
        Ok(())
    }

    fn report_card(&mut self) -> Outcome {
        let id = error::parse_id(&self.prompt("Enter Student ID: ")?)?;
        let card = display::report_card(&self.records, id, self.table_format)?;
        write!(self.output, "{}", card)?;
        Ok(())
    }

    fn class_performance(&mut self) -> Outcome {
        write!(self.output, "{}", display::class_performance(&self.records))?;
        Ok(())
    }
}
