use crate::error::Result;
use crate::grade::Grade;
use crate::model::{Records, Student, StudentId};
use crate::table::TableFormat;
use comfy_table::{CellAlignment, Table};

fn marks_table(student: &Student, format: TableFormat) -> Table {
    let mut table = Table::new();
    table
        .load_preset(format.preset())
        .set_header(["Subject", "Marks", "Grade"]);
    for (subject, mark) in student.marks() {
        table.add_row([
            subject.to_owned(),
            mark.to_string(),
            Grade::from_score(mark).to_string(),
        ]);
    }
    if let Some(marks) = table.column_mut(1) {
        marks.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn report_card(records: &Records, id: StudentId, format: TableFormat) -> Result<String> {
    let student = records.student(id)?;
    let mut out = format!(
        "\n--- Report Card ---\nStudent ID: {}\nName: {}\n{}\n",
        student.id,
        student.name,
        marks_table(student, format)
    );
    // "Total" is the sum of the marks, the overall grade is taken on their mean.
    match student.average() {
        Some(average) => out.push_str(&format!(
            "\nTotal Marks: {}\nOverall Grade: {}\n",
            student.total(),
            Grade::from_score(average)
        )),
        None => out.push_str("No marks available.\n"),
    }
    out.push_str("-------------------\n\n");
    Ok(out)
}

pub fn class_performance(records: &Records) -> String {
    if records.is_empty() {
        return "No students found.\n".to_owned();
    }
    let lines = records
        .class_performance()
        .iter()
        .map(|p| {
            format!(
                "Student ID: {}, Name: {}, Average Marks: {:.2}, Overall Grade: {}\n",
                p.id, p.name, p.average, p.grade
            )
        })
        .collect::<String>();
    format!("\n--- Class Performance ---\n{}-------------------------\n\n", lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;

    fn records() -> Records {
        let mut r = Records::new();
        r.add(StudentId(1), "Alice").unwrap();
        r.assign_subject(StudentId(1), "Math").unwrap();
        r.record_mark(StudentId(1), "Math", 95.0).unwrap();
        r.add(StudentId(2), "Bob").unwrap();
        r
    }

    fn position(card: &str, needle: &str) -> usize {
        card.find(needle)
            .unwrap_or_else(|| panic!("{:?} missing from\n{}", needle, card))
    }

    #[test]
    fn single_mark() {
        let card = report_card(&records(), StudentId(1), TableFormat::Grid).unwrap();
        assert!(card.starts_with("\n--- Report Card ---\nStudent ID: 1\nName: Alice\n+-"));
        assert!(card.contains("| Subject | Marks | Grade |"));
        assert!(card.contains("| Math    |    95 | A+    |"));
        assert!(card.contains("+=")); // header rule
        assert!(card.ends_with("\n\nTotal Marks: 95\nOverall Grade: A+\n-------------------\n\n"));
    }

    #[test]
    fn no_marks() {
        let mut r = records();
        r.assign_subject(StudentId(2), "Art").unwrap();
        let card = report_card(&r, StudentId(2), TableFormat::Grid).unwrap();
        assert!(card.contains("| Subject | Marks | Grade |"));
        assert!(card.ends_with("+\nNo marks available.\n-------------------\n\n"));
        assert!(!card.contains("Art"));
        assert!(!card.contains("Total Marks"));
    }

    #[test]
    fn unmarked_subjects_are_skipped() {
        let mut r = records();
        r.assign_subject(StudentId(1), "Art").unwrap();
        r.assign_subject(StudentId(1), "History").unwrap();
        r.record_mark(StudentId(1), "History", 40.0).unwrap();
        let card = report_card(&r, StudentId(1), TableFormat::Simple).unwrap();
        assert!(!card.contains("Art"));
        assert!(card.contains("History"));
        // Sum 135, mean 67.5.
        assert!(card.contains("\nTotal Marks: 135\nOverall Grade: C\n"));
    }

    #[test]
    fn rows_in_recording_order() {
        let mut r = Records::new();
        r.add(StudentId(1), "Alice").unwrap();
        r.assign_subject(StudentId(1), "Math").unwrap();
        r.assign_subject(StudentId(1), "Art").unwrap();
        r.record_mark(StudentId(1), "Art", 70.0).unwrap();
        r.record_mark(StudentId(1), "Math", 90.0).unwrap();
        let card = report_card(&r, StudentId(1), TableFormat::Grid).unwrap();
        let art = position(&card, "| Art     |    70 | B     |");
        let math = position(&card, "| Math    |    90 | A+    |");
        assert!(art < math);
    }

    #[test]
    fn fractional_marks() {
        let mut r = records();
        r.assign_subject(StudentId(1), "Art").unwrap();
        r.record_mark(StudentId(1), "Art", 72.5).unwrap();
        let card = report_card(&r, StudentId(1), TableFormat::Grid).unwrap();
        assert!(card.contains("| Art     |  72.5 | B     |"));
        assert!(card.contains("Total Marks: 167.5\nOverall Grade: A\n"));
    }

    #[test]
    fn unknown_student() {
        assert_eq!(
            report_card(&records(), StudentId(3), TableFormat::Grid),
            Err(RecordError::NotFound(StudentId(3)))
        );
    }

    #[test]
    fn class() {
        assert_eq!(
            class_performance(&records()),
            "
--- Class Performance ---
Student ID: 1, Name: Alice, Average Marks: 95.00, Overall Grade: A+
Student ID: 2, Name: Bob, Average Marks: 0.00, Overall Grade: F
-------------------------

"
        );
    }

    #[test]
    fn empty_class() {
        assert_eq!(class_performance(&Records::new()), "No students found.\n");
    }
}
