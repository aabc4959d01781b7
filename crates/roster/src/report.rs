//! Per-student demo report.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::student::Student;
use crate::validation::{StudentValidator, ValidationError};

/// Outcome of checking one student
#[derive(Debug, Clone, Serialize)]
pub struct StudentReport {
    /// Zero-based position in the roster
    pub index: usize,
    /// The evaluated record
    pub student: Student,
    /// Honor-roll status
    pub honor: bool,
    /// First violated rule, if any
    #[serde(serialize_with = "serialize_validation")]
    pub validation: Option<ValidationError>,
}

impl StudentReport {
    /// Evaluate a single student at the given roster position
    pub fn new(index: usize, student: &Student, validator: &StudentValidator) -> Self {
        Self {
            index,
            student: student.clone(),
            honor: student.is_honor(),
            validation: validator.validate(student).err(),
        }
    }
}

impl fmt::Display for StudentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Honor = {}", self.index, self.honor)?;
        match &self.validation {
            Some(err) => write!(f, "{} Validation = {}", self.index, err),
            None => write!(f, "{} Validation = <nil>", self.index),
        }
    }
}

fn serialize_validation<S>(validation: &Option<ValidationError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match validation {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Evaluate every student in insertion order
pub fn evaluate(students: &[Student], validator: &StudentValidator) -> Vec<StudentReport> {
    students
        .iter()
        .enumerate()
        .map(|(index, student)| StudentReport::new(index, student, validator))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::seed_students;

    #[test]
    fn test_display_valid_student() {
        let reports = evaluate(&seed_students(), &StudentValidator::new());
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].to_string(), "0 Honor = true\n0 Validation = <nil>");
        assert_eq!(reports[2].to_string(), "2 Honor = true\n2 Validation = <nil>");
    }

    #[test]
    fn test_display_invalid_student() {
        let student = Student::new("4", "x", "x@silpakorn.edu", 5, 3.0);
        let report = StudentReport::new(7, &student, &StudentValidator::new());
        assert_eq!(
            report.to_string(),
            "7 Honor = false\n7 Validation = year must be between 1-4"
        );
    }

    #[test]
    fn test_report_json() {
        let student = Student::new("5", "", "", 4, 3.75);
        let report = StudentReport::new(0, &student, &StudentValidator::new());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["index"], 0);
        assert_eq!(json["honor"], true);
        assert_eq!(json["validation"], "name is required");
        assert_eq!(json["student"]["id"], "5");

        let valid = StudentReport::new(1, &seed_students()[0], &StudentValidator::new());
        let json = serde_json::to_value(&valid).unwrap();
        assert!(json["validation"].is_null());
    }
}
