//! Student record definition and seed roster.

use serde::{Deserialize, Serialize};

use crate::validation::{StudentValidator, ValidationError};

/// Minimum GPA for the honor roll (inclusive)
pub const HONOR_GPA_THRESHOLD: f64 = 3.50;

/// A single student record.
///
/// Field rules are checked by [`StudentValidator`], not at construction, so
/// any combination of values can be represented and then reported on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Student identifier
    pub id: String,
    /// Display name, required
    pub name: String,
    /// Contact email
    pub email: String,
    /// Year of study, 1 through 4
    pub year: i32,
    /// Grade point average, 0 through 4
    pub gpa: f64,
}

impl Student {
    /// Create a new student record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        year: i32,
        gpa: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            year,
            gpa,
        }
    }

    /// Whether this student makes the honor roll
    pub fn is_honor(&self) -> bool {
        self.gpa >= HONOR_GPA_THRESHOLD
    }

    /// Check the record against the default rules, reporting the first violation
    pub fn validate(&self) -> Result<(), ValidationError> {
        StudentValidator::new().validate(self)
    }
}

/// The demo roster in insertion order.
///
/// Two students are declared up front and a third is enrolled afterwards.
pub fn seed_students() -> Vec<Student> {
    let mut students = vec![
        Student::new("1", "yanika", "moonpuak_y@silpakorn.edu", 4, 3.75),
        Student::new("2", "sasithon", "kitcharoen_s2@silpakorn.edu", 4, 3.75),
    ];

    let new_student = Student::new("3", "judy", "judy_m@silpakorn.edu", 4, 3.55);
    students.push(new_student);

    students
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_gpa(gpa: f64) -> Student {
        Student::new("1", "yanika", "moonpuak_y@silpakorn.edu", 4, gpa)
    }

    #[test]
    fn test_honor_threshold_is_inclusive() {
        assert!(with_gpa(3.50).is_honor());
        assert!(!with_gpa(3.4999).is_honor());
    }

    #[test]
    fn test_honor_across_range() {
        assert!(with_gpa(4.0).is_honor());
        assert!(with_gpa(3.75).is_honor());
        assert!(!with_gpa(0.0).is_honor());
        assert!(!with_gpa(3.0).is_honor());
    }

    #[test]
    fn test_honor_ignores_validity() {
        // Out-of-range GPA still satisfies the predicate
        let student = Student::new("1", "", "", 9, 5.0);
        assert!(student.is_honor());
        assert!(student.validate().is_err());
    }

    #[test]
    fn test_seed_students_order() {
        let students = seed_students();
        let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["yanika", "sasithon", "judy"]);
        assert!(students.iter().all(|s| s.is_honor()));
        assert!(students.iter().all(|s| s.validate().is_ok()));
    }

    #[test]
    fn test_student_json_fields() {
        let json = serde_json::to_value(with_gpa(3.75)).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["email"], "moonpuak_y@silpakorn.edu");
        assert_eq!(json["year"], 4);
        assert_eq!(json["gpa"], 3.75);
    }
}
