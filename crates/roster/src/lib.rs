//! Student records for the classwork validator demo
//!
//! This crate models a student record, the honor-roll predicate and the
//! ordered field validation rules, plus the per-record report printed by
//! the `classwork students` command.

pub mod report;
pub mod student;
pub mod validation;

// Re-export key types for easy access
pub use report::{evaluate, StudentReport};
pub use student::{seed_students, Student, HONOR_GPA_THRESHOLD};
pub use validation::{StudentValidator, ValidationError, ValidatorConfig};

/// Convenience function to validate a student with the default rules
pub fn validate_student(student: &Student) -> Result<(), ValidationError> {
    StudentValidator::new().validate(student)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_student_uses_default_rules() {
        let student = Student::new("9", "", "nobody@silpakorn.edu", 2, 2.0);
        assert_eq!(validate_student(&student), Err(ValidationError::NameRequired));
    }
}
