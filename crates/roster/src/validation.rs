//! Student Validation Module
//!
//! Field rules for student records. Rules run in a fixed order and the
//! first violation is reported; later rules are not evaluated.

use std::ops::RangeInclusive;

use thiserror::Error;
use tracing::debug;

use crate::student::Student;

/// Default allowed years of study
pub const DEFAULT_YEAR_RANGE: RangeInclusive<i32> = 1..=4;

/// Default allowed GPA range
pub const DEFAULT_GPA_RANGE: RangeInclusive<f64> = 0.0..=4.0;

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("year must be between {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("gpa must be between {min}-{max}")]
    GpaOutOfRange { gpa: f64, min: f64, max: f64 },
}

/// Configuration for the student validator
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Inclusive range of accepted years
    pub years: RangeInclusive<i32>,
    /// Inclusive range of accepted GPAs
    pub gpa: RangeInclusive<f64>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEAR_RANGE,
            gpa: DEFAULT_GPA_RANGE,
        }
    }
}

/// Student validator with configurable bounds
#[derive(Debug, Clone, Default)]
pub struct StudentValidator {
    config: ValidatorConfig,
}

impl StudentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate a student, returning the first violated rule.
    ///
    /// Order: name, then year, then GPA. A NaN GPA is never in range.
    pub fn validate(&self, student: &Student) -> Result<(), ValidationError> {
        if student.name.is_empty() {
            debug!(id = %student.id, "student has no name");
            return Err(ValidationError::NameRequired);
        }

        if !self.config.years.contains(&student.year) {
            debug!(id = %student.id, year = student.year, "student year out of range");
            return Err(ValidationError::YearOutOfRange {
                year: student.year,
                min: *self.config.years.start(),
                max: *self.config.years.end(),
            });
        }

        if !self.config.gpa.contains(&student.gpa) {
            debug!(id = %student.id, gpa = student.gpa, "student gpa out of range");
            return Err(ValidationError::GpaOutOfRange {
                gpa: student.gpa,
                min: *self.config.gpa.start(),
                max: *self.config.gpa.end(),
            });
        }

        Ok(())
    }

    /// Access the configuration used by this validator
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}
