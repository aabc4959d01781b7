//! CLI command modules

pub mod serve;
pub mod students;

pub use serve::{execute_serve_command, ServeArgs};
pub use students::{execute_students_command, StudentsArgs};
