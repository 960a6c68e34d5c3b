//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the three workout entities, their creation and patch inputs, list filters
//! and the business rules that guard deletion.

pub mod category;
pub mod constants;
pub mod error;
pub mod student;
pub mod training_center;

pub use category::{Category, CategoryDetails, CategoryFilter, CategoryPatch, NewCategory};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use student::{NewStudent, Student, StudentDetails, StudentFilter, StudentPatch};
pub use training_center::{
    NewTrainingCenter, TrainingCenter, TrainingCenterFilter, TrainingCenterPatch,
};

/// Normalize an optional text filter: blank values mean "no filter".
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
