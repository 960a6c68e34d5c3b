//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and infrastructure to fulfill the
//! application use cases. Reads go through the Unit of Work's repositories;
//! every write runs in a single transaction.

mod category_service;
pub mod container;
mod student_service;
mod training_center_service;

#[cfg(test)]
mod test_support;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use category_service::{CategoryManager, CategoryService};
pub use student_service::{StudentManager, StudentService};
pub use training_center_service::{TrainingCenterManager, TrainingCenterService};
