//! Repository layer - Data access abstraction
//!
//! Read traits are mockable and back the service read paths. The module-level
//! functions of each repository run on any connection, so the transactional
//! repositories in `unit_of_work` share them.

mod base;
pub(crate) mod category_repository;
pub(crate) mod entities;
pub(crate) mod student_repository;
pub(crate) mod training_center_repository;

pub use category_repository::{CategoryRepository, CategoryStore};
pub use student_repository::{StudentRepository, StudentStore};
pub use training_center_repository::{TrainingCenterRepository, TrainingCenterStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use student_repository::MockStudentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use training_center_repository::MockTrainingCenterRepository;
