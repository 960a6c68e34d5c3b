//! Unit of Work double backed by repository mocks.

use std::sync::Arc;

use async_trait::async_trait;

use crate::infra::{
    CategoryRepository, MockCategoryRepository, MockStudentRepository,
    MockTrainingCenterRepository, StudentRepository, TrainingCenterRepository,
    TransactionContext, UnitOfWork,
};
use common::{AppError, AppResult};

/// Serves the read paths from mocks; transactions are not available.
pub(crate) struct TestUnitOfWork {
    centers: Arc<MockTrainingCenterRepository>,
    categories: Arc<MockCategoryRepository>,
    students: Arc<MockStudentRepository>,
}

impl TestUnitOfWork {
    fn new(
        centers: MockTrainingCenterRepository,
        categories: MockCategoryRepository,
        students: MockStudentRepository,
    ) -> Self {
        Self {
            centers: Arc::new(centers),
            categories: Arc::new(categories),
            students: Arc::new(students),
        }
    }

    pub(crate) fn with_centers(centers: MockTrainingCenterRepository) -> Self {
        Self::new(
            centers,
            MockCategoryRepository::new(),
            MockStudentRepository::new(),
        )
    }

    pub(crate) fn with_categories(categories: MockCategoryRepository) -> Self {
        Self::new(
            MockTrainingCenterRepository::new(),
            categories,
            MockStudentRepository::new(),
        )
    }

    pub(crate) fn with_students(students: MockStudentRepository) -> Self {
        Self::new(
            MockTrainingCenterRepository::new(),
            MockCategoryRepository::new(),
            students,
        )
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn centers(&self) -> Arc<dyn TrainingCenterRepository> {
        self.centers.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.categories.clone()
    }

    fn students(&self) -> Arc<dyn StudentRepository> {
        self.students.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}
