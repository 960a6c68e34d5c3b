//! Service Container - Centralized service access.
//!
//! Handlers depend on the service traits only; `Services` wires the concrete
//! managers to a shared Unit of Work.

use std::sync::Arc;

use super::{
    CategoryManager, CategoryService, StudentManager, StudentService, TrainingCenterManager,
    TrainingCenterService,
};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get training center service
    fn centers(&self) -> Arc<dyn TrainingCenterService>;

    /// Get category service
    fn categories(&self) -> Arc<dyn CategoryService>;

    /// Get student service
    fn students(&self) -> Arc<dyn StudentService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    center_service: Arc<dyn TrainingCenterService>,
    category_service: Arc<dyn CategoryService>,
    student_service: Arc<dyn StudentService>,
}

impl Services {
    /// Create service container from database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            center_service: Arc::new(TrainingCenterManager::new(uow.clone())),
            category_service: Arc::new(CategoryManager::new(uow.clone())),
            student_service: Arc::new(StudentManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn centers(&self) -> Arc<dyn TrainingCenterService> {
        self.center_service.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }

    fn students(&self) -> Arc<dyn StudentService> {
        self.student_service.clone()
    }
}
