//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    CategoryService, ServiceContainer, Services, StudentService, TrainingCenterService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Training center service
    pub center_service: Arc<dyn TrainingCenterService>,
    /// Category service
    pub category_service: Arc<dyn CategoryService>,
    /// Student service
    pub student_service: Arc<dyn StudentService>,
    /// Database handle, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state wired to the given database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::new(&container, database)
    }

    /// Create application state from any service container.
    pub fn new(services: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            center_service: services.centers(),
            category_service: services.categories(),
            student_service: services.students(),
            database,
        }
    }
}
