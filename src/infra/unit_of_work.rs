//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and owns the transaction lifecycle: every
//! mutating service operation runs inside `UnitOfWork::transaction`, which
//! commits when the closure succeeds and rolls back on any error.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction,
    IsolationLevel, TransactionTrait,
};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::repositories::{
    category_repository, student_repository, training_center_repository, CategoryRepository,
    CategoryStore, StudentRepository, StudentStore, TrainingCenterRepository, TrainingCenterStore,
};
use common::{AppError, AppResult};
use domain::{
    Category, CategoryDetails, NewCategory, NewStudent, NewTrainingCenter, Student,
    StudentDetails, TrainingCenter,
};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock the read repositories or use integration tests.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get training center repository
    fn centers(&self) -> Arc<dyn TrainingCenterRepository>;

    /// Get category repository
    fn categories(&self) -> Arc<dyn CategoryRepository>;

    /// Get student repository
    fn students(&self) -> Arc<dyn StudentRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn centers(&self) -> TxTrainingCenterRepository<'_> {
        TxTrainingCenterRepository { txn: self.txn }
    }

    pub fn categories(&self) -> TxCategoryRepository<'_> {
        TxCategoryRepository { txn: self.txn }
    }

    pub fn students(&self) -> TxStudentRepository<'_> {
        TxStudentRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    center_repo: Arc<TrainingCenterStore>,
    category_repo: Arc<CategoryStore>,
    student_repo: Arc<StudentStore>,
    /// Serializes write transactions on SQLite, which allows one writer at a time.
    write_lock: Option<Mutex<()>>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        let write_lock = match db.get_database_backend() {
            DatabaseBackend::Sqlite => Some(Mutex::new(())),
            _ => None,
        };

        Self {
            center_repo: Arc::new(TrainingCenterStore::new(db.clone())),
            category_repo: Arc::new(CategoryStore::new(db.clone())),
            student_repo: Arc::new(StudentStore::new(db.clone())),
            write_lock,
            db,
        }
    }

    /// Isolation level and access mode for `begin_with_config`.
    ///
    /// SQLite supports neither setting; SeaORM ignores them there with a warning.
    fn transaction_config(&self) -> (Option<IsolationLevel>, Option<AccessMode>) {
        match self.db.get_database_backend() {
            DatabaseBackend::Sqlite => (None, None),
            _ => (Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite)),
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn centers(&self) -> Arc<dyn TrainingCenterRepository> {
        self.center_repo.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.category_repo.clone()
    }

    fn students(&self) -> Arc<dyn StudentRepository> {
        self.student_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Released when this call returns, after commit or rollback
        let _writer = match &self.write_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };

        let (isolation_level, access_mode) = self.transaction_config();
        let txn = self
            .db
            .begin_with_config(isolation_level, access_mode)
            .await
            .map_err(AppError::from)?;

        let outcome = f(TransactionContext::new(&txn)).await;

        match outcome {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware training center repository.
pub struct TxTrainingCenterRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxTrainingCenterRepository<'a> {
    pub async fn find_by_id(&self, pk_id: i32) -> AppResult<Option<TrainingCenter>> {
        training_center_repository::find_by_id(self.txn, pk_id).await
    }

    pub async fn find_by_nome(&self, nome: &str) -> AppResult<Option<TrainingCenter>> {
        training_center_repository::find_by_nome(self.txn, nome).await
    }

    pub async fn create(&self, new: NewTrainingCenter) -> AppResult<TrainingCenter> {
        training_center_repository::insert(self.txn, new).await
    }

    pub async fn save(&self, center: TrainingCenter) -> AppResult<TrainingCenter> {
        training_center_repository::save(self.txn, center).await
    }

    pub async fn delete(&self, pk_id: i32) -> AppResult<()> {
        training_center_repository::delete(self.txn, pk_id).await
    }
}

/// Transaction-aware category repository.
pub struct TxCategoryRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxCategoryRepository<'a> {
    pub async fn find_by_id(&self, pk_id: i32) -> AppResult<Option<Category>> {
        category_repository::find_by_id(self.txn, pk_id).await
    }

    pub async fn find_by_nome(&self, nome: &str) -> AppResult<Option<Category>> {
        category_repository::find_by_nome(self.txn, nome).await
    }

    /// Number of categories linked to the training center
    pub async fn count_by_center(&self, centro_treinamento_id: i32) -> AppResult<u64> {
        category_repository::count_by_center(self.txn, centro_treinamento_id).await
    }

    /// Resolve the category's training center
    pub async fn details(&self, category: Category) -> AppResult<CategoryDetails> {
        category_repository::details(self.txn, category).await
    }

    pub async fn create(&self, new: NewCategory) -> AppResult<Category> {
        category_repository::insert(self.txn, new).await
    }

    pub async fn save(&self, category: Category) -> AppResult<Category> {
        category_repository::save(self.txn, category).await
    }

    pub async fn delete(&self, pk_id: i32) -> AppResult<()> {
        category_repository::delete(self.txn, pk_id).await
    }
}

/// Transaction-aware student repository.
pub struct TxStudentRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxStudentRepository<'a> {
    pub async fn find_by_id(&self, pk_id: i32) -> AppResult<Option<Student>> {
        student_repository::find_by_id(self.txn, pk_id).await
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Student>> {
        student_repository::find_by_cpf(self.txn, cpf).await
    }

    /// Number of students linked to the training center
    pub async fn count_by_center(&self, centro_treinamento_id: i32) -> AppResult<u64> {
        student_repository::count_by_center(self.txn, centro_treinamento_id).await
    }

    /// Number of students linked to the category
    pub async fn count_by_category(&self, categoria_id: i32) -> AppResult<u64> {
        student_repository::count_by_category(self.txn, categoria_id).await
    }

    /// Resolve the student's training center and category
    pub async fn details(&self, student: Student) -> AppResult<StudentDetails> {
        student_repository::details(self.txn, student).await
    }

    pub async fn create(&self, new: NewStudent) -> AppResult<Student> {
        student_repository::insert(self.txn, new).await
    }

    pub async fn save(&self, student: Student) -> AppResult<Student> {
        student_repository::save(self.txn, student).await
    }

    pub async fn delete(&self, pk_id: i32) -> AppResult<()> {
        student_repository::delete(self.txn, pk_id).await
    }
}

/// Run `$body` inside a transaction with `$ctx` bound to the transaction context.
///
/// `$body` must evaluate to an `AppResult`.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| {
            Box::pin(async move {
                let outcome: ::common::AppResult<_> = $body;
                outcome
            })
        })
        .await
    };
}
