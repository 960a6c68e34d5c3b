//! Training center service - create, read, list, update and delete centers.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{NewTrainingCenter, TrainingCenter, TrainingCenterFilter, TrainingCenterPatch};

use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};
use crate::with_transaction;

/// Training center service trait for dependency injection.
#[async_trait]
pub trait TrainingCenterService: Send + Sync {
    /// Create a center with a free `nome`
    async fn create_center(&self, new: NewTrainingCenter) -> AppResult<TrainingCenter>;

    async fn get_center(&self, pk_id: i32) -> AppResult<TrainingCenter>;

    async fn list_centers(
        &self,
        filter: TrainingCenterFilter,
        params: PaginationParams,
    ) -> AppResult<Paginated<TrainingCenter>>;

    /// Apply the supplied fields; an empty patch returns the record unchanged
    async fn update_center(
        &self,
        pk_id: i32,
        patch: TrainingCenterPatch,
    ) -> AppResult<TrainingCenter>;

    /// Remove a center that no student or category references
    async fn delete_center(&self, pk_id: i32) -> AppResult<()>;
}

/// Concrete implementation of TrainingCenterService using Unit of Work.
pub struct TrainingCenterManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TrainingCenterManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> TrainingCenterService for TrainingCenterManager<U> {
    async fn create_center(&self, new: NewTrainingCenter) -> AppResult<TrainingCenter> {
        with_transaction!(self.uow, |ctx| {
            if ctx.centers().find_by_nome(&new.nome).await?.is_some() {
                tracing::warn!(nome = %new.nome, "Training center name already taken");
                return Err(TrainingCenter::duplicate_nome(&new.nome).into());
            }

            let center = ctx.centers().create(new).await?;
            tracing::info!(pk_id = center.pk_id, nome = %center.nome, "Training center created");
            Ok(center)
        })
    }

    async fn get_center(&self, pk_id: i32) -> AppResult<TrainingCenter> {
        self.uow
            .centers()
            .find_by_id(pk_id)
            .await?
            .ok_or_not_found(TrainingCenter::NOT_FOUND)
    }

    async fn list_centers(
        &self,
        filter: TrainingCenterFilter,
        params: PaginationParams,
    ) -> AppResult<Paginated<TrainingCenter>> {
        let (items, total) = self.uow.centers().list(filter, params).await?;
        Ok(Paginated::new(items, params, total))
    }

    async fn update_center(
        &self,
        pk_id: i32,
        patch: TrainingCenterPatch,
    ) -> AppResult<TrainingCenter> {
        with_transaction!(self.uow, |ctx| {
            let mut center = ctx
                .centers()
                .find_by_id(pk_id)
                .await?
                .ok_or_not_found(TrainingCenter::NOT_FOUND)?;

            if patch.is_empty() {
                return Ok(center);
            }

            if let Some(nome) = &patch.nome {
                if let Some(existing) = ctx.centers().find_by_nome(nome).await? {
                    if existing.pk_id != pk_id {
                        tracing::warn!(pk_id, nome = %nome, "Training center name already taken");
                        return Err(TrainingCenter::duplicate_nome(nome).into());
                    }
                }
            }

            patch.apply(&mut center);
            let center = ctx.centers().save(center).await?;
            tracing::info!(pk_id, "Training center updated");
            Ok(center)
        })
    }

    async fn delete_center(&self, pk_id: i32) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| {
            ctx.centers()
                .find_by_id(pk_id)
                .await?
                .ok_or_not_found(TrainingCenter::NOT_FOUND)?;

            let students = ctx.students().count_by_center(pk_id).await?;
            let categories = ctx.categories().count_by_center(pk_id).await?;
            if let Err(err) = TrainingCenter::ensure_deletable(students, categories) {
                tracing::warn!(pk_id, students, categories, "Training center still referenced");
                return Err(err.into());
            }

            ctx.centers().delete(pk_id).await?;
            tracing::info!(pk_id, "Training center deleted");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use crate::infra::MockTrainingCenterRepository;
    use crate::services::test_support::TestUnitOfWork;
    use common::AppError;

    fn center(pk_id: i32, nome: &str) -> TrainingCenter {
        TrainingCenter {
            pk_id,
            id: Uuid::new_v4(),
            nome: nome.to_string(),
            endereco: "Rua X, Q02".to_string(),
            proprietario: "Marcos".to_string(),
        }
    }

    #[tokio::test]
    async fn get_center_returns_the_record() {
        let mut repo = MockTrainingCenterRepository::new();
        repo.expect_find_by_id()
            .with(eq(4))
            .returning(|pk_id| Ok(Some(center(pk_id, "CT King"))));

        let service = TrainingCenterManager::new(Arc::new(TestUnitOfWork::with_centers(repo)));
        let found = service.get_center(4).await.unwrap();

        assert_eq!(found.pk_id, 4);
        assert_eq!(found.nome, "CT King");
    }

    #[tokio::test]
    async fn get_center_missing_is_not_found() {
        let mut repo = MockTrainingCenterRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = TrainingCenterManager::new(Arc::new(TestUnitOfWork::with_centers(repo)));
        let err = service.get_center(99).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == TrainingCenter::NOT_FOUND));
    }

    #[tokio::test]
    async fn list_centers_wraps_the_page() {
        let mut repo = MockTrainingCenterRepository::new();
        repo.expect_list()
            .withf(|filter, params| {
                filter.nome.as_deref() == Some("ct") && params.page == 2 && params.size == 2
            })
            .returning(|_, _| Ok((vec![center(3, "CT A"), center(4, "CT B")], 5)));

        let service = TrainingCenterManager::new(Arc::new(TestUnitOfWork::with_centers(repo)));
        let page = service
            .list_centers(
                TrainingCenterFilter::new(Some("ct".to_string()), None),
                PaginationParams::new(2, 2),
            )
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 2);
        assert_eq!(page.pages, 3);
    }
}
