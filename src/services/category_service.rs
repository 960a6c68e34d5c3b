//! Category service - create, read, list, update and delete categories.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{
    Category, CategoryDetails, CategoryFilter, CategoryPatch, NewCategory, TrainingCenter,
};

use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};
use crate::with_transaction;

const CENTER_FIELD: &str = "centro_treinamento_id";

/// Category service trait for dependency injection.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Create a category with a free `nome` and an existing center, if given
    async fn create_category(&self, new: NewCategory) -> AppResult<CategoryDetails>;

    async fn get_category(&self, pk_id: i32) -> AppResult<CategoryDetails>;

    async fn list_categories(
        &self,
        filter: CategoryFilter,
        params: PaginationParams,
    ) -> AppResult<Paginated<CategoryDetails>>;

    /// Apply the supplied fields; an empty patch returns the record unchanged
    async fn update_category(
        &self,
        pk_id: i32,
        patch: CategoryPatch,
    ) -> AppResult<CategoryDetails>;

    /// Remove a category that no student references
    async fn delete_category(&self, pk_id: i32) -> AppResult<()>;
}

/// Concrete implementation of CategoryService using Unit of Work.
pub struct CategoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CategoryManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CategoryService for CategoryManager<U> {
    async fn create_category(&self, new: NewCategory) -> AppResult<CategoryDetails> {
        with_transaction!(self.uow, |ctx| {
            if let Some(center_id) = new.centro_treinamento_id {
                if ctx.centers().find_by_id(center_id).await?.is_none() {
                    return Err(TrainingCenter::missing_reference(CENTER_FIELD, center_id).into());
                }
            }

            if ctx.categories().find_by_nome(&new.nome).await?.is_some() {
                tracing::warn!(nome = %new.nome, "Category name already taken");
                return Err(Category::duplicate_nome(&new.nome).into());
            }

            let category = ctx.categories().create(new).await?;
            tracing::info!(pk_id = category.pk_id, nome = %category.nome, "Category created");
            ctx.categories().details(category).await
        })
    }

    async fn get_category(&self, pk_id: i32) -> AppResult<CategoryDetails> {
        self.uow
            .categories()
            .find_by_id(pk_id)
            .await?
            .ok_or_not_found(Category::NOT_FOUND)
    }

    async fn list_categories(
        &self,
        filter: CategoryFilter,
        params: PaginationParams,
    ) -> AppResult<Paginated<CategoryDetails>> {
        let (items, total) = self.uow.categories().list(filter, params).await?;
        Ok(Paginated::new(items, params, total))
    }

    async fn update_category(
        &self,
        pk_id: i32,
        patch: CategoryPatch,
    ) -> AppResult<CategoryDetails> {
        with_transaction!(self.uow, |ctx| {
            let mut category = ctx
                .categories()
                .find_by_id(pk_id)
                .await?
                .ok_or_not_found(Category::NOT_FOUND)?;

            if patch.is_empty() {
                return ctx.categories().details(category).await;
            }

            if let Some(center_id) = patch.centro_treinamento_id {
                if ctx.centers().find_by_id(center_id).await?.is_none() {
                    return Err(TrainingCenter::missing_reference(CENTER_FIELD, center_id).into());
                }
            }

            if let Some(nome) = &patch.nome {
                if let Some(existing) = ctx.categories().find_by_nome(nome).await? {
                    if existing.pk_id != pk_id {
                        tracing::warn!(pk_id, nome = %nome, "Category name already taken");
                        return Err(Category::duplicate_nome(nome).into());
                    }
                }
            }

            patch.apply(&mut category);
            let category = ctx.categories().save(category).await?;
            tracing::info!(pk_id, "Category updated");
            ctx.categories().details(category).await
        })
    }

    async fn delete_category(&self, pk_id: i32) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| {
            ctx.categories()
                .find_by_id(pk_id)
                .await?
                .ok_or_not_found(Category::NOT_FOUND)?;

            let students = ctx.students().count_by_category(pk_id).await?;
            if let Err(err) = Category::ensure_deletable(students) {
                tracing::warn!(pk_id, students, "Category still referenced");
                return Err(err.into());
            }

            ctx.categories().delete(pk_id).await?;
            tracing::info!(pk_id, "Category deleted");
            Ok(())
        })
    }
}
