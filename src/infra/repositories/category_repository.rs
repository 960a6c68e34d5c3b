//! Category repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::base::{contains_ci, fetch_page, unique_violation};
use super::entities::categoria::{self, ActiveModel, Entity as CategoryEntity};
use super::training_center_repository;
use common::{AppError, AppResult};
use domain::{Category, CategoryDetails, CategoryFilter, NewCategory};

use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to categories outside of a transaction.
///
/// Results come with their training center resolved.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, pk_id: i32) -> AppResult<Option<CategoryDetails>>;

    /// Filtered page ordered by `pk_id`, plus the total match count
    async fn list(
        &self,
        filter: CategoryFilter,
        params: PaginationParams,
    ) -> AppResult<(Vec<CategoryDetails>, u64)>;
}

/// Concrete implementation of CategoryRepository
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn find_by_id(&self, pk_id: i32) -> AppResult<Option<CategoryDetails>> {
        match find_by_id(&self.db, pk_id).await? {
            Some(category) => Ok(Some(details(&self.db, category).await?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        filter: CategoryFilter,
        params: PaginationParams,
    ) -> AppResult<(Vec<CategoryDetails>, u64)> {
        let mut query = CategoryEntity::find();
        if let Some(nome) = &filter.nome {
            query = query.filter(contains_ci(categoria::Column::Nome, nome));
        }
        if let Some(centro_treinamento_id) = filter.centro_treinamento_id {
            query = query.filter(categoria::Column::CentroTreinamentoId.eq(centro_treinamento_id));
        }
        let query = query.order_by_asc(categoria::Column::PkId);

        let (models, total) = fetch_page(&self.db, query, &params).await?;
        let categories = models.into_iter().map(Category::from).collect();
        Ok((with_centers(&self.db, categories).await?, total))
    }
}

pub(crate) async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    pk_id: i32,
) -> AppResult<Option<Category>> {
    let result = CategoryEntity::find_by_id(pk_id)
        .one(conn)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(Category::from))
}

pub(crate) async fn find_by_nome<C: ConnectionTrait>(
    conn: &C,
    nome: &str,
) -> AppResult<Option<Category>> {
    let result = CategoryEntity::find()
        .filter(categoria::Column::Nome.eq(nome))
        .one(conn)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(Category::from))
}

/// Load the categories with the given keys, keyed by `pk_id`.
pub(crate) async fn find_many<C: ConnectionTrait>(
    conn: &C,
    pk_ids: Vec<i32>,
) -> AppResult<HashMap<i32, Category>> {
    if pk_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = CategoryEntity::find()
        .filter(categoria::Column::PkId.is_in(pk_ids))
        .all(conn)
        .await
        .map_err(AppError::from)?;

    Ok(models
        .into_iter()
        .map(|m| (m.pk_id, Category::from(m)))
        .collect())
}

/// Number of categories linked to a training center.
pub(crate) async fn count_by_center<C: ConnectionTrait>(
    conn: &C,
    centro_treinamento_id: i32,
) -> AppResult<u64> {
    CategoryEntity::find()
        .filter(categoria::Column::CentroTreinamentoId.eq(centro_treinamento_id))
        .count(conn)
        .await
        .map_err(AppError::from)
}

pub(crate) async fn details<C: ConnectionTrait>(
    conn: &C,
    category: Category,
) -> AppResult<CategoryDetails> {
    let centro_treinamento = match category.centro_treinamento_id {
        Some(pk_id) => training_center_repository::find_by_id(conn, pk_id).await?,
        None => None,
    };

    Ok(CategoryDetails {
        category,
        centro_treinamento,
    })
}

/// Resolve the training center of every category with a single query.
pub(crate) async fn with_centers<C: ConnectionTrait>(
    conn: &C,
    categories: Vec<Category>,
) -> AppResult<Vec<CategoryDetails>> {
    let mut center_ids: Vec<i32> = categories
        .iter()
        .filter_map(|c| c.centro_treinamento_id)
        .collect();
    center_ids.sort_unstable();
    center_ids.dedup();

    let centers = training_center_repository::find_many(conn, center_ids).await?;

    Ok(categories
        .into_iter()
        .map(|category| {
            let centro_treinamento = category
                .centro_treinamento_id
                .and_then(|pk_id| centers.get(&pk_id).cloned());
            CategoryDetails {
                category,
                centro_treinamento,
            }
        })
        .collect())
}

pub(crate) async fn insert<C: ConnectionTrait>(conn: &C, new: NewCategory) -> AppResult<Category> {
    let nome = new.nome.clone();
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        nome: Set(new.nome),
        centro_treinamento_id: Set(new.centro_treinamento_id),
        ..Default::default()
    };

    let model = active_model
        .insert(conn)
        .await
        .map_err(|e| unique_violation(e, || Category::duplicate_nome(&nome)))?;

    Ok(Category::from(model))
}

/// Write every mutable column of `category` back to its row.
pub(crate) async fn save<C: ConnectionTrait>(conn: &C, category: Category) -> AppResult<Category> {
    let nome = category.nome.clone();
    let active_model = ActiveModel {
        pk_id: Set(category.pk_id),
        id: Set(category.id),
        nome: Set(category.nome),
        centro_treinamento_id: Set(category.centro_treinamento_id),
    };

    let model = active_model
        .update(conn)
        .await
        .map_err(|e| unique_violation(e, || Category::duplicate_nome(&nome)))?;

    Ok(Category::from(model))
}

pub(crate) async fn delete<C: ConnectionTrait>(conn: &C, pk_id: i32) -> AppResult<()> {
    let result = CategoryEntity::delete_by_id(pk_id)
        .exec(conn)
        .await
        .map_err(AppError::from)?;

    if result.rows_affected == 0 {
        return Err(Category::not_found().into());
    }

    Ok(())
}
