//! Training center repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::base::{contains_ci, fetch_page, unique_violation};
use super::entities::centro_treinamento::{self, ActiveModel, Entity as CenterEntity};
use common::{AppError, AppResult};
use domain::{NewTrainingCenter, TrainingCenter, TrainingCenterFilter};

use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to training centers outside of a transaction.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TrainingCenterRepository: Send + Sync {
    /// Find a training center by primary key
    async fn find_by_id(&self, pk_id: i32) -> AppResult<Option<TrainingCenter>>;

    /// Filtered page ordered by `pk_id`, plus the total match count
    async fn list(
        &self,
        filter: TrainingCenterFilter,
        params: PaginationParams,
    ) -> AppResult<(Vec<TrainingCenter>, u64)>;
}

/// Concrete implementation of TrainingCenterRepository
pub struct TrainingCenterStore {
    db: DatabaseConnection,
}

impl TrainingCenterStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TrainingCenterRepository for TrainingCenterStore {
    async fn find_by_id(&self, pk_id: i32) -> AppResult<Option<TrainingCenter>> {
        find_by_id(&self.db, pk_id).await
    }

    async fn list(
        &self,
        filter: TrainingCenterFilter,
        params: PaginationParams,
    ) -> AppResult<(Vec<TrainingCenter>, u64)> {
        let mut query = CenterEntity::find();
        if let Some(nome) = &filter.nome {
            query = query.filter(contains_ci(centro_treinamento::Column::Nome, nome));
        }
        if let Some(proprietario) = &filter.proprietario {
            query = query.filter(contains_ci(
                centro_treinamento::Column::Proprietario,
                proprietario,
            ));
        }
        let query = query.order_by_asc(centro_treinamento::Column::PkId);

        let (models, total) = fetch_page(&self.db, query, &params).await?;
        Ok((models.into_iter().map(TrainingCenter::from).collect(), total))
    }
}

pub(crate) async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    pk_id: i32,
) -> AppResult<Option<TrainingCenter>> {
    let result = CenterEntity::find_by_id(pk_id)
        .one(conn)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(TrainingCenter::from))
}

pub(crate) async fn find_by_nome<C: ConnectionTrait>(
    conn: &C,
    nome: &str,
) -> AppResult<Option<TrainingCenter>> {
    let result = CenterEntity::find()
        .filter(centro_treinamento::Column::Nome.eq(nome))
        .one(conn)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(TrainingCenter::from))
}

/// Load the centers with the given keys, keyed by `pk_id`.
pub(crate) async fn find_many<C: ConnectionTrait>(
    conn: &C,
    pk_ids: Vec<i32>,
) -> AppResult<HashMap<i32, TrainingCenter>> {
    if pk_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = CenterEntity::find()
        .filter(centro_treinamento::Column::PkId.is_in(pk_ids))
        .all(conn)
        .await
        .map_err(AppError::from)?;

    Ok(models
        .into_iter()
        .map(|m| (m.pk_id, TrainingCenter::from(m)))
        .collect())
}

pub(crate) async fn insert<C: ConnectionTrait>(
    conn: &C,
    new: NewTrainingCenter,
) -> AppResult<TrainingCenter> {
    let nome = new.nome.clone();
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        nome: Set(new.nome),
        endereco: Set(new.endereco),
        proprietario: Set(new.proprietario),
        ..Default::default()
    };

    let model = active_model
        .insert(conn)
        .await
        .map_err(|e| unique_violation(e, || TrainingCenter::duplicate_nome(&nome)))?;

    Ok(TrainingCenter::from(model))
}

/// Write every mutable column of `center` back to its row.
pub(crate) async fn save<C: ConnectionTrait>(
    conn: &C,
    center: TrainingCenter,
) -> AppResult<TrainingCenter> {
    let nome = center.nome.clone();
    let active_model = ActiveModel {
        pk_id: Set(center.pk_id),
        id: Set(center.id),
        nome: Set(center.nome),
        endereco: Set(center.endereco),
        proprietario: Set(center.proprietario),
    };

    let model = active_model
        .update(conn)
        .await
        .map_err(|e| unique_violation(e, || TrainingCenter::duplicate_nome(&nome)))?;

    Ok(TrainingCenter::from(model))
}

pub(crate) async fn delete<C: ConnectionTrait>(conn: &C, pk_id: i32) -> AppResult<()> {
    let result = CenterEntity::delete_by_id(pk_id)
        .exec(conn)
        .await
        .map_err(AppError::from)?;

    if result.rows_affected == 0 {
        return Err(TrainingCenter::not_found().into());
    }

    Ok(())
}
