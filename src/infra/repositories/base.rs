//! Query helpers shared by every repository.

use common::{AppError, AppResult};
use domain::DomainError;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Select, SqlErr,
};

use crate::types::PaginationParams;

/// Fetch one page of `select` together with the total number of matching rows.
pub(crate) async fn fetch_page<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    params: &PaginationParams,
) -> AppResult<(Vec<E::Model>, u64)>
where
    E: EntityTrait,
    E::Model: Sync,
{
    let paginator = select.paginate(db, params.size);
    let total = paginator.num_items().await?;
    let models = paginator.fetch_page(params.page_index()).await?;
    Ok((models, total))
}

/// Escape character for LIKE patterns; needs no quoting on any backend.
const LIKE_ESCAPE: char = '!';

/// Case-insensitive substring match on a text column.
///
/// `%` and `_` in `needle` match literally.
pub(crate) fn contains_ci<C: ColumnTrait>(column: C, needle: &str) -> SimpleExpr {
    let escaped = needle
        .to_lowercase()
        .replace(LIKE_ESCAPE, "!!")
        .replace('%', "!%")
        .replace('_', "!_");

    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(format!("%{}%", escaped)).escape(LIKE_ESCAPE))
}

/// Translate a unique-key violation into the entity's conflict error.
///
/// Covers writes that race past the natural-key pre-check.
pub(crate) fn unique_violation(err: DbErr, conflict: impl FnOnce() -> DomainError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(%detail, "Unique constraint violated");
            conflict().into()
        }
        _ => AppError::from(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryFilter, QueryTrait};

    use crate::infra::repositories::entities::centro_treinamento;

    #[test]
    fn contains_ci_lowercases_and_escapes_wildcards() {
        let sql = centro_treinamento::Entity::find()
            .filter(contains_ci(centro_treinamento::Column::Nome, "A_b%"))
            .build(DbBackend::Sqlite)
            .to_string();

        assert!(sql.contains("LOWER(\"nome\")"), "{}", sql);
        assert!(sql.contains("LIKE"), "{}", sql);
        assert!(sql.contains("ESCAPE"), "{}", sql);
        assert!(!sql.contains("A_b"), "{}", sql);
    }

    #[test]
    fn other_database_errors_stay_internal() {
        let err = unique_violation(DbErr::Custom("boom".to_string()), || {
            DomainError::conflict("taken")
        });
        assert!(matches!(err, AppError::Database(_)));
    }
}
