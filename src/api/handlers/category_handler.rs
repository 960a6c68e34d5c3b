//! Category handlers (`/categorias`).

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::{AppError, AppResult};
use domain::{Category, CategoryDetails, CategoryFilter, CategoryPatch, NewCategory};

use crate::api::extractors::{PkPath, ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::types::{CategoryPage, Created, MessageResponse, PaginationParams};

/// Category creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 10, message = "must have between 1 and 10 characters"))]
    #[schema(example = "Scale", max_length = 10)]
    pub nome: String,
    /// Optional owning training center
    #[schema(example = 1)]
    pub centro_treinamento_id: Option<i32>,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        NewCategory {
            nome: req.nome,
            centro_treinamento_id: req.centro_treinamento_id,
        }
    }
}

/// Partial update; omitted or null fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 10, message = "must have between 1 and 10 characters"))]
    #[schema(example = "RX", max_length = 10)]
    pub nome: Option<String>,
    pub centro_treinamento_id: Option<i32>,
}

impl From<UpdateCategoryRequest> for CategoryPatch {
    fn from(req: UpdateCategoryRequest) -> Self {
        CategoryPatch {
            nome: req.nome,
            centro_treinamento_id: req.centro_treinamento_id,
        }
    }
}

/// List filters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// Case-insensitive substring of the name
    pub nome: Option<String>,
    /// Exact training center
    pub centro_treinamento_id: Option<i32>,
}

impl From<CategoryQuery> for CategoryFilter {
    fn from(query: CategoryQuery) -> Self {
        CategoryFilter::new(query.nome, query.centro_treinamento_id)
    }
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categorias", get(list_categories).post(create_category))
        .route("/categorias/", get(list_categories).post(create_category))
        .route(
            "/categorias/:pk_id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categorias/",
    tag = "Categorias",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryDetails),
        (status = 409, description = "Name already taken"),
        (status = 422, description = "Validation error or unknown training center")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<Created<CategoryDetails>> {
    let category = state
        .category_service
        .create_category(payload.into())
        .await?;
    Ok(Created(category))
}

/// List categories
#[utoipa::path(
    get,
    path = "/categorias/",
    tag = "Categorias",
    params(CategoryQuery, PaginationParams),
    responses(
        (status = 200, description = "Page of categories", body = CategoryPage),
        (status = 422, description = "Invalid filter or pagination parameters")
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<CategoryQuery>, AppError>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> AppResult<Json<CategoryPage>> {
    let page = state
        .category_service
        .list_categories(query.into(), params)
        .await?;
    Ok(Json(page))
}

/// Get a category by primary key
#[utoipa::path(
    get,
    path = "/categorias/{pk_id}",
    tag = "Categorias",
    params(("pk_id" = i32, Path, description = "Category primary key")),
    responses(
        (status = 200, description = "Category found", body = CategoryDetails),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    WithRejection(Path(pk_id), _): PkPath,
) -> AppResult<Json<CategoryDetails>> {
    let category = state.category_service.get_category(pk_id).await?;
    Ok(Json(category))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/categorias/{pk_id}",
    tag = "Categorias",
    params(("pk_id" = i32, Path, description = "Category primary key")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryDetails),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Name already taken"),
        (status = 422, description = "Validation error or unknown training center")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    WithRejection(Path(pk_id), _): PkPath,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> AppResult<Json<CategoryDetails>> {
    let category = state
        .category_service
        .update_category(pk_id, payload.into())
        .await?;
    Ok(Json(category))
}

/// Delete a category without students
#[utoipa::path(
    delete,
    path = "/categorias/{pk_id}",
    tag = "Categorias",
    params(("pk_id" = i32, Path, description = "Category primary key")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Students still reference the category")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    WithRejection(Path(pk_id), _): PkPath,
) -> AppResult<Json<MessageResponse>> {
    state.category_service.delete_category(pk_id).await?;
    Ok(Json(MessageResponse::new(Category::DELETED)))
}
