//! Training center handlers (`/centros`).

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
use domain::{NewTrainingCenter, TrainingCenter, TrainingCenterFilter, TrainingCenterPatch};

use crate::api::extractors::{PkPath, ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::types::{Created, MessageResponse, PaginationParams, TrainingCenterPage};

/// Training center creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingCenterRequest {
    #[validate(length(min = 1, max = 20, message = "must have between 1 and 20 characters"))]
    #[schema(example = "CT King", max_length = 20)]
    pub nome: String,
    #[validate(length(min = 1, max = 60, message = "must have between 1 and 60 characters"))]
    #[schema(example = "Rua X, Q02", max_length = 60)]
    pub endereco: String,
    #[validate(length(min = 1, max = 30, message = "must have between 1 and 30 characters"))]
    #[schema(example = "Marcos", max_length = 30)]
    pub proprietario: String,
}

impl From<CreateTrainingCenterRequest> for NewTrainingCenter {
    fn from(req: CreateTrainingCenterRequest) -> Self {
        NewTrainingCenter {
            nome: req.nome,
            endereco: req.endereco,
            proprietario: req.proprietario,
        }
    }
}

/// Partial update; omitted or null fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTrainingCenterRequest {
    #[validate(length(min = 1, max = 20, message = "must have between 1 and 20 characters"))]
    #[schema(example = "CT King", max_length = 20)]
    pub nome: Option<String>,
    #[validate(length(min = 1, max = 60, message = "must have between 1 and 60 characters"))]
    #[schema(max_length = 60)]
    pub endereco: Option<String>,
    #[validate(length(min = 1, max = 30, message = "must have between 1 and 30 characters"))]
    #[schema(max_length = 30)]
    pub proprietario: Option<String>,
}

impl From<UpdateTrainingCenterRequest> for TrainingCenterPatch {
    fn from(req: UpdateTrainingCenterRequest) -> Self {
        TrainingCenterPatch {
            nome: req.nome,
            endereco: req.endereco,
            proprietario: req.proprietario,
        }
    }
}

/// List filters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrainingCenterQuery {
    /// Case-insensitive substring of the name
    pub nome: Option<String>,
    /// Case-insensitive substring of the owner
    pub proprietario: Option<String>,
}

impl From<TrainingCenterQuery> for TrainingCenterFilter {
    fn from(query: TrainingCenterQuery) -> Self {
        TrainingCenterFilter::new(query.nome, query.proprietario)
    }
}

/// Create training center routes
pub fn training_center_routes() -> Router<AppState> {
    Router::new()
        .route("/centros", get(list_centers).post(create_center))
        .route("/centros/", get(list_centers).post(create_center))
        .route(
            "/centros/:pk_id",
            get(get_center).put(update_center).delete(delete_center),
        )
}

/// Create a training center
#[utoipa::path(
    post,
    path = "/centros/",
    tag = "Centros",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created", body = TrainingCenter),
        (status = 409, description = "Name already taken"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_center(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTrainingCenterRequest>,
) -> AppResult<Created<TrainingCenter>> {
    let center = state.center_service.create_center(payload.into()).await?;
    Ok(Created(center))
}

/// List training centers
#[utoipa::path(
    get,
    path = "/centros/",
    tag = "Centros",
    params(TrainingCenterQuery, PaginationParams),
    responses(
        (status = 200, description = "Page of training centers", body = TrainingCenterPage),
        (status = 422, description = "Invalid pagination parameters")
    )
)]
pub async fn list_centers(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<TrainingCenterQuery>, AppError>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> AppResult<Json<TrainingCenterPage>> {
    let page = state
        .center_service
        .list_centers(query.into(), params)
        .await?;
    Ok(Json(page))
}

/// Get a training center by primary key
#[utoipa::path(
    get,
    path = "/centros/{pk_id}",
    tag = "Centros",
    params(("pk_id" = i32, Path, description = "Training center primary key")),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenter),
        (status = 404, description = "Training center not found")
    )
)]
pub async fn get_center(
    State(state): State<AppState>,
    WithRejection(Path(pk_id), _): PkPath,
) -> AppResult<Json<TrainingCenter>> {
    let center = state.center_service.get_center(pk_id).await?;
    Ok(Json(center))
}

/// Update a training center
#[utoipa::path(
    put,
    path = "/centros/{pk_id}",
    tag = "Centros",
    params(("pk_id" = i32, Path, description = "Training center primary key")),
    request_body = UpdateTrainingCenterRequest,
    responses(
        (status = 200, description = "Training center updated", body = TrainingCenter),
        (status = 404, description = "Training center not found"),
        (status = 409, description = "Name already taken"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_center(
    State(state): State<AppState>,
    WithRejection(Path(pk_id), _): PkPath,
    ValidatedJson(payload): ValidatedJson<UpdateTrainingCenterRequest>,
) -> AppResult<Json<TrainingCenter>> {
    let center = state
        .center_service
        .update_center(pk_id, payload.into())
        .await?;
    Ok(Json(center))
}

/// Delete a training center without dependents
#[utoipa::path(
    delete,
    path = "/centros/{pk_id}",
    tag = "Centros",
    params(("pk_id" = i32, Path, description = "Training center primary key")),
    responses(
        (status = 200, description = "Training center deleted", body = MessageResponse),
        (status = 404, description = "Training center not found"),
        (status = 409, description = "Students or categories still reference the center")
    )
)]
pub async fn delete_center(
    State(state): State<AppState>,
    WithRejection(Path(pk_id), _): PkPath,
) -> AppResult<Json<MessageResponse>> {
    state.center_service.delete_center(pk_id).await?;
    Ok(Json(MessageResponse::new(TrainingCenter::DELETED)))
}
