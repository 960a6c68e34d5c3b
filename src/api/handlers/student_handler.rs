//! Student handlers (`/alunos`).

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
use domain::{NewStudent, Student, StudentDetails, StudentFilter, StudentPatch};

use crate::api::extractors::{PkPath, ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::types::{Created, MessageResponse, PaginationParams, StudentPage};

/// Student creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 50, message = "must have between 1 and 50 characters"))]
    #[schema(example = "Joao", max_length = 50)]
    pub nome: String,
    #[validate(length(equal = 11, message = "must have exactly 11 characters"))]
    #[schema(example = "12345678900", min_length = 11, max_length = 11)]
    pub cpf: String,
    #[schema(example = 25)]
    pub idade: i32,
    #[schema(example = 75.5)]
    pub peso: f64,
    #[schema(example = 1.70)]
    pub altura: f64,
    #[validate(length(equal = 1, message = "must be a single character"))]
    #[schema(example = "M", min_length = 1, max_length = 1)]
    pub sexo: String,
    #[schema(example = 1)]
    pub centro_treinamento_id: i32,
    #[schema(example = 1)]
    pub categoria_id: i32,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        NewStudent {
            nome: req.nome,
            cpf: req.cpf,
            idade: req.idade,
            peso: req.peso,
            altura: req.altura,
            sexo: req.sexo,
            centro_treinamento_id: req.centro_treinamento_id,
            categoria_id: req.categoria_id,
        }
    }
}

/// Partial update; omitted or null fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 50, message = "must have between 1 and 50 characters"))]
    #[schema(max_length = 50)]
    pub nome: Option<String>,
    #[validate(length(equal = 11, message = "must have exactly 11 characters"))]
    #[schema(min_length = 11, max_length = 11)]
    pub cpf: Option<String>,
    pub idade: Option<i32>,
    pub peso: Option<f64>,
    pub altura: Option<f64>,
    #[validate(length(equal = 1, message = "must be a single character"))]
    #[schema(min_length = 1, max_length = 1)]
    pub sexo: Option<String>,
    pub centro_treinamento_id: Option<i32>,
    pub categoria_id: Option<i32>,
}

impl From<UpdateStudentRequest> for StudentPatch {
    fn from(req: UpdateStudentRequest) -> Self {
        StudentPatch {
            nome: req.nome,
            cpf: req.cpf,
            idade: req.idade,
            peso: req.peso,
            altura: req.altura,
            sexo: req.sexo,
            centro_treinamento_id: req.centro_treinamento_id,
            categoria_id: req.categoria_id,
        }
    }
}

/// List filters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentQuery {
    /// Case-insensitive substring of the name
    pub nome: Option<String>,
    /// Exact national ID
    pub cpf: Option<String>,
}

impl From<StudentQuery> for StudentFilter {
    fn from(query: StudentQuery) -> Self {
        StudentFilter::new(query.nome, query.cpf)
    }
}

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/alunos", get(list_students).post(create_student))
        .route("/alunos/", get(list_students).post(create_student))
        .route(
            "/alunos/:pk_id",
            get(get_student).put(update_student).delete(delete_student),
        )
}

/// Create a student
#[utoipa::path(
    post,
    path = "/alunos/",
    tag = "Alunos",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentDetails),
        (status = 409, description = "CPF already registered"),
        (status = 422, description = "Validation error or unknown center/category")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateStudentRequest>,
) -> AppResult<Created<StudentDetails>> {
    let student = state.student_service.create_student(payload.into()).await?;
    Ok(Created(student))
}

/// List students
#[utoipa::path(
    get,
    path = "/alunos/",
    tag = "Alunos",
    params(StudentQuery, PaginationParams),
    responses(
        (status = 200, description = "Page of students", body = StudentPage),
        (status = 422, description = "Invalid pagination parameters")
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<StudentQuery>, AppError>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> AppResult<Json<StudentPage>> {
    let page = state
        .student_service
        .list_students(query.into(), params)
        .await?;
    Ok(Json(page))
}

/// Get a student by primary key
#[utoipa::path(
    get,
    path = "/alunos/{pk_id}",
    tag = "Alunos",
    params(("pk_id" = i32, Path, description = "Student primary key")),
    responses(
        (status = 200, description = "Student found", body = StudentDetails),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    WithRejection(Path(pk_id), _): PkPath,
) -> AppResult<Json<StudentDetails>> {
    let student = state.student_service.get_student(pk_id).await?;
    Ok(Json(student))
}

/// Update a student
#[utoipa::path(
    put,
    path = "/alunos/{pk_id}",
    tag = "Alunos",
    params(("pk_id" = i32, Path, description = "Student primary key")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentDetails),
        (status = 404, description = "Student not found"),
        (status = 409, description = "CPF already registered"),
        (status = 422, description = "Validation error or unknown center/category")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    WithRejection(Path(pk_id), _): PkPath,
    ValidatedJson(payload): ValidatedJson<UpdateStudentRequest>,
) -> AppResult<Json<StudentDetails>> {
    let student = state
        .student_service
        .update_student(pk_id, payload.into())
        .await?;
    Ok(Json(student))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/alunos/{pk_id}",
    tag = "Alunos",
    params(("pk_id" = i32, Path, description = "Student primary key")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    WithRejection(Path(pk_id), _): PkPath,
) -> AppResult<Json<MessageResponse>> {
    state.student_service.delete_student(pk_id).await?;
    Ok(Json(MessageResponse::new(Student::DELETED)))
}
