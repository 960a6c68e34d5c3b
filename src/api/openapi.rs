//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{category_handler, student_handler, training_center_handler};
use crate::types::{CategoryPage, MessageResponse, StudentPage, TrainingCenterPage};
use domain::{Category, CategoryDetails, Student, StudentDetails, TrainingCenter};

/// OpenAPI documentation for the Workout API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workout API",
        version = "0.1.0",
        description = "Training centers, categories and students with pagination, filtering and referential integrity",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Training center endpoints
        training_center_handler::create_center,
        training_center_handler::list_centers,
        training_center_handler::get_center,
        training_center_handler::update_center,
        training_center_handler::delete_center,
        // Category endpoints
        category_handler::create_category,
        category_handler::list_categories,
        category_handler::get_category,
        category_handler::update_category,
        category_handler::delete_category,
        // Student endpoints
        student_handler::create_student,
        student_handler::list_students,
        student_handler::get_student,
        student_handler::update_student,
        student_handler::delete_student,
    ),
    components(
        schemas(
            // Domain types
            TrainingCenter,
            Category,
            CategoryDetails,
            Student,
            StudentDetails,
            // Pages
            TrainingCenterPage,
            CategoryPage,
            StudentPage,
            MessageResponse,
            // Requests
            training_center_handler::CreateTrainingCenterRequest,
            training_center_handler::UpdateTrainingCenterRequest,
            category_handler::CreateCategoryRequest,
            category_handler::UpdateCategoryRequest,
            student_handler::CreateStudentRequest,
            student_handler::UpdateStudentRequest,
        )
    ),
    tags(
        (name = "Centros", description = "Training center management"),
        (name = "Categorias", description = "Category management"),
        (name = "Alunos", description = "Student management")
    )
)]
pub struct ApiDoc;
