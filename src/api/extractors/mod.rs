//! Custom request extractors.

mod validated_json;
mod validated_query;

pub use validated_json::{field_errors, ValidatedJson};
pub use validated_query::ValidatedQuery;

use axum::extract::Path;
use axum_extra::extract::WithRejection;
use common::AppError;

/// Integer primary key from the URL; a non-numeric segment is a validation error.
pub type PkPath = WithRejection<Path<i32>, AppError>;
