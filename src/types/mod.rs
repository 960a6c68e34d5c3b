//! Shared types for list and response helpers.

mod pagination;
mod response;

pub use pagination::{CategoryPage, Paginated, PaginationParams, StudentPage, TrainingCenterPage};
pub use response::{Created, MessageResponse};
