//! HTTP request handlers.

pub mod category_handler;
pub mod student_handler;
pub mod training_center_handler;

pub use category_handler::category_routes;
pub use student_handler::student_routes;
pub use training_center_handler::training_center_routes;
