//! Workout API - training centers, categories and students over HTTP.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **services**: Application use cases and business logic
//! - **infra**: Database, migrations, repositories and Unit of Work
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared types (pagination, responses)
//!
//! Domain entities live in the `domain` crate and the error type in `common`.
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use common::{AppError, AppResult};
pub use config::Config;
pub use infra::Database;
