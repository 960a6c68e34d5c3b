//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default log level when RUST_LOG is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (local SQLite file, created if missing)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://workout.db?mode=rwc";

/// Default maximum pool size
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default minimum pool size
pub const DEFAULT_DATABASE_MIN_CONNECTIONS: u32 = 1;

/// Default pool connect/acquire timeout in seconds
pub const DEFAULT_DATABASE_CONNECT_TIMEOUT_SECONDS: u64 = 8;
