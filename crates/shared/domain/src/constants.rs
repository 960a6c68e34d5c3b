//! Domain-level constants.
//!
//! These constants define the storage limits of each entity's text fields.

// =============================================================================
// Training center
// =============================================================================

/// Maximum length of a training center name
pub const CENTER_NOME_MAX_LEN: u32 = 20;

/// Maximum length of a training center address
pub const CENTER_ENDERECO_MAX_LEN: u32 = 60;

/// Maximum length of a training center owner name
pub const CENTER_PROPRIETARIO_MAX_LEN: u32 = 30;

// =============================================================================
// Category
// =============================================================================

/// Maximum length of a category name
pub const CATEGORY_NOME_MAX_LEN: u32 = 10;

// =============================================================================
// Student
// =============================================================================

/// Maximum length of a student name
pub const STUDENT_NOME_MAX_LEN: u32 = 50;

/// Exact length of a CPF (national ID, digits only)
pub const CPF_LEN: u32 = 11;

/// Exact length of the `sexo` field
pub const SEXO_LEN: u32 = 1;
