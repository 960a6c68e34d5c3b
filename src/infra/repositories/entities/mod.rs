//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod aluno;
pub mod categoria;
pub mod centro_treinamento;
