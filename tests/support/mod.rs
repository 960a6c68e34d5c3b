//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use common::DatabaseConfig;
use domain::{NewCategory, NewStudent, NewTrainingCenter};
use workout_api::infra::Database;
use workout_api::services::Services;

/// Fresh in-memory database with all migrations applied.
pub async fn database() -> Arc<Database> {
    Arc::new(
        Database::connect(&DatabaseConfig::in_memory())
            .await
            .expect("in-memory database"),
    )
}

/// Database file inside `dir`, behind a pool with the default sizes.
pub async fn file_database(dir: &tempfile::TempDir) -> Arc<Database> {
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("workout.db").display()),
        ..DatabaseConfig::default()
    };
    Arc::new(Database::connect(&config).await.expect("file database"))
}

/// Services wired to a fresh in-memory database.
pub async fn services() -> Services {
    Services::from_connection(database().await.get_connection())
}

pub fn new_center(nome: &str) -> NewTrainingCenter {
    NewTrainingCenter {
        nome: nome.to_string(),
        endereco: "Rua X, Q02".to_string(),
        proprietario: "Marcos".to_string(),
    }
}

pub fn new_category(nome: &str, centro_treinamento_id: Option<i32>) -> NewCategory {
    NewCategory {
        nome: nome.to_string(),
        centro_treinamento_id,
    }
}

pub fn new_student(
    nome: &str,
    cpf: &str,
    centro_treinamento_id: i32,
    categoria_id: i32,
) -> NewStudent {
    NewStudent {
        nome: nome.to_string(),
        cpf: cpf.to_string(),
        idade: 25,
        peso: 75.5,
        altura: 1.70,
        sexo: "M".to_string(),
        centro_treinamento_id,
        categoria_id,
    }
}
