//! Student domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Category;
use crate::error::DomainError;
use crate::training_center::TrainingCenter;

/// Trainee linked to exactly one training center and one category,
/// unique by `cpf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Student {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub pk_id: i32,
    pub id: Uuid,
    #[cfg_attr(feature = "openapi", schema(example = "Joao"))]
    pub nome: String,
    /// National ID, 11 characters
    #[cfg_attr(feature = "openapi", schema(example = "12345678900"))]
    pub cpf: String,
    #[cfg_attr(feature = "openapi", schema(example = 25))]
    pub idade: i32,
    #[cfg_attr(feature = "openapi", schema(example = 75.5))]
    pub peso: f64,
    #[cfg_attr(feature = "openapi", schema(example = 1.70))]
    pub altura: f64,
    #[cfg_attr(feature = "openapi", schema(example = "M"))]
    pub sexo: String,
    pub centro_treinamento_id: i32,
    pub categoria_id: i32,
}

impl Student {
    pub const NOT_FOUND: &'static str = "Aluno não encontrado";
    pub const DELETED: &'static str = "Aluno deletado com sucesso";

    pub fn not_found() -> DomainError {
        DomainError::not_found(Self::NOT_FOUND)
    }

    pub fn duplicate_cpf(cpf: &str) -> DomainError {
        DomainError::conflict(format!("Já existe um aluno cadastrado com o cpf: {}", cpf))
    }
}

/// Student with training center and category resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentDetails {
    #[serde(flatten)]
    pub student: Student,
    pub centro_treinamento: Option<TrainingCenter>,
    pub categoria: Option<Category>,
}

/// Student creation data. Both references are required.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: f64,
    pub altura: f64,
    pub sexo: String,
    pub centro_treinamento_id: i32,
    pub categoria_id: i32,
}

/// Partial update: `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub idade: Option<i32>,
    pub peso: Option<f64>,
    pub altura: Option<f64>,
    pub sexo: Option<String>,
    pub centro_treinamento_id: Option<i32>,
    pub categoria_id: Option<i32>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.nome.is_none()
            && self.cpf.is_none()
            && self.idade.is_none()
            && self.peso.is_none()
            && self.altura.is_none()
            && self.sexo.is_none()
            && self.centro_treinamento_id.is_none()
            && self.categoria_id.is_none()
    }

    /// Merge the supplied fields into `student`.
    pub fn apply(self, student: &mut Student) {
        if let Some(nome) = self.nome {
            student.nome = nome;
        }
        if let Some(cpf) = self.cpf {
            student.cpf = cpf;
        }
        if let Some(idade) = self.idade {
            student.idade = idade;
        }
        if let Some(peso) = self.peso {
            student.peso = peso;
        }
        if let Some(altura) = self.altura {
            student.altura = altura;
        }
        if let Some(sexo) = self.sexo {
            student.sexo = sexo;
        }
        if let Some(centro_treinamento_id) = self.centro_treinamento_id {
            student.centro_treinamento_id = centro_treinamento_id;
        }
        if let Some(categoria_id) = self.categoria_id {
            student.categoria_id = categoria_id;
        }
    }
}

/// List filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilter {
    /// Case-insensitive substring of `nome`
    pub nome: Option<String>,
    /// Exact `cpf`
    pub cpf: Option<String>,
}

impl StudentFilter {
    pub fn new(nome: Option<String>, cpf: Option<String>) -> Self {
        Self {
            nome: crate::non_blank(nome),
            cpf: crate::non_blank(cpf),
        }
    }
}
