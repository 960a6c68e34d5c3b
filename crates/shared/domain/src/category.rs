//! Category domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::training_center::TrainingCenter;

/// Student classification, unique by `nome`.
///
/// A category may optionally belong to a training center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Category {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub pk_id: i32,
    pub id: Uuid,
    #[cfg_attr(feature = "openapi", schema(example = "Scale"))]
    pub nome: String,
    pub centro_treinamento_id: Option<i32>,
}

impl Category {
    pub const NOT_FOUND: &'static str = "Categoria não encontrada";
    pub const DELETED: &'static str = "Categoria deletada com sucesso";

    pub fn not_found() -> DomainError {
        DomainError::not_found(Self::NOT_FOUND)
    }

    pub fn duplicate_nome(nome: &str) -> DomainError {
        DomainError::conflict(format!("Já existe uma categoria com o nome: {}", nome))
    }

    pub fn missing_reference(field: &'static str, pk_id: i32) -> DomainError {
        DomainError::invalid_reference(field, format!("Categoria {} não encontrada", pk_id))
    }

    /// A category may only be removed once no student points at it.
    pub fn ensure_deletable(students: u64) -> DomainResult<()> {
        if students == 0 {
            return Ok(());
        }
        Err(DomainError::conflict(format!(
            "Categoria possui {} aluno(s) vinculado(s)",
            students
        )))
    }
}

/// Category with its training center resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryDetails {
    #[serde(flatten)]
    pub category: Category,
    pub centro_treinamento: Option<TrainingCenter>,
}

/// Category creation data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub nome: String,
    pub centro_treinamento_id: Option<i32>,
}

/// Partial update: `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    pub nome: Option<String>,
    pub centro_treinamento_id: Option<i32>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.nome.is_none() && self.centro_treinamento_id.is_none()
    }

    /// Merge the supplied fields into `category`.
    pub fn apply(self, category: &mut Category) {
        if let Some(nome) = self.nome {
            category.nome = nome;
        }
        if let Some(centro_treinamento_id) = self.centro_treinamento_id {
            category.centro_treinamento_id = Some(centro_treinamento_id);
        }
    }
}

/// List filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter {
    /// Case-insensitive substring of `nome`
    pub nome: Option<String>,
    /// Exact training center
    pub centro_treinamento_id: Option<i32>,
}

impl CategoryFilter {
    pub fn new(nome: Option<String>, centro_treinamento_id: Option<i32>) -> Self {
        Self {
            nome: crate::non_blank(nome),
            centro_treinamento_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category() -> Category {
        Category {
            pk_id: 3,
            id: Uuid::new_v4(),
            nome: "Scale".to_string(),
            centro_treinamento_id: None,
        }
    }

    #[test]
    fn patch_links_center_and_keeps_name() {
        let mut c = category();
        CategoryPatch {
            centro_treinamento_id: Some(7),
            ..Default::default()
        }
        .apply(&mut c);

        assert_eq!(c.nome, "Scale");
        assert_eq!(c.centro_treinamento_id, Some(7));
    }

    #[test]
    fn category_with_students_is_not_deletable() {
        assert!(Category::ensure_deletable(0).is_ok());
        let err = Category::ensure_deletable(4).unwrap_err();
        assert!(err.to_string().contains("4 aluno(s)"));
    }

    #[test]
    fn details_serialize_flat() {
        let details = CategoryDetails {
            category: category(),
            centro_treinamento: None,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["pk_id"], 3);
        assert_eq!(json["nome"], "Scale");
        assert!(json["centro_treinamento"].is_null());
    }
}
