//! Training center domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Training center (gym facility), unique by `nome`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TrainingCenter {
    /// Surrogate primary key
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub pk_id: i32,
    /// External identifier
    pub id: Uuid,
    #[cfg_attr(feature = "openapi", schema(example = "CT King"))]
    pub nome: String,
    #[cfg_attr(feature = "openapi", schema(example = "Rua X, Q02"))]
    pub endereco: String,
    #[cfg_attr(feature = "openapi", schema(example = "Marcos"))]
    pub proprietario: String,
}

impl TrainingCenter {
    /// Message returned when a training center does not exist
    pub const NOT_FOUND: &'static str = "Centro de treinamento não encontrado";

    /// Message returned after a successful delete
    pub const DELETED: &'static str = "Centro de treinamento deletado com sucesso";

    pub fn not_found() -> DomainError {
        DomainError::not_found(Self::NOT_FOUND)
    }

    /// Conflict raised when `nome` is already taken
    pub fn duplicate_nome(nome: &str) -> DomainError {
        DomainError::conflict(format!(
            "Já existe um centro de treinamento com o nome: {}",
            nome
        ))
    }

    /// Reference error for a foreign key pointing at a missing center
    pub fn missing_reference(field: &'static str, pk_id: i32) -> DomainError {
        DomainError::invalid_reference(
            field,
            format!("Centro de treinamento {} não encontrado", pk_id),
        )
    }

    /// A center may only be removed once no student or category points at it.
    pub fn ensure_deletable(students: u64, categories: u64) -> Result<(), DomainError> {
        if students == 0 && categories == 0 {
            return Ok(());
        }
        Err(DomainError::conflict(format!(
            "Centro de treinamento possui registros vinculados: {} aluno(s), {} categoria(s)",
            students, categories
        )))
    }
}

/// Training center creation data
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrainingCenter {
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
}

/// Partial update: `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingCenterPatch {
    pub nome: Option<String>,
    pub endereco: Option<String>,
    pub proprietario: Option<String>,
}

impl TrainingCenterPatch {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.nome.is_none() && self.endereco.is_none() && self.proprietario.is_none()
    }

    /// Merge the supplied fields into `center`.
    pub fn apply(self, center: &mut TrainingCenter) {
        if let Some(nome) = self.nome {
            center.nome = nome;
        }
        if let Some(endereco) = self.endereco {
            center.endereco = endereco;
        }
        if let Some(proprietario) = self.proprietario {
            center.proprietario = proprietario;
        }
    }
}

/// List filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingCenterFilter {
    /// Case-insensitive substring of `nome`
    pub nome: Option<String>,
    /// Case-insensitive substring of `proprietario`
    pub proprietario: Option<String>,
}

impl TrainingCenterFilter {
    pub fn new(nome: Option<String>, proprietario: Option<String>) -> Self {
        Self {
            nome: crate::non_blank(nome),
            proprietario: crate::non_blank(proprietario),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> TrainingCenter {
        TrainingCenter {
            pk_id: 1,
            id: Uuid::new_v4(),
            nome: "Gym1".to_string(),
            endereco: "Rua A".to_string(),
            proprietario: "Ana".to_string(),
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut c = center();
        let before = c.clone();
        let patch = TrainingCenterPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut c);
        assert_eq!(c, before);
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let mut c = center();
        TrainingCenterPatch {
            endereco: Some("Rua B".to_string()),
            ..Default::default()
        }
        .apply(&mut c);

        assert_eq!(c.nome, "Gym1");
        assert_eq!(c.endereco, "Rua B");
        assert_eq!(c.proprietario, "Ana");
    }

    #[test]
    fn deletable_only_without_dependents() {
        assert!(TrainingCenter::ensure_deletable(0, 0).is_ok());
        assert!(matches!(
            TrainingCenter::ensure_deletable(2, 0),
            Err(DomainError::Conflict(_))
        ));
        assert!(matches!(
            TrainingCenter::ensure_deletable(0, 1),
            Err(DomainError::Conflict(_))
        ));
    }

    #[test]
    fn blank_filters_are_dropped() {
        let filter = TrainingCenterFilter::new(Some("  ".to_string()), Some("ana".to_string()));
        assert_eq!(filter.nome, None);
        assert_eq!(filter.proprietario.as_deref(), Some("ana"));
    }

    #[test]
    fn duplicate_message_names_the_value() {
        let err = TrainingCenter::duplicate_nome("Alpha");
        assert!(err.to_string().contains("nome: Alpha"));
    }
}
