//! Training center database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::TrainingCenter;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "centro_treinamento")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pk_id: i32,
    #[sea_orm(unique)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aluno::Entity")]
    Aluno,
    #[sea_orm(has_many = "super::categoria::Entity")]
    Categoria,
}

impl Related<super::aluno::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aluno.def()
    }
}

impl Related<super::categoria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categoria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for TrainingCenter {
    fn from(model: Model) -> Self {
        TrainingCenter {
            pk_id: model.pk_id,
            id: model.id,
            nome: model.nome,
            endereco: model.endereco,
            proprietario: model.proprietario,
        }
    }
}
