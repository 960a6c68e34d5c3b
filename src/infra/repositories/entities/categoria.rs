//! Category database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Category;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categoria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pk_id: i32,
    #[sea_orm(unique)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub nome: String,
    pub centro_treinamento_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::centro_treinamento::Entity",
        from = "Column::CentroTreinamentoId",
        to = "super::centro_treinamento::Column::PkId"
    )]
    CentroTreinamento,
    #[sea_orm(has_many = "super::aluno::Entity")]
    Aluno,
}

impl Related<super::centro_treinamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CentroTreinamento.def()
    }
}

impl Related<super::aluno::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aluno.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(model: Model) -> Self {
        Category {
            pk_id: model.pk_id,
            id: model.id,
            nome: model.nome,
            centro_treinamento_id: model.centro_treinamento_id,
        }
    }
}
