//! Student database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Student;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "aluno")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pk_id: i32,
    #[sea_orm(unique)]
    pub id: Uuid,
    pub nome: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub idade: i32,
    pub peso: f64,
    pub altura: f64,
    pub sexo: String,
    pub centro_treinamento_id: i32,
    pub categoria_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::centro_treinamento::Entity",
        from = "Column::CentroTreinamentoId",
        to = "super::centro_treinamento::Column::PkId"
    )]
    CentroTreinamento,
    #[sea_orm(
        belongs_to = "super::categoria::Entity",
        from = "Column::CategoriaId",
        to = "super::categoria::Column::PkId"
    )]
    Categoria,
}

impl Related<super::centro_treinamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CentroTreinamento.def()
    }
}

impl Related<super::categoria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categoria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Student {
    fn from(model: Model) -> Self {
        Student {
            pk_id: model.pk_id,
            id: model.id,
            nome: model.nome,
            cpf: model.cpf,
            idade: model.idade,
            peso: model.peso,
            altura: model.altura,
            sexo: model.sexo,
            centro_treinamento_id: model.centro_treinamento_id,
            categoria_id: model.categoria_id,
        }
    }
}
