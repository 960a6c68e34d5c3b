//! Migration: Create categoria table.

use domain::CATEGORY_NOME_MAX_LEN;
use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_centro_treinamento::CentroTreinamento;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categoria::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categoria::PkId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categoria::Id).uuid().not_null().unique_key())
                    .col(
                        ColumnDef::new(Categoria::Nome)
                            .string_len(CATEGORY_NOME_MAX_LEN)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Categoria::CentroTreinamentoId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_categoria_centro_treinamento")
                            .from(Categoria::Table, Categoria::CentroTreinamentoId)
                            .to(CentroTreinamento::Table, CentroTreinamento::PkId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_categoria_centro_treinamento_id")
                    .table(Categoria::Table)
                    .col(Categoria::CentroTreinamentoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Categoria::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Categoria {
    Table,
    PkId,
    Id,
    Nome,
    CentroTreinamentoId,
}
