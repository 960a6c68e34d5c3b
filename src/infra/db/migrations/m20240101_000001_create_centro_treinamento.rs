//! Migration: Create centro_treinamento table.

use domain::{CENTER_ENDERECO_MAX_LEN, CENTER_NOME_MAX_LEN, CENTER_PROPRIETARIO_MAX_LEN};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CentroTreinamento::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CentroTreinamento::PkId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CentroTreinamento::Id)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CentroTreinamento::Nome)
                            .string_len(CENTER_NOME_MAX_LEN)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CentroTreinamento::Endereco)
                            .string_len(CENTER_ENDERECO_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CentroTreinamento::Proprietario)
                            .string_len(CENTER_PROPRIETARIO_MAX_LEN)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CentroTreinamento::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum CentroTreinamento {
    Table,
    PkId,
    Id,
    Nome,
    Endereco,
    Proprietario,
}
