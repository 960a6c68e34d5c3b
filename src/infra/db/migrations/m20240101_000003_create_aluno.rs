//! Migration: Create aluno table.

use domain::{CPF_LEN, SEXO_LEN, STUDENT_NOME_MAX_LEN};
use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_centro_treinamento::CentroTreinamento;
use super::m20240101_000002_create_categoria::Categoria;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aluno::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Aluno::PkId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Aluno::Id).uuid().not_null().unique_key())
                    .col(
                        ColumnDef::new(Aluno::Nome)
                            .string_len(STUDENT_NOME_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Aluno::Cpf)
                            .string_len(CPF_LEN)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Aluno::Idade).integer().not_null())
                    .col(ColumnDef::new(Aluno::Peso).double().not_null())
                    .col(ColumnDef::new(Aluno::Altura).double().not_null())
                    .col(ColumnDef::new(Aluno::Sexo).string_len(SEXO_LEN).not_null())
                    .col(ColumnDef::new(Aluno::CentroTreinamentoId).integer().not_null())
                    .col(ColumnDef::new(Aluno::CategoriaId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aluno_centro_treinamento")
                            .from(Aluno::Table, Aluno::CentroTreinamentoId)
                            .to(CentroTreinamento::Table, CentroTreinamento::PkId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aluno_categoria")
                            .from(Aluno::Table, Aluno::CategoriaId)
                            .to(Categoria::Table, Categoria::PkId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_aluno_centro_treinamento_id")
                    .table(Aluno::Table)
                    .col(Aluno::CentroTreinamentoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_aluno_categoria_id")
                    .table(Aluno::Table)
                    .col(Aluno::CategoriaId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aluno::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Aluno {
    Table,
    PkId,
    Id,
    Nome,
    Cpf,
    Idade,
    Peso,
    Altura,
    Sexo,
    CentroTreinamentoId,
    CategoriaId,
}
