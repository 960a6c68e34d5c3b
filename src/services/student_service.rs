//! Student service - create, read, list, update and delete students.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{
    Category, NewStudent, Student, StudentDetails, StudentFilter, StudentPatch, TrainingCenter,
};

use crate::infra::{TransactionContext, UnitOfWork};
use crate::types::{Paginated, PaginationParams};
use crate::with_transaction;

const CENTER_FIELD: &str = "centro_treinamento_id";
const CATEGORY_FIELD: &str = "categoria_id";

/// Student service trait for dependency injection.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Create a student with a free `cpf`, an existing center and an existing category
    async fn create_student(&self, new: NewStudent) -> AppResult<StudentDetails>;

    async fn get_student(&self, pk_id: i32) -> AppResult<StudentDetails>;

    async fn list_students(
        &self,
        filter: StudentFilter,
        params: PaginationParams,
    ) -> AppResult<Paginated<StudentDetails>>;

    /// Apply the supplied fields; an empty patch returns the record unchanged
    async fn update_student(&self, pk_id: i32, patch: StudentPatch) -> AppResult<StudentDetails>;

    async fn delete_student(&self, pk_id: i32) -> AppResult<()>;
}

/// Concrete implementation of StudentService using Unit of Work.
pub struct StudentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StudentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

/// Fail with a field-level error when a referenced row is missing.
async fn check_references(
    ctx: &TransactionContext<'_>,
    centro_treinamento_id: Option<i32>,
    categoria_id: Option<i32>,
) -> AppResult<()> {
    if let Some(center_id) = centro_treinamento_id {
        if ctx.centers().find_by_id(center_id).await?.is_none() {
            return Err(TrainingCenter::missing_reference(CENTER_FIELD, center_id).into());
        }
    }
    if let Some(category_id) = categoria_id {
        if ctx.categories().find_by_id(category_id).await?.is_none() {
            return Err(Category::missing_reference(CATEGORY_FIELD, category_id).into());
        }
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> StudentService for StudentManager<U> {
    async fn create_student(&self, new: NewStudent) -> AppResult<StudentDetails> {
        with_transaction!(self.uow, |ctx| {
            check_references(
                &ctx,
                Some(new.centro_treinamento_id),
                Some(new.categoria_id),
            )
            .await?;

            if ctx.students().find_by_cpf(&new.cpf).await?.is_some() {
                tracing::warn!(cpf = %new.cpf, "Student cpf already registered");
                return Err(Student::duplicate_cpf(&new.cpf).into());
            }

            let student = ctx.students().create(new).await?;
            tracing::info!(pk_id = student.pk_id, "Student created");
            ctx.students().details(student).await
        })
    }

    async fn get_student(&self, pk_id: i32) -> AppResult<StudentDetails> {
        self.uow
            .students()
            .find_by_id(pk_id)
            .await?
            .ok_or_not_found(Student::NOT_FOUND)
    }

    async fn list_students(
        &self,
        filter: StudentFilter,
        params: PaginationParams,
    ) -> AppResult<Paginated<StudentDetails>> {
        let (items, total) = self.uow.students().list(filter, params).await?;
        Ok(Paginated::new(items, params, total))
    }

    async fn update_student(&self, pk_id: i32, patch: StudentPatch) -> AppResult<StudentDetails> {
        with_transaction!(self.uow, |ctx| {
            let mut student = ctx
                .students()
                .find_by_id(pk_id)
                .await?
                .ok_or_not_found(Student::NOT_FOUND)?;

            if patch.is_empty() {
                return ctx.students().details(student).await;
            }

            check_references(&ctx, patch.centro_treinamento_id, patch.categoria_id).await?;

            if let Some(cpf) = &patch.cpf {
                if let Some(existing) = ctx.students().find_by_cpf(cpf).await? {
                    if existing.pk_id != pk_id {
                        tracing::warn!(pk_id, cpf = %cpf, "Student cpf already registered");
                        return Err(Student::duplicate_cpf(cpf).into());
                    }
                }
            }

            patch.apply(&mut student);
            let student = ctx.students().save(student).await?;
            tracing::info!(pk_id, "Student updated");
            ctx.students().details(student).await
        })
    }

    async fn delete_student(&self, pk_id: i32) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| {
            ctx.students()
                .find_by_id(pk_id)
                .await?
                .ok_or_not_found(Student::NOT_FOUND)?;

            ctx.students().delete(pk_id).await?;
            tracing::info!(pk_id, "Student deleted");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use crate::infra::MockStudentRepository;
    use crate::services::test_support::TestUnitOfWork;
    use common::AppError;

    fn details(pk_id: i32, nome: &str) -> StudentDetails {
        StudentDetails {
            student: Student {
                pk_id,
                id: Uuid::new_v4(),
                nome: nome.to_string(),
                cpf: format!("{:011}", pk_id),
                idade: 25,
                peso: 75.5,
                altura: 1.70,
                sexo: "M".to_string(),
                centro_treinamento_id: 1,
                categoria_id: 1,
            },
            centro_treinamento: None,
            categoria: None,
        }
    }

    #[tokio::test]
    async fn get_student_returns_the_record() {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .returning(|pk_id| Ok(Some(details(pk_id, "Joao"))));

        let service = StudentManager::new(Arc::new(TestUnitOfWork::with_students(repo)));
        let found = service.get_student(5).await.unwrap();

        assert_eq!(found.student.nome, "Joao");
        assert_eq!(found.student.cpf, "00000000005");
    }

    #[tokio::test]
    async fn get_student_missing_is_not_found() {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = StudentManager::new(Arc::new(TestUnitOfWork::with_students(repo)));
        let err = service.get_student(1).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == Student::NOT_FOUND));
    }

    #[tokio::test]
    async fn list_students_passes_exact_cpf() {
        let mut repo = MockStudentRepository::new();
        repo.expect_list()
            .withf(|filter, params| {
                filter.cpf.as_deref() == Some("00000000002") && params.page == 1
            })
            .returning(|_, _| Ok((vec![details(2, "Maria")], 1)));

        let service = StudentManager::new(Arc::new(TestUnitOfWork::with_students(repo)));
        let page = service
            .list_students(
                StudentFilter::new(None, Some("00000000002".to_string())),
                PaginationParams::default(),
            )
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].student.nome, "Maria");
    }

    #[tokio::test]
    async fn writes_need_a_transaction() {
        let service = StudentManager::new(Arc::new(TestUnitOfWork::with_students(
            MockStudentRepository::new(),
        )));
        let err = service.delete_student(1).await.unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }
}
