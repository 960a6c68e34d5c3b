//! Student repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::base::{contains_ci, fetch_page, unique_violation};
use super::entities::aluno::{self, ActiveModel, Entity as StudentEntity};
use super::{category_repository, training_center_repository};
use common::{AppError, AppResult};
use domain::{NewStudent, Student, StudentDetails, StudentFilter};

use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to students outside of a transaction.
///
/// Results come with training center and category resolved.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, pk_id: i32) -> AppResult<Option<StudentDetails>>;

    /// Filtered page ordered by `pk_id`, plus the total match count
    async fn list(
        &self,
        filter: StudentFilter,
        params: PaginationParams,
    ) -> AppResult<(Vec<StudentDetails>, u64)>;
}

/// Concrete implementation of StudentRepository
pub struct StudentStore {
    db: DatabaseConnection,
}

impl StudentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn find_by_id(&self, pk_id: i32) -> AppResult<Option<StudentDetails>> {
        match find_by_id(&self.db, pk_id).await? {
            Some(student) => Ok(Some(details(&self.db, student).await?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        filter: StudentFilter,
        params: PaginationParams,
    ) -> AppResult<(Vec<StudentDetails>, u64)> {
        let mut query = StudentEntity::find();
        if let Some(nome) = &filter.nome {
            query = query.filter(contains_ci(aluno::Column::Nome, nome));
        }
        if let Some(cpf) = &filter.cpf {
            query = query.filter(aluno::Column::Cpf.eq(cpf.as_str()));
        }
        let query = query.order_by_asc(aluno::Column::PkId);

        let (models, total) = fetch_page(&self.db, query, &params).await?;
        let students = models.into_iter().map(Student::from).collect();
        Ok((with_relations(&self.db, students).await?, total))
    }
}

pub(crate) async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    pk_id: i32,
) -> AppResult<Option<Student>> {
    let result = StudentEntity::find_by_id(pk_id)
        .one(conn)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(Student::from))
}

pub(crate) async fn find_by_cpf<C: ConnectionTrait>(
    conn: &C,
    cpf: &str,
) -> AppResult<Option<Student>> {
    let result = StudentEntity::find()
        .filter(aluno::Column::Cpf.eq(cpf))
        .one(conn)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(Student::from))
}

/// Number of students linked to a training center.
pub(crate) async fn count_by_center<C: ConnectionTrait>(
    conn: &C,
    centro_treinamento_id: i32,
) -> AppResult<u64> {
    StudentEntity::find()
        .filter(aluno::Column::CentroTreinamentoId.eq(centro_treinamento_id))
        .count(conn)
        .await
        .map_err(AppError::from)
}

/// Number of students linked to a category.
pub(crate) async fn count_by_category<C: ConnectionTrait>(
    conn: &C,
    categoria_id: i32,
) -> AppResult<u64> {
    StudentEntity::find()
        .filter(aluno::Column::CategoriaId.eq(categoria_id))
        .count(conn)
        .await
        .map_err(AppError::from)
}

pub(crate) async fn details<C: ConnectionTrait>(
    conn: &C,
    student: Student,
) -> AppResult<StudentDetails> {
    let centro_treinamento =
        training_center_repository::find_by_id(conn, student.centro_treinamento_id).await?;
    let categoria = category_repository::find_by_id(conn, student.categoria_id).await?;

    Ok(StudentDetails {
        student,
        centro_treinamento,
        categoria,
    })
}

/// Resolve center and category of every student with one query per relation.
pub(crate) async fn with_relations<C: ConnectionTrait>(
    conn: &C,
    students: Vec<Student>,
) -> AppResult<Vec<StudentDetails>> {
    let mut center_ids: Vec<i32> = students.iter().map(|s| s.centro_treinamento_id).collect();
    center_ids.sort_unstable();
    center_ids.dedup();

    let mut category_ids: Vec<i32> = students.iter().map(|s| s.categoria_id).collect();
    category_ids.sort_unstable();
    category_ids.dedup();

    let centers = training_center_repository::find_many(conn, center_ids).await?;
    let categories = category_repository::find_many(conn, category_ids).await?;

    Ok(students
        .into_iter()
        .map(|student| StudentDetails {
            centro_treinamento: centers.get(&student.centro_treinamento_id).cloned(),
            categoria: categories.get(&student.categoria_id).cloned(),
            student,
        })
        .collect())
}

pub(crate) async fn insert<C: ConnectionTrait>(conn: &C, new: NewStudent) -> AppResult<Student> {
    let cpf = new.cpf.clone();
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        nome: Set(new.nome),
        cpf: Set(new.cpf),
        idade: Set(new.idade),
        peso: Set(new.peso),
        altura: Set(new.altura),
        sexo: Set(new.sexo),
        centro_treinamento_id: Set(new.centro_treinamento_id),
        categoria_id: Set(new.categoria_id),
        ..Default::default()
    };

    let model = active_model
        .insert(conn)
        .await
        .map_err(|e| unique_violation(e, || Student::duplicate_cpf(&cpf)))?;

    Ok(Student::from(model))
}

/// Write every mutable column of `student` back to its row.
pub(crate) async fn save<C: ConnectionTrait>(conn: &C, student: Student) -> AppResult<Student> {
    let cpf = student.cpf.clone();
    let active_model = ActiveModel {
        pk_id: Set(student.pk_id),
        id: Set(student.id),
        nome: Set(student.nome),
        cpf: Set(student.cpf),
        idade: Set(student.idade),
        peso: Set(student.peso),
        altura: Set(student.altura),
        sexo: Set(student.sexo),
        centro_treinamento_id: Set(student.centro_treinamento_id),
        categoria_id: Set(student.categoria_id),
    };

    let model = active_model
        .update(conn)
        .await
        .map_err(|e| unique_violation(e, || Student::duplicate_cpf(&cpf)))?;

    Ok(Student::from(model))
}

pub(crate) async fn delete<C: ConnectionTrait>(conn: &C, pk_id: i32) -> AppResult<()> {
    let result = StudentEntity::delete_by_id(pk_id)
        .exec(conn)
        .await
        .map_err(AppError::from)?;

    if result.rows_affected == 0 {
        return Err(Student::not_found().into());
    }

    Ok(())
}
