//! Service integration tests against SQLite databases.

mod support;

use common::AppError;
use domain::{
    CategoryFilter, CategoryPatch, StudentFilter, StudentPatch, TrainingCenter,
    TrainingCenterFilter, TrainingCenterPatch,
};
use workout_api::services::{ServiceContainer, Services};
use workout_api::types::PaginationParams;

use support::{file_database, new_category, new_center, new_student, services};

fn all() -> PaginationParams {
    PaginationParams::default()
}

#[tokio::test]
async fn create_center_assigns_sequential_keys_and_uuid() {
    let services = services().await;

    let first = services.centers().create_center(new_center("Gym1")).await.unwrap();
    let second = services.centers().create_center(new_center("Gym2")).await.unwrap();

    assert_eq!(first.pk_id, 1);
    assert_eq!(second.pk_id, 2);
    assert_ne!(first.id, second.id);
    assert_eq!(first.nome, "Gym1");
}

#[tokio::test]
async fn duplicate_center_name_is_a_conflict_and_leaves_one_row() {
    let services = services().await;

    services.centers().create_center(new_center("Alpha")).await.unwrap();
    let err = services
        .centers()
        .create_center(new_center("Alpha"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, AppError::Conflict(ref m) if m == "Já existe um centro de treinamento com o nome: Alpha")
    );
    let page = services
        .centers()
        .list_centers(TrainingCenterFilter::default(), all())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn concurrent_duplicate_creates_yield_one_success_and_one_conflict() {
    let services = services().await;
    let centers = services.centers();

    let (a, b) = tokio::join!(
        centers.create_center(new_center("Race")),
        centers.create_center(new_center("Race")),
    );

    let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
    let conflicts = [&a, &b]
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 1);

    let page = centers
        .list_centers(TrainingCenterFilter::default(), all())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn concurrent_duplicate_creates_on_a_pooled_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let services = Services::from_connection(file_database(&dir).await.get_connection());
    let centers = services.centers();

    for round in 0..10 {
        let nome = format!("Race{}", round);
        let (a, b) = tokio::join!(
            centers.create_center(new_center(&nome)),
            centers.create_center(new_center(&nome)),
        );

        let expected = format!("Já existe um centro de treinamento com o nome: {}", nome);
        let conflicts = [&a, &b]
            .iter()
            .filter(|r| matches!(r, Err(AppError::Conflict(m)) if *m == expected))
            .count();
        assert_eq!([&a, &b].iter().filter(|r| r.is_ok()).count(), 1, "{:?}", (&a, &b));
        assert_eq!(conflicts, 1, "{:?}", (&a, &b));
    }

    let page = centers
        .list_centers(TrainingCenterFilter::default(), all())
        .await
        .unwrap();
    assert_eq!(page.total, 10);
}

#[tokio::test]
async fn read_after_delete_is_not_found() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Gone")).await.unwrap();

    services.centers().delete_center(center.pk_id).await.unwrap();

    let err = services.centers().get_center(center.pk_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == TrainingCenter::NOT_FOUND));

    let err = services.centers().delete_center(center.pk_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn empty_patch_returns_record_unchanged() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Same")).await.unwrap();

    let updated = services
        .centers()
        .update_center(center.pk_id, TrainingCenterPatch::default())
        .await
        .unwrap();

    assert_eq!(updated, center);
}

#[tokio::test]
async fn partial_update_changes_only_supplied_fields() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Part")).await.unwrap();

    let updated = services
        .centers()
        .update_center(
            center.pk_id,
            TrainingCenterPatch {
                proprietario: Some("Ana".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.proprietario, "Ana");
    assert_eq!(updated.nome, center.nome);
    assert_eq!(updated.endereco, center.endereco);
    assert_eq!(updated.id, center.id);
}

#[tokio::test]
async fn renaming_onto_a_taken_name_conflicts_and_keeps_old_value() {
    let services = services().await;
    services.centers().create_center(new_center("Taken")).await.unwrap();
    let center = services.centers().create_center(new_center("Mine")).await.unwrap();

    let err = services
        .centers()
        .update_center(
            center.pk_id,
            TrainingCenterPatch {
                nome: Some("Taken".to_string()),
                endereco: Some("Elsewhere".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let stored = services.centers().get_center(center.pk_id).await.unwrap();
    assert_eq!(stored.nome, "Mine");
    assert_eq!(stored.endereco, center.endereco);
}

#[tokio::test]
async fn renaming_to_own_name_is_allowed() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Own")).await.unwrap();

    let updated = services
        .centers()
        .update_center(
            center.pk_id,
            TrainingCenterPatch {
                nome: Some("Own".to_string()),
                endereco: Some("Rua Nova".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.endereco, "Rua Nova");
}

#[tokio::test]
async fn name_filter_is_case_insensitive_substring() {
    let services = services().await;
    for nome in ["ABC Gym", "xabcx", "Other", "ab_c"] {
        services.centers().create_center(new_center(nome)).await.unwrap();
    }

    let page = services
        .centers()
        .list_centers(
            TrainingCenterFilter::new(Some("abc".to_string()), None),
            all(),
        )
        .await
        .unwrap();

    let names: Vec<_> = page.items.iter().map(|c| c.nome.as_str()).collect();
    assert_eq!(names, vec!["ABC Gym", "xabcx"]);
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn wildcard_characters_in_filters_match_literally() {
    let services = services().await;
    for nome in ["100% Fit", "Fit"] {
        services.centers().create_center(new_center(nome)).await.unwrap();
    }

    let page = services
        .centers()
        .list_centers(TrainingCenterFilter::new(Some("%".to_string()), None), all())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].nome, "100% Fit");
}

#[tokio::test]
async fn pages_are_ordered_and_consistent_with_total() {
    let services = services().await;
    for i in 1..=5 {
        services
            .centers()
            .create_center(new_center(&format!("Gym{}", i)))
            .await
            .unwrap();
    }

    let last = services
        .centers()
        .list_centers(TrainingCenterFilter::default(), PaginationParams::new(3, 2))
        .await
        .unwrap();
    assert_eq!(last.total, 5);
    assert_eq!(last.pages, 3);
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].nome, "Gym5");

    let first = services
        .centers()
        .list_centers(TrainingCenterFilter::default(), PaginationParams::new(1, 2))
        .await
        .unwrap();
    let keys: Vec<_> = first.items.iter().map(|c| c.pk_id).collect();
    assert_eq!(keys, vec![1, 2]);

    let beyond = services
        .centers()
        .list_centers(TrainingCenterFilter::default(), PaginationParams::new(9, 2))
        .await
        .unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 5);
}

#[tokio::test]
async fn category_with_unknown_center_is_rejected_on_the_field() {
    let services = services().await;

    let err = services
        .categories()
        .create_category(new_category("Scale", Some(42)))
        .await
        .unwrap_err();

    match err {
        AppError::InvalidInput(fields) => assert!(fields.contains_key("centro_treinamento_id")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn category_resolves_its_center_and_filters_by_it() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Home")).await.unwrap();

    let linked = services
        .categories()
        .create_category(new_category("Scale", Some(center.pk_id)))
        .await
        .unwrap();
    services
        .categories()
        .create_category(new_category("RX", None))
        .await
        .unwrap();

    assert_eq!(linked.centro_treinamento.as_ref(), Some(&center));

    let page = services
        .categories()
        .list_categories(CategoryFilter::new(None, Some(center.pk_id)), all())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].category.nome, "Scale");
    assert_eq!(page.items[0].centro_treinamento.as_ref(), Some(&center));
}

#[tokio::test]
async fn category_update_can_link_a_center() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Link")).await.unwrap();
    let category = services
        .categories()
        .create_category(new_category("Scale", None))
        .await
        .unwrap();

    let updated = services
        .categories()
        .update_category(
            category.category.pk_id,
            CategoryPatch {
                centro_treinamento_id: Some(center.pk_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.category.centro_treinamento_id, Some(center.pk_id));
    assert_eq!(updated.category.nome, "Scale");
    assert_eq!(updated.centro_treinamento.map(|c| c.nome), Some("Link".to_string()));
}

#[tokio::test]
async fn student_with_unknown_category_is_rejected_and_not_stored() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Gym1")).await.unwrap();

    let err = services
        .students()
        .create_student(new_student("Joao", "12345678900", center.pk_id, 99))
        .await
        .unwrap_err();

    match err {
        AppError::InvalidInput(fields) => {
            assert!(fields.contains_key("categoria_id"));
            assert!(!fields.contains_key("centro_treinamento_id"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let page = services
        .students()
        .list_students(StudentFilter::default(), all())
        .await
        .unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn student_comes_back_with_center_and_category() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Gym1")).await.unwrap();
    let category = services
        .categories()
        .create_category(new_category("Scale", None))
        .await
        .unwrap();

    let created = services
        .students()
        .create_student(new_student(
            "Joao",
            "12345678900",
            center.pk_id,
            category.category.pk_id,
        ))
        .await
        .unwrap();

    assert!(created.student.pk_id > 0);
    assert_eq!(created.centro_treinamento.as_ref(), Some(&center));
    assert_eq!(created.categoria.as_ref(), Some(&category.category));

    let fetched = services
        .students()
        .get_student(created.student.pk_id)
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_cpf_conflicts_on_create_and_update() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Gym1")).await.unwrap();
    let category = services
        .categories()
        .create_category(new_category("Scale", None))
        .await
        .unwrap();
    let cat = category.category.pk_id;

    services
        .students()
        .create_student(new_student("Joao", "11111111111", center.pk_id, cat))
        .await
        .unwrap();
    let maria = services
        .students()
        .create_student(new_student("Maria", "22222222222", center.pk_id, cat))
        .await
        .unwrap();

    let err = services
        .students()
        .create_student(new_student("Pedro", "11111111111", center.pk_id, cat))
        .await
        .unwrap_err();
    assert!(
        matches!(err, AppError::Conflict(ref m) if m == "Já existe um aluno cadastrado com o cpf: 11111111111")
    );

    let err = services
        .students()
        .update_student(
            maria.student.pk_id,
            StudentPatch {
                cpf: Some("11111111111".to_string()),
                nome: Some("Maria Silva".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let stored = services
        .students()
        .get_student(maria.student.pk_id)
        .await
        .unwrap();
    assert_eq!(stored.student.nome, "Maria");
    assert_eq!(stored.student.cpf, "22222222222");
}

#[tokio::test]
async fn student_partial_update_and_filters() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Gym1")).await.unwrap();
    let category = services
        .categories()
        .create_category(new_category("Scale", None))
        .await
        .unwrap();
    let cat = category.category.pk_id;

    let joao = services
        .students()
        .create_student(new_student("Joao Lima", "11111111111", center.pk_id, cat))
        .await
        .unwrap();
    services
        .students()
        .create_student(new_student("Maria", "22222222222", center.pk_id, cat))
        .await
        .unwrap();

    let updated = services
        .students()
        .update_student(
            joao.student.pk_id,
            StudentPatch {
                peso: Some(80.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.student.peso, 80.0);
    assert_eq!(updated.student.nome, "Joao Lima");
    assert_eq!(updated.student.cpf, "11111111111");

    let by_name = services
        .students()
        .list_students(StudentFilter::new(Some("LIMA".to_string()), None), all())
        .await
        .unwrap();
    assert_eq!(by_name.total, 1);

    let partial_cpf = services
        .students()
        .list_students(StudentFilter::new(None, Some("1111".to_string())), all())
        .await
        .unwrap();
    assert_eq!(partial_cpf.total, 0);

    let exact_cpf = services
        .students()
        .list_students(
            StudentFilter::new(None, Some("22222222222".to_string())),
            all(),
        )
        .await
        .unwrap();
    assert_eq!(exact_cpf.total, 1);
    assert_eq!(exact_cpf.items[0].student.nome, "Maria");
    assert_eq!(exact_cpf.items[0].categoria.as_ref(), Some(&category.category));
}

#[tokio::test]
async fn referenced_rows_cannot_be_deleted() {
    let services = services().await;
    let center = services.centers().create_center(new_center("Busy")).await.unwrap();
    let category = services
        .categories()
        .create_category(new_category("Scale", None))
        .await
        .unwrap();
    let student = services
        .students()
        .create_student(new_student(
            "Joao",
            "12345678900",
            center.pk_id,
            category.category.pk_id,
        ))
        .await
        .unwrap();

    let err = services.centers().delete_center(center.pk_id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    let err = services
        .categories()
        .delete_category(category.category.pk_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    services
        .students()
        .delete_student(student.student.pk_id)
        .await
        .unwrap();
    services
        .categories()
        .delete_category(category.category.pk_id)
        .await
        .unwrap();
    services.centers().delete_center(center.pk_id).await.unwrap();

    let err = services
        .students()
        .get_student(student.student.pk_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
