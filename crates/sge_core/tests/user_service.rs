mod common;

use common::{test_db, valid_user};
use sge_core::{
    CrudService, EntityKind, ServiceError, SqliteUserRepository, User, UserService,
    ValidationError,
};

#[test]
fn find_all_on_empty_store_returns_nothing() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn insert_one_then_find_all_returns_one() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let user = User::new(
        "Teste 1",
        "12345678901",
        "Rua Teste 1",
        "12345678",
        "teste1@teste.br",
    );
    service.insert(&user).unwrap();

    assert_eq!(service.find_all().unwrap().len(), 1);
}

#[test]
fn insert_many_then_find_all_returns_all() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    for n in 2..7 {
        service.insert(&valid_user(n)).unwrap();
    }

    assert_eq!(service.find_all().unwrap().len(), 5);
}

#[test]
fn insert_invalid_user_fails_and_writes_nothing() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let err = service.insert(&User::default()).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::NomeRequired)
    ));
    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn inserted_user_roundtrips_through_find_by_id() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    for n in 1..=5 {
        let user = valid_user(n);
        let id = service.insert(&user).unwrap().id.unwrap();
        let loaded = service.find_by_id(id).unwrap().unwrap();

        assert_eq!(loaded.id, Some(id));
        assert_eq!(loaded, User { id: Some(id), ..user });
    }
}

#[test]
fn update_existing_user_changes_stored_name() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let mut user = valid_user(6);
    let id = service.insert(&user).unwrap().id.unwrap();

    user.name = Some("Teste 6 editado".to_string());
    let updated = service.update(id, &user).unwrap();

    assert_eq!(updated.name.as_deref(), Some("Teste 6 editado"));
    let stored = service.find_by_id(id).unwrap().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Teste 6 editado"));
}

#[test]
fn update_with_invalid_data_leaves_record_unchanged() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let mut user = User::new(
        "Teste 7 novo",
        "12345678907",
        "Rua Teste 7 novo",
        "12345678",
        "teste7novo@teste.com",
    );
    let id = service.insert(&user).unwrap().id.unwrap();

    user.name = Some(String::new());
    let err = service.update(id, &user).unwrap_err();
    assert_eq!(err.validation_code(), Some("NOME_REQUIRED"));

    let stored = service.find_by_id(id).unwrap().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Teste 7 novo"));
}

#[test]
fn update_missing_user_fails_with_not_found() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let user = User {
        id: Some(9999),
        ..valid_user(8)
    };
    let err = service.update(9999, &user).unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(EntityKind::User)));
    assert_eq!(err.to_string(), "Usuário não encontrado");
}

#[test]
fn update_missing_user_reports_not_found_before_validation() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let err = service.update(9999, &User::default()).unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(EntityKind::User)));
}

#[test]
fn delete_removes_user() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let id = service.insert(&valid_user(9)).unwrap().id.unwrap();
    service.delete(id).unwrap();

    assert!(service.find_all().unwrap().is_empty());
    assert_eq!(service.find_by_id(id).unwrap(), None);
}

#[test]
fn delete_missing_user_fails_with_not_found() {
    let conn = test_db();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let err = service.delete(9999).unwrap_err();

    assert_eq!(err.to_string(), "Usuário não encontrado");
}
