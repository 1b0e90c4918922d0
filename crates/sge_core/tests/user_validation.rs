use sge_core::{validate_user, User, ValidationError};

fn named(name: &str) -> User {
    User {
        name: Some(name.to_string()),
        ..User::default()
    }
}

#[test]
fn null_empty_or_blank_name_is_rejected() {
    for name in [None, Some(""), Some(" "), Some("\t\n")] {
        let user = User {
            name: name.map(str::to_string),
            ..User::default()
        };

        let err = validate_user(&user).unwrap_err();
        assert_eq!(err, ValidationError::NomeRequired, "name: {name:?}");
        assert_eq!(err.to_string(), "MESSAGE.NOME_REQUIRED");
    }
}

#[test]
fn null_or_empty_document_is_rejected() {
    for document in [None, Some("")] {
        let user = User {
            document: document.map(str::to_string),
            ..named("Nome")
        };

        assert_eq!(validate_user(&user), Err(ValidationError::CpfRequired));
    }
}

#[test]
fn null_or_empty_address_is_rejected() {
    for address in [None, Some("")] {
        let user = User {
            document: Some("12345678901".to_string()),
            address: address.map(str::to_string),
            ..named("Nome")
        };

        assert_eq!(validate_user(&user), Err(ValidationError::EnderecoRequired));
    }
}

#[test]
fn null_or_empty_cep_is_rejected() {
    for cep in [None, Some("")] {
        let user = User {
            document: Some("12345678901".to_string()),
            address: Some("Endereco".to_string()),
            cep: cep.map(str::to_string),
            ..named("Nome")
        };

        assert_eq!(validate_user(&user), Err(ValidationError::CepRequired));
    }
}

#[test]
fn null_or_empty_email_is_rejected() {
    for email in [None, Some("")] {
        let user = User {
            email: email.map(str::to_string),
            ..User::new("Nome", "12345678901", "Endereco", "12345678", "x")
        };

        let err = validate_user(&user).unwrap_err();
        assert_eq!(err, ValidationError::EmailRequired);
        assert_eq!(err.to_string(), "MESSAGE.EMAIL_REQUIRED");
    }
}

#[test]
fn whitespace_only_document_is_not_blank_checked() {
    let user = User::new("Nome", " ", "Endereco", "12345678", "teste@teste.com");

    assert_eq!(validate_user(&user), Ok(()));
}

#[test]
fn first_failing_field_wins() {
    let user = User {
        name: Some("Nome".to_string()),
        document: None,
        address: None,
        cep: None,
        email: None,
        id: None,
    };

    assert_eq!(validate_user(&user), Err(ValidationError::CpfRequired));
}

#[test]
fn fully_populated_user_is_valid() {
    let user = User::new(
        "Nome",
        "12345678901",
        "Endereco",
        "12345678",
        "teste@teste.com",
    );

    assert_eq!(validate_user(&user), Ok(()));
}
