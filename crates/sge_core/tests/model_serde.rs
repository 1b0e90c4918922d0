use sge_core::{Category, Manufacturer, Product, User};

#[test]
fn product_serializes_references_as_nested_objects() {
    let product = Product {
        id: Some(7),
        ..Product::new(
            "Descrição do produto",
            10.0,
            20.0,
            Category {
                id: Some(1),
                name: "Categoria".to_string(),
            },
            Manufacturer {
                id: Some(2),
                name: "Fabricante".to_string(),
            },
        )
    };

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], serde_json::Value::Null);
    assert_eq!(json["cost_value"], 10.0);
    assert_eq!(json["category"]["id"], 1);
    assert_eq!(json["manufacturer"]["name"], "Fabricante");

    let decoded: Product = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, product);
}

#[test]
fn user_deserializes_missing_fields_as_none() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": null,
        "name": "Nome",
        "document": null,
        "address": null,
        "cep": null,
        "email": null
    }))
    .unwrap();

    assert_eq!(user.name.as_deref(), Some("Nome"));
    assert_eq!(user.document, None);
}
