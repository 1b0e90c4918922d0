#![allow(dead_code)]

use rusqlite::Connection;
use sge_core::db::open_db_in_memory;
use sge_core::{
    Category, CategoryService, CrudService, Manufacturer, ManufacturerService, Product,
    SqliteCategoryRepository, SqliteManufacturerRepository, User,
};

/// Fresh migrated database per test; dropping it discards every row.
pub fn test_db() -> Connection {
    open_db_in_memory().unwrap()
}

/// Inserts one category and one manufacturer for product tests.
pub fn seed_catalog(conn: &Connection) -> (Category, Manufacturer) {
    let categories = CategoryService::new(SqliteCategoryRepository::new(conn));
    let manufacturers = ManufacturerService::new(SqliteManufacturerRepository::new(conn));

    let category = categories.insert(&Category::new("Categoria Teste")).unwrap();
    let manufacturer = manufacturers
        .insert(&Manufacturer::new("Fabricante Teste"))
        .unwrap();
    (category, manufacturer)
}

pub fn valid_product(category: &Category, manufacturer: &Manufacturer) -> Product {
    Product::new(
        "Descrição do produto",
        10.0,
        20.0,
        category.clone(),
        manufacturer.clone(),
    )
    .with_name("Produto Test")
}

pub fn valid_user(n: u32) -> User {
    User::new(
        format!("Teste {n}"),
        format!("1234567890{n}"),
        format!("Rua Teste {n}"),
        "12345678",
        format!("teste{n}@teste.br"),
    )
}
