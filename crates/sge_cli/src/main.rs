//! Command-line front end over the SGE core services.
//!
//! # Responsibility
//! - Parse configuration from flags with environment fallbacks.
//! - Route subcommands to the matching `CrudService`.
//! - Print entities as pretty JSON on stdout.

mod args;

use anyhow::{bail, Context};
use args::{Cli, Command, NamedCommand, ProductCommand, UserCommand, UserFields};
use clap::Parser;
use log::info;
use rusqlite::Connection;
use serde::Serialize;
use sge_core::db::open_db;
use sge_core::{
    default_log_level, init_logging, Category, CategoryService, CrudService, EntityKind,
    Manufacturer, ManufacturerService, Product, ProductService, SqliteCategoryRepository,
    SqliteManufacturerRepository, SqliteProductRepository, SqliteUserRepository, User,
    UserService,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    info!(
        "event=cli_command module=cli status=start db={}",
        cli.db.display()
    );

    match cli.command {
        Command::Category(command) => run_category(&conn, command),
        Command::Manufacturer(command) => run_manufacturer(&conn, command),
        Command::Product(command) => run_product(&conn, command),
        Command::User(command) => run_user(&conn, command),
    }
}

fn run_category(conn: &Connection, command: NamedCommand) -> anyhow::Result<()> {
    let service = CategoryService::new(SqliteCategoryRepository::new(conn));
    match command {
        NamedCommand::Add { name } => print_json(&service.insert(&Category::new(name))?),
        NamedCommand::List => print_json(&service.find_all()?),
        NamedCommand::Get { id } => {
            print_found(service.find_by_id(id)?, EntityKind::Category, id)
        }
        NamedCommand::Rename { id, name } => {
            print_json(&service.update(id, &Category::new(name))?)
        }
        NamedCommand::Delete { id } => Ok(service.delete(id)?),
    }
}

fn run_manufacturer(conn: &Connection, command: NamedCommand) -> anyhow::Result<()> {
    let service = ManufacturerService::new(SqliteManufacturerRepository::new(conn));
    match command {
        NamedCommand::Add { name } => print_json(&service.insert(&Manufacturer::new(name))?),
        NamedCommand::List => print_json(&service.find_all()?),
        NamedCommand::Get { id } => {
            print_found(service.find_by_id(id)?, EntityKind::Manufacturer, id)
        }
        NamedCommand::Rename { id, name } => {
            print_json(&service.update(id, &Manufacturer::new(name))?)
        }
        NamedCommand::Delete { id } => Ok(service.delete(id)?),
    }
}

fn run_product(conn: &Connection, command: ProductCommand) -> anyhow::Result<()> {
    let service = ProductService::new(SqliteProductRepository::new(conn));
    match command {
        ProductCommand::Add {
            name,
            description,
            cost,
            sale,
            category_id,
            manufacturer_id,
        } => {
            let categories = CategoryService::new(SqliteCategoryRepository::new(conn));
            let manufacturers = ManufacturerService::new(SqliteManufacturerRepository::new(conn));
            let category = category_id
                .map(|id| require(categories.find_by_id(id)?, EntityKind::Category, id))
                .transpose()?;
            let manufacturer = manufacturer_id
                .map(|id| require(manufacturers.find_by_id(id)?, EntityKind::Manufacturer, id))
                .transpose()?;
            let product = Product {
                id: None,
                name,
                description,
                cost_value: cost,
                sale_value: sale,
                category,
                manufacturer,
            };
            print_json(&service.insert(&product)?)
        }
        ProductCommand::List => print_json(&service.find_all()?),
        ProductCommand::Get { id } => print_found(service.find_by_id(id)?, EntityKind::Product, id),
        ProductCommand::Delete { id } => Ok(service.delete(id)?),
    }
}

fn run_user(conn: &Connection, command: UserCommand) -> anyhow::Result<()> {
    let service = UserService::new(SqliteUserRepository::new(conn));
    match command {
        UserCommand::Add(fields) => print_json(&service.insert(&user_from(fields))?),
        UserCommand::List => print_json(&service.find_all()?),
        UserCommand::Get { id } => print_found(service.find_by_id(id)?, EntityKind::User, id),
        UserCommand::Update { id, fields } => {
            print_json(&service.update(id, &user_from(fields))?)
        }
        UserCommand::Delete { id } => Ok(service.delete(id)?),
    }
}

fn user_from(fields: UserFields) -> User {
    User {
        id: None,
        name: fields.name,
        document: fields.document,
        address: fields.address,
        cep: fields.cep,
        email: fields.email,
    }
}

fn require<T>(found: Option<T>, kind: EntityKind, id: i64) -> anyhow::Result<T> {
    match found {
        Some(value) => Ok(value),
        None => bail!("{} (id={id})", kind.not_found_message()),
    }
}

fn print_found<T: Serialize>(found: Option<T>, kind: EntityKind, id: i64) -> anyhow::Result<()> {
    print_json(&require(found, kind, id)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
