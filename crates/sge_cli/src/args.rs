use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sge", version, about = "Catálogo de produtos e cadastro de usuários")]
pub struct Cli {
    /// SQLite database file; created and migrated on first use.
    #[arg(long, env = "SGE_DB_PATH", default_value = "sge.sqlite3")]
    pub db: PathBuf,

    /// trace|debug|info|warn|error. Defaults to debug/info by build mode.
    #[arg(long, env = "SGE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "SGE_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage product categories.
    #[command(subcommand)]
    Category(NamedCommand),
    /// Manage manufacturers.
    #[command(subcommand)]
    Manufacturer(NamedCommand),
    /// Manage products.
    #[command(subcommand)]
    Product(ProductCommand),
    /// Manage users.
    #[command(subcommand)]
    User(UserCommand),
}

/// Commands for name-only records (categories, manufacturers).
#[derive(Debug, Subcommand)]
pub enum NamedCommand {
    Add { name: String },
    List,
    Get { id: i64 },
    Rename { id: i64, name: String },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// Missing flags are passed through so validation can report them.
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        cost: Option<f64>,
        #[arg(long)]
        sale: Option<f64>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long)]
        manufacturer_id: Option<i64>,
    },
    List,
    Get { id: i64 },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    Add(UserFields),
    List,
    Get {
        id: i64,
    },
    Update {
        id: i64,
        #[command(flatten)]
        fields: UserFields,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct UserFields {
    #[arg(long)]
    pub name: Option<String>,
    /// CPF.
    #[arg(long)]
    pub document: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub cep: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, ProductCommand, UserCommand};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn product_add_keeps_missing_flags_as_none() {
        let cli = Cli::parse_from([
            "sge",
            "--db",
            "/tmp/x.sqlite3",
            "product",
            "add",
            "--description",
            "Descrição",
            "--cost",
            "10.0",
        ]);

        match cli.command {
            Command::Product(ProductCommand::Add {
                description,
                cost,
                sale,
                ..
            }) => {
                assert_eq!(description.as_deref(), Some("Descrição"));
                assert_eq!(cost, Some(10.0));
                assert_eq!(sale, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn user_update_takes_id_and_fields() {
        let cli = Cli::parse_from(["sge", "user", "update", "3", "--name", "Novo"]);

        match cli.command {
            Command::User(UserCommand::Update { id, fields }) => {
                assert_eq!(id, 3);
                assert_eq!(fields.name.as_deref(), Some("Novo"));
                assert_eq!(fields.email, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
