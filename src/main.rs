//! food-delivery CLI - create, seed and inspect the food-delivery schema

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use food_delivery::audit;
use food_delivery::config::{self, FoodDeliveryConfig};
use food_delivery::storage::SqliteStore;
use food_delivery::ui::{self, Icons};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "food-delivery")]
#[command(version)]
#[command(about = "Relational schema and seed data for a food-delivery domain")]
#[command(long_about = r#"
Creates the eight-table food-delivery schema in a SQLite database, loads the
demonstration rows and runs catalog and SELECT * queries against it.

Example usage:
  food-delivery setup --seed
  food-delivery tables
  food-delivery describe Users
  food-delivery select Orders --format json
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file pointing at the database
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Create the database and schema
    Setup {
        /// Also load the seed data
        #[arg(short, long)]
        seed: bool,
    },

    /// Load the seed data into an empty database
    Seed,

    /// List tables (SHOW TABLES)
    Tables,

    /// List the columns of a table (DESC <table>)
    Describe {
        /// Table name, case-insensitive
        table: String,
    },

    /// Show every row of a table (SELECT * FROM <table>)
    Select {
        /// Table name, case-insensitive
        table: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show row counts per table
    Stats,

    /// Report deliveries whose status disagrees with their order's status
    Audit {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout stays reserved for command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = config::config_path(cli.config.as_deref());
    let loaded = FoodDeliveryConfig::load(&config_path)?;
    let cwd = std::env::current_dir()?;
    let database = config::database_path(cli.database.as_deref(), loaded.as_ref(), &cwd);

    if let Err(err) = run(cli.command, &config_path, &database) {
        ui::failed(&err.to_string());
        std::process::exit(1);
    }
    Ok(())
}

fn open_store(database: &Path) -> anyhow::Result<SqliteStore> {
    config::prepare_database_dir(database)?;
    tracing::debug!("Using database {}", database.display());
    Ok(SqliteStore::open(database)?)
}

fn run(command: Commands, config_path: &Path, database: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Init { force } => {
            let file_config = FoodDeliveryConfig {
                database: Some(std::path::absolute(database)?),
            };
            file_config.save(config_path, force)?;
            ui::done(&format!("Wrote {}", config_path.display()));
            ui::database_field(database);
        }

        Commands::Setup { seed } => {
            let mut store = open_store(database)?;
            ui::banner("Schema ready");
            ui::database_field(database);
            ui::field(Icons::TABLE, "Tables", &store.tables()?.join(", "));

            if seed {
                if store.is_empty()? {
                    store.seed()?;
                    ui::field(Icons::SEED, "Seed data", "loaded");
                } else {
                    ui::caution("Database already holds rows; seed data skipped");
                }
            }
        }

        Commands::Seed => {
            let mut store = open_store(database)?;
            store.seed()?;
            ui::done("Seed data loaded");
            println!("{}", ui::stats_table(&store.stats()?));
        }

        Commands::Tables => {
            let store = open_store(database)?;
            let tables = store.tables()?;
            ui::heading(Icons::DATABASE, &format!("Tables in {}", database.display()));
            for table in &tables {
                println!("  {} {}", Icons::TABLE, table);
            }
        }

        Commands::Describe { table } => {
            let store = open_store(database)?;
            let columns = store.describe(&table)?;
            println!("{}", ui::columns_table(&columns));
        }

        Commands::Select { table, format } => {
            let store = open_store(database)?;
            let result = store.select_all(&table)?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result.records())?);
                }
                OutputFormat::Text => {
                    if !result.is_empty() {
                        println!("{}", ui::result_set_table(&result));
                    }
                    ui::rows_in_set(result.len());
                }
            }
        }

        Commands::Stats => {
            let store = open_store(database)?;
            let stats = store.stats()?;

            println!("{} Food delivery statistics ({})", Icons::STATS, database.display());
            println!("{}", ui::stats_table(&stats));
        }

        Commands::Audit { format } => {
            let store = open_store(database)?;
            let mismatches = audit::status_mismatches(&store)?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&mismatches)?);
                }
                OutputFormat::Text => {
                    if mismatches.is_empty() {
                        ui::done("Every delivery agrees with its order status");
                    } else {
                        ui::heading(Icons::SCOOTER, "Status mismatches");
                        for mismatch in &mismatches {
                            ui::mismatch(mismatch);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
