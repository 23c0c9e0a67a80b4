use std::io::{self, Write};

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use toy_shop::errors::AppError;
use toy_shop::{create_pool, demo, initialize_schema, reset_schema, Shop, ShopConfig};

/// Toy shop catalog backed by SQLite.
#[derive(Debug, Parser)]
#[command(name = "toy_shop", version, about)]
struct Cli {
    /// SQLite database path; overrides DATABASE_URL.
    #[arg(short, long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the tables if they do not exist yet.
    Init,
    /// Seed sample customers, products and orders, then update and delete some.
    Demo,
    /// Drop every table and recreate them empty.
    Reset,
    /// Print every table.
    Show {
        /// Print one JSON document instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = ShopConfig::from_env()?;
    if let Some(database) = cli.database {
        config.database_url = database;
    }
    log::info!(
        "Using database {} (referential checks: {})",
        config.database_url,
        config.referential_checks
    );

    let pool = create_pool(&config)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Init => initialize_schema(&pool)?,
        Commands::Demo => {
            initialize_schema(&pool)?;
            let shop = Shop::new(pool, config.referential_checks);
            demo::run_demo(&shop, &mut out)?;
        }
        Commands::Reset => {
            reset_schema(&pool)?;
            writeln!(out, "Database has been reset.")?;
        }
        Commands::Show { json } => {
            initialize_schema(&pool)?;
            let shop = Shop::new(pool, config.referential_checks);
            demo::show_all(&shop, json, &mut out)?;
        }
    }
    Ok(())
}

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(e.exit_code());
    }
}
