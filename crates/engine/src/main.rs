//! ffrkdb - Main entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ffrkdb_domain::{BoostMode, Rarity, RarityFilter, Series};
use ffrkdb_engine::app::App;
use ffrkdb_engine::infrastructure::config::{AppConfig, TableId};
use ffrkdb_engine::infrastructure::file_source::FileCatalogSource;
use ffrkdb_engine::infrastructure::json_sink::{JsonTableSink, Output};
use ffrkdb_engine::table::{ListingCategory, RosterTab};
use ffrkdb_engine::use_cases::ViewError;

#[derive(Parser, Debug)]
#[command(author, version, about = "FFRK database tables", long_about = None)]
struct Cli {
    /// Directory holding the crafting and roster documents.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Append table commands to this file instead of printing them.
    #[arg(long, global = true)]
    output: Option<PathBuf>,
    /// Element id of the target grid.
    #[arg(long, global = true)]
    table: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Which abilities each pair of same-tier materials can craft.
    Crafting {
        #[arg(long)]
        rarity: Option<Rarity>,
    },
    /// Character stats, optionally compared within one realm.
    Roster {
        /// Series id or name, e.g. 107001 or "FF VII".
        #[arg(long)]
        realm: Option<Series>,
        #[arg(long)]
        level_cap: Option<u8>,
        #[arg(long, default_value = "stats")]
        tab: RosterTab,
    },
    /// Materials or abilities as a plain table.
    Listing {
        category: ListingCategory,
        #[arg(long, default_value = "all")]
        rarity: RarityFilter,
    },
    /// Damage dealt by an attack stat against a defense stat.
    Calc {
        #[arg(long)]
        attack: f64,
        #[arg(long)]
        defense: f64,
        #[arg(long)]
        boost_mode: Option<BoostMode>,
    },
    /// Attack needed to deal a given amount of damage.
    RequiredAttack {
        #[arg(long)]
        hp: f64,
        #[arg(long)]
        defense: f64,
    },
}

impl Cli {
    fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(table) = &self.table {
            config.table_id = TableId::new(table);
        }
        if let Command::Calc {
            boost_mode: Some(mode),
            ..
        } = &self.command
        {
            config.boost_mode = *mode;
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary is usually run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Logs go to stderr; stdout carries table commands.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ffrkdb_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.apply_overrides(AppConfig::from_env());
    tracing::debug!(?config, "Loaded configuration");

    let source = Arc::new(FileCatalogSource::new(
        config.crafting_path(),
        config.roster_path(),
    ));
    let sink = Arc::new(JsonTableSink::new(Output::from(config.output.clone())));
    let app = App::new(config, source, sink);

    if let Err(err) = run(&app, cli.command).await {
        tracing::error!(error = %err, "Command failed");
        eprintln!("{}", serde_json::to_string(&err.to_response())?);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(app: &App, command: Command) -> Result<(), ViewError> {
    match command {
        Command::Crafting { rarity } => {
            let mut view = app.crafting_view();
            if let Some(rarity) = rarity {
                view.rarity = rarity;
            }
            app.use_cases.crafting.load.execute(&mut view).await
        }
        Command::Roster {
            realm,
            level_cap,
            tab,
        } => {
            let mut view = app.roster_view(tab, level_cap);
            app.use_cases.roster.load.execute(&mut view).await?;
            if realm.is_some() {
                app.use_cases
                    .roster
                    .change_realm
                    .execute(&mut view, realm)
                    .await?;
            }
            Ok(())
        }
        Command::Listing { category, rarity } => {
            app.use_cases
                .listing
                .execute(category, rarity, &app.config.table_id)
                .await?;
            Ok(())
        }
        Command::Calc {
            attack, defense, ..
        } => {
            let report = app.use_cases.calculator.damage(attack, defense);
            print_json(&report);
            Ok(())
        }
        Command::RequiredAttack { hp, defense } => {
            let required = app.use_cases.calculator.required_attack(hp, defense);
            print_json(&required);
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "Failed to serialize result"),
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
