use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use wtw_core::{quality::QualityClassifier, usecases};
use wtw_db_sqlite::Connections;

mod config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "wheres-the-well", version)]
#[command(about = "Find and share water sources nearby", long_about = None)]
struct Cli {
    /// URL to the SQLite database, overrides the configuration
    #[arg(long)]
    db_url: Option<String>,

    /// Path to the configuration file
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// Allow requests from other origins
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the water quality of a local photo
    Classify {
        /// Image file (PNG, JPEG, GIF, BMP or WebP)
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli {
        db_url,
        config_file,
        enable_cors,
        command,
    } = Cli::parse();

    let mut cfg = config::Config::try_load_from_file_or_default(config_file)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if enable_cors {
        cfg.webserver.enable_cors = true;
    }

    match command {
        Some(Commands::Classify { file }) => classify(&cfg.classifier, &file),
        None => serve(cfg).await,
    }
}

fn classify(classifier: &QualityClassifier, file: &Path) -> Result<()> {
    let image = fs::read(file).with_context(|| format!("Unable to read {}", file.display()))?;
    let (classification, features) = usecases::classify_image_with_features(classifier, &image);
    println!(
        "{}: {} (confidence {:.2})",
        file.display(),
        classification.label,
        f64::from(classification.confidence)
    );
    match features {
        Some(features) => {
            println!("  brightness  {:>8.2}", features.brightness);
            println!("  turbidity   {:>8.2}", features.turbidity);
            println!("  red mean    {:>8.2}", features.red_mean);
            println!("  green mean  {:>8.2}", features.green_mean);
            println!("  blue mean   {:>8.2}", features.blue_mean);
            println!("  brown ratio {:>8.4}", features.brown_ratio);
        }
        None => println!("  the image could not be decoded"),
    }
    Ok(())
}

async fn serve(cfg: config::Config) -> Result<()> {
    let config::Config {
        db,
        webserver,
        ranking,
        classifier,
    } = cfg;

    let connections = Connections::init(&db.conn_sqlite, db.conn_pool_size)?;
    wtw_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let web_cfg = wtw_webserver::Cfg {
        classifier,
        nearest_sources_limit: ranking.nearest_sources_limit,
        nearest_alerts_limit: ranking.nearest_alerts_limit,
        json_limit_bytes: webserver.json_limit_bytes,
    };
    log::info!("Starting web server v{VERSION}");
    wtw_webserver::run(connections, webserver.enable_cors, web_cfg, VERSION).await;
    Ok(())
}
