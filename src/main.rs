//! jstricks - a terminal catalog of JavaScript tricks and one-liners
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use jstricks_app::state::AppState;
use jstricks_app::{load_settings, FavoritesStore, FileStorage, Settings, ThemeStore};
use jstricks_core::{category_by_key, DEFAULT_CATEGORY, REGISTRY};

/// Browse, search, and copy JavaScript tricks from your terminal
#[derive(Parser, Debug)]
#[command(name = "jstricks")]
#[command(about = "A terminal catalog of JavaScript tricks and one-liners", long_about = None)]
struct Args {
    /// Category to open at startup (e.g. "arrays", "strings")
    #[arg(short, long, value_name = "KEY")]
    category: Option<String>,

    /// Directory for favorites and theme data (defaults to the platform data dir)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List the available categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.list_categories {
        for info in REGISTRY {
            println!("{:<12} {}", info.key, info.description);
        }
        return Ok(());
    }

    jstricks_core::logging::init()?;

    let start = match &args.category {
        Some(key) => category_by_key(key)?.id,
        None => DEFAULT_CATEGORY,
    };

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => FileStorage::default_dir()?,
    };
    tracing::info!("data directory: {}", data_dir.display());

    let favorites = FavoritesStore::load(Box::new(FileStorage::new(&data_dir)?));
    let theme = ThemeStore::load(Box::new(FileStorage::new(&data_dir)?));

    let settings = match args.config.or_else(jstricks_app::config::default_config_path) {
        Some(path) => load_settings(&path),
        None => Settings::default(),
    };

    let state = AppState::new(favorites, theme, settings, start);
    jstricks_tui::run(state)?;
    Ok(())
}
