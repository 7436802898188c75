use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

/// TheCocktailDB v1 with the public test key
pub const DEFAULT_API_BASE: &str = "https://www.thecocktaildb.com/api/json/v1/1";

const DATA_DIR_NAME: &str = "cocktail-lookup";
const STORAGE_FILE: &str = "storage.db";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub data_dir: PathBuf,
    pub thumbnail_size: u32,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_base: try_load("COCKTAIL_API_BASE", DEFAULT_API_BASE),
            data_dir: var("COCKTAIL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
            thumbnail_size: try_load("COCKTAIL_THUMBNAIL_SIZE", "256"),
        }
    }

    /// Location of the key-value storage database
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }
}

/// Per-user data directory:
/// - Linux: ~/.local/share/cocktail-lookup
/// - macOS: ~/Library/Application Support/cocktail-lookup
/// - Windows: %APPDATA%\cocktail-lookup
fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push(DATA_DIR_NAME);
    path
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("{key} not set, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    parse_or_default(key, var(key).ok().as_deref(), default)
}

fn parse_or_default<T: FromStr>(key: &str, value: Option<&str>, default: &str) -> T
where
    T::Err: Display,
{
    if let Some(value) = value {
        match value.trim().parse() {
            Ok(parsed) => return parsed,
            Err(e) => warn!("Invalid {key} value: {e}, using default: {default}"),
        }
    }

    match default.parse() {
        Ok(parsed) => parsed,
        Err(e) => panic!("Default for {key} does not parse: {e}"),
    }
}
