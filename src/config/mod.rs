use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Where EuroScope keeps the ground-radar plugin dump, below the
/// application-data directory named by the APPDATA environment variable.
const STANDS_DUMP_RELATIVE: &[&str] = &["EuroScope", "ESAA", "Plugins", "GRpluginStands.txt"];

/// Optional file configuration, auto-searched as esdatagen.toml next to the
/// working directory and under the user config directory. Every field can
/// be overridden on the command line.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub stands_input: Option<PathBuf>,
    #[serde(default)]
    pub stands_output: Option<PathBuf>,
    #[serde(default)]
    pub coordinations_input: Option<PathBuf>,
    #[serde(default)]
    pub coordinations_output: Option<PathBuf>,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        for path in config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("esdatagen.toml"));
    paths.push(PathBuf::from(".esdatagen.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("esdatagen").join("config.toml"));
        paths.push(config_dir.join("esdatagen.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".esdatagen.toml"));
    }

    paths
}

/// Default stand-dump location, resolved from the APPDATA environment
/// variable. Fails with a usable message when the variable is unset (the
/// usual case outside a EuroScope machine).
pub fn default_stands_input() -> Result<PathBuf> {
    let base = std::env::var_os("APPDATA")
        .context("APPDATA environment variable is not set; pass --input instead")?;
    Ok(stands_dump_under(PathBuf::from(base)))
}

fn stands_dump_under(base: PathBuf) -> PathBuf {
    let mut path = base;
    path.extend(STANDS_DUMP_RELATIVE);
    path
}
