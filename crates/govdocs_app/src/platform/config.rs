//! Command-line arguments and the optional RON settings file.
//!
//! Precedence: command-line flag, then `govdocs.ron`, then built-in default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use govdocs_client::{
    ClientSettings, DEFAULT_CONNECT_TIMEOUT, DEFAULT_DOCUMENTS_LIMIT, DEFAULT_FILTER_LIMIT,
};
use govdocs_core::RetrievalMode;
use govdocs_logging::{govdocs_info, govdocs_warn, LogDestination};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILENAME: &str = "govdocs.ron";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Parser, Debug)]
#[command(
    name = "govdocs",
    about = "Scrape, filter and browse government documents from the scraper service"
)]
pub struct Args {
    /// Root URL of the scraper service.
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,
    /// Retrieval endpoint used by `query`: `filter` or `process`.
    #[arg(long)]
    pub mode: Option<RetrievalMode>,
    #[arg(long, value_enum, default_value_t = LogArg::File)]
    pub log: LogArg,
    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    File,
    Terminal,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
        }
    }
}

/// On-disk settings; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub base_url: String,
    pub documents_limit: u32,
    pub filter_limit: u32,
    pub connect_timeout_secs: u64,
    pub retrieval_mode: RetrievalMode,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            documents_limit: DEFAULT_DOCUMENTS_LIMIT,
            filter_limit: DEFAULT_FILTER_LIMIT,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT.as_secs(),
            retrieval_mode: RetrievalMode::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub retrieval_mode: RetrievalMode,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// Reads the settings file. A missing file yields defaults; an unreadable
/// or malformed one is logged and also yields defaults.
pub fn load_file_config(path: &Path) -> FileConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return FileConfig::default();
        }
        Err(err) => {
            govdocs_warn!("Failed to read config from {:?}: {}", path, err);
            return FileConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            govdocs_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            govdocs_warn!("Failed to parse config from {:?}: {}", path, err);
            FileConfig::default()
        }
    }
}

pub fn resolve(args: &Args, file: FileConfig) -> anyhow::Result<AppConfig> {
    let base_url = args.base_url.as_deref().unwrap_or(&file.base_url);
    let mut client = ClientSettings::new(base_url)
        .with_context(|| format!("invalid service url {base_url:?}"))?;
    client.documents_limit = file.documents_limit.max(1);
    client.filter_limit = file.filter_limit.max(1);
    client.connect_timeout = Duration::from_secs(file.connect_timeout_secs.max(1));

    Ok(AppConfig {
        client,
        retrieval_mode: args.mode.unwrap_or(file.retrieval_mode),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["govdocs"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_file_config(&temp.path().join("absent.ron"));
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILENAME);
        fs::write(
            &path,
            "(base_url: \"http://scraper.internal:9000\", retrieval_mode: filter)",
        )
        .unwrap();

        let config = load_file_config(&path);
        assert_eq!(config.base_url, "http://scraper.internal:9000");
        assert_eq!(config.retrieval_mode, RetrievalMode::Filter);
        assert_eq!(config.filter_limit, DEFAULT_FILTER_LIMIT);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILENAME);
        fs::write(&path, "(base_url: ").unwrap();
        assert_eq!(load_file_config(&path), FileConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig {
            base_url: "http://from-file:1".to_string(),
            filter_limit: 50,
            ..FileConfig::default()
        };
        let resolved = resolve(
            &args(&["--base-url", "http://from-flag:2", "--mode", "filter"]),
            file,
        )
        .unwrap();

        assert_eq!(resolved.client.base_url.as_str(), "http://from-flag:2/");
        assert_eq!(resolved.client.filter_limit, 50);
        assert_eq!(resolved.retrieval_mode, RetrievalMode::Filter);
    }

    #[test]
    fn invalid_url_is_reported() {
        let file = FileConfig {
            base_url: "localhost without scheme".to_string(),
            ..FileConfig::default()
        };
        assert!(resolve(&args(&[]), file).is_err());
    }

    #[test]
    fn default_log_destination_is_file() {
        let parsed = args(&[]);
        assert_eq!(LogDestination::from(parsed.log), LogDestination::File);
        assert_eq!(parsed.log_level(), LevelFilter::Info);
        assert_eq!(args(&["-v"]).log_level(), LevelFilter::Debug);
    }
}
