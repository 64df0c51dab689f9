use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::{
    hint::{GeminiConfig, gemini::DEFAULT_MODEL},
    store::RestConfig,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Local SQLite file
    Sqlite,
    /// PostgREST / Supabase table
    Rest,
    /// Nothing persisted past this process
    Memory,
}

#[derive(Parser, Debug)]
#[command(name = "number-quest", version, about = "Guess the number between 1 and 100")]
pub struct Args {
    /// Where the best record is kept
    #[arg(long, value_enum, env = "NUMBER_QUEST_STORE", default_value_t = StoreKind::Sqlite)]
    pub store: StoreKind,

    /// SQLite database file (defaults to the platform data directory)
    #[arg(long, env = "NUMBER_QUEST_DB")]
    pub db_path: Option<PathBuf>,

    /// Supabase / PostgREST project URL
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    /// Supabase anon key
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_key: Option<String>,

    /// Gemini API key; without one, hints use canned messages
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model used for hints
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Seconds to wait for a hint before falling back
    #[arg(long, default_value_t = 10)]
    pub hint_timeout_secs: u64,

    /// Never call the hint service
    #[arg(long)]
    pub offline: bool,

    /// Directory for the log file (defaults to the platform data directory)
    #[arg(long, env = "NUMBER_QUEST_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter, e.g. `info` or `number_quest=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--store rest needs {0}")]
    MissingRestSetting(&'static str),

    #[error("--hint-timeout-secs must be at least 1")]
    ZeroHintTimeout,
}

#[derive(Debug, Clone)]
pub enum StoreConfig {
    Sqlite { path: Option<PathBuf> },
    Rest(RestConfig),
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    /// `None` means offline hints.
    pub gemini: Option<GeminiConfig>,
    pub hint_timeout: Duration,
    pub log_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Args {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let store = match self.store {
            StoreKind::Sqlite => StoreConfig::Sqlite { path: self.db_path },
            StoreKind::Memory => StoreConfig::Memory,
            StoreKind::Rest => {
                let url = non_blank(self.supabase_url)
                    .ok_or(ConfigError::MissingRestSetting("--supabase-url / SUPABASE_URL"))?;
                let key = non_blank(self.supabase_key)
                    .ok_or(ConfigError::MissingRestSetting("--supabase-key / SUPABASE_ANON_KEY"))?;
                StoreConfig::Rest(RestConfig::new(url, key))
            }
        };

        if self.hint_timeout_secs == 0 {
            return Err(ConfigError::ZeroHintTimeout);
        }

        let gemini = if self.offline {
            None
        } else {
            non_blank(self.api_key).map(|key| GeminiConfig {
                model: self.model,
                ..GeminiConfig::new(key)
            })
        };

        Ok(Config {
            store,
            gemini,
            hint_timeout: Duration::from_secs(self.hint_timeout_secs),
            log_dir: self.log_dir,
            log_filter: self.log_filter,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["number-quest"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_rest_store_needs_url_and_key() {
        let err = args(&["--store", "rest", "--supabase-key", "k"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRestSetting(_)));

        let err = args(&["--store", "rest", "--supabase-url", "https://x.supabase.co"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRestSetting(_)));
    }

    #[test]
    fn test_rest_store_config() {
        let config = args(&[
            "--store",
            "rest",
            "--supabase-url",
            "https://x.supabase.co",
            "--supabase-key",
            "anon",
        ])
        .into_config()
        .unwrap();

        match config.store {
            StoreConfig::Rest(rest) => {
                assert_eq!(rest.url, "https://x.supabase.co");
                assert_eq!(rest.api_key, "anon");
                assert_eq!(rest.table, "records");
            }
            other => panic!("unexpected store {other:?}"),
        }
    }

    #[test]
    fn test_offline_flag_drops_api_key() {
        let config = args(&["--store", "memory", "--api-key", "secret", "--offline"])
            .into_config()
            .unwrap();
        assert!(config.gemini.is_none());
        assert!(matches!(config.store, StoreConfig::Memory));
    }

    #[test]
    fn test_api_key_enables_gemini_with_model() {
        let config = args(&["--store", "memory", "--api-key", "secret", "--model", "gemini-x"])
            .into_config()
            .unwrap();
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "secret");
        assert_eq!(gemini.model, "gemini-x");
    }

    #[test]
    fn test_blank_api_key_means_offline() {
        let config = args(&["--store", "memory", "--api-key", "  "]).into_config().unwrap();
        assert!(config.gemini.is_none());
    }

    #[test]
    fn test_zero_hint_timeout_rejected() {
        let err = args(&["--store", "memory", "--hint-timeout-secs", "0"])
            .into_config()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroHintTimeout);
    }

    #[test]
    fn test_sqlite_path_passes_through() {
        let config = args(&["--store", "sqlite", "--db-path", "/tmp/quest.db"])
            .into_config()
            .unwrap();
        match config.store {
            StoreConfig::Sqlite { path } => assert_eq!(path, Some(PathBuf::from("/tmp/quest.db"))),
            other => panic!("unexpected store {other:?}"),
        }
    }
}
