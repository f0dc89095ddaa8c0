pub mod toml_config;

use crate::domain::ports::MEMBERSHIP_QUERY_CAP;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;
use toml_config::FileConfig;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Parser)]
#[command(name = "roster-enrich")]
#[command(about = "Resolve a class roster into enriched student records")]
pub struct CliConfig {
    /// Base URL of the document store API
    #[arg(long)]
    pub store_endpoint: Option<String>,

    /// Class whose roster should be resolved
    #[arg(long)]
    pub class_id: Option<String>,

    /// List this teacher's classes instead of resolving a roster
    #[arg(long)]
    pub teacher_id: Option<String>,

    /// Ids per membership query (store caps this at 10)
    #[arg(long)]
    pub batch_cap: Option<usize>,

    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Minimum wall-clock time before results are printed
    #[arg(long)]
    pub min_latency_ms: Option<u64>,

    /// Case-insensitive substring filter on student names
    #[arg(long)]
    pub filter_name: Option<String>,

    /// Optional TOML settings file; flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Fully resolved settings: CLI flags over file values over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub store_endpoint: String,
    pub class_id: Option<String>,
    pub teacher_id: Option<String>,
    pub batch_cap: usize,
    pub request_timeout_secs: u64,
    pub min_latency_ms: Option<u64>,
    pub filter_name: Option<String>,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let store_endpoint = cli
            .store_endpoint
            .or(file.store_endpoint)
            .ok_or_else(|| RosterError::MissingConfigError {
                field: "store_endpoint".to_string(),
            })?;

        Ok(Settings {
            store_endpoint,
            class_id: cli.class_id.or(file.class_id),
            teacher_id: cli.teacher_id.or(file.teacher_id),
            batch_cap: cli
                .batch_cap
                .or(file.batch_cap)
                .unwrap_or(MEMBERSHIP_QUERY_CAP),
            request_timeout_secs: cli
                .request_timeout_secs
                .or(file.request_timeout_secs)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            min_latency_ms: cli.min_latency_ms.or(file.min_latency_ms),
            filter_name: cli.filter_name,
            verbose: cli.verbose,
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("store_endpoint", &self.store_endpoint)?;
        validate_range("batch_cap", self.batch_cap, 1, MEMBERSHIP_QUERY_CAP)?;
        validate_range(
            "request_timeout_secs",
            self.request_timeout_secs,
            1,
            600,
        )?;

        if let Some(class_id) = &self.class_id {
            validate_non_empty_string("class_id", class_id)?;
        }
        if let Some(teacher_id) = &self.teacher_id {
            validate_non_empty_string("teacher_id", teacher_id)?;
        }
        if self.class_id.is_none() && self.teacher_id.is_none() {
            return Err(RosterError::MissingConfigError {
                field: "class_id or teacher_id".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> CliConfig {
        CliConfig {
            store_endpoint: Some("https://store.example.com".to_string()),
            class_id: Some("class-7a".to_string()),
            teacher_id: None,
            batch_cap: None,
            request_timeout_secs: None,
            min_latency_ms: None,
            filter_name: None,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_resolve_applies_defaults() {
        let settings = Settings::resolve(bare_cli()).unwrap();
        assert_eq!(settings.batch_cap, MEMBERSHIP_QUERY_CAP);
        assert_eq!(settings.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(settings.min_latency_ms.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_resolve_requires_store_endpoint() {
        let mut cli = bare_cli();
        cli.store_endpoint = None;

        let result = Settings::resolve(cli);
        assert!(matches!(
            result,
            Err(RosterError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_batch_cap() {
        let mut cli = bare_cli();
        cli.batch_cap = Some(11);

        let settings = Settings::resolve(cli).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_requires_a_target() {
        let mut cli = bare_cli();
        cli.class_id = None;

        let settings = Settings::resolve(cli).unwrap();
        assert!(matches!(
            settings.validate(),
            Err(RosterError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_cli_flags_override_file_values() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
store_endpoint = "https://file.example.com"
batch_cap = 5
"#
        )
        .unwrap();

        let mut cli = bare_cli();
        cli.config = Some(file.path().to_path_buf());
        cli.batch_cap = Some(3);

        let settings = Settings::resolve(cli).unwrap();
        // Flag wins over file; file fills what the flags left unset.
        assert_eq!(settings.batch_cap, 3);
        assert_eq!(settings.store_endpoint, "https://store.example.com");
    }
}
