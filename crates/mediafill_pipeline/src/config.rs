//! Configuration for mediafill runs.
//!
//! This module provides TOML-based configuration. The configuration system supports:
//! - Bundled defaults (include_str! from mediafill.toml)
//! - User overrides (~/.config/mediafill/mediafill.toml, then ./mediafill.toml)
//! - An explicit file passed on the command line
//! - `MEDIAFILL__SECTION__KEY` environment variables, highest precedence

use config::{Config, Environment, File, FileFormat};
use mediafill_core::ExecutionContext;
use mediafill_error::{ConfigError, MediafillError, MediafillResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../mediafill.toml");

/// Placeholder service settings.
///
/// ```toml
/// [placeholder]
/// base_url = "https://placehold.co"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaceholderConfig {
    /// Service base URL; requests go to `{base_url}/{width}x{height}/{extension}`
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

/// Chunking and parallelism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Identifiers hydrated per catalog round-trip
    pub chunk_size: usize,

    /// Fills in flight within one chunk
    pub concurrency: usize,
}

/// Where placeholder bytes are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Filesystem root for media bytes
    pub path: PathBuf,
}

/// Execution context passed to persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContextConfig {
    /// Suppress catalog indexing while writing backfilled bytes
    pub disable_indexing: bool,
}

/// Top-level mediafill configuration.
///
/// # Example
///
/// ```no_run
/// use mediafill_pipeline::MediafillConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MediafillConfig::load(None)?;
/// println!("chunk size: {}", config.batch.chunk_size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MediafillConfig {
    /// Placeholder service settings
    pub placeholder: PlaceholderConfig,
    /// Chunking and parallelism
    pub batch: BatchConfig,
    /// Byte storage location
    pub storage: StorageConfig,
    /// Persistence context
    pub context: ContextConfig,
}

impl MediafillConfig {
    /// Bundled defaults only, ignoring user files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> MediafillResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration from a specific file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MediafillResult<Self> {
        debug!("Loading configuration from file");

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: env > explicit file > ./mediafill.toml >
    /// home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found. The
    /// explicit file, when given, must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse or the merged
    /// result fails validation.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> MediafillResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/mediafill/mediafill.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("mediafill").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEDIAFILL")
                .separator("__")
                .try_parsing(true),
        );

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> MediafillResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                MediafillError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MediafillError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending key.
    pub fn validate(&self) -> MediafillResult<()> {
        if self.placeholder.base_url.trim().is_empty() {
            return Err(ConfigError::new("placeholder.base_url must not be empty").into());
        }
        if self.placeholder.timeout_secs == 0 {
            return Err(ConfigError::new("placeholder.timeout_secs must be greater than zero").into());
        }
        if self.batch.chunk_size == 0 {
            return Err(ConfigError::new("batch.chunk_size must be greater than zero").into());
        }
        if self.batch.concurrency == 0 {
            return Err(ConfigError::new("batch.concurrency must be greater than zero").into());
        }
        Ok(())
    }

    /// Persistence context for this configuration.
    pub fn execution_context(&self) -> ExecutionContext {
        ExecutionContext {
            indexing_disabled: self.context.disable_indexing,
        }
    }
}
