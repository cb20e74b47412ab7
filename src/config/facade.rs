//! Config loader facade: builds the layered configuration and deserializes it.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{env, global_file, workspace_file};
use super::PlansConfig;
use crate::error::ApiError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`PlansConfig`] from defaults, files, and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `config/config.toml`, workspace `config/{PLANS_ENV}.toml`, `API_BASE`.
    pub fn load(workspace_root: &Path) -> Result<PlansConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = env::add_to_builder(builder)?;

        let config: PlansConfig = builder.build()?.try_deserialize()?;
        debug!(api_base = %config.api.api_base, "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a single explicit file. The file must exist;
    /// global and workspace files are skipped, environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<PlansConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = env::add_to_builder(builder)?;

        let config: PlansConfig = builder.build()?.try_deserialize()?;
        debug!(
            config_path = %path.display(),
            api_base = %config.api.api_base,
            "Configuration loaded from file"
        );
        Ok(config)
    }

    /// Path of the global config file, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
