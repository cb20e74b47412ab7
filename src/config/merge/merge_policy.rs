//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources win key by key: defaults < global file < workspace files < environment.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

use crate::config::DEFAULT_API_BASE;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder().set_default("api.api_base", DEFAULT_API_BASE)
}
