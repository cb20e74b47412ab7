//! Environment source: `API_BASE` overrides the configured base URL.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;

/// Environment variable overriding `api.api_base`.
pub const API_BASE_ENV: &str = "API_BASE";

/// Apply environment overrides. Unset or empty variables are ignored.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let api_base = std::env::var(API_BASE_ENV).ok().filter(|v| !v.is_empty());
    builder.set_override_option("api.api_base", api_base)
}
