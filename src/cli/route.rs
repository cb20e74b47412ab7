//! CLI route: single route table and run context. Dispatches to the plans API and presentation.

use crate::cli::parse::{Cli, Commands, LogCommands, OutputFormat};
use crate::cli::presentation::{
    format_health, format_log_list, format_log_row, format_payload, format_plan_list,
};
use crate::client::{PlansApi, PlansClient};
use crate::config::{ConfigLoader, PlansConfig};
use crate::error::ApiError;
use crate::types::{LogEntry, Payload, WeekRequest, WorkoutRequest};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Resolve configuration for a CLI invocation.
/// Precedence: `--api-base` over `API_BASE` over files over defaults.
pub fn load_config(cli: &Cli) -> Result<PlansConfig, ApiError> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load(&cli.workspace)?,
    };
    if let Some(ref api_base) = cli.api_base {
        config.api.api_base = api_base.clone();
    }
    config.ensure_valid()?;
    Ok(config)
}

/// Read a JSON payload from an inline string, a file, or `stdin`, in that order.
pub fn read_payload(inline: Option<&str>, file: Option<&Path>) -> Result<Payload, ApiError> {
    let (source, text) = match (inline, file) {
        (Some(text), _) => ("--payload".to_string(), text.to_string()),
        (None, Some(path)) => (path.display().to_string(), std::fs::read_to_string(path)?),
        (None, None) => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            ("stdin".to_string(), text)
        }
    };
    serde_json::from_str(&text)
        .map_err(|e| ApiError::InvalidPayload(format!("{} is not valid JSON: {}", source, e)))
}

/// Runtime context for CLI execution: resolved config, output format, and the API seam.
pub struct RunContext {
    api: Arc<dyn PlansApi>,
    config: PlansConfig,
    format: OutputFormat,
}

impl RunContext {
    /// Build a context backed by the HTTP client for the configured base URL.
    pub fn new(config: PlansConfig, format: OutputFormat) -> Result<Self, ApiError> {
        let client = PlansClient::new(&config.api)?;
        info!(api_base = %client.base_url(), "Plans client ready");
        Ok(Self::with_api(Arc::new(client), config, format))
    }

    /// Build a context around any [`PlansApi`] implementation.
    pub fn with_api(api: Arc<dyn PlansApi>, config: PlansConfig, format: OutputFormat) -> Self {
        Self {
            api,
            config,
            format,
        }
    }

    /// Run a command to completion on a fresh Tokio runtime.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| ApiError::ConfigError(format!("Failed to start async runtime: {}", e)))?;
        rt.block_on(self.execute_async(command))
    }

    /// Route a command to the API and render its result.
    pub async fn execute_async(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command).await;
        debug!(
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    async fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List => {
                let plans = self.api.list_plans().await?;
                Ok(format_plan_list(&plans, self.format))
            }
            Commands::Show { id } => {
                let plan = self.api.get_plan(id).await?;
                Ok(format_payload(&plan))
            }
            Commands::Generate { payload, file } => {
                let payload = read_payload(payload.as_deref(), file.as_deref())?;
                let plan = self.api.generate_plan(&payload).await?;
                Ok(format_payload(&plan))
            }
            Commands::Workout {
                focus,
                equipment,
                soreness,
                no_db_logs,
            } => {
                let request = WorkoutRequest {
                    equipment: *equipment,
                    soreness_text: soreness.clone(),
                    use_db_logs: !*no_db_logs,
                    ..WorkoutRequest::new(*focus)
                };
                let plan = self.api.generate_workout(&request).await?;
                Ok(format_payload(&plan))
            }
            Commands::Week {
                days,
                equipment,
                soreness,
                no_db_logs,
            } => {
                let request = WeekRequest {
                    equipment: *equipment,
                    soreness_text: soreness.clone(),
                    use_db_logs: !*no_db_logs,
                    ..WeekRequest::new(*days)
                };
                let plan = self.api.generate_week(&request).await?;
                Ok(format_payload(&plan))
            }
            Commands::Log { command } => self.handle_log_command(command).await,
            Commands::Health => {
                let health = self.api.health().await?;
                Ok(format_health(self.api.base_url(), &health, self.format))
            }
            Commands::Config => self.config.to_toml(),
        }
    }

    async fn handle_log_command(&self, command: &LogCommands) -> Result<String, ApiError> {
        match command {
            LogCommands::Add {
                name,
                reps,
                weight_kg,
                rir,
                focus,
            } => {
                let entry = LogEntry {
                    name: name.clone(),
                    reps: *reps,
                    weight_kg: *weight_kg,
                    rir: *rir,
                    focus: focus.map(|f| f.as_str().to_string()),
                };
                let row = self.api.add_log(&entry).await?;
                Ok(format_log_row(&row, self.format))
            }
            LogCommands::List { focus } => {
                let rows = self.api.list_logs(*focus).await?;
                Ok(format_log_list(&rows, self.format))
            }
        }
    }
}
