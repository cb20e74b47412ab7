//! CLI domain: parse, route, output, and presentation only.
//! No HTTP logic here; the route table dispatches to the [`PlansApi`](crate::client::PlansApi) seam.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, LogCommands, OutputFormat};
pub use presentation::{
    format_health, format_log_list, format_log_row, format_payload, format_plan_list,
};
pub use route::{load_config, read_payload, RunContext};
