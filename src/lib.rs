//! Plans Client: HTTP client for the workout plans API
//!
//! A thin async client over the plans backend (`/plans`, `/plans/{id}`,
//! `/plans/generate`, plus the workout, week, log, and health routes), with
//! layered configuration, structured logging, and a `plans` CLI on top.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use client::{PlansApi, PlansClient};
pub use config::{ApiConfig, PlansConfig};
pub use error::ApiError;
pub use types::{PlanId, Payload};
