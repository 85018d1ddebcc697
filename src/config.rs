//! Console configuration parsed from environment variables.
//!
//! In the browser there is no environment, so hosts use
//! [`ConsoleConfig::default`] there and `from_env` on the server side.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::node_pools::ZeroCountPolicy;
use crate::state::time_window::TimeRangePreset;

pub const DEFAULT_API_BASE_URL: &str = "/api/v4/lke/clusters";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown {var}: {value}")]
    UnknownValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    pub default_time_range: TimeRangePreset,
    pub zero_count_policy: ZeroCountPolicy,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            default_time_range: TimeRangePreset::default(),
            zero_count_policy: ZeroCountPolicy::default(),
        }
    }
}

impl ConsoleConfig {
    /// Build typed console config from environment variables.
    ///
    /// Optional:
    /// - `CONSOLE_API_BASE_URL`: default `/api/v4/lke/clusters`
    /// - `CONSOLE_DEFAULT_TIME_RANGE`: preset key, default `past_30_minutes`
    /// - `CONSOLE_ZERO_COUNT_POLICY`: `reject` (default) or `allow`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownValue`] for an unrecognized preset or policy.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = std::env::var("CONSOLE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let default_time_range = parse_time_range(std::env::var("CONSOLE_DEFAULT_TIME_RANGE").ok().as_deref())?;
        let zero_count_policy = parse_zero_count_policy(std::env::var("CONSOLE_ZERO_COUNT_POLICY").ok().as_deref())?;

        let cfg = Self { api_base_url, default_time_range, zero_count_policy };
        tracing::debug!(api_base_url = %cfg.api_base_url, range = cfg.default_time_range.key(), "console config loaded");
        Ok(cfg)
    }
}

fn parse_time_range(raw: Option<&str>) -> Result<TimeRangePreset, ConfigError> {
    let Some(raw) = raw else {
        return Ok(TimeRangePreset::default());
    };
    TimeRangePreset::from_key(raw)
        .ok_or_else(|| ConfigError::UnknownValue { var: "CONSOLE_DEFAULT_TIME_RANGE", value: raw.to_owned() })
}

fn parse_zero_count_policy(raw: Option<&str>) -> Result<ZeroCountPolicy, ConfigError> {
    match raw.unwrap_or("reject") {
        "reject" => Ok(ZeroCountPolicy::Reject),
        "allow" => Ok(ZeroCountPolicy::Allow),
        other => Err(ConfigError::UnknownValue { var: "CONSOLE_ZERO_COUNT_POLICY", value: other.to_owned() }),
    }
}
