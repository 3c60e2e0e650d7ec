//! Error types for the ytdrop simulator.
use thiserror::Error;

/// Invalid-input conditions. Every variant aborts the whole call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{parameter} must be provided when {context}")] MissingParameter { parameter: &'static str, context: &'static str },
    #[error("{mode} mode requires positive endpoints, got initial={initial}, final={final_value}")] NonPositiveEndpoint { mode: &'static str, initial: f64, final_value: f64 },
    #[error("unknown {kind} '{name}'")] UnknownMode { kind: &'static str, name: String },
    #[error("unsupported mode combination: {0}")] UnsupportedModeCombination(String),
    #[error("user_yt_tokens must contain at least one token configuration")] NoHoldings,
    #[error("token_configs must be provided when pendle_mode='by_tokens'")] MissingTokenConfigs,
    #[error("entry day {entry_day} of holding '{holding}' is outside the {duration_days}-day program")] EntryDayOutOfRange { holding: String, entry_day: u32, duration_days: u32 },
    #[error("invalid {parameter}: {reason}")] InvalidParameter { parameter: &'static str, reason: String },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::UnknownMode`].
    pub fn unknown_mode(kind: &'static str, name: &str) -> Self {
        Self::UnknownMode { kind, name: name.to_string() }
    }
}
