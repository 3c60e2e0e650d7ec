//! # ytdrop-core
//! Configuration records, result records, mode tables and traits shared by
//! the ytdrop airdrop simulator crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod modes;
pub mod report;
pub mod traits;

pub use config::{
    AllocationRegime, HoldingConfig, ShareParams, SimulationConfig, TokenConfig, TvlParams,
    YtPriceParams,
};
pub use error::ConfigError;
pub use modes::{
    ComponentTvlScaling, PendleMode, PostCampaignMode, PreCampaignMode, ShareMode, TvlMode,
    YtPriceMode,
};
pub use report::{FdvOutcome, HoldingResult, SimulationResult};
pub use traits::AirdropSimulator;
