//! Closed mode tables for every path type and allocation knob.
//!
//! Scenario files and other text sources name modes in snake_case. Parsing
//! goes through [`FromStr`], which rejects unknown names with
//! [`ConfigError::UnknownMode`]. The one exception is [`ShareMode`], which
//! degrades unknown names to [`ShareMode::Linear`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Shape of the protocol TVL trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TvlMode {
    /// Constant at the supplied average.
    #[default]
    Average,
    Linear,
    /// Geometric interpolation; both endpoints must be positive.
    Exp,
    /// S-curve centred on the midpoint.
    Logistic,
    UpThenDown,
    DownThenUp,
    /// Most of the change happens early.
    FrontLoaded,
    /// Most of the change happens late.
    BackLoaded,
}

impl TvlMode {
    pub const ALL: [TvlMode; 8] = [
        Self::Average,
        Self::Linear,
        Self::Exp,
        Self::Logistic,
        Self::UpThenDown,
        Self::DownThenUp,
        Self::FrontLoaded,
        Self::BackLoaded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Linear => "linear",
            Self::Exp => "exp",
            Self::Logistic => "logistic",
            Self::UpThenDown => "up_then_down",
            Self::DownThenUp => "down_then_up",
            Self::FrontLoaded => "front_loaded",
            Self::BackLoaded => "back_loaded",
        }
    }
}

impl FromStr for TvlMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::unknown_mode("tvl_mode", s))
    }
}

/// Shape of the venue's share of TVL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ShareMode {
    Average,
    #[default]
    Linear,
}

impl ShareMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Linear => "linear",
        }
    }

    /// Anything other than `"average"` is linear.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "average" => Self::Average,
            "linear" => Self::Linear,
            other => {
                tracing::warn!(mode = other, "unknown pendle_share_mode, using linear");
                Self::Linear
            }
        }
    }
}

impl From<String> for ShareMode {
    fn from(s: String) -> Self {
        Self::parse_lenient(&s)
    }
}

/// How the YT price decays toward maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YtPriceMode {
    #[default]
    LinearToZero,
    ExpToZero,
    StepwiseLinear,
    /// Campaign pricing: pre-phase, discount at campaign end, post-phase.
    TwoPhase,
}

impl YtPriceMode {
    pub const ALL: [YtPriceMode; 4] = [
        Self::LinearToZero,
        Self::ExpToZero,
        Self::StepwiseLinear,
        Self::TwoPhase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinearToZero => "linear_to_zero",
            Self::ExpToZero => "exp_to_zero",
            Self::StepwiseLinear => "stepwise_linear",
            Self::TwoPhase => "two_phase",
        }
    }
}

impl FromStr for YtPriceMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::unknown_mode("yt_price_mode", s))
    }
}

/// YT pricing while a campaign is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreCampaignMode {
    #[default]
    Flat,
    /// Loses 10% linearly by campaign end.
    SlowLinear,
    /// Decays exponentially to 90% by campaign end.
    SlowExp,
}

impl PreCampaignMode {
    pub const ALL: [PreCampaignMode; 3] = [Self::Flat, Self::SlowLinear, Self::SlowExp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::SlowLinear => "slow_linear",
            Self::SlowExp => "slow_exp",
        }
    }
}

impl FromStr for PreCampaignMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::unknown_mode("pre_mode", s))
    }
}

/// YT pricing after the campaign-end discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostCampaignMode {
    #[default]
    LinearToZero,
    ExpToZero,
    StepwiseLinear,
}

impl PostCampaignMode {
    pub const ALL: [PostCampaignMode; 3] =
        [Self::LinearToZero, Self::ExpToZero, Self::StepwiseLinear];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinearToZero => "linear_to_zero",
            Self::ExpToZero => "exp_to_zero",
            Self::StepwiseLinear => "stepwise_linear",
        }
    }
}

impl FromStr for PostCampaignMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::unknown_mode("post_mode", s))
    }
}

/// How network points are derived in the TVL-generated regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendleMode {
    /// Share path blended with two base multipliers.
    #[default]
    Simple,
    /// Per-token component TVLs and multipliers.
    ByTokens,
}

impl PendleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::ByTokens => "by_tokens",
        }
    }
}

impl FromStr for PendleMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),
            "by_tokens" => Ok(Self::ByTokens),
            other => Err(ConfigError::unknown_mode("pendle_mode", other)),
        }
    }
}

/// How by-token component TVLs follow the total TVL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentTvlScaling {
    /// Components scale with `TVL(day) / avgTVL`.
    #[default]
    Proportional,
    /// Same as proportional.
    ShareBased,
    /// Components stay at their configured absolute values.
    Constant,
}

impl ComponentTvlScaling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proportional => "proportional",
            Self::ShareBased => "share_based",
            Self::Constant => "constant",
        }
    }

    pub fn scales_with_tvl(&self) -> bool {
        match self {
            Self::Proportional | Self::ShareBased => true,
            Self::Constant => false,
        }
    }
}

impl FromStr for ComponentTvlScaling {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proportional" => Ok(Self::Proportional),
            "share_based" => Ok(Self::ShareBased),
            "constant" => Ok(Self::Constant),
            other => Err(ConfigError::unknown_mode("component_tvl_scaling", other)),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_str!(
    TvlMode,
    ShareMode,
    YtPriceMode,
    PreCampaignMode,
    PostCampaignMode,
    PendleMode,
    ComponentTvlScaling
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tvl_mode_round_trips_through_text() {
        for mode in TvlMode::ALL {
            assert_eq!(mode.as_str().parse::<TvlMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_tvl_mode_rejected() {
        let err = "sideways".parse::<TvlMode>().unwrap_err();
        assert_eq!(err, ConfigError::unknown_mode("tvl_mode", "sideways"));
    }

    #[test]
    fn unknown_pendle_mode_rejected() {
        assert!(matches!(
            "hybrid".parse::<PendleMode>(),
            Err(ConfigError::UnknownMode { kind: "pendle_mode", .. })
        ));
    }

    #[test]
    fn unknown_price_modes_rejected() {
        assert!("to_the_moon".parse::<YtPriceMode>().is_err());
        assert!("cliff".parse::<PreCampaignMode>().is_err());
        assert!("two_phase".parse::<PostCampaignMode>().is_err());
    }

    #[test]
    fn share_mode_unknown_falls_back_to_linear() {
        assert_eq!(ShareMode::parse_lenient("average"), ShareMode::Average);
        assert_eq!(ShareMode::parse_lenient("logistic"), ShareMode::Linear);
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&TvlMode::UpThenDown).unwrap();
        assert_eq!(json, "\"up_then_down\"");
        let mode: YtPriceMode = serde_json::from_str("\"stepwise_linear\"").unwrap();
        assert_eq!(mode, YtPriceMode::StepwiseLinear);
    }

    #[test]
    fn share_mode_deserializes_leniently() {
        let mode: ShareMode = serde_json::from_str("\"exp\"").unwrap();
        assert_eq!(mode, ShareMode::Linear);
        let mode: ShareMode = serde_json::from_str("\"average\"").unwrap();
        assert_eq!(mode, ShareMode::Average);
        assert_eq!(serde_json::to_string(&ShareMode::Average).unwrap(), "\"average\"");
    }

    #[test]
    fn share_based_scales_like_proportional() {
        assert!(ComponentTvlScaling::ShareBased.scales_with_tvl());
        assert!(ComponentTvlScaling::Proportional.scales_with_tvl());
        assert!(!ComponentTvlScaling::Constant.scales_with_tvl());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(PostCampaignMode::ExpToZero.to_string(), "exp_to_zero");
        assert_eq!(PendleMode::ByTokens.to_string(), "by_tokens");
    }
}
