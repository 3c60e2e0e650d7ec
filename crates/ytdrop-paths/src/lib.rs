//! # ytdrop-paths
//! Day-indexed trajectory builders.
//!
//! Every builder returns one value per day on the axis `0..days`:
//! - **TVL**: eight interpolation shapes between an initial and final TVL.
//! - **Market share**: constant or linear share of TVL routed through the YT venue.
//! - **YT price**: decay to zero, or a two-phase campaign with a discount at
//!   the campaign end day.
//!
//! Builders are pure. The same inputs always produce the same path.

pub mod axis;
pub mod price;
pub mod share;
pub mod tvl;

pub use axis::mean;
pub use price::build_yt_price_path;
pub use share::{build_share_path, share_path};
pub use tvl::{build_tvl_path, tvl_path};
