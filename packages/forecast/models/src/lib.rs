#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Traffic state and forecast result types.
//!
//! These are the domain values produced by the forecaster. They are kept
//! separate from the HTTP response types so the wire format can evolve
//! independently of the forecasting logic.

pub mod timestamp;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Lowest average speed a traffic state may report, in km/h.
pub const MIN_SPEED_KPH: u32 = 10;

/// Highest average speed a traffic state may report, in km/h.
pub const MAX_SPEED_KPH: u32 = 60;

/// Congestion severity, ordered `Light < Medium < Heavy`.
///
/// The discriminant is the congestion index used on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CongestionLevel {
    /// Free-flowing traffic.
    Light = 0,
    /// Noticeable slowdowns.
    Medium = 1,
    /// Stop-and-go traffic.
    Heavy = 2,
}

impl CongestionLevel {
    /// All levels in ascending order of severity.
    pub const ALL: [Self; 3] = [Self::Light, Self::Medium, Self::Heavy];

    /// Highest valid congestion index.
    pub const MAX_INDEX: u8 = 2;

    /// Returns the congestion index (0-2) of this level.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Expected direction of congestion over the next observation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Trend {
    /// Congestion is building.
    Increasing,
    /// Congestion is holding.
    Steady,
    /// Congestion is easing.
    Decreasing,
}

impl Trend {
    /// All trends, in the order used when one is drawn at random.
    pub const ALL: [Self; 3] = [Self::Increasing, Self::Steady, Self::Decreasing];
}

/// One traffic estimate for one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficState {
    /// Local wall-clock time the estimate applies to.
    pub time: NaiveDateTime,
    /// Congestion severity.
    pub level: CongestionLevel,
    /// Expected direction of congestion.
    pub trend: Trend,
    /// Average speed, always within [`MIN_SPEED_KPH`]..=[`MAX_SPEED_KPH`].
    pub average_speed_kph: u32,
    /// Expected delay in minutes.
    pub delay_minutes: u32,
}

impl TrafficState {
    /// Congestion index (0-2), consistent with [`Self::level`].
    #[must_use]
    pub const fn congestion_index(&self) -> u8 {
        self.level.index()
    }

    /// The `HH:MM` label of [`Self::time`].
    #[must_use]
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// A batch of hourly estimates computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// Estimate for the current hour.
    pub current: TrafficState,
    /// Estimates for the following hours, in chronological order.
    pub predictions: Vec<TrafficState>,
    /// When the batch was computed. Shared by every entry.
    pub generated_at: NaiveDateTime,
}

impl ForecastResult {
    /// Iterates over `current` followed by every prediction.
    pub fn states(&self) -> impl Iterator<Item = &TrafficState> {
        std::iter::once(&self.current).chain(self.predictions.iter())
    }
}
