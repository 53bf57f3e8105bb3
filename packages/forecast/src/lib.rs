#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Time-of-day traffic state forecaster.
//!
//! Produces hourly [`TrafficState`] estimates anchored at the current time.
//! Each hour is classified into a [`Regime`] that fixes a baseline
//! congestion level and trend, which is then perturbed by a
//! [`NoiseSource`]. The clock and noise are injected so identical inputs
//! produce identical forecasts.

pub mod clock;
pub mod noise;
pub mod regime;

use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta};
use thiserror::Error;
use traffic_flow_forecast_models::{
    CongestionLevel, ForecastResult, MAX_SPEED_KPH, MIN_SPEED_KPH, TrafficState, Trend,
};

pub use clock::{Clock, FixedClock, SystemClock};
pub use noise::{NoiseSource, RngNoise, ZeroNoise};
pub use regime::Regime;

/// Window used when a caller does not ask for one.
pub const DEFAULT_WINDOW_HOURS: i64 = 2;

/// Errors that can occur while forecasting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// A request parameter was out of range.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what went wrong.
        message: String,
    },
}

impl ForecastError {
    /// Builds an [`ForecastError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Computes traffic forecasts from an injected clock.
#[derive(Clone)]
pub struct Forecaster {
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Forecaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forecaster").finish_non_exhaustive()
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl Forecaster {
    /// Creates a forecaster that reads time from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Forecasts `window_hours` hours past the current one.
    ///
    /// `location_id` is accepted for per-location models but does not
    /// currently change the output.
    ///
    /// # Errors
    ///
    /// * [`ForecastError::InvalidArgument`] if `window_hours` is negative
    ///   or reaches past the representable date range
    pub fn forecast<N: NoiseSource + ?Sized>(
        &self,
        location_id: Option<&str>,
        window_hours: i64,
        noise: &mut N,
    ) -> Result<ForecastResult, ForecastError> {
        if window_hours < 0 {
            return Err(ForecastError::invalid_argument(format!(
                "hours must be non-negative, got {window_hours}"
            )));
        }

        let generated_at = self.clock.now();
        if hours_after(generated_at, window_hours).is_none() {
            return Err(ForecastError::invalid_argument(format!(
                "hours={window_hours} is too large"
            )));
        }

        log::debug!(
            "Forecasting {window_hours}h from {generated_at} for location {}",
            location_id.unwrap_or("<all>")
        );

        let current = estimate(generated_at, &mut *noise);
        let predictions = (1..=window_hours)
            .filter_map(|offset| hours_after(generated_at, offset))
            .map(|time| estimate(time, &mut *noise))
            .collect();

        Ok(ForecastResult {
            current,
            predictions,
            generated_at,
        })
    }
}

fn hours_after(time: NaiveDateTime, hours: i64) -> Option<NaiveDateTime> {
    time.checked_add_signed(TimeDelta::try_hours(hours)?)
}

/// Estimates the traffic state at `time`.
///
/// Noise is drawn in a fixed order: the trend (normal regime only), the
/// congestion offset in `-1..=1`, the speed jitter in `-5..=5` and the
/// delay jitter in `0..=5`.
pub fn estimate<N: NoiseSource + ?Sized>(time: NaiveDateTime, noise: &mut N) -> TrafficState {
    use chrono::Timelike as _;

    let hour = time.hour();
    let regime = Regime::for_hour(hour);
    let trend = regime
        .fixed_trend(hour)
        .unwrap_or_else(|| random_trend(&mut *noise));

    let level = perturb(regime.base_level(), noise.next_in_range(-1, 1));
    let index = i32::from(level.index());

    let speed = (50 - 15 * index + noise.next_in_range(-5, 5))
        .max(0)
        .unsigned_abs()
        .clamp(MIN_SPEED_KPH, MAX_SPEED_KPH);
    let delay = 10 * index + noise.next_in_range(0, 5).max(0);

    TrafficState {
        time,
        level,
        trend,
        average_speed_kph: speed,
        delay_minutes: delay.unsigned_abs(),
    }
}

fn random_trend<N: NoiseSource + ?Sized>(noise: &mut N) -> Trend {
    let draw = noise.next_in_range(0, 2).clamp(0, 2);
    Trend::ALL[usize::try_from(draw).unwrap_or_default()]
}

/// Shifts `base` by `offset` steps, clamped to the congestion scale.
fn perturb(base: CongestionLevel, offset: i32) -> CongestionLevel {
    let index =
        (i32::from(base.index()) + offset).clamp(0, i32::from(CongestionLevel::MAX_INDEX));
    CongestionLevel::ALL[usize::try_from(index).unwrap_or_default()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn forecaster_at(hour: u32) -> Forecaster {
        Forecaster::new(Arc::new(FixedClock(at(hour, 30))))
    }

    /// Replays a fixed script of draws, clamped to each requested range.
    struct Scripted(std::vec::IntoIter<i32>);

    impl NoiseSource for Scripted {
        fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
            self.0.next().unwrap_or(0).clamp(low, high)
        }
    }

    #[test]
    fn prediction_count_matches_window() {
        let forecaster = forecaster_at(12);
        for window in [0, 1, 2, 5, 24, 72] {
            let result = forecaster
                .forecast(None, window, &mut RngNoise::seeded(1))
                .unwrap();
            assert_eq!(result.predictions.len(), usize::try_from(window).unwrap());
        }
    }

    #[test]
    fn zero_window_has_only_current() {
        let result = forecaster_at(12)
            .forecast(Some("loc-1"), 0, &mut ZeroNoise)
            .unwrap();
        assert!(result.predictions.is_empty());
        assert_eq!(result.current.time, at(12, 30));
    }

    #[test]
    fn negative_window_is_rejected() {
        let err = forecaster_at(12)
            .forecast(None, -1, &mut ZeroNoise)
            .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "Invalid argument: hours must be non-negative, got -1");
    }

    #[test]
    fn unrepresentable_window_is_rejected() {
        let err = forecaster_at(12)
            .forecast(None, i64::MAX, &mut ZeroNoise)
            .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidArgument { .. }));
    }

    #[test]
    fn every_state_respects_bounds() {
        for hour in 0..24 {
            let result = forecaster_at(hour)
                .forecast(None, 48, &mut RngNoise::seeded(u64::from(hour)))
                .unwrap();
            for state in result.states() {
                assert!(state.congestion_index() <= CongestionLevel::MAX_INDEX);
                assert_eq!(
                    CongestionLevel::ALL[usize::from(state.congestion_index())],
                    state.level
                );
                assert!((MIN_SPEED_KPH..=MAX_SPEED_KPH).contains(&state.average_speed_kph));
                let floor = 10 * u32::from(state.congestion_index());
                assert!((floor..=floor + 5).contains(&state.delay_minutes));
            }
        }
    }

    #[test]
    fn states_advance_one_hour_at_a_time() {
        let result = forecaster_at(22)
            .forecast(None, 6, &mut RngNoise::seeded(3))
            .unwrap();
        let times: Vec<_> = result.states().map(|s| s.time).collect();
        for pair in times.windows(2) {
            assert_eq!(pair[1] - pair[0], TimeDelta::hours(1));
        }
        let labels: Vec<_> = result.states().map(TrafficState::time_label).collect();
        assert_eq!(
            labels,
            ["22:30", "23:30", "00:30", "01:30", "02:30", "03:30", "04:30"]
        );
    }

    #[test]
    fn generated_at_is_captured_once() {
        let result = forecaster_at(9)
            .forecast(None, 3, &mut ZeroNoise)
            .unwrap();
        assert_eq!(result.generated_at, at(9, 30));
        assert_eq!(result.current.time, result.generated_at);
    }

    #[test]
    fn morning_rush_without_noise() {
        let result = forecaster_at(8)
            .forecast(None, 2, &mut ZeroNoise)
            .unwrap();
        let current = &result.current;
        assert_eq!(current.congestion_index(), 2);
        assert_eq!(current.level, CongestionLevel::Heavy);
        assert_eq!(current.trend, Trend::Decreasing);
        assert_eq!(current.average_speed_kph, 20);
        assert!((20..=25).contains(&current.delay_minutes));
    }

    #[test]
    fn morning_rush_before_eight_is_increasing() {
        let state = estimate(at(7, 0), &mut ZeroNoise);
        assert_eq!(state.congestion_index(), 2);
        assert_eq!(state.trend, Trend::Increasing);
        assert_eq!(state.average_speed_kph, 20);
        assert_eq!(state.delay_minutes, 20);
    }

    #[test]
    fn night_without_noise() {
        let result = forecaster_at(2)
            .forecast(None, 1, &mut ZeroNoise)
            .unwrap();
        assert_eq!(result.current.congestion_index(), 0);
        assert_eq!(result.current.trend, Trend::Steady);
        assert_eq!(result.current.average_speed_kph, 50);
        assert_eq!(result.current.delay_minutes, 0);
    }

    #[test]
    fn normal_hours_draw_trend_first() {
        // trend index 2, offset +1, speed -5, delay 5
        let mut noise = Scripted(vec![2, 1, -5, 5].into_iter());
        let state = estimate(at(15, 0), &mut noise);
        assert_eq!(state.trend, Trend::Decreasing);
        assert_eq!(state.level, CongestionLevel::Heavy);
        assert_eq!(state.average_speed_kph, 15);
        assert_eq!(state.delay_minutes, 25);
    }

    #[test]
    fn random_trend_indexes_trend_table() {
        for (draw, trend) in (0..).zip(Trend::ALL) {
            assert_eq!(random_trend(&mut Scripted(vec![draw].into_iter())), trend);
        }
    }

    #[test]
    fn perturb_maps_through_level_table() {
        assert_eq!(perturb(CongestionLevel::Medium, -1), CongestionLevel::Light);
        assert_eq!(perturb(CongestionLevel::Medium, 0), CongestionLevel::Medium);
        assert_eq!(perturb(CongestionLevel::Medium, 1), CongestionLevel::Heavy);
        assert_eq!(perturb(CongestionLevel::Light, -1), CongestionLevel::Light);
        assert_eq!(perturb(CongestionLevel::Heavy, 1), CongestionLevel::Heavy);
    }

    #[test]
    fn perturbation_is_clamped() {
        let mut noise = Scripted(vec![-1, -5, 0].into_iter());
        let night = estimate(at(3, 0), &mut noise);
        assert_eq!(night.level, CongestionLevel::Light);
        assert_eq!(night.average_speed_kph, 45);

        let mut noise = Scripted(vec![1, 5, 0].into_iter());
        let rush = estimate(at(17, 0), &mut noise);
        assert_eq!(rush.level, CongestionLevel::Heavy);
        assert_eq!(rush.trend, Trend::Decreasing);
        assert_eq!(rush.average_speed_kph, 25);
    }

    #[test]
    fn speed_never_exceeds_ceiling() {
        let mut noise = Scripted(vec![-1, 5, 0].into_iter());
        let state = estimate(at(0, 0), &mut noise);
        assert_eq!(state.average_speed_kph, 55);
        assert!(state.average_speed_kph <= MAX_SPEED_KPH);
    }

    #[test]
    fn same_seed_same_forecast() {
        let forecaster = forecaster_at(14);
        let a = forecaster
            .forecast(Some("north"), 12, &mut RngNoise::seeded(99))
            .unwrap();
        let b = forecaster
            .forecast(Some("north"), 12, &mut RngNoise::seeded(99))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn location_does_not_change_output() {
        let forecaster = forecaster_at(14);
        let a = forecaster
            .forecast(Some("north"), 4, &mut RngNoise::seeded(5))
            .unwrap();
        let b = forecaster
            .forecast(None, 4, &mut RngNoise::seeded(5))
            .unwrap();
        assert_eq!(a, b);
    }
}
