//! Time-of-day regimes.
//!
//! Each hour of the day falls into exactly one regime, which fixes the
//! baseline congestion before noise is applied.

use traffic_flow_forecast_models::{CongestionLevel, Trend};

/// A named time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// 07:00-09:59.
    MorningRush,
    /// 16:00-18:59.
    EveningRush,
    /// 11:00-13:59.
    Midday,
    /// 22:00-05:59.
    Night,
    /// Every other hour.
    Normal,
}

impl Regime {
    /// Classifies an hour of the day (0-23).
    #[must_use]
    pub const fn for_hour(hour: u32) -> Self {
        match hour {
            7..=9 => Self::MorningRush,
            16..=18 => Self::EveningRush,
            11..=13 => Self::Midday,
            0..=5 | 22..=23 => Self::Night,
            _ => Self::Normal,
        }
    }

    /// Congestion before perturbation.
    #[must_use]
    pub const fn base_level(self) -> CongestionLevel {
        match self {
            Self::MorningRush | Self::EveningRush => CongestionLevel::Heavy,
            Self::Midday | Self::Normal => CongestionLevel::Medium,
            Self::Night => CongestionLevel::Light,
        }
    }

    /// The trend this regime prescribes at `hour`.
    ///
    /// Returns `None` for [`Regime::Normal`], whose trend is drawn at
    /// random.
    #[must_use]
    pub const fn fixed_trend(self, hour: u32) -> Option<Trend> {
        match self {
            Self::MorningRush => Some(if hour < 8 {
                Trend::Increasing
            } else {
                Trend::Decreasing
            }),
            Self::EveningRush => Some(if hour < 17 {
                Trend::Increasing
            } else {
                Trend::Decreasing
            }),
            Self::Midday | Self::Night => Some(Trend::Steady),
            Self::Normal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_hour() {
        let expected = [
            (0, Regime::Night),
            (5, Regime::Night),
            (6, Regime::Normal),
            (7, Regime::MorningRush),
            (9, Regime::MorningRush),
            (10, Regime::Normal),
            (11, Regime::Midday),
            (13, Regime::Midday),
            (14, Regime::Normal),
            (15, Regime::Normal),
            (16, Regime::EveningRush),
            (18, Regime::EveningRush),
            (19, Regime::Normal),
            (21, Regime::Normal),
            (22, Regime::Night),
            (23, Regime::Night),
        ];
        for (hour, regime) in expected {
            assert_eq!(Regime::for_hour(hour), regime, "hour {hour}");
        }
    }

    #[test]
    fn rush_trend_flips_after_first_hour() {
        assert_eq!(
            Regime::MorningRush.fixed_trend(7),
            Some(Trend::Increasing)
        );
        assert_eq!(
            Regime::MorningRush.fixed_trend(8),
            Some(Trend::Decreasing)
        );
        assert_eq!(
            Regime::EveningRush.fixed_trend(16),
            Some(Trend::Increasing)
        );
        assert_eq!(
            Regime::EveningRush.fixed_trend(18),
            Some(Trend::Decreasing)
        );
        assert_eq!(Regime::Normal.fixed_trend(15), None);
    }
}
