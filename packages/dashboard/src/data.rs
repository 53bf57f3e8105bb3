//! Fixed dashboard records.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    AnalyticsSummary, Hotspot, Impact, Incident, IncidentStatus, RoadCongestion, RouteOption,
    RoutePlan, RouteRequest, ServiceStatus, Signal, SignalOptimization, SignalStatus,
    SignalTiming, TrafficDistribution, TrafficOverview, TrafficSnapshot,
};

/// Optimization mode used when a request does not name one.
pub const DEFAULT_OPTIMIZATION_MODE: &str = "auto";

/// Analytics period used when a request does not name one.
pub const DEFAULT_ANALYTICS_PERIOD: &str = "week";

const API_VERSION: &str = "1.0.0";

/// `{ "status": "active", "version": "1.0.0" }`
#[must_use]
pub fn status() -> ServiceStatus {
    ServiceStatus {
        status: "active".to_string(),
        version: API_VERSION.to_string(),
    }
}

/// The city-wide snapshot, stamped with `now`.
#[must_use]
pub fn current_traffic(now: NaiveDateTime) -> TrafficSnapshot {
    let hotspot = |id, name: &str, congestion, delay| Hotspot {
        id,
        name: name.to_string(),
        congestion,
        delay,
    };
    let incident = |id, kind: &str, location: &str, status, estimated_clear_time| Incident {
        id,
        kind: kind.to_string(),
        location: location.to_string(),
        status,
        estimated_clear_time,
    };

    TrafficSnapshot {
        timestamp: now,
        overview: TrafficOverview {
            avg_speed: 32,
            congestion_level: RoadCongestion::Medium,
            active_signals: 124,
            optimized_routes: 18,
        },
        hotspots: vec![
            hotspot(1, "Main St & 5th Ave", RoadCongestion::High, 12),
            hotspot(2, "Highway 101 Northbound", RoadCongestion::High, 18),
            hotspot(3, "Downtown Bridge", RoadCongestion::Medium, 15),
        ],
        incidents: vec![
            incident(1, "Accident", "7th Avenue", IncidentStatus::Clearing, 20),
            incident(2, "Construction", "East Boulevard", IncidentStatus::Ongoing, 180),
        ],
    }
}

/// Every known traffic signal.
#[must_use]
pub fn signals() -> Vec<Signal> {
    let signal = |id, name: &str, location: &str, status, congestion, optimized, last_updated| {
        Signal {
            id,
            name: name.to_string(),
            location: location.to_string(),
            status,
            congestion,
            optimized,
            last_updated,
        }
    };

    vec![
        signal(
            1,
            "Main & 5th Intersection",
            "Downtown",
            SignalStatus::Active,
            RoadCongestion::High,
            false,
            june_10(15, 30, 45),
        ),
        signal(
            2,
            "Highway 101 Entrance",
            "North District",
            SignalStatus::Active,
            RoadCongestion::Medium,
            true,
            june_10(15, 45, 12),
        ),
        signal(
            3,
            "Park Avenue & 3rd",
            "East District",
            SignalStatus::Maintenance,
            RoadCongestion::Low,
            false,
            june_10(12, 15, 30),
        ),
    ]
}

fn june_10(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, 10)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .unwrap_or_default()
}

/// Re-times signal `id` under `mode` (default [`DEFAULT_OPTIMIZATION_MODE`]).
#[must_use]
pub fn optimize_signal(id: u32, mode: Option<&str>, now: NaiveDateTime) -> SignalOptimization {
    let (green, yellow, red) = (45, 4, 60);

    SignalOptimization {
        id,
        success: true,
        message: format!("Signal {id} optimized successfully"),
        new_settings: SignalTiming {
            green_duration: green,
            yellow_duration: yellow,
            red_duration: red,
            cycle_time: green + yellow + red,
            optimization_mode: mode.unwrap_or(DEFAULT_OPTIMIZATION_MODE).to_string(),
            optimized_at: now,
        },
    }
}

/// Candidate routes for `request`, computed at `now`.
///
/// The first option is the main route; every option's `saved_time` is
/// measured against it.
#[must_use]
pub fn optimize_route(request: RouteRequest, now: NaiveDateTime) -> RoutePlan {
    let candidates = [
        ("Main Route", 12.3, 24, RoadCongestion::Medium),
        ("Alternate Route 1", 14.1, 19, RoadCongestion::Low),
        ("Highway Route", 15.7, 18, RoadCongestion::Low),
    ];
    let baseline = candidates[0].2;

    let routes = (1..)
        .zip(candidates)
        .map(|(id, (name, distance, duration, congestion))| RouteOption {
            id,
            name: name.to_string(),
            distance,
            duration,
            congestion,
            saved_time: baseline.saturating_sub(duration),
        })
        .collect();

    RoutePlan {
        origin: request.origin,
        destination: request.destination,
        depart_time: request.depart_time,
        routes,
        computed_at: now,
    }
}

/// Impact figures for `period` (default [`DEFAULT_ANALYTICS_PERIOD`]).
#[must_use]
pub fn analytics_summary(period: Option<&str>) -> AnalyticsSummary {
    AnalyticsSummary {
        period: period.unwrap_or(DEFAULT_ANALYTICS_PERIOD).to_string(),
        congestion_reduction: 18,
        avg_commute_time: 24.5,
        commute_time_reduction: 5.2,
        optimized_routes_count: 247,
        routes_increase: 14.8,
        traffic_distribution: TrafficDistribution {
            main_roads: 45,
            highways: 35,
            side_streets: 20,
        },
        impact: Impact {
            time_saved: 287_450,
            fuel_saved: 124_500,
            co2_reduction: 1_120,
            economic_benefit: 4_200_000,
        },
    }
}
