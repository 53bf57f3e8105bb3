#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static dashboard data.
//!
//! The dashboard's signal list, route options, analytics summary and
//! traffic overview are fixed records. This crate owns their shapes and
//! the functions that produce them; nothing here reads external state
//! apart from the timestamp callers pass in.

pub mod data;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use traffic_flow_forecast_models::timestamp;

pub use data::{
    analytics_summary, current_traffic, optimize_route, optimize_signal, signals, status,
};

/// Road-level congestion as reported for signals, hotspots and routes.
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
pub enum RoadCongestion {
    /// Traffic moving freely.
    Low,
    /// Slow but moving.
    Medium,
    /// Queues forming.
    High,
}

/// Operational state of a traffic signal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum SignalStatus {
    /// Cycling normally.
    Active,
    /// Taken out of service.
    Maintenance,
}

/// Progress of an incident on the road network.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum IncidentStatus {
    /// Crews are clearing the road.
    Clearing,
    /// No end in sight yet.
    Ongoing,
}

/// Service liveness and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// `active` while the service is up.
    pub status: String,
    /// API version.
    pub version: String,
}

/// City-wide traffic snapshot shown on the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSnapshot {
    /// When the snapshot was taken.
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    /// Network-wide figures.
    pub overview: TrafficOverview,
    /// Most congested locations.
    pub hotspots: Vec<Hotspot>,
    /// Open incidents.
    pub incidents: Vec<Incident>,
}

/// Headline network figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficOverview {
    /// Network-wide average speed in km/h.
    pub avg_speed: u32,
    /// Network-wide congestion.
    pub congestion_level: RoadCongestion,
    /// Signals currently cycling.
    pub active_signals: u32,
    /// Routes with optimized timing plans.
    pub optimized_routes: u32,
}

/// A congested location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Hotspot ID.
    pub id: u32,
    /// Location name.
    pub name: String,
    /// Congestion at the location.
    pub congestion: RoadCongestion,
    /// Delay in minutes.
    pub delay: u32,
}

/// A reported road incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    /// Incident ID.
    pub id: u32,
    /// Incident type, e.g. `Accident`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Street or area affected.
    pub location: String,
    /// Clearing progress.
    pub status: IncidentStatus,
    /// Minutes until the incident is expected to clear.
    pub estimated_clear_time: u32,
}

/// A signalized intersection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Signal ID.
    pub id: u32,
    /// Intersection name.
    pub name: String,
    /// District the signal is in.
    pub location: String,
    /// Operational state.
    pub status: SignalStatus,
    /// Congestion at the intersection.
    pub congestion: RoadCongestion,
    /// Whether an optimized timing plan is active.
    pub optimized: bool,
    /// When the signal last reported.
    #[serde(with = "timestamp")]
    pub last_updated: NaiveDateTime,
}

/// Outcome of a signal timing optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalOptimization {
    /// Signal that was re-timed.
    pub id: u32,
    /// Whether the new plan was applied.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// The applied timing plan.
    pub new_settings: SignalTiming,
}

/// Phase durations of a signal cycle, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTiming {
    /// Green phase.
    pub green_duration: u32,
    /// Yellow phase.
    pub yellow_duration: u32,
    /// Red phase.
    pub red_duration: u32,
    /// Sum of the three phase durations.
    pub cycle_time: u32,
    /// Mode the plan was computed under.
    pub optimization_mode: String,
    /// When the plan was computed.
    #[serde(with = "timestamp")]
    pub optimized_at: NaiveDateTime,
}

/// Body of a route optimization request. Missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteRequest {
    /// Trip start.
    pub origin: String,
    /// Trip end.
    pub destination: String,
    /// Departure time, `now` by default.
    pub depart_time: String,
}

impl Default for RouteRequest {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            depart_time: "now".to_string(),
        }
    }
}

/// Candidate routes for a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Trip start, as requested.
    pub origin: String,
    /// Trip end, as requested.
    pub destination: String,
    /// Departure time, as requested.
    pub depart_time: String,
    /// Candidates, main route first.
    pub routes: Vec<RouteOption>,
    /// When the plan was computed.
    #[serde(with = "timestamp")]
    pub computed_at: NaiveDateTime,
}

/// One candidate route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOption {
    /// Route ID, 1-based.
    pub id: u32,
    /// Route name.
    pub name: String,
    /// Length in kilometres.
    pub distance: f64,
    /// Travel time in minutes.
    pub duration: u32,
    /// Congestion along the route.
    pub congestion: RoadCongestion,
    /// Minutes saved relative to the main route.
    pub saved_time: u32,
}

/// Aggregate impact figures for a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Reporting period, e.g. `week`.
    pub period: String,
    /// Percent.
    pub congestion_reduction: u32,
    /// Minutes.
    pub avg_commute_time: f64,
    /// Minutes.
    pub commute_time_reduction: f64,
    /// Routes optimized during the period.
    pub optimized_routes_count: u32,
    /// Percent.
    pub routes_increase: f64,
    /// Share of traffic by road class.
    pub traffic_distribution: TrafficDistribution,
    /// Cumulative savings.
    pub impact: Impact,
}

/// Share of traffic by road class, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficDistribution {
    /// Arterial roads.
    pub main_roads: u32,
    /// Highways.
    pub highways: u32,
    /// Residential streets.
    pub side_streets: u32,
}

/// Cumulative savings attributed to optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impact {
    /// Hours.
    pub time_saved: u64,
    /// Litres.
    pub fuel_saved: u64,
    /// Tonnes.
    pub co2_reduction: u64,
    /// Currency units.
    pub economic_benefit: u64,
}
