//! DTOs for the telemetry-style metric endpoints.
//!
//! Timestamps are fixed strings, not wall-clock readings: the gateway serves
//! canned samples, it does not measure anything.

use serde::Serialize;

/// A single network metric sample (ping or jitter).
#[derive(Debug, Serialize)]
pub struct MetricSample {
    pub value: u32,
    pub unit: &'static str,
    pub timestamp: &'static str,
}

/// A snapshot of host resource utilization percentages.
#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    pub cpu: u32,
    pub memory: u32,
    pub gpu: u32,
    pub timestamp: &'static str,
}
