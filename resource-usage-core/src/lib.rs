//! Per-pod resource utilization: joins live metrics with pod specs, computes
//! usage percentages relative to requests/limits, and filters and orders the
//! result. Every stage is a pure transformation over the list produced by the
//! previous one.

pub mod filter;
pub mod sort;
pub mod usage;

pub use filter::{filter_pod_usages, FilterOptions};
pub use sort::sort_pod_usages;
pub use usage::{
    calculate_cluster_usage, calculate_percent, calculate_pod_usage, PodUsage, ResourceField,
    ResourceUsage,
};
