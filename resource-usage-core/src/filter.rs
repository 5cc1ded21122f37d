use crate::usage::{PodUsage, ResourceField};

/// Threshold/no-limit criteria applied to a computed usage list.
///
/// `above`/`below` compare against the selected field's `limit_percent`.
/// Callers should reject combining `no_limits` with a threshold; if both are
/// set anyway, `no_limits` wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterOptions {
    pub above: Option<i64>,
    pub below: Option<i64>,
    pub no_limits: bool,
    pub field: ResourceField,
}

impl FilterOptions {
    fn is_noop(&self) -> bool {
        self.above.is_none() && self.below.is_none() && !self.no_limits
    }
}

/// Reduces the list to pods matching the criteria, preserving input order.
pub fn filter_pod_usages(pods: Vec<PodUsage>, options: &FilterOptions) -> Vec<PodUsage> {
    if options.is_noop() {
        return pods;
    }
    pods.into_iter()
        .filter(|pod| matches_filter(pod, options))
        .collect()
}

fn matches_filter(pod: &PodUsage, options: &FilterOptions) -> bool {
    if options.no_limits {
        return pod.cpu.limits.is_none() || pod.memory.limits.is_none();
    }

    // A pod with no computable percentage cannot satisfy a threshold.
    let Some(percent) = pod.limit_percent(options.field) else {
        return false;
    };
    if options.above.is_some_and(|above| percent < above) {
        return false;
    }
    if options.below.is_some_and(|below| percent > below) {
        return false;
    }
    true
}
