use std::collections::{BTreeMap, HashMap};

use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

use resource_usage_metrics::quantity::{QuantityExt as _, QuantityParseError};
use resource_usage_metrics::v1beta1::PodMetrics;

/// CPU or memory snapshot for one pod. Values are on the resource kind's
/// native integer scale: millicores for CPU, bytes for memory.
///
/// `request_percent` is present iff `requests` is present and non-zero; same
/// for `limit_percent`/`limits`. Percentages above 100 are a valid state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceUsage {
    pub usage: i64,
    pub requests: Option<i64>,
    pub limits: Option<i64>,
    pub request_percent: Option<i64>,
    pub limit_percent: Option<i64>,
}

/// Complete usage record for one pod.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PodUsage {
    pub namespace: String,
    pub name: String,
    pub node: String,
    pub cpu: ResourceUsage,
    pub memory: ResourceUsage,
}

/// Resource kind selecting which `limit_percent` filters and sorts read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResourceField {
    Cpu,
    #[default]
    Memory,
}

impl PodUsage {
    pub fn limit_percent(&self, field: ResourceField) -> Option<i64> {
        match field {
            ResourceField::Cpu => self.cpu.limit_percent,
            ResourceField::Memory => self.memory.limit_percent,
        }
    }
}

/// Usage as a percentage of `base`, or `None` when `base` is absent or zero.
pub fn calculate_percent(usage: i64, base: Option<i64>) -> Option<i64> {
    match base {
        Some(base) if base != 0 => Some(usage * 100 / base),
        _ => None,
    }
}

/// Builds the usage record for one pod from its live metrics and its spec,
/// which the caller has already matched by identity.
///
/// Usage is summed across all containers in the metrics record. Requests and
/// limits are summed across the spec containers that declare them; the
/// aggregate is present iff at least one container declares it.
pub fn calculate_pod_usage(
    metrics: &PodMetrics,
    pod: &corev1::Pod,
) -> Result<PodUsage, QuantityParseError> {
    let mut cpu_usage = 0;
    let mut memory_usage = 0;
    for container in &metrics.containers {
        cpu_usage += container.usage.cpu()?;
        memory_usage += container.usage.memory()?;
    }

    let spec = pod.spec.as_ref();
    let cpu_requests = declared_total(spec, "cpu", requests, |q| q.to_milli_cpus())?;
    let cpu_limits = declared_total(spec, "cpu", limits, |q| q.to_milli_cpus())?;
    let memory_requests = declared_total(spec, "memory", requests, |q| q.to_bytes())?;
    let memory_limits = declared_total(spec, "memory", limits, |q| q.to_bytes())?;

    Ok(PodUsage {
        namespace: metrics.metadata.namespace.clone().unwrap_or_default(),
        name: metrics.metadata.name.clone().unwrap_or_default(),
        node: spec
            .and_then(|spec| spec.node_name.clone())
            .unwrap_or_default(),
        cpu: resource_usage(cpu_usage, cpu_requests, cpu_limits),
        memory: resource_usage(memory_usage, memory_requests, memory_limits),
    })
}

/// Joins metrics with specs by `namespace/name` and computes usage for every
/// matched pod. A metrics record without a spec counterpart is skipped: the
/// pod disappeared between the two listings, and this is a best-effort view.
pub fn calculate_cluster_usage(
    metrics: &[PodMetrics],
    pods: &[corev1::Pod],
) -> Result<Vec<PodUsage>, QuantityParseError> {
    let by_key: HashMap<String, &corev1::Pod> = pods
        .iter()
        .map(|pod| (pod_key(&pod.metadata), pod))
        .collect();

    let mut usages = Vec::with_capacity(metrics.len());
    for metric in metrics {
        let key = pod_key(&metric.metadata);
        let Some(pod) = by_key.get(&key) else {
            tracing::debug!(pod = %key, "no matching pod spec, skipping");
            continue;
        };
        usages.push(calculate_pod_usage(metric, pod)?);
    }
    Ok(usages)
}

fn resource_usage(usage: i64, requests: Option<i64>, limits: Option<i64>) -> ResourceUsage {
    ResourceUsage {
        usage,
        requests,
        limits,
        request_percent: calculate_percent(usage, requests),
        limit_percent: calculate_percent(usage, limits),
    }
}

fn declared_total(
    spec: Option<&corev1::PodSpec>,
    kind: &str,
    section: fn(&corev1::ResourceRequirements) -> Option<&BTreeMap<String, Quantity>>,
    to_scaled: fn(&Quantity) -> Result<i64, QuantityParseError>,
) -> Result<Option<i64>, QuantityParseError> {
    let containers = spec.map(|spec| spec.containers.as_slice()).unwrap_or_default();
    let mut total = None;
    for container in containers {
        let Some(resources) = container.resources.as_ref() else {
            continue;
        };
        let Some(quantity) = section(resources).and_then(|list| list.get(kind)) else {
            continue;
        };
        total = Some(total.unwrap_or(0) + to_scaled(quantity)?);
    }
    Ok(total)
}

fn requests(resources: &corev1::ResourceRequirements) -> Option<&BTreeMap<String, Quantity>> {
    resources.requests.as_ref()
}

fn limits(resources: &corev1::ResourceRequirements) -> Option<&BTreeMap<String, Quantity>> {
    resources.limits.as_ref()
}

fn pod_key(metadata: &metav1::ObjectMeta) -> String {
    format!(
        "{}/{}",
        metadata.namespace.as_deref().unwrap_or_default(),
        metadata.name.as_deref().unwrap_or_default()
    )
}
