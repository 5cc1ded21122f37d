//! The structured shape shared by the json and yaml encodings. Field names
//! are a stable interface: `namespace`, `pod`, `node`, `cpu`, `memory`,
//! `usage`, `requests`, `limits`, `requestPercent`, `limitPercent`.

use serde::{Deserialize, Serialize};

use resource_usage_core::{PodUsage, ResourceUsage};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct StructuredOutput {
    pub(super) items: Vec<StructuredPodUsage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct StructuredPodUsage {
    pub(super) namespace: String,
    pub(super) pod: String,
    pub(super) node: String,
    pub(super) cpu: StructuredResourceUsage,
    pub(super) memory: StructuredResourceUsage,
}

/// Quantities as canonical strings; absent requests/limits serialize as
/// explicit nulls rather than being omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StructuredResourceUsage {
    pub(super) usage: String,
    pub(super) requests: Option<String>,
    pub(super) limits: Option<String>,
    pub(super) request_percent: Option<i64>,
    pub(super) limit_percent: Option<i64>,
}

impl StructuredOutput {
    pub(super) fn from_pod_usages(pods: &[PodUsage]) -> Self {
        let items = pods
            .iter()
            .map(|pod| StructuredPodUsage {
                namespace: pod.namespace.clone(),
                pod: pod.name.clone(),
                node: pod.node.clone(),
                cpu: StructuredResourceUsage::new(&pod.cpu, cpu_quantity),
                memory: StructuredResourceUsage::new(&pod.memory, memory_quantity),
            })
            .collect();
        Self { items }
    }
}

impl StructuredResourceUsage {
    fn new(usage: &ResourceUsage, quantity: fn(i64) -> String) -> Self {
        Self {
            usage: quantity(usage.usage),
            requests: usage.requests.map(quantity),
            limits: usage.limits.map(quantity),
            request_percent: usage.request_percent,
            limit_percent: usage.limit_percent,
        }
    }
}

/// Canonical CPU string: whole cores when they divide evenly, else
/// millicores (`250m`, `1`, `1500m`).
fn cpu_quantity(milli_cores: i64) -> String {
    if milli_cores % 1000 == 0 {
        (milli_cores / 1000).to_string()
    } else {
        format!("{milli_cores}m")
    }
}

/// Canonical memory string: the largest binary unit that divides evenly,
/// else raw bytes (`256Mi`, `1Gi`, `1000`).
fn memory_quantity(bytes: i64) -> String {
    const KI: i64 = 1024;
    const MI: i64 = KI * 1024;
    const GI: i64 = MI * 1024;
    match bytes {
        b if b != 0 && b % GI == 0 => format!("{}Gi", b / GI),
        b if b != 0 && b % MI == 0 => format!("{}Mi", b / MI),
        b if b != 0 && b % KI == 0 => format!("{}Ki", b / KI),
        b => b.to_string(),
    }
}
