use constcat::concat;
use serde::{Deserialize, Serialize};

use k8s_openapi::apimachinery::pkg::api::resource;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

use crate::quantity::{QuantityExt as _, QuantityParseError};

pub use pod::PodMetrics;

pub const METRICS_API_GROUP: &str = "metrics.k8s.io";
pub const METRICS_API_VERSION: &str = "v1beta1";
pub const METRICS_API_GROUP_VERSION: &str = concat!(METRICS_API_GROUP, "/", METRICS_API_VERSION);

mod duration;
mod pod;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub cpu: resource::Quantity,
    pub memory: resource::Quantity,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    pub name: String,
    pub usage: Usage,
}

impl Usage {
    pub fn cpu(&self) -> Result<i64, QuantityParseError> {
        self.cpu.to_milli_cpus()
    }

    pub fn memory(&self) -> Result<i64, QuantityParseError> {
        self.memory.to_bytes()
    }
}
