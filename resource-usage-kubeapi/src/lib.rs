//! Thin wrapper over `kube::Client` that fetches the two collections the
//! usage pipeline consumes: pod specs and live pod metrics.

use std::fmt::Debug;

use k8s_openapi::api::core::v1 as corev1;
use kube::api::{Api, ListParams};
use thiserror::Error;

use resource_usage_metrics::v1beta1::PodMetrics;

#[derive(Debug, Error)]
pub enum KubeApiError {
    #[error("metrics API not available: please install metrics-server")]
    MetricsApiUnavailable(#[source] kube::Error),
    #[error("insufficient permissions to access metrics API")]
    MetricsApiForbidden(#[source] kube::Error),
    #[error("failed to list pod metrics")]
    ListPodMetrics(#[source] kube::Error),
    #[error("failed to list pods")]
    ListPods(#[source] kube::Error),
}

pub struct KubeApi {
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi from the default kubeconfig/in-cluster environment.
    pub async fn new() -> kube::Result<Self> {
        kube::Client::try_default().await.map(Self::with_client)
    }

    pub fn with_client(client: kube::Client) -> Self {
        Self { client }
    }

    /// Lists live pod metrics for the namespace scope (`None` = all
    /// namespaces). A 404 from the API server means metrics-server is not
    /// installed; that and 403 are mapped to dedicated errors.
    pub async fn list_pod_metrics(
        &self,
        namespace: Option<&str>,
    ) -> Result<Vec<PodMetrics>, KubeApiError> {
        tracing::debug!(?namespace, "listing pod metrics");
        let params = ListParams::default();
        self.pod_metrics(namespace)
            .list(&params)
            .await
            .map(|list| list.items)
            .map_err(classify_metrics_error)
    }

    /// Lists pod specs for the namespace scope, optionally filtered by a
    /// label selector such as `app=api`.
    pub async fn list_pods(
        &self,
        namespace: Option<&str>,
        selector: Option<&str>,
    ) -> Result<Vec<corev1::Pod>, KubeApiError> {
        tracing::debug!(?namespace, ?selector, "listing pods");
        let mut params = ListParams::default();
        if let Some(selector) = selector {
            params = params.labels(selector);
        }
        self.pods(namespace)
            .list(&params)
            .await
            .map(|list| list.items)
            .map_err(KubeApiError::ListPods)
    }

    fn pod_metrics(&self, namespace: Option<&str>) -> Api<PodMetrics> {
        self.scoped(namespace)
    }

    fn pods(&self, namespace: Option<&str>) -> Api<corev1::Pod> {
        self.scoped(namespace)
    }

    fn scoped<K>(&self, namespace: Option<&str>) -> Api<K>
    where
        K: kube::Resource<Scope = k8s_openapi::NamespaceResourceScope>,
        K::DynamicType: Default,
    {
        match namespace {
            Some(namespace) => Api::namespaced(self.client.clone(), namespace),
            None => Api::all(self.client.clone()),
        }
    }
}

fn classify_metrics_error(err: kube::Error) -> KubeApiError {
    let code = match &err {
        kube::Error::Api(response) => Some(response.code),
        _ => None,
    };
    match code {
        Some(404) => KubeApiError::MetricsApiUnavailable(err),
        Some(403) => KubeApiError::MetricsApiForbidden(err),
        _ => KubeApiError::ListPodMetrics(err),
    }
}

impl Debug for KubeApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("client", &"<kube::Client>")
            .finish()
    }
}
