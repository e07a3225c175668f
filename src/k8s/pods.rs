use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{Api, ListParams},
    Client,
};
use tracing::{error, info};

use super::kubeconfig::Namespace;
use crate::error::{CheckError, CheckResult};

fn pods_api(client: Client, namespace: &Namespace) -> Api<Pod> {
    match namespace {
        Namespace::All => Api::all(client),
        Namespace::Named(ns) => Api::namespaced(client, ns),
    }
}

/// Snapshot of the pods in `namespace`; failures are returned as-is, never retried
pub async fn list_pods(client: Client, namespace: &Namespace) -> CheckResult<Vec<Pod>> {
    info!("Listing pods in {}", namespace);
    let pods = pods_api(client, namespace);

    match pods.list(&ListParams::default()).await {
        Ok(pod_list) => {
            info!("Fetched {} pods", pod_list.items.len());
            Ok(pod_list.items)
        }
        Err(e) => {
            error!("Failed to fetch pods: {}", e);
            Err(CheckError::ClusterAccess(e))
        }
    }
}
