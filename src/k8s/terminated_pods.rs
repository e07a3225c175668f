use std::str::FromStr;

use k8s_openapi::api::core::v1::{ContainerStatus, Pod};
use k8s_openapi::chrono::{DateTime, Utc};
use tracing::debug;

use super::policy::Policy;
use crate::error::CheckError;
use crate::utils::time_utils::format_time;

/// Which containers of a retained pod produce a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Inclusion {
    /// Every container of the pod that has a last termination state
    #[default]
    Pod,
    /// Only the containers that satisfy the active policy
    Container,
}

/// One terminated run of a container
#[derive(Debug, Clone, PartialEq)]
pub struct TerminationRecord {
    pub namespace: String,
    pub pod_name: String,
    pub container_name: String,
    /// Display form of the termination time
    pub terminated_at: String,
    /// Ordering form of the termination time. `None` when the kubelet did not
    /// report a finish time, which orders before any known instant.
    pub terminated_instant: Option<DateTime<Utc>>,
    pub started_at: String,
    pub restart_count: String,
    /// Only set under the OOM policy
    pub exit_code: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    /// Keep discovery order
    #[default]
    None,
    /// Ascending termination time
    Time,
}

impl FromStr for SortField {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SortField::None),
            "time" => Ok(SortField::Time),
            other => Err(CheckError::UserInput(format!(
                "{} is not a supported sortable field.",
                other
            ))),
        }
    }
}

fn container_statuses(pod: &Pod) -> &[ContainerStatus] {
    pod.status
        .as_ref()
        .and_then(|s| s.container_statuses.as_deref())
        .unwrap_or_default()
}

/// Pods with at least one container satisfying `policy`, in input order
pub fn scan<'a>(pods: &'a [Pod], policy: Policy) -> Vec<&'a Pod> {
    pods.iter()
        .filter(|pod| container_statuses(pod).iter().any(|c| policy.qualifies(c)))
        .collect()
}

/// Turn retained pods into termination records, one per reported container
pub fn extract(pods: &[&Pod], policy: Policy, inclusion: Inclusion) -> Vec<TerminationRecord> {
    let mut records = Vec::new();

    for pod in pods {
        let pod_name = pod.metadata.name.clone().unwrap_or_default();
        let namespace = pod.metadata.namespace.clone().unwrap_or_default();

        for container in container_statuses(pod) {
            if inclusion == Inclusion::Container && !policy.qualifies(container) {
                continue;
            }
            let Some(terminated) = container.last_state.as_ref().and_then(|s| s.terminated.as_ref())
            else {
                continue;
            };

            let terminated_instant = terminated.finished_at.as_ref().map(|t| t.0);
            let started_instant = terminated.started_at.as_ref().map(|t| t.0);

            debug!(
                "Container {}/{}/{} last terminated with exit code {}",
                namespace, pod_name, container.name, terminated.exit_code
            );

            records.push(TerminationRecord {
                namespace: namespace.clone(),
                pod_name: pod_name.clone(),
                container_name: container.name.clone(),
                terminated_at: format_time(terminated_instant.as_ref()),
                terminated_instant,
                started_at: format_time(started_instant.as_ref()),
                restart_count: container.restart_count.max(0).to_string(),
                exit_code: policy.shows_exit_code().then_some(terminated.exit_code),
            });
        }
    }

    records
}

/// Ordered termination records produced from one pod snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSet {
    records: Vec<TerminationRecord>,
}

impl ReportSet {
    /// Scan `pods` with `policy` and extract records in discovery order
    pub fn build(pods: &[Pod], policy: Policy, inclusion: Inclusion) -> Self {
        let retained = scan(pods, policy);
        debug!(
            "{} of {} pods matched the {} filter",
            retained.len(),
            pods.len(),
            policy
        );
        Self {
            records: extract(&retained, policy, inclusion),
        }
    }

    /// Stable sort; sorting an already sorted set leaves it unchanged
    pub fn sort(&mut self, field: SortField) {
        match field {
            SortField::None => {}
            SortField::Time => self.records.sort_by_key(|r| r.terminated_instant),
        }
    }

    pub fn records(&self) -> &[TerminationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TerminationRecord> {
        self.records().iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
