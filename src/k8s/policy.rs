use std::fmt;
use std::str::FromStr;

use k8s_openapi::api::core::v1::ContainerStatus;

use crate::error::CheckError;

/// Exit code the kubelet reports for a container killed by the OOM killer
pub const OOM_EXIT_CODE: i32 = 137;

/// Which terminated containers are worth reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Any container that has restarted at least once
    #[default]
    Restart,
    /// Containers whose last run ended with exit code 137
    Oom,
}

impl Policy {
    pub fn qualifies(&self, status: &ContainerStatus) -> bool {
        match self {
            Policy::Restart => status.restart_count > 0,
            Policy::Oom => last_exit_code(status) == Some(OOM_EXIT_CODE),
        }
    }

    /// Whether the EXIT CODE column belongs in the output
    pub fn shows_exit_code(&self) -> bool {
        matches!(self, Policy::Oom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Restart => "restart",
            Policy::Oom => "oom",
        }
    }
}

fn last_exit_code(status: &ContainerStatus) -> Option<i32> {
    status
        .last_state
        .as_ref()
        .and_then(|s| s.terminated.as_ref())
        .map(|t| t.exit_code)
}

impl FromStr for Policy {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restart" => Ok(Policy::Restart),
            "oom" => Ok(Policy::Oom),
            other => Err(CheckError::UserInput(format!(
                "invalid filter type \"{}\", expected one of: restart, oom",
                other
            ))),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{ContainerState, ContainerStateTerminated};

    fn status(restart_count: i32, exit_code: Option<i32>) -> ContainerStatus {
        ContainerStatus {
            name: "app".to_string(),
            restart_count,
            last_state: exit_code.map(|exit_code| ContainerState {
                terminated: Some(ContainerStateTerminated {
                    exit_code,
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_restart_policy() {
        assert!(Policy::Restart.qualifies(&status(1, None)));
        assert!(Policy::Restart.qualifies(&status(4, Some(1))));
        assert!(!Policy::Restart.qualifies(&status(0, Some(137))));
    }

    #[test]
    fn test_oom_policy() {
        assert!(Policy::Oom.qualifies(&status(0, Some(137))));
        assert!(Policy::Oom.qualifies(&status(2, Some(137))));
        // restarts alone are not an OOM kill
        assert!(!Policy::Oom.qualifies(&status(5, Some(1))));
        assert!(!Policy::Oom.qualifies(&status(5, None)));
    }

    #[test]
    fn test_oom_policy_without_terminated_state() {
        let mut s = status(3, None);
        s.last_state = Some(ContainerState::default());
        assert!(!Policy::Oom.qualifies(&s));
    }

    #[test]
    fn test_parse() {
        assert_eq!("restart".parse::<Policy>().unwrap(), Policy::Restart);
        assert_eq!("oom".parse::<Policy>().unwrap(), Policy::Oom);
        assert_eq!(Policy::default(), Policy::Restart);

        let err = "crash".parse::<Policy>().unwrap_err();
        assert!(matches!(err, CheckError::UserInput(_)));
        assert!(err.to_string().contains("crash"));
    }

    #[test]
    fn test_exit_code_column() {
        assert!(Policy::Oom.shows_exit_code());
        assert!(!Policy::Restart.shows_exit_code());
    }
}
