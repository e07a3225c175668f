use kube::config::{InferConfigError, KubeconfigError};
use thiserror::Error;

/// Errors that end a `check-restart` run
#[derive(Debug, Error)]
pub enum CheckError {
    /// Kubeconfig (or in-cluster configuration) could not be read
    #[error("failed to read kubeconfig: {0}")]
    Config(String),
    /// A client could not be built from the loaded configuration
    #[error("failed to create client: {0}")]
    Client(#[source] kube::Error),
    /// Listing pods from the API server failed
    #[error("failed to list pods: {0}")]
    ClusterAccess(#[source] kube::Error),
    /// Unsupported filter type or sort field on the command line
    #[error("{0}")]
    UserInput(String),
    /// Writing the report to stdout failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CheckError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckError::UserInput(_) => 2,
            CheckError::Config(_)
            | CheckError::Client(_)
            | CheckError::ClusterAccess(_)
            | CheckError::Output(_) => 1,
        }
    }
}

impl From<KubeconfigError> for CheckError {
    fn from(err: KubeconfigError) -> Self {
        CheckError::Config(err.to_string())
    }
}

impl From<InferConfigError> for CheckError {
    fn from(err: InferConfigError) -> Self {
        CheckError::Config(err.to_string())
    }
}

/// Result type for check-restart operations
pub type CheckResult<T> = Result<T, CheckError>;
