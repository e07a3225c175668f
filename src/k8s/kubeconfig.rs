use std::fmt;
use std::path::PathBuf;

use clap::Args;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::debug;

use crate::error::{CheckError, CheckResult};
use crate::utils::config;

/// Generic flags shared with regular `kubectl` commands
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigFlags {
    /// Path to the kubeconfig file to use for CLI requests
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// The name of the kubeconfig context to use
    #[arg(long)]
    pub context: Option<String>,

    /// The name of the kubeconfig cluster to use
    #[arg(long)]
    pub cluster: Option<String>,

    /// The name of the kubeconfig user to use
    #[arg(long)]
    pub user: Option<String>,

    /// If present, the namespace scope for this CLI request
    #[arg(short, long)]
    pub namespace: Option<String>,
}

impl ConfigFlags {
    fn overrides_kubeconfig(&self) -> bool {
        self.kubeconfig.is_some()
            || self.context.is_some()
            || self.cluster.is_some()
            || self.user.is_some()
    }

    fn options(&self) -> KubeConfigOptions {
        KubeConfigOptions {
            context: self.context.clone(),
            cluster: self.cluster.clone(),
            user: self.user.clone(),
        }
    }
}

/// Target of the pod listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Namespace {
    All,
    Named(String),
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::All => f.write_str("all namespaces"),
            Namespace::Named(name) => f.write_str(name),
        }
    }
}

/// Load the client configuration selected by `flags`
pub async fn load_config(flags: &ConfigFlags) -> CheckResult<Config> {
    if !flags.overrides_kubeconfig() {
        // Kubeconfig from KUBECONFIG or ~/.kube/config, else in-cluster
        return Ok(Config::infer().await?);
    }

    let options = flags.options();
    let config = match &flags.kubeconfig {
        Some(path) => {
            debug!("Reading kubeconfig from {}", path.display());
            let kubeconfig = Kubeconfig::read_from(path)?;
            Config::from_custom_kubeconfig(kubeconfig, &options).await?
        }
        None => Config::from_kubeconfig(&options).await?,
    };
    Ok(config)
}

/// Pick the namespace to list: `-A` first, then `--namespace`, then the context
pub fn resolve_namespace(
    flags: &ConfigFlags,
    kube_config: &Config,
    all_namespaces: bool,
) -> Namespace {
    if all_namespaces {
        return Namespace::All;
    }
    match flags.namespace.as_deref() {
        Some(ns) if !ns.is_empty() => Namespace::Named(ns.to_string()),
        _ if kube_config.default_namespace.is_empty() => {
            Namespace::Named(config::DEFAULT_NAMESPACE.to_string())
        }
        _ => Namespace::Named(kube_config.default_namespace.clone()),
    }
}

pub fn create_client(config: Config) -> CheckResult<Client> {
    Client::try_from(config).map_err(CheckError::Client)
}
