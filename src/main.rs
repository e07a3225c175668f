use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod k8s;
mod utils;
mod views;

use cli::Args;
use error::CheckResult;
use k8s::{create_client, list_pods, load_config, resolve_namespace, ReportSet};
use utils::config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the table
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(args: Args) -> CheckResult<()> {
    if args.version {
        println!("{}", VERSION);
        return Ok(());
    }

    let options = args.options()?;

    let kube_config = load_config(&args.config_flags).await?;
    let namespace = resolve_namespace(&args.config_flags, &kube_config, options.all_namespaces);
    let client = create_client(kube_config)?;
    let pods = list_pods(client, &namespace).await?;

    let mut report = ReportSet::build(&pods, options.policy, options.inclusion);
    report.sort(options.sort_field);
    info!("Reporting {} terminated containers", report.len());

    let stdout = io::stdout();
    views::render_report(
        &mut stdout.lock(),
        &report,
        &namespace,
        options.policy,
        options.no_headers,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;

    #[tokio::test]
    async fn test_invalid_filter_type_fails_before_loading_config() {
        let args = Args::parse_from([
            "kubectl-check-restart",
            "crash",
            "--kubeconfig",
            "/nonexistent",
        ]);
        let err = run(args).await.unwrap_err();
        assert!(matches!(err, CheckError::UserInput(_)));
    }

    #[tokio::test]
    async fn test_invalid_sort_field_fails_before_loading_config() {
        let args = Args::parse_from([
            "kubectl-check-restart",
            "--sort-field",
            "name",
            "--kubeconfig",
            "/nonexistent",
        ]);
        let err = run(args).await.unwrap_err();
        assert!(matches!(err, CheckError::UserInput(_)));
    }

    #[tokio::test]
    async fn test_version_does_not_load_config() {
        let args = Args::parse_from([
            "kubectl-check-restart",
            "-v",
            "--kubeconfig",
            "/nonexistent",
        ]);
        assert!(run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_kubeconfig_is_config_error() {
        let args = Args::parse_from([
            "kubectl-check-restart",
            "oom",
            "--kubeconfig",
            "/nonexistent",
        ]);
        let err = run(args).await.unwrap_err();
        assert!(matches!(err, CheckError::Config(_)));
    }
}
