use clap::Parser;

use crate::error::CheckResult;
use crate::k8s::{ConfigFlags, Inclusion, Policy, SortField};
use crate::utils::config;

/// List containers that were recently restarted or OOM killed.
#[derive(Parser, Debug)]
#[command(name = "kubectl check-restart", long_about = None, disable_version_flag = true)]
pub struct Args {
    /// Which terminations to report: restart or oom
    ///
    /// Kept as a string and parsed in `Args::options`, so an unsupported
    /// value is reported as `CheckError::UserInput` with exit status 2.
    #[arg(value_name = "FILTER_TYPE", default_value = config::DEFAULT_FILTER_TYPE)]
    pub filter_type: String,

    /// Sort by particular field. (Only 'time' is supported currently)
    ///
    /// Parsed in `Args::options` like the filter type.
    #[arg(long, default_value = config::DEFAULT_SORT_FIELD)]
    pub sort_field: String,

    /// Don't print headers
    #[arg(long)]
    pub no_headers: bool,

    /// Show terminated containers across all namespaces
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// Display version and build information
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Only report the containers that match the filter, not every
    /// terminated container of a matching pod
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub config_flags: ConfigFlags,
}

/// Validated form of the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub policy: Policy,
    pub sort_field: SortField,
    pub inclusion: Inclusion,
    pub no_headers: bool,
    pub all_namespaces: bool,
}

impl Args {
    /// Reject unsupported filter types and sort fields before the cluster is contacted
    pub fn options(&self) -> CheckResult<Options> {
        Ok(Options {
            policy: self.filter_type.parse()?,
            sort_field: self.sort_field.parse()?,
            inclusion: if self.strict {
                Inclusion::Container
            } else {
                Inclusion::Pod
            },
            no_headers: self.no_headers,
            all_namespaces: self.all_namespaces,
        })
    }
}
