use std::io::{self, Write};

use super::table::Table;
use crate::k8s::{Namespace, Policy, ReportSet, TerminationRecord};

fn headers(all_namespaces: bool, policy: Policy) -> Vec<&'static str> {
    let mut headers = Vec::new();
    if all_namespaces {
        headers.push("NAMESPACE");
    }
    headers.extend(["POD", "TERMINATION TIME", "RESTARTS"]);
    if policy.shows_exit_code() {
        headers.push("EXIT CODE");
    }
    headers
}

fn row(record: &TerminationRecord, all_namespaces: bool, policy: Policy) -> Vec<String> {
    let mut row = Vec::new();
    if all_namespaces {
        row.push(record.namespace.clone());
    }
    row.push(record.pod_name.clone());
    row.push(record.terminated_at.clone());
    row.push(record.restart_count.clone());
    if policy.shows_exit_code() {
        row.push(record.exit_code.map(|c| c.to_string()).unwrap_or_default());
    }
    row
}

/// Print the report for `namespace`, or the "No resources found" notice
pub fn render_report<W: Write>(
    writer: &mut W,
    report: &ReportSet,
    namespace: &Namespace,
    policy: Policy,
    no_headers: bool,
) -> io::Result<()> {
    let all_namespaces = matches!(namespace, Namespace::All);

    if report.is_empty() {
        match namespace {
            Namespace::All => writeln!(writer, "No resources found")?,
            Namespace::Named(ns) => writeln!(writer, "No resources found in {} namespace.", ns)?,
        }
        return writer.flush();
    }

    let mut table = Table::new();
    if !no_headers {
        table.push_row(headers(all_namespaces, policy));
    }
    for record in report.iter() {
        table.push_row(row(record, all_namespaces, policy));
    }
    table.write_to(writer)
}
