//! Output formatting for alert pages.
//!
//! Responsibilities:
//! - Render an `AlertsResponse` page as a table, pretty JSON, or NDJSON.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! Invariants:
//! - JSON output is the wire shape of the page; typed views are not added.
//! - NDJSON emits one line per alert with its resolved threat metadata.
//! - Table output ends with a newline when non-empty.

use alphasoc_client::{Alert, AlertEvent, AlertsResponse, Threat};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Ndjson,
}

/// One NDJSON record: the alert plus the threat metadata it resolves to.
#[derive(Serialize)]
struct AlertRecord<'a> {
    #[serde(flatten)]
    alert: &'a Alert,
    #[serde(rename = "threatDetails")]
    threat_details: Vec<ThreatRef<'a>>,
}

#[derive(Serialize)]
struct ThreatRef<'a> {
    id: &'a str,
    #[serde(flatten)]
    threat: &'a Threat,
}

/// Render one page in `format`.
pub fn format_page(page: &AlertsResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(page)?)),
        OutputFormat::Ndjson => format_ndjson(page),
        OutputFormat::Table => Ok(format_table(page)),
    }
}

fn format_ndjson(page: &AlertsResponse) -> Result<String> {
    let mut out = String::new();
    for alert in &page.alerts {
        let record = AlertRecord {
            alert,
            threat_details: page
                .threats_of(alert)
                .map(|(id, threat)| ThreatRef { id, threat })
                .collect(),
        };
        out.push_str(&serde_json::to_string(&record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Short human-readable description of an alert's event.
fn describe_event(alert: &Alert) -> String {
    match &alert.decoded {
        AlertEvent::Dns(dns) => {
            let query = dns.query.as_deref().unwrap_or("-");
            match &dns.qtype {
                Some(qtype) => format!("{query} ({qtype})"),
                None => query.to_string(),
            }
        }
        AlertEvent::Ip(ip) => {
            let endpoint = |addr: Option<std::net::IpAddr>, port: Option<u16>| match (addr, port) {
                (Some(a), Some(p)) => format!("{a}:{p}"),
                (Some(a), None) => a.to_string(),
                (None, _) => "-".to_string(),
            };
            let mut desc = format!(
                "{} -> {}",
                endpoint(ip.src_ip, ip.src_port),
                endpoint(ip.dest_ip, ip.dest_port)
            );
            if let Some(proto) = &ip.proto {
                desc.push_str(&format!(" {proto}"));
            }
            desc
        }
        AlertEvent::Unknown => "-".to_string(),
    }
}

fn format_table(page: &AlertsResponse) -> String {
    if page.alerts.is_empty() {
        return "No alerts found.\n".to_string();
    }

    let rows: Vec<[String; 4]> = page
        .alerts
        .iter()
        .map(|alert| {
            let severity = page
                .max_severity(alert)
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            let titles: Vec<&str> = page
                .threats_of(alert)
                .map(|(_, threat)| threat.title.as_str())
                .collect();
            let threats = if titles.is_empty() {
                alert.threats.join(", ")
            } else {
                titles.join(", ")
            };
            [
                alert.event_type.clone(),
                severity,
                threats,
                describe_event(alert),
            ]
        })
        .collect();

    let headers = ["TYPE", "SEVERITY", "THREATS", "EVENT"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: [&str; 4]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };

    push_row(headers);
    for row in &rows {
        push_row([&row[0], &row[1], &row[2], &row[3]]);
    }
    out
}
