//! Rendering of the engine's report as JSON or human-readable text.

use serde::Serialize;
use std::fmt::Write as _;
use triage_core::{Recommendation, Report};

/// JSON envelope: the engine report plus CLI-only fields.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'report> {
    /// Engine report, flattened into the envelope
    #[serde(flatten)]
    pub report: &'report Report,
    /// Whether the invocation was a dry run
    pub dry_run: bool,
    /// Short message suitable for echoing back to the requester
    pub user_message: String,
}

/// Render the report as a single JSON line.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(report: &Report, dry_run: bool) -> triage_core::Result<String> {
    let output = JsonOutput {
        report,
        dry_run,
        user_message: user_message(report),
    };
    Ok(serde_json::to_string(&output)?)
}

fn user_message(report: &Report) -> String {
    match (&report.recommendation, &report.worker) {
        (Recommendation::Spawn, Some(worker)) => format!(
            "Spawning a {worker} sub-agent for this (~{}s)",
            report.estimated_seconds
        ),
        _ => String::new(),
    }
}

/// Render the report as a human-readable block.
#[must_use]
pub fn render_text(report: &Report, dry_run: bool, protection_active: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    match report.recommendation {
        Recommendation::ExecuteDirect => {
            let _ = writeln!(out, "EXECUTE DIRECTLY (estimated {}s)", report.estimated_seconds);
        }
        Recommendation::AskUser => {
            let _ = writeln!(out, "ASK USER - AMBIGUOUS TASK (estimated {}s)", report.estimated_seconds);
            if let Some(options) = &report.options {
                let _ = writeln!(out, "  Options:");
                for option in options {
                    let _ = writeln!(out, "    - {}: {}", option.tier, option.description);
                }
            }
        }
        Recommendation::Spawn => {
            let _ = writeln!(out, "SPAWN SUB-AGENT (estimated {}s)", report.estimated_seconds);
        }
    }
    let _ = writeln!(out, "  Task:       {}", report.task);
    if let Some(category) = report.category {
        let _ = writeln!(out, "  Category:   {category}");
    }
    let _ = writeln!(
        out,
        "  Complexity: {} ({}/3)",
        report.complexity,
        report.complexity.rank()
    );
    if report.recommendation != Recommendation::AskUser {
        let _ = writeln!(
            out,
            "  Worker:     {}",
            report.worker.as_deref().unwrap_or("N/A")
        );
        let _ = writeln!(out, "  Timeout:    {}s", report.timeout_seconds);
        let _ = writeln!(out, "  Cost:       {}", report.cost);
    }
    let _ = writeln!(out, "  Label:      {}", report.label);
    let _ = writeln!(out, "  Reasoning:  {}", report.reasoning);
    if let Some(command) = &report.command {
        let _ = writeln!(out, "  Command:    {command}");
    }
    if protection_active {
        let _ = writeln!(out, "  Protection: ACTIVE");
    }
    if dry_run {
        let _ = writeln!(out, "  Dry run:    no action taken");
    }
    out
}

/// Render the protection check result.
#[must_use]
pub fn render_protection(active: bool, json: bool) -> String {
    if json {
        format!("{{\"protection_mode_active\":{active}}}")
    } else if active {
        "Protection mode: ACTIVE".to_owned()
    } else {
        "Protection mode: INACTIVE".to_owned()
    }
}
