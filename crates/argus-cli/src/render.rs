//! Plain-text rendering of the unified triage result.

use argus_core::models::findings::FindingsDocument;
use argus_core::models::pii::AnonymizationResult;
use argus_core::models::scan::ScanReport;
use argus_triage::{TriageOutcome, UnifiedResult};

pub fn print_outcome(outcome: &TriageOutcome) {
    for advisory in &outcome.advisories {
        println!("note: {advisory}");
    }

    match &outcome.result {
        UnifiedResult::LogAnalysis {
            anonymization,
            findings,
        } => print_findings(anonymization, findings),
        UnifiedResult::Scan { report, subject } => print_report(report, subject),
    }
}

fn print_findings(anonymization: &AnonymizationResult, findings: &FindingsDocument) {
    println!(
        "AI log analysis ({} PII value(s) anonymized before submission)",
        anonymization.mapping.len()
    );

    let report = match findings {
        FindingsDocument::Clean(sentinel) => {
            println!("{sentinel}");
            return;
        }
        FindingsDocument::Report(report) => report,
    };

    let s = &report.summary_stats;
    println!(
        "{} finding(s): {} critical, {} high, {} medium, {} low, {} informational",
        s.total(),
        s.critical,
        s.high,
        s.medium,
        s.low,
        s.informational
    );

    for finding in &report.findings {
        // Findings reference placeholders; restore the originals for display.
        println!();
        println!(
            "[{}] {} — {}",
            finding.severity,
            finding.category,
            anonymization.mapping.restore(&finding.title)
        );
        println!("  when:   {}", finding.timestamp);
        println!("  detail: {}", anonymization.mapping.restore(&finding.details));
        println!(
            "  action: {}",
            anonymization.mapping.restore(&finding.recommended_action)
        );
    }
}

fn print_report(report: &ScanReport, subject: &str) {
    println!("Scan report for {subject}");
    println!(
        "verdict: {} ({} malicious, {} suspicious, {} harmless, {} undetected of {} engines)",
        report.stats.overall(),
        report.stats.malicious,
        report.stats.suspicious,
        report.stats.harmless,
        report.stats.undetected,
        report.stats.total()
    );

    for (engine, result) in &report.results {
        match &result.result {
            Some(label) => println!("  {engine}: {} ({label})", result.category),
            None => println!("  {engine}: {}", result.category),
        }
    }
}
