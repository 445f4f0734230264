//! Serde behaviour of the domain models: closed enums, wire spellings,
//! defaulting, and verdict derivation.

use argus_core::models::findings::{Finding, FindingsDocument, Severity};
use argus_core::models::scan::{ScanReport, ScanStatus, Verdict, VerdictCounts};

#[test]
fn clean_sentinel_parses_as_clean_document() {
    let doc: FindingsDocument =
        serde_json::from_str("\"No security issues or notable events found.\"").unwrap();

    assert!(doc.is_clean());
    assert!(doc.findings().is_empty());
}

#[test]
fn non_sentinel_string_is_rejected_not_treated_as_clean() {
    let result: Result<FindingsDocument, _> =
        serde_json::from_str("\"I am unable to analyze this content.\"");

    assert!(result.is_err());
}

#[test]
fn findings_report_parses_with_wire_field_names() {
    let json = r#"{
        "summaryStats": { "critical": 1, "high": 0, "medium": 2, "low": 0, "informational": 1 },
        "findings": [{
            "category": "Authentication and Access",
            "severity": "critical",
            "timestamp": "2026-08-12T04:11:09Z",
            "title": "Repeated failed root logins",
            "details": "14 failures from IP_1 within 90 seconds.",
            "action": "Block IP_1 at the perimeter and rotate credentials."
        }]
    }"#;

    let doc: FindingsDocument = serde_json::from_str(json).unwrap();
    let FindingsDocument::Report(report) = doc else {
        panic!("expected a structured report");
    };
    assert_eq!(report.summary_stats.total(), 4);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].severity, Severity::Critical);
    assert_eq!(
        report.findings[0].recommended_action,
        "Block IP_1 at the perimeter and rotate credentials."
    );
}

#[test]
fn capitalized_severity_is_coerced() {
    let json = r#"{
        "category": "Network Activity",
        "severity": "High",
        "title": "Beaconing",
        "details": "Periodic outbound traffic to IP_1.",
        "action": "Investigate the destination."
    }"#;

    let finding: Finding = serde_json::from_str(json).unwrap();
    assert_eq!(finding.severity, Severity::High);
    // Missing timestamp falls back to the unknown marker.
    assert_eq!(finding.timestamp, "N/A");
}

#[test]
fn out_of_enum_severity_is_rejected() {
    let json = r#"{
        "category": "Network Activity",
        "severity": "catastrophic",
        "title": "x",
        "details": "y",
        "action": "z"
    }"#;

    assert!(serde_json::from_str::<Finding>(json).is_err());
}

#[test]
fn out_of_enum_category_is_rejected() {
    let json = r#"{
        "category": "Totally New Category",
        "severity": "low",
        "title": "x",
        "details": "y",
        "action": "z"
    }"#;

    assert!(serde_json::from_str::<Finding>(json).is_err());
}

#[test]
fn scan_report_parses_wire_statuses() {
    let report: ScanReport = serde_json::from_str(
        r#"{ "status": "in-progress", "stats": {}, "results": {} }"#,
    )
    .unwrap();
    assert_eq!(report.status, ScanStatus::InProgress);
    assert!(!report.is_completed());

    let report: ScanReport = serde_json::from_str(
        r#"{
            "status": "completed",
            "stats": { "malicious": 2, "suspicious": 0, "harmless": 60, "undetected": 8 },
            "results": {
                "EngineA": { "category": "malicious", "result": "Trojan.Generic" },
                "EngineB": { "category": "harmless", "result": null }
            }
        }"#,
    )
    .unwrap();
    assert!(report.is_completed());
    assert_eq!(report.stats.total(), 70);
    assert_eq!(
        report.results["EngineA"].result.as_deref(),
        Some("Trojan.Generic")
    );
}

#[test]
fn verdict_precedence_is_malicious_then_suspicious_then_clean() {
    let mut counts = VerdictCounts {
        malicious: 1,
        suspicious: 3,
        harmless: 50,
        undetected: 4,
    };
    assert_eq!(counts.overall(), Verdict::Malicious);

    counts.malicious = 0;
    assert_eq!(counts.overall(), Verdict::Suspicious);

    counts.suspicious = 0;
    assert_eq!(counts.overall(), Verdict::Clean);

    assert_eq!(VerdictCounts::default().overall(), Verdict::Inconclusive);
}
