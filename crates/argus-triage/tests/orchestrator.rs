//! Orchestrator tests: routing, validation order, advisories, and
//! user-facing error categorization, all against scripted services.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use argus_ai::AnalysisError;
use argus_core::models::findings::{CLEAN_SENTINEL, FindingsDocument};
use argus_core::models::scan::{ScanReport, ScanStatus, SubmissionHandle, VerdictCounts};
use argus_scan::ScanError;
use argus_triage::error::{ACCESS_DENIED_MESSAGE, NETWORK_ERROR_MESSAGE};
use argus_triage::run::MULTI_FILE_ADVISORY;
use argus_triage::{
    AnalysisInput, FindingsService, InputFile, ScanService, TriageError, UnifiedResult,
    run_analysis,
};

fn completed_report() -> ScanReport {
    ScanReport {
        status: ScanStatus::Completed,
        stats: VerdictCounts {
            malicious: 1,
            suspicious: 0,
            harmless: 60,
            undetected: 9,
        },
        results: Default::default(),
    }
}

fn file(name: &str, contents: &[u8]) -> InputFile {
    InputFile {
        name: name.to_string(),
        contents: contents.to_vec(),
    }
}

#[derive(Default)]
struct StubScan {
    submitted_files: Mutex<Vec<String>>,
    submitted_urls: Mutex<Vec<String>>,
    waits: AtomicUsize,
}

impl ScanService for StubScan {
    async fn submit_file(
        &self,
        file_name: &str,
        _contents: &[u8],
    ) -> Result<SubmissionHandle, ScanError> {
        self.submitted_files
            .lock()
            .unwrap()
            .push(file_name.to_string());
        Ok(SubmissionHandle::new("stub-analysis"))
    }

    async fn submit_url(&self, url: &str) -> Result<SubmissionHandle, ScanError> {
        self.submitted_urls.lock().unwrap().push(url.to_string());
        Ok(SubmissionHandle::new("stub-analysis"))
    }

    async fn wait_for_report(&self, _handle: &SubmissionHandle) -> Result<ScanReport, ScanError> {
        self.waits.fetch_add(1, Ordering::SeqCst);
        Ok(completed_report())
    }
}

#[derive(Default)]
struct StubAi {
    requests: Mutex<Vec<String>>,
}

impl FindingsService for StubAi {
    async fn analyze(&self, sanitized_text: &str) -> Result<FindingsDocument, AnalysisError> {
        self.requests
            .lock()
            .unwrap()
            .push(sanitized_text.to_string());
        Ok(FindingsDocument::Clean(CLEAN_SENTINEL.to_string()))
    }
}

#[tokio::test]
async fn log_file_routes_to_ai_with_sanitized_content() {
    let scan = StubScan::default();
    let ai = StubAi::default();
    let input = AnalysisInput::Files(vec![file(
        "app.log",
        b"failed login by alice99 from 203.0.113.9",
    )]);

    let outcome = run_analysis(&scan, &ai, input).await.unwrap();

    let UnifiedResult::LogAnalysis { anonymization, .. } = outcome.result else {
        panic!("expected the AI path");
    };
    assert!(scan.submitted_files.lock().unwrap().is_empty());

    let requests = ai.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("IP_1"));
    assert!(!requests[0].contains("203.0.113.9"));
    assert_eq!(anonymization.mapping.original("IP_1"), Some("203.0.113.9"));
}

#[tokio::test]
async fn binary_file_routes_to_scan_path() {
    let scan = StubScan::default();
    let ai = StubAi::default();
    let input = AnalysisInput::Files(vec![file("sample.exe", &[0x4d, 0x5a, 0x00])]);

    let outcome = run_analysis(&scan, &ai, input).await.unwrap();

    let UnifiedResult::Scan { report, subject } = outcome.result else {
        panic!("expected the scan path");
    };
    assert!(report.is_completed());
    assert_eq!(subject, "sample.exe");
    assert!(outcome.advisories.is_empty());
    assert!(ai.requests.lock().unwrap().is_empty());
    assert_eq!(scan.waits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn multiple_scan_files_yield_an_advisory_and_first_file_only() {
    let scan = StubScan::default();
    let ai = StubAi::default();
    let input = AnalysisInput::Files(vec![
        file("dropper.bin", b"\x00"),
        file("payload.dll", b"\x01"),
    ]);

    let outcome = run_analysis(&scan, &ai, input).await.unwrap();

    assert_eq!(outcome.advisories, vec![MULTI_FILE_ADVISORY.to_string()]);
    assert_eq!(
        *scan.submitted_files.lock().unwrap(),
        vec!["dropper.bin".to_string()]
    );
}

#[tokio::test]
async fn multiple_text_files_are_combined_into_one_request() {
    let scan = StubScan::default();
    let ai = StubAi::default();
    let input = AnalysisInput::Files(vec![
        file("auth.log", b"session opened"),
        file("kern.log", b"usb device added"),
    ]);

    run_analysis(&scan, &ai, input).await.unwrap();

    let requests = ai.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("--- auth.log ---"));
    assert!(requests[0].contains("--- kern.log ---"));
}

#[tokio::test]
async fn url_routes_to_scan_path() {
    let scan = StubScan::default();
    let ai = StubAi::default();

    let outcome = run_analysis(
        &scan,
        &ai,
        AnalysisInput::Url("https://example.com/download".to_string()),
    )
    .await
    .unwrap();

    let UnifiedResult::Scan { subject, .. } = outcome.result else {
        panic!("expected the scan path");
    };
    assert_eq!(subject, "https://example.com/download");
    assert_eq!(
        *scan.submitted_urls.lock().unwrap(),
        vec!["https://example.com/download".to_string()]
    );
}

#[tokio::test]
async fn empty_file_selection_fails_before_any_service_call() {
    let scan = StubScan::default();
    let ai = StubAi::default();

    let err = run_analysis(&scan, &ai, AnalysisInput::Files(Vec::new()))
        .await
        .expect_err("nothing to analyze");

    assert!(matches!(err, TriageError::Validation(_)));
    assert_eq!(err.user_message(), "Please select one or more files.");
    assert!(scan.submitted_files.lock().unwrap().is_empty());
    assert!(ai.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_url_fails_before_any_service_call() {
    let scan = StubScan::default();
    let ai = StubAi::default();

    let err = run_analysis(&scan, &ai, AnalysisInput::Url(String::new()))
        .await
        .expect_err("empty URL");

    assert_eq!(err.user_message(), "Please enter a URL.");
    assert!(scan.submitted_urls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unparseable_url_is_rejected() {
    let scan = StubScan::default();
    let ai = StubAi::default();

    let err = run_analysis(&scan, &ai, AnalysisInput::Url("not a url".to_string()))
        .await
        .expect_err("no scheme");

    assert_eq!(err.user_message(), "Please enter a valid URL.");
    assert!(scan.submitted_urls.lock().unwrap().is_empty());
}

#[test]
fn forbidden_responses_get_api_key_guidance() {
    let err = TriageError::from(ScanError::Submission {
        status: 403,
        message: "file submission failed.".to_string(),
    });
    assert_eq!(err.user_message(), ACCESS_DENIED_MESSAGE);

    let err = TriageError::from(AnalysisError::Backend {
        status: 403,
        message: "AI analysis failed.".to_string(),
    });
    assert_eq!(err.user_message(), ACCESS_DENIED_MESSAGE);
}

#[test]
fn other_remote_errors_pass_through_verbatim() {
    let err = TriageError::from(ScanError::Submission {
        status: 429,
        message: "quota exceeded".to_string(),
    });
    assert_eq!(err.user_message(), "quota exceeded");

    let err = TriageError::from(AnalysisError::Blocked("SAFETY".to_string()));
    assert_eq!(
        err.user_message(),
        "AI analysis blocked by safety settings. Reason: SAFETY"
    );
}

#[tokio::test]
async fn transport_failures_get_network_guidance() {
    // Discard port on loopback: connection refused without leaving the host.
    let refused = reqwest::Client::new()
        .get("http://127.0.0.1:9/analyses/x")
        .send()
        .await
        .expect_err("nothing listens on the discard port");

    let err = TriageError::from(ScanError::from(refused));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}
