//! PII anonymization engine.
//!
//! Runs before any content leaves the caller: detects IP addresses, email
//! addresses, and keyword-prefixed usernames, replacing each with a stable
//! placeholder (`IP_1`, `EMAIL_2`, ...) and recording the reverse mapping
//! so findings can be de-anonymized for display.
//!
//! Detection is deterministic and purely textual. The three detectors run
//! in fixed order (IP, then email, then username) over a single shared
//! replacement table, so a value labeled by an earlier pass keeps its
//! placeholder if a later pass matches the same literal string.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::pii::{AnonymizationResult, PiiKind, PiiMapping};

/// Dotted quads, each octet 1-3 digits. Deliberately permissive: no range
/// validation, so `999.999.999.999` still counts as an address.
static IP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("IP pattern is valid")
});

/// Heuristic `local@domain.tld` shapes, not an RFC 5321 validator.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+").expect("email pattern is valid")
});

/// A contextual keyword followed by a token of 3+ word characters. Only
/// the token is replaced; the keyword survives in the output.
static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(user|login|for|by)\s+([a-zA-Z0-9_-]{3,})\b").expect("username pattern is valid")
});

/// Private and reserved addresses are left in the document untouched.
fn is_reserved_ip(addr: &str) -> bool {
    addr.starts_with("192.168.")
        || addr.starts_with("10.")
        || addr.starts_with("127.")
        || addr == "0.0.0.0"
        || addr == "255.255.255.255"
}

/// Shared replacement table threaded through the three detector passes.
///
/// Holds the forward mapping (placeholder → original), the reverse lookup
/// that makes substitution idempotent within a run, and one monotonic
/// counter per kind, each starting at 1.
#[derive(Debug, Default)]
struct ReplacementTable {
    mapping: PiiMapping,
    reverse: HashMap<String, String>,
    next_ip: u32,
    next_email: u32,
    next_user: u32,
}

impl ReplacementTable {
    /// Return the placeholder for `original`, assigning a fresh one if
    /// no earlier pass (or earlier occurrence) already labeled it.
    fn placeholder_for(&mut self, kind: PiiKind, original: &str) -> String {
        if let Some(existing) = self.reverse.get(original) {
            return existing.clone();
        }
        let counter = match kind {
            PiiKind::Ip => &mut self.next_ip,
            PiiKind::Email => &mut self.next_email,
            PiiKind::User => &mut self.next_user,
        };
        *counter += 1;
        let placeholder = format!("{}_{}", kind.prefix(), *counter);
        self.mapping
            .insert(placeholder.clone(), original.to_string());
        self.reverse
            .insert(original.to_string(), placeholder.clone());
        placeholder
    }
}

/// Anonymize `text`, returning the sanitized content and the mapping of
/// placeholders back to the original values.
///
/// The same original substring always receives the same placeholder
/// within one run. Private and reserved IPs (`192.168.*`, `10.*`,
/// `127.*`, `0.0.0.0`, `255.255.255.255`) are excluded from replacement
/// and never enter the mapping.
pub fn anonymize(text: &str) -> AnonymizationResult {
    let mut table = ReplacementTable::default();

    let after_ips = IP_RE.replace_all(text, |caps: &Captures<'_>| {
        let addr = &caps[0];
        if is_reserved_ip(addr) {
            addr.to_string()
        } else {
            table.placeholder_for(PiiKind::Ip, addr)
        }
    });

    let after_emails = EMAIL_RE.replace_all(&after_ips, |caps: &Captures<'_>| {
        table.placeholder_for(PiiKind::Email, &caps[0])
    });

    // The keyword is preserved; the whitespace between keyword and token
    // collapses to a single space.
    let sanitized = USERNAME_RE.replace_all(&after_emails, |caps: &Captures<'_>| {
        let placeholder = table.placeholder_for(PiiKind::User, &caps[2]);
        format!("{} {}", &caps[1], placeholder)
    });

    AnonymizationResult {
        sanitized_text: sanitized.into_owned(),
        mapping: table.mapping,
    }
}
