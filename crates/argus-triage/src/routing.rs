//! File-type routing: text-like files go to AI log analysis, everything
//! else goes to the malware scanner.

/// Fixed allow-list of text-like extensions. Matching is a plain
/// case-sensitive suffix test on the filename.
pub const TEXT_EXTENSIONS: &[&str] = &[
    ".log", ".txt", ".conf", ".cfg", ".config", ".ini", ".json", ".yaml", ".yml", ".xml", ".sh",
    ".ps1", ".py", ".js", ".md",
];

/// Whether a filename routes to the AI log-analysis path.
pub fn is_text_based(file_name: &str) -> bool {
    TEXT_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}
