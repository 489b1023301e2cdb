//! Response normalization: raw agent text to a list of discrete items.

use std::collections::HashSet;

/// Sentinel substituted when a response normalizes to nothing
pub const NA: &str = "NA";

/// Options for [`normalize`]
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Collapse duplicate lines, keeping the first occurrence. Ordering under
    /// dedup is an implementation detail, not a contract.
    pub dedup: bool,
    /// Boilerplate strings removed from the response before splitting
    pub strip_prefixes: Vec<String>,
}

/// Normalize a raw response into a list of non-empty lines
///
/// Trims the response, removes every occurrence of each configured prefix,
/// splits on line boundaries, trims each line, and drops empty lines. A
/// response that normalizes to nothing yields `[NA]`, so the result is never
/// empty and never contains the empty string.
pub fn normalize(raw: &str, options: &NormalizeOptions) -> Vec<String> {
    let mut text = raw.trim().to_string();
    for prefix in &options.strip_prefixes {
        if !prefix.is_empty() {
            text = text.replace(prefix, "");
        }
    }

    let mut lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if options.dedup {
        let mut seen = HashSet::new();
        lines.retain(|line| seen.insert(line.clone()));
    }

    if lines.is_empty() {
        return vec![NA.to_string()];
    }

    lines
}

/// Normalize with default options (no dedup, no prefix stripping)
pub fn normalize_lines(raw: &str) -> Vec<String> {
    normalize(raw, &NormalizeOptions::default())
}
