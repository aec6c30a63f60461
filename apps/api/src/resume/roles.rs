//! Role Extractor — scans the work-experience section for role-title lines
//! and pairs them with adjacent company/date lines.
//!
//! The pairing is a positional heuristic: title at line i, company at i+1,
//! date range at i+2, with no validation that the neighbors are not
//! themselves title lines. Lines can be consumed by more than one match,
//! so overlapping or duplicate roles are possible. That noise is the
//! documented contract; the heuristic sits behind `RolePairing` so a
//! stricter matcher can be swapped in without touching callers.

use std::sync::LazyLock;

use regex::Regex;

use crate::resume::dates::{self, Timepoint};
use crate::resume::sections::ParsedResume;

/// Exact section key consumed by the extractor.
pub const WORK_EXPERIENCE_SECTION: &str = "work experience";

/// A line containing any of these (case-insensitive) is treated as a title.
const TITLE_KEYWORDS: &[&str] = &["engineer", "developer", "intern", "trainee", "freelance"];

/// Matches "<word> <4 digits>" (e.g. "March 2021") or "present" anywhere in
/// a date-range line.
static DATE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z]+ \d{4}|present").expect("date token pattern"));

/// A structured work-experience entry derived from three adjacent lines.
/// `start`/`end` are `None` when the date could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub date_range: String,
    pub start: Option<Timepoint>,
    pub end: Option<Timepoint>,
    /// Title, company, and date range joined for verbatim display.
    pub full_text: String,
}

/// Strategy for pairing a detected title line with its company and
/// date-range lines.
pub trait RolePairing: Send + Sync {
    /// Returns (company, date range) for the title at `title_index`.
    /// Missing neighbors are empty strings, never errors.
    fn pair(&self, lines: &[String], title_index: usize) -> (String, String);
}

/// Default pairing: company is the line directly below the title, the date
/// range the line below that.
pub struct AdjacentLines;

impl RolePairing for AdjacentLines {
    fn pair(&self, lines: &[String], title_index: usize) -> (String, String) {
        let company = lines.get(title_index + 1).cloned().unwrap_or_default();
        let date_range = lines.get(title_index + 2).cloned().unwrap_or_default();
        (company, date_range)
    }
}

/// Extracts roles with the default adjacent-lines pairing.
pub fn extract_roles(parsed: &ParsedResume) -> Vec<Role> {
    extract_roles_with(parsed, &AdjacentLines)
}

/// Extracts roles from the "work experience" section. An absent section
/// yields an empty vec, not an error.
pub fn extract_roles_with(parsed: &ParsedResume, pairing: &dyn RolePairing) -> Vec<Role> {
    let Some(lines) = parsed.section(WORK_EXPERIENCE_SECTION) else {
        return Vec::new();
    };

    let mut roles = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if !TITLE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            continue;
        }

        let (company, date_range) = pairing.pair(lines, i);

        let mut tokens = DATE_TOKEN_RE.find_iter(&date_range);
        let start = tokens.next().and_then(|m| dates::resolve(m.as_str()));
        let end = tokens.next().and_then(|m| dates::resolve(m.as_str()));

        let full_text = format!("{line} – {company} – {date_range}");
        roles.push(Role {
            title: line.clone(),
            company,
            date_range,
            start,
            end,
            full_text,
        });
    }
    roles
}
