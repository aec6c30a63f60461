//! Section Segmenter — splits raw resume text into an ordered mapping of
//! section name → lines, using header-line detection.

use indexmap::IndexMap;

/// Recognized section headers, in tie-break order: when a line matches more
/// than one keyword as a prefix, the first keyword in this list wins.
pub const SECTION_HEADERS: &[&str] = &[
    "experience",
    "work experience",
    "education",
    "skills",
    "projects",
    "summary",
    "objective",
    "contact",
];

/// Default bucket for content preceding the first recognized header.
pub const MISC_SECTION: &str = "misc";

/// A resume parsed into ordered sections. Every non-empty line of the
/// normalized input belongs to exactly one section, in original order.
///
/// Created once per uploaded document and replaced wholesale on the next
/// upload; roles and answers are recomputed from it on every query.
#[derive(Debug, Clone, Default)]
pub struct ParsedResume {
    pub raw_text: String,
    pub sections: IndexMap<String, Vec<String>>,
}

impl ParsedResume {
    /// Lines of a single section, if present. An absent key is not an error.
    pub fn section(&self, name: &str) -> Option<&[String]> {
        self.sections.get(name).map(Vec::as_slice)
    }

    /// Prioritized lookup: lines of the first *present* key in `names`.
    /// Presence wins over emptiness — an empty earlier bucket still shadows
    /// a later one, so the tie-break order stays auditable.
    pub fn first_present(&self, names: &[&str]) -> Option<&[String]> {
        names.iter().find_map(|name| self.section(name))
    }
}

/// Segments already-decoded document text into sections.
///
/// A line that case-insensitively starts with a recognized header keyword
/// opens (and re-initializes) that section's bucket; every other line is
/// appended to the current bucket. The initial bucket is `"misc"`, so empty
/// input yields a single empty misc section. Never fails.
pub fn parse_document_text(raw_text: &str) -> ParsedResume {
    let text = raw_text.replace('\r', "").trim().to_string();

    let mut sections: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut current = MISC_SECTION.to_string();
    sections.insert(current.clone(), Vec::new());

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();
        match SECTION_HEADERS.iter().find(|h| lower.starts_with(**h)) {
            Some(header) => {
                current = (*header).to_string();
                sections.insert(current.clone(), Vec::new());
            }
            None => {
                sections.entry(current.clone()).or_default().push(line.to_string());
            }
        }
    }

    ParsedResume {
        raw_text: text,
        sections,
    }
}
