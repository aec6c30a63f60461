//! Contact Extractor — pulls email/phone/URL tokens out of unstructured
//! contact-like text via pattern matching. Each pattern keeps at most its
//! first match.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("email pattern")
});

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").expect("url pattern"));

/// Optional leading "+", then at least 8 digits allowing interior spaces
/// and hyphens.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\s-]{7,}\d").expect("phone pattern"));

/// Whichever contact tokens matched. Absent fields simply did not match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.url.is_none()
    }

    /// Labeled lines in fixed order: email, phone, URL. Empty string when
    /// nothing matched.
    pub fn to_answer(&self) -> String {
        let mut lines = Vec::new();
        if let Some(email) = &self.email {
            lines.push(format!("Email: {email}"));
        }
        if let Some(phone) = &self.phone {
            lines.push(format!("Phone: {phone}"));
        }
        if let Some(url) = &self.url {
            lines.push(format!("Portfolio: {url}"));
        }
        lines.join("\n")
    }
}

/// Applies the three independent patterns over the joined section text.
pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
        url: URL_RE.find(text).map(|m| m.as_str().to_string()),
    }
}
