// Resume extraction engine: deterministic, rule-based, best-effort.
// Pure functions of their inputs — safe to run across concurrent requests.

pub mod contact;
pub mod dates;
pub mod handlers;
pub mod ranking;
pub mod roles;
pub mod sections;

pub use ranking::most_recent_roles;
pub use roles::{extract_roles, Role};
pub use sections::{parse_document_text, ParsedResume};
