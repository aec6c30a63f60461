//! Date Resolver — turns a textual month/year token into a comparable `Timepoint`.
//!
//! Total and silent: every input resolves to either a deterministic
//! `Timepoint` or `None`. Unresolvable dates never surface as errors;
//! downstream ranking treats `None` as "oldest possible".

/// A comparable (year, month) pair. No day-of-month or timezone concept.
///
/// Field order matters: the derived `Ord` compares year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timepoint {
    pub year: i32,
    /// 1-based calendar month (January = 1).
    pub month: u32,
}

impl Timepoint {
    /// Far-future sentinel for open-ended ranges ("Present"). Always ranks
    /// as most recent against any real resume date.
    pub const PRESENT: Timepoint = Timepoint {
        year: 2100,
        month: 1,
    };

    /// Earliest-possible fallback used when a role has no parseable date.
    pub const EPOCH: Timepoint = Timepoint {
        year: 1970,
        month: 1,
    };

    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
}

/// Resolves a date token such as "March 2021", "Present", or "2019".
///
/// Case-insensitive. Any token containing "present" resolves to the
/// far-future sentinel. Otherwise the phrase is split on whitespace and
/// hyphens: a full English month name followed by a parseable year gives
/// (year, month); a lone numeric token gives (year, January); anything
/// else is unresolvable.
pub fn resolve(token: &str) -> Option<Timepoint> {
    let lower = token.to_lowercase();
    if lower.contains("present") {
        return Some(Timepoint::PRESENT);
    }

    let parts: Vec<&str> = lower
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() >= 2 {
        let month = month_number(parts[0])?;
        let year = parts[1].parse::<i32>().ok()?;
        return Some(Timepoint::new(year, month));
    }

    if parts.len() == 1 {
        if let Ok(year) = parts[0].parse::<i32>() {
            return Some(Timepoint::new(year, 1));
        }
    }

    None
}
