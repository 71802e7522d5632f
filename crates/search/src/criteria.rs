//! Search criteria.
//!
//! Every field is optional. `None` (or an empty set) means "no
//! constraint". Text fields go through [`active_text`] so the empty string
//! and the UI's "all"/"any" placeholders are treated as unset.

use crate::error::{Result, SearchError};
use catalog::{DeliveryMode, Weekday};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Range, RangeInclusive};
use std::str::FromStr;

/// Bounds of the credit slider.
pub const CREDIT_BOUNDS: RangeInclusive<u8> = 1..=6;

/// Course numbers at or above this are graduate level.
pub const GRADUATE_THRESHOLD: u16 = 500;

// =============================================================================
// Criteria
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub keyword: Option<String>,
    pub term: Option<String>,
    pub department: Option<String>,
    pub professor: Option<String>,
    pub course_number: Option<String>,
    pub level: Option<Level>,
    pub mode: Option<DeliveryMode>,
    pub credits: Option<CreditRange>,
    pub days: BTreeSet<Weekday>,
    pub times: BTreeSet<TimeOfDay>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: impl AsRef<str>) -> Self {
        self.keyword = active_text(keyword.as_ref());
        self
    }

    pub fn with_term(mut self, term: impl AsRef<str>) -> Self {
        self.term = active_text(term.as_ref());
        self
    }

    pub fn with_department(mut self, department: impl AsRef<str>) -> Self {
        self.department = active_text(department.as_ref());
        self
    }

    pub fn with_professor(mut self, professor: impl AsRef<str>) -> Self {
        self.professor = active_text(professor.as_ref());
        self
    }

    pub fn with_course_number(mut self, number: impl AsRef<str>) -> Self {
        self.course_number = active_text(number.as_ref());
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_mode(mut self, mode: DeliveryMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_credits(mut self, range: CreditRange) -> Self {
        self.credits = Some(range);
        self
    }

    pub fn with_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.days = days.into_iter().collect();
        self
    }

    pub fn with_times(mut self, times: impl IntoIterator<Item = TimeOfDay>) -> Self {
        self.times = times.into_iter().collect();
        self
    }
}

/// Trimmed text, or `None` for blank input and the "all"/"any" placeholders.
pub fn active_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("all")
        || trimmed.eq_ignore_ascii_case("any")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// =============================================================================
// Level
// =============================================================================

/// Course level derived from the numeric part of the course number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// number < 500
    Undergraduate,
    /// number >= 500
    Graduate,
    /// N <= number < N + 100, N a multiple of 100
    Hundreds(u16),
}

impl Level {
    pub fn contains(&self, number: u16) -> bool {
        match *self {
            Level::Undergraduate => number < GRADUATE_THRESHOLD,
            Level::Graduate => number >= GRADUATE_THRESHOLD,
            Level::Hundreds(base) => number >= base && number < base.saturating_add(100),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Undergraduate => f.write_str("undergraduate"),
            Level::Graduate => f.write_str("graduate"),
            Level::Hundreds(base) => write!(f, "{base}-level"),
        }
    }
}

impl FromStr for Level {
    type Err = SearchError;

    /// Accepts "graduate", "undergraduate", "300", "300-level" and "300s".
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().to_lowercase();
        match value.as_str() {
            "graduate" | "grad" => return Ok(Level::Graduate),
            "undergraduate" | "undergrad" => return Ok(Level::Undergraduate),
            _ => {}
        }

        let digits = value
            .strip_suffix("-level")
            .or_else(|| value.strip_suffix('s'))
            .unwrap_or(value.as_str());
        match digits.parse::<u16>() {
            Ok(base) if base >= 100 && base % 100 == 0 => Ok(Level::Hundreds(base)),
            _ => Err(SearchError::InvalidCriteria {
                field: "level".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Time of day
// =============================================================================

/// Start-time buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    /// Half-open hour range of the bucket.
    pub fn hours(&self) -> Range<u8> {
        match self {
            TimeOfDay::Morning => 8..12,
            TimeOfDay::Afternoon => 12..17,
            TimeOfDay::Evening => 17..22,
        }
    }

    pub fn contains(&self, hour: u8) -> bool {
        self.hours().contains(&hour)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        };
        f.write_str(label)
    }
}

impl FromStr for TimeOfDay {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            _ => Err(SearchError::InvalidCriteria {
                field: "time".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Credit range
// =============================================================================

/// Inclusive credit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditRange {
    min: u8,
    max: u8,
}

impl CreditRange {
    pub fn new(min: u8, max: u8) -> Result<Self> {
        if min > max {
            return Err(SearchError::InvalidCriteria {
                field: "credits".to_string(),
                value: format!("{min}-{max}"),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn contains(&self, credits: u8) -> bool {
        credits >= self.min && credits <= self.max
    }

    /// True when the range covers the whole slider.
    pub fn is_full(&self) -> bool {
        self.min <= *CREDIT_BOUNDS.start() && self.max >= *CREDIT_BOUNDS.end()
    }
}

impl FromStr for CreditRange {
    type Err = SearchError;

    /// "2-4" or a single value "3".
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SearchError::InvalidCriteria {
            field: "credits".to_string(),
            value: s.to_string(),
        };
        let (min, max) = match s.trim().split_once('-') {
            Some((lo, hi)) => (lo.trim(), hi.trim()),
            None => (s.trim(), s.trim()),
        };
        let min = min.parse().map_err(|_| invalid())?;
        let max = max.parse().map_err(|_| invalid())?;
        CreditRange::new(min, max)
    }
}
