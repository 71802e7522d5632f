//! Core domain types for the course catalog.
//!
//! Field names follow the camelCase JSON served by the catalog API and used
//! by the bundled dataset. Nested blocks that upstream data sometimes omits
//! or sends as `null` (professor, schedule, ratings, grades, availability)
//! are `Option`s so one sparse record never fails a whole load.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a course (e.g. "c1")
pub type CourseId = String;

// =============================================================================
// Course
// =============================================================================

/// A single course offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Full code in `DEPT-NNN` form, e.g. "CSCI-B551"
    pub code: String,
    #[serde(default)]
    pub department: String,
    pub department_code: String,
    /// Course number without the department prefix, e.g. "B551"
    #[serde(default)]
    pub number: String,
    pub credits: u8,
    pub term: String,
    pub year: u16,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub professor: Option<Professor>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    pub mode: DeliveryMode,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub textbooks: Vec<String>,
    #[serde(default)]
    pub ocq: Option<OcqRating>,
    #[serde(default)]
    pub grade_distribution: Option<GradeDistribution>,
}

impl Course {
    /// Numeric portion of the course number ("B551" -> 551).
    ///
    /// Falls back to the part of `code` after the last '-' when `number` is
    /// empty. Returns `None` when there are no digits to read.
    pub fn numeric_level(&self) -> Option<u16> {
        let source = if self.number.trim().is_empty() {
            self.code.rsplit('-').next().unwrap_or("")
        } else {
            self.number.as_str()
        };
        let digits: String = source.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    /// Professor name, if the record carries a professor.
    pub fn professor_name(&self) -> Option<&str> {
        self.professor.as_ref().map(|p| p.name.as_str())
    }

    /// "Spring 2024" style label used to group enrolled courses.
    pub fn term_label(&self) -> String {
        format!("{} {}", self.term, self.year)
    }
}

// =============================================================================
// Nested types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avg_rating: f32,
}

/// Weekly meeting pattern.
///
/// Times are zero-padded 24-hour `HH:MM` strings, so plain string
/// comparison orders them correctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub days: Vec<Weekday>,
    pub start_time: String,
    pub end_time: String,
}

impl Schedule {
    /// Hour component of `start_time`, or `None` if it is not `HH:MM`.
    pub fn start_hour(&self) -> Option<u8> {
        parse_hour(&self.start_time)
    }

    /// True when both schedules share a day and their time ranges overlap.
    pub fn overlaps(&self, other: &Schedule) -> bool {
        let same_day = self.days.iter().any(|d| other.days.contains(d));
        let time_overlap =
            !(self.end_time <= other.start_time || self.start_time >= other.end_time);
        same_day && time_overlap
    }
}

/// Parse the hour out of an `HH:MM` string.
pub fn parse_hour(time: &str) -> Option<u8> {
    let (hour, minute) = time.trim().split_once(':')?;
    if hour.len() != 2 || minute.len() != 2 {
        return None;
    }
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;
    (hour < 24 && minute < 60).then_some(hour)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub total: u32,
    pub enrolled: u32,
}

impl Availability {
    pub fn seats_remaining(&self) -> u32 {
        self.total.saturating_sub(self.enrolled)
    }
}

/// Online Course Questionnaire results for a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcqRating {
    pub overall: f32,
    pub difficulty: f32,
    pub workload: f32,
    pub organization: f32,
    #[serde(default)]
    pub comments: Vec<OcqComment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcqComment {
    pub text: String,
    pub date: String,
    pub rating: f32,
}

/// Historical grade shares, as percentages of the class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeDistribution {
    #[serde(rename = "A")]
    pub a: f32,
    #[serde(rename = "B")]
    pub b: f32,
    #[serde(rename = "C")]
    pub c: f32,
    #[serde(rename = "D")]
    pub d: f32,
    #[serde(rename = "F")]
    pub f: f32,
    #[serde(rename = "Withdraw")]
    pub withdraw: f32,
}

impl GradeDistribution {
    pub fn total(&self) -> f32 {
        self.a + self.b + self.c + self.d + self.f + self.withdraw
    }

    /// Share of students finishing with D or better.
    pub fn pass_rate(&self) -> f32 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        (self.a + self.b + self.c + self.d) / total
    }

    /// (label, share) pairs in display order.
    pub fn entries(&self) -> [(&'static str, f32); 6] {
        [
            ("A", self.a),
            ("B", self.b),
            ("C", self.c),
            ("D", self.d),
            ("F", self.f),
            ("Withdraw", self.withdraw),
        ]
    }
}

// =============================================================================
// Enums
// =============================================================================

/// How a course is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMode {
    #[serde(alias = "online")]
    Online,
    #[serde(rename = "In-Person", alias = "in-person")]
    InPerson,
    #[serde(alias = "hybrid")]
    Hybrid,
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeliveryMode::Online => "Online",
            DeliveryMode::InPerson => "In-Person",
            DeliveryMode::Hybrid => "Hybrid",
        };
        f.write_str(label)
    }
}

impl FromStr for DeliveryMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(DeliveryMode::Online),
            "in-person" | "in person" | "inperson" => Ok(DeliveryMode::InPerson),
            "hybrid" => Ok(DeliveryMode::Hybrid),
            _ => Err(CatalogError::InvalidValue {
                field: "mode".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// The five teaching days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(alias = "monday", alias = "Mon", alias = "mon")]
    Monday,
    #[serde(alias = "tuesday", alias = "Tue", alias = "tue", alias = "Tues", alias = "tues")]
    Tuesday,
    #[serde(alias = "wednesday", alias = "Wed", alias = "wed")]
    Wednesday,
    #[serde(alias = "thursday", alias = "Thu", alias = "thu", alias = "Thurs", alias = "thurs")]
    Thursday,
    #[serde(alias = "friday", alias = "Fri", alias = "fri")]
    Friday,
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for Weekday {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Monday),
            "tuesday" | "tue" | "tues" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" => Ok(Weekday::Wednesday),
            "thursday" | "thu" | "thurs" => Ok(Weekday::Thursday),
            "friday" | "fri" => Ok(Weekday::Friday),
            _ => Err(CatalogError::InvalidValue {
                field: "day".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Reference data
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// A career goal and the course codes that lead toward it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub recommended_courses: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

// =============================================================================
// Statistics
// =============================================================================

/// Precomputed per-course figures shown on the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseStats {
    /// Share of D-or-better grades, if a distribution is known
    pub pass_rate: Option<f32>,
    pub seats_remaining: Option<u32>,
    /// enrolled / total seats
    pub fill_ratio: Option<f32>,
    pub ocq_overall: Option<f32>,
}

// =============================================================================
// CatalogIndex
// =============================================================================

/// In-memory catalog with id and code lookups.
///
/// `courses` keeps source order, which is the order search results come
/// back in.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    pub(crate) courses: Vec<Course>,
    /// course id -> position in `courses`
    pub(crate) by_id: HashMap<CourseId, usize>,
    /// lowercased code -> position in `courses`
    pub(crate) by_code: HashMap<String, usize>,
    pub(crate) departments: Vec<Department>,
    pub(crate) career_paths: Vec<CareerPath>,
    pub(crate) course_stats: HashMap<CourseId, CourseStats>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// All courses in source order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get_course(&self, id: &str) -> Option<&Course> {
        self.by_id.get(id).map(|&i| &self.courses[i])
    }

    /// Case-insensitive lookup by full code ("csci-b551").
    pub fn get_by_code(&self, code: &str) -> Option<&Course> {
        self.by_code
            .get(&code.trim().to_lowercase())
            .map(|&i| &self.courses[i])
    }

    /// Look up by id first, then by code.
    pub fn find(&self, id_or_code: &str) -> Option<&Course> {
        self.get_course(id_or_code)
            .or_else(|| self.get_by_code(id_or_code))
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn career_paths(&self) -> &[CareerPath] {
        &self.career_paths
    }

    pub fn get_course_stats(&self, id: &str) -> Option<&CourseStats> {
        self.course_stats.get(id)
    }

    /// Append a course and index it. A later course with the same id or
    /// code shadows the earlier one in lookups.
    pub fn insert_course(&mut self, course: Course) {
        let position = self.courses.len();
        self.by_id.insert(course.id.clone(), position);
        self.by_code.insert(course.code.to_lowercase(), position);
        self.courses.push(course);
    }

    pub fn set_departments(&mut self, departments: Vec<Department>) {
        self.departments = departments;
    }

    pub fn set_career_paths(&mut self, career_paths: Vec<CareerPath>) {
        self.career_paths = career_paths;
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
