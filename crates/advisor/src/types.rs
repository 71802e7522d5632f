//! Request and message types shared by the advisor and the API client.

use catalog::Weekday;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Unknown enrollment type: {0} (expected fulltime or parttime)")]
    UnknownEnrollmentType(String),
}

/// Full-time (12+ credits) or part-time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentType {
    #[default]
    #[serde(rename = "fulltime")]
    FullTime,
    #[serde(rename = "parttime")]
    PartTime,
}

impl fmt::Display for EnrollmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrollmentType::FullTime => f.write_str("fulltime"),
            EnrollmentType::PartTime => f.write_str("parttime"),
        }
    }
}

impl FromStr for EnrollmentType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' ', '_'], "").as_str() {
            "fulltime" => Ok(EnrollmentType::FullTime),
            "parttime" => Ok(EnrollmentType::PartTime),
            _ => Err(AdvisorError::UnknownEnrollmentType(s.to_string())),
        }
    }
}

/// What a student asks the recommender for.
///
/// Serializes to the body of `POST /recommendations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Career path title, matched case-insensitively
    pub career_goal: String,
    /// Comma-separated subjects or skills
    #[serde(default)]
    pub preferred_subjects: String,
    /// Days the student can attend; empty means any day
    #[serde(default)]
    pub available_days: Vec<Weekday>,
    #[serde(default)]
    pub enrollment_type: EnrollmentType,
}

impl RecommendationRequest {
    pub fn new(career_goal: impl Into<String>) -> Self {
        Self {
            career_goal: career_goal.into(),
            ..Self::default()
        }
    }

    pub fn with_subjects(mut self, subjects: impl Into<String>) -> Self {
        self.preferred_subjects = subjects.into();
        self
    }

    pub fn with_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.available_days = days.into_iter().collect();
        self
    }

    pub fn with_enrollment_type(mut self, enrollment_type: EnrollmentType) -> Self {
        self.enrollment_type = enrollment_type;
        self
    }

    /// Lowercased, trimmed subjects with blanks dropped.
    pub fn subjects(&self) -> Vec<String> {
        self.preferred_subjects
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// One line of a chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 1-based position in the session
    pub id: u32,
    pub text: String,
    pub from_user: bool,
    pub timestamp: DateTime<Utc>,
}
