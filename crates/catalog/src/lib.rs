//! # Catalog Crate
//!
//! This crate handles loading and indexing the course catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Course, Professor, Schedule, CatalogIndex)
//! - **parser**: Parse catalog JSON into Rust structs, one record at a time
//! - **index**: Build lookups and per-course statistics
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogIndex;
//!
//! let index = CatalogIndex::bundled()?;
//! let course = index.get_by_code("CSCI-B551").unwrap();
//! println!("{} is taught by {:?}", course.name, course.professor_name());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::CatalogDocument;
pub use types::{
    // Type aliases
    CourseId,
    // Core types
    Course,
    Professor,
    Schedule,
    Availability,
    OcqRating,
    OcqComment,
    GradeDistribution,
    Department,
    CareerPath,
    CourseStats,
    CatalogIndex,
    // Enums
    DeliveryMode,
    Weekday,
    // Helpers
    parse_hour,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn course_with_number(code: &str, number: &str) -> Course {
        Course {
            id: "x".to_string(),
            name: "X".to_string(),
            code: code.to_string(),
            department: String::new(),
            department_code: "CSCI".to_string(),
            number: number.to_string(),
            credits: 3,
            term: "Fall".to_string(),
            year: 2024,
            description: String::new(),
            professor: None,
            location: String::new(),
            schedule: None,
            mode: DeliveryMode::Online,
            availability: None,
            prerequisites: vec![],
            textbooks: vec![],
            ocq: None,
            grade_distribution: None,
        }
    }

    fn schedule(days: &[Weekday], start: &str, end: &str) -> Schedule {
        Schedule {
            days: days.to_vec(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    #[test]
    fn test_numeric_level() {
        assert_eq!(course_with_number("CSCI-B551", "B551").numeric_level(), Some(551));
        // Falls back to the code when the number is blank
        assert_eq!(course_with_number("CSCI-B599", "").numeric_level(), Some(599));
        assert_eq!(course_with_number("CSCI-XYZ", "XYZ").numeric_level(), None);
    }

    #[test]
    fn test_parse_hour() {
        assert_eq!(parse_hour("09:00"), Some(9));
        assert_eq!(parse_hour("17:45"), Some(17));
        assert_eq!(parse_hour("9:00"), None);
        assert_eq!(parse_hour("25:00"), None);
        assert_eq!(parse_hour("noon"), None);
    }

    #[test]
    fn test_delivery_mode_parsing() {
        assert_eq!("in-person".parse::<DeliveryMode>().unwrap(), DeliveryMode::InPerson);
        assert_eq!("ONLINE".parse::<DeliveryMode>().unwrap(), DeliveryMode::Online);
        assert!("remote".parse::<DeliveryMode>().is_err());
        assert_eq!(DeliveryMode::InPerson.to_string(), "In-Person");
    }

    #[test]
    fn test_weekday_parsing() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Thu".parse::<Weekday>().unwrap(), Weekday::Thursday);
        assert!("Saturday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_weekday_json_matches_from_str() {
        let days: Vec<Weekday> = serde_json::from_str(r#"["Monday", "tuesday", "Wed", "thu", "fri"]"#).unwrap();
        assert_eq!(
            days,
            vec![Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday, Weekday::Thursday, Weekday::Friday]
        );
        assert_eq!(serde_json::to_string(&Weekday::Friday).unwrap(), "\"Friday\"");
        assert!(serde_json::from_str::<Weekday>(r#""Saturday""#).is_err());
    }

    #[test]
    fn test_schedule_overlap() {
        let mw_morning = schedule(&[Weekday::Monday, Weekday::Wednesday], "10:00", "11:15");
        let mw_late_morning = schedule(&[Weekday::Monday], "11:00", "12:00");
        let mw_back_to_back = schedule(&[Weekday::Wednesday], "11:15", "12:30");
        let tr_morning = schedule(&[Weekday::Tuesday, Weekday::Thursday], "10:00", "11:15");

        assert!(mw_morning.overlaps(&mw_late_morning));
        assert!(!mw_morning.overlaps(&mw_back_to_back));
        assert!(!mw_morning.overlaps(&tr_morning));
    }

    #[test]
    fn test_grade_distribution_pass_rate() {
        let grades = GradeDistribution { a: 45.0, b: 30.0, c: 15.0, d: 5.0, f: 3.0, withdraw: 2.0 };
        assert!((grades.total() - 100.0).abs() < 1e-4);
        assert!((grades.pass_rate() - 0.95).abs() < 1e-6);

        let empty = GradeDistribution { a: 0.0, b: 0.0, c: 0.0, d: 0.0, f: 0.0, withdraw: 0.0 };
        assert_eq!(empty.pass_rate(), 0.0);
    }

    #[test]
    fn test_empty_queries() {
        let index = CatalogIndex::new();
        assert!(index.is_empty());
        assert!(index.get_course("c1").is_none());
        assert!(index.get_by_code("CSCI-B551").is_none());
        assert!(index.get_course_stats("c1").is_none());
    }
}
