//! Filter implementations for the search pipeline.
//!
//! One filter per criterion. `FilterPipeline::from_criteria` only adds the
//! filters whose criterion is set.

pub mod keyword;
pub mod term;
pub mod department;
pub mod professor;
pub mod course_number;
pub mod level;
pub mod mode;
pub mod credits;
pub mod days;
pub mod time_of_day;

// Re-export for convenience
pub use keyword::KeywordFilter;
pub use term::TermFilter;
pub use department::DepartmentFilter;
pub use professor::ProfessorFilter;
pub use course_number::CourseNumberFilter;
pub use level::LevelFilter;
pub use mode::ModeFilter;
pub use credits::CreditsFilter;
pub use days::DaysFilter;
pub use time_of_day::TimeOfDayFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use catalog::{Course, DeliveryMode, Professor, Schedule, Weekday};

    /// A fully populated course for filter unit tests.
    pub fn course(id: &str, code: &str) -> Course {
        let (dept, number) = code.split_once('-').unwrap();
        Course {
            id: id.to_string(),
            name: format!("Course {id}"),
            code: code.to_string(),
            department: String::new(),
            department_code: dept.to_string(),
            number: number.to_string(),
            credits: 3,
            term: "Fall".to_string(),
            year: 2024,
            description: String::new(),
            professor: Some(Professor {
                id: "p1".to_string(),
                name: "Dr. Emily Johnson".to_string(),
                department: "Computer Science".to_string(),
                email: String::new(),
                avg_rating: 4.7,
            }),
            location: String::new(),
            schedule: Some(Schedule {
                days: vec![Weekday::Monday, Weekday::Wednesday],
                start_time: "10:00".to_string(),
                end_time: "11:15".to_string(),
            }),
            mode: DeliveryMode::InPerson,
            availability: None,
            prerequisites: vec![],
            textbooks: vec![],
            ocq: None,
            grade_distribution: None,
        }
    }
}
