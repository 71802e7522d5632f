//! Career-path recommendations.
//!
//! ## Algorithm
//! 1. Find the career path whose title equals the goal (ignoring case)
//! 2. Keep the catalog courses whose code the path recommends, in catalog
//!    order
//! 3. If subjects were given, count for each course how many of them appear
//!    in its name or description, and stable-sort by that count, highest
//!    first
//! 4. If days were given, drop courses that meet on none of them

use crate::types::RecommendationRequest;
use catalog::{CareerPath, CatalogIndex, Course};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// A recommended course and the subjects it matched.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub course: Course,
    pub matched_subjects: Vec<String>,
}

/// Rule-based recommender over a fixed set of career paths.
pub struct CareerAdvisor {
    paths: Vec<CareerPath>,
}

impl CareerAdvisor {
    pub fn new(paths: Vec<CareerPath>) -> Self {
        Self { paths }
    }

    /// Use the career paths that came with the catalog.
    pub fn from_index(index: &CatalogIndex) -> Self {
        Self::new(index.career_paths().to_vec())
    }

    pub fn paths(&self) -> &[CareerPath] {
        &self.paths
    }

    /// Career path with the given title, ignoring case.
    pub fn find_path(&self, title: &str) -> Option<&CareerPath> {
        let title = title.trim();
        self.paths.iter().find(|p| p.title.eq_ignore_ascii_case(title))
    }

    /// Courses for the request. An unknown career goal yields nothing.
    pub fn recommend(&self, courses: &[Course], request: &RecommendationRequest) -> Vec<Course> {
        self.recommend_with_matches(courses, request)
            .into_iter()
            .map(|r| r.course)
            .collect()
    }

    #[instrument(skip(self, courses, request), fields(goal = %request.career_goal))]
    pub fn recommend_with_matches(
        &self,
        courses: &[Course],
        request: &RecommendationRequest,
    ) -> Vec<Recommendation> {
        let Some(path) = self.find_path(&request.career_goal) else {
            debug!("No career path named {:?}", request.career_goal);
            return Vec::new();
        };

        let codes: HashSet<&str> = path.recommended_courses.iter().map(String::as_str).collect();
        let subjects = request.subjects();

        let mut recommendations: Vec<Recommendation> = courses
            .iter()
            .filter(|c| codes.contains(c.code.as_str()))
            .map(|course| Recommendation {
                matched_subjects: matching_subjects(course, &subjects),
                course: course.clone(),
            })
            .collect();
        debug!("{} courses on the {} path", recommendations.len(), path.title);

        // sort_by is stable, so ties keep catalog order
        recommendations.sort_by(|a, b| b.matched_subjects.len().cmp(&a.matched_subjects.len()));

        if !request.available_days.is_empty() {
            recommendations.retain(|r| {
                r.course
                    .schedule
                    .as_ref()
                    .is_some_and(|s| s.days.iter().any(|d| request.available_days.contains(d)))
            });
            debug!("{} courses left after day filter", recommendations.len());
        }

        recommendations
    }
}

/// Subjects (already lowercased) found in the course name or description.
fn matching_subjects(course: &Course, subjects: &[String]) -> Vec<String> {
    if subjects.is_empty() {
        return Vec::new();
    }
    let name = course.name.to_lowercase();
    let description = course.description.to_lowercase();
    subjects
        .iter()
        .filter(|s| name.contains(s.as_str()) || description.contains(s.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Weekday;

    fn advisor_and_courses() -> (CareerAdvisor, Vec<Course>) {
        let index = CatalogIndex::bundled().unwrap();
        (CareerAdvisor::from_index(&index), index.courses().to_vec())
    }

    fn codes(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.code.as_str()).collect()
    }

    #[test]
    fn test_keeps_path_courses_in_catalog_order() {
        let (advisor, courses) = advisor_and_courses();
        let result = advisor.recommend(&courses, &RecommendationRequest::new("data scientist"));
        assert_eq!(codes(&result), vec!["DSCI-D590", "STAT-S520", "MATH-M365", "CSCI-B555"]);
    }

    #[test]
    fn test_unknown_goal_is_empty() {
        let (advisor, courses) = advisor_and_courses();
        assert!(advisor
            .recommend(&courses, &RecommendationRequest::new("Astronaut"))
            .is_empty());
    }

    #[test]
    fn test_subject_matches_sort_first() {
        let (advisor, courses) = advisor_and_courses();
        let request = RecommendationRequest::new("AI Engineer")
            .with_subjects("neural networks, linear regression, learning");
        let result = advisor.recommend_with_matches(&courses, &request);

        let order: Vec<&str> = result.iter().map(|r| r.course.code.as_str()).collect();
        // B555 matches two subjects, S520 and B551 one each (tie keeps catalog order)
        assert_eq!(order, vec!["CSCI-B555", "CSCI-B551", "STAT-S520", "MATH-M365"]);
        assert_eq!(result[0].matched_subjects, vec!["neural networks", "learning"]);
        assert!(result[3].matched_subjects.is_empty());
    }

    #[test]
    fn test_available_days_intersect() {
        let (advisor, courses) = advisor_and_courses();
        let request = RecommendationRequest::new("Data Scientist").with_days([Weekday::Friday]);
        let result = advisor.recommend(&courses, &request);
        assert_eq!(codes(&result), vec!["STAT-S520", "MATH-M365"]);

        let request = RecommendationRequest::new("Data Scientist")
            .with_days([Weekday::Tuesday, Weekday::Friday]);
        assert_eq!(advisor.recommend(&courses, &request).len(), 3);
    }
}
