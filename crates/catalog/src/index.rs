//! CatalogIndex building and indexing logic.
//!
//! Builds the CatalogIndex from a parsed document, computes per-course
//! statistics, and checks the result for duplicate identifiers.

use crate::error::{CatalogError, Result};
use crate::parser::{self, CatalogDocument};
use crate::types::*;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::{info, warn};

/// The dataset compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

impl CatalogIndex {
    /// Load a catalog document from a JSON file on disk.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading course catalog from {:?}", path);
        let document = parser::parse_document_file(path)?;
        Self::from_document(document)
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_document(parser::parse_document(BUNDLED_CATALOG)?)
    }

    /// Build an index from courses alone (departments are derived).
    pub fn from_courses(courses: Vec<Course>) -> Result<Self> {
        Self::from_document(CatalogDocument {
            courses,
            ..CatalogDocument::default()
        })
    }

    /// Build the index, derive missing reference data, compute stats and
    /// validate.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        if document.skipped > 0 {
            warn!("{} course records were skipped while parsing", document.skipped);
        }

        let mut index = CatalogIndex::new();
        for course in document.courses {
            index.insert_course(course);
        }

        let departments = if document.departments.is_empty() {
            index.derive_departments()
        } else {
            document.departments
        };
        index.set_departments(departments);
        index.set_career_paths(document.career_paths);

        index.compute_course_stats();
        index.validate()?;

        info!(
            "Catalog ready: {} courses, {} departments, {} career paths",
            index.len(),
            index.departments.len(),
            index.career_paths.len()
        );
        Ok(index)
    }

    /// One Department per distinct department code, sorted by code.
    fn derive_departments(&self) -> Vec<Department> {
        let mut seen = BTreeSet::new();
        let mut departments = Vec::new();
        for course in &self.courses {
            if seen.insert(course.department_code.clone()) {
                departments.push(Department {
                    id: course.department_code.to_lowercase(),
                    name: course.department.clone(),
                    code: course.department_code.clone(),
                });
            }
        }
        departments.sort_by(|a, b| a.code.cmp(&b.code));
        departments
    }

    /// Compute CourseStats for every course in parallel.
    pub fn compute_course_stats(&mut self) {
        self.course_stats = self
            .courses
            .par_iter()
            .map(|course| (course.id.clone(), compute_stats(course)))
            .collect();
    }

    /// Every course id must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.courses.len());
        for course in &self.courses {
            if !seen.insert(course.id.as_str()) {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
        }
        Ok(())
    }

    /// Distinct terms in first-seen order.
    pub fn terms(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.courses
            .iter()
            .filter(|c| seen.insert(c.term.clone()))
            .map(|c| c.term.clone())
            .collect()
    }

    /// Distinct professors, sorted by name.
    pub fn professors(&self) -> Vec<&Professor> {
        let mut seen = HashSet::new();
        let mut professors: Vec<&Professor> = self
            .courses
            .iter()
            .filter_map(|c| c.professor.as_ref())
            .filter(|&p| seen.insert(p.name.as_str()))
            .collect();
        professors.sort_by(|a, b| a.name.cmp(&b.name));
        professors
    }
}

fn compute_stats(course: &Course) -> CourseStats {
    let fill_ratio = course.availability.and_then(|a| {
        (a.total > 0).then(|| a.enrolled as f32 / a.total as f32)
    });
    CourseStats {
        pass_rate: course
            .grade_distribution
            .filter(|g| g.total() > 0.0)
            .map(|g| g.pass_rate()),
        seats_remaining: course.availability.map(|a| a.seats_remaining()),
        fill_ratio,
        ocq_overall: course.ocq.as_ref().map(|o| o.overall),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, code: &str, dept: &str) -> Course {
        Course {
            id: id.to_string(),
            name: format!("Course {id}"),
            code: code.to_string(),
            department: format!("{dept} Dept"),
            department_code: dept.to_string(),
            number: code.rsplit('-').next().unwrap().to_string(),
            credits: 3,
            term: "Fall".to_string(),
            year: 2024,
            description: String::new(),
            professor: None,
            location: String::new(),
            schedule: None,
            mode: DeliveryMode::Online,
            availability: Some(Availability { total: 100, enrolled: 75 }),
            prerequisites: vec![],
            textbooks: vec![],
            ocq: None,
            grade_distribution: Some(GradeDistribution {
                a: 40.0,
                b: 30.0,
                c: 10.0,
                d: 0.0,
                f: 10.0,
                withdraw: 10.0,
            }),
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let index = CatalogIndex::bundled().unwrap();
        assert_eq!(index.len(), 6);
        assert_eq!(index.departments().len(), 7);
        assert_eq!(index.career_paths().len(), 4);

        let ai = index.get_by_code("csci-b551").unwrap();
        assert_eq!(ai.id, "c1");
        assert_eq!(ai.professor_name(), Some("Dr. Emily Johnson"));
    }

    #[test]
    fn test_departments_derived_when_absent() {
        let index = CatalogIndex::from_courses(vec![
            course("1", "STAT-S520", "STAT"),
            course("2", "CSCI-B551", "CSCI"),
            course("3", "CSCI-B555", "CSCI"),
        ])
        .unwrap();

        let codes: Vec<&str> = index.departments().iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["CSCI", "STAT"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = CatalogIndex::from_courses(vec![
            course("1", "CSCI-B551", "CSCI"),
            course("1", "CSCI-B555", "CSCI"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_course_stats() {
        let index = CatalogIndex::from_courses(vec![course("1", "CSCI-B551", "CSCI")]).unwrap();
        let stats = index.get_course_stats("1").unwrap();

        assert!((stats.pass_rate.unwrap() - 0.8).abs() < 1e-6);
        assert_eq!(stats.seats_remaining, Some(25));
        assert!((stats.fill_ratio.unwrap() - 0.75).abs() < 1e-6);
        assert_eq!(stats.ocq_overall, None);
    }

    #[test]
    fn test_professors_are_distinct_and_sorted() {
        let index = CatalogIndex::bundled().unwrap();
        let names: Vec<&str> = index.professors().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Dr. Emily Johnson",
                "Dr. Jessica Patel",
                "Dr. Michael Chen",
                "Dr. Robert Davis",
                "Dr. Sarah Williams",
            ]
        );
    }

    #[test]
    fn test_find_by_id_or_code() {
        let index = CatalogIndex::from_courses(vec![course("c9", "MATH-M365", "MATH")]).unwrap();
        assert!(index.find("c9").is_some());
        assert!(index.find("MATH-M365").is_some());
        assert!(index.find("nope").is_none());
    }
}
