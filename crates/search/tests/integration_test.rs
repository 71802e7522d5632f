//! Integration tests for the search pipeline.
//!
//! These tests run the criteria through the real bundled catalog and
//! through hand-built records parsed the same way the catalog loader
//! parses them.

use catalog::{parser, CatalogIndex, Course, DeliveryMode, Weekday};
use search::{filter, filter_refs, CreditRange, Criteria, Level, TimeOfDay};

fn bundled() -> CatalogIndex {
    CatalogIndex::bundled().expect("bundled catalog should load")
}

fn ids(courses: &[Course]) -> Vec<&str> {
    courses.iter().map(|c| c.id.as_str()).collect()
}

/// Three records in JSON form, the middle one lacking a professor.
fn sparse_courses() -> Vec<Course> {
    let json = r#"{ "courses": [
        { "id": "alg", "name": "Algorithms", "code": "CSCI-C343", "departmentCode": "CSCI",
          "number": "C343", "credits": 3, "term": "Fall", "year": 2024, "mode": "In-Person",
          "description": "An introductory course",
          "professor": { "name": "Dr. Ada Byron" },
          "schedule": { "days": ["Monday", "Wednesday"], "startTime": "09:30", "endTime": "10:45" } },
        { "id": "orphan", "name": "Course Design", "code": "INFO-I400", "departmentCode": "INFO",
          "number": "I400", "credits": 3, "term": "Fall", "year": 2024, "mode": "Online",
          "description": "A course about courses",
          "professor": null, "schedule": null },
        { "id": "grad", "name": "Capstone", "code": "CSCI-B599", "departmentCode": "CSCI",
          "number": "B599", "credits": 6, "term": "Spring", "year": 2025, "mode": "Hybrid",
          "professor": { "name": "Dr. Grace Hopper" },
          "schedule": { "days": ["Friday"], "startTime": "18:00", "endTime": "20:30" } }
    ] }"#;
    parser::parse_courses_json(json).expect("fixture should parse")
}

#[test]
fn test_unconstrained_criteria_is_identity() {
    let index = bundled();
    assert_eq!(filter(index.courses(), &Criteria::new()), index.courses());

    // "all" and blank inputs are the same as unset
    let placeholders = Criteria::new()
        .with_term("all")
        .with_department("")
        .with_professor("Any")
        .with_keyword("  ");
    assert_eq!(filter(index.courses(), &placeholders), index.courses());

    // including records that would fail field checks
    let sparse = sparse_courses();
    assert_eq!(filter(&sparse, &Criteria::new()), sparse);
}

#[test]
fn test_credit_bounds_inclusive() {
    let sparse = sparse_courses();

    let criteria = Criteria::new().with_credits(CreditRange::new(3, 6).unwrap());
    assert_eq!(ids(&filter(&sparse, &criteria)), vec!["alg", "orphan", "grad"]);

    let criteria = Criteria::new().with_credits(CreditRange::new(4, 6).unwrap());
    assert_eq!(ids(&filter(&sparse, &criteria)), vec!["grad"]);

    let criteria = Criteria::new().with_credits(CreditRange::new(1, 3).unwrap());
    assert_eq!(ids(&filter(&sparse, &criteria)), vec!["alg", "orphan"]);
}

#[test]
fn test_keyword_tokens_are_or_combined() {
    let sparse = sparse_courses();
    let criteria = Criteria::new().with_keyword("ai course");

    // "Algorithms" only matches on "course"; the orphan has no professor
    let results = filter(&sparse, &criteria);
    assert_eq!(ids(&results), vec!["alg"]);
}

#[test]
fn test_graduate_level_threshold() {
    let sparse = sparse_courses();
    let graduate = filter(&sparse, &Criteria::new().with_level(Level::Graduate));
    assert_eq!(ids(&graduate), vec!["grad"]);

    let mut b499 = sparse[2].clone();
    b499.id = "b499".to_string();
    b499.code = "CSCI-B499".to_string();
    b499.number = "B499".to_string();
    assert!(filter(&[b499], &Criteria::new().with_level(Level::Graduate)).is_empty());
}

#[test]
fn test_days_use_intersection() {
    let index = bundled();
    let monday = filter(index.courses(), &Criteria::new().with_days([Weekday::Monday]));
    // DSCI-D590 and INFO-I541 meet Tuesday/Thursday
    assert_eq!(ids(&monday), vec!["c1", "c3", "c5", "c6"]);

    let tuesday = filter(index.courses(), &Criteria::new().with_days([Weekday::Tuesday]));
    assert_eq!(ids(&tuesday), vec!["c2", "c4"]);
}

#[test]
fn test_missing_professor_excluded_without_panic() {
    let sparse = sparse_courses();
    assert!(sparse[1].professor.is_none());

    let by_keyword = filter(&sparse, &Criteria::new().with_keyword("course"));
    assert!(by_keyword.iter().all(|c| c.id != "orphan"));

    let by_professor = filter(&sparse, &Criteria::new().with_professor("dr"));
    assert_eq!(ids(&by_professor), vec!["alg", "grad"]);

    // missing schedule is handled the same way
    let by_time = filter(&sparse, &Criteria::new().with_times(TimeOfDay::ALL));
    assert_eq!(ids(&by_time), vec!["alg", "grad"]);
}

#[test]
fn test_bundled_single_criteria() {
    let index = bundled();
    let courses = index.courses();

    let fall = filter(courses, &Criteria::new().with_term("fall"));
    assert_eq!(ids(&fall), vec!["c2", "c4", "c6"]);

    let csci = filter(courses, &Criteria::new().with_department("csci"));
    assert_eq!(ids(&csci), vec!["c1", "c6"]);

    let online = filter(courses, &Criteria::new().with_mode(DeliveryMode::Online));
    assert_eq!(ids(&online), vec!["c5"]);

    let undergrad = filter(courses, &Criteria::new().with_level(Level::Undergraduate));
    assert_eq!(ids(&undergrad), vec!["c5"]);

    let johnson = filter(courses, &Criteria::new().with_professor("Johnson"));
    assert_eq!(ids(&johnson), vec!["c1", "c6"]);

    let learning = filter(courses, &Criteria::new().with_keyword("learning"));
    assert_eq!(ids(&learning), vec!["c1", "c2", "c6"]);

    let number = filter(courses, &Criteria::new().with_course_number("b55"));
    assert_eq!(ids(&number), vec!["c1", "c6"]);

    let morning = filter(courses, &Criteria::new().with_times([TimeOfDay::Morning]));
    assert_eq!(ids(&morning), vec!["c1", "c3", "c4"]);
}

#[test]
fn test_combined_criteria_preserve_order() {
    let index = bundled();
    let criteria = Criteria::new()
        .with_term("Fall")
        .with_times([TimeOfDay::Afternoon])
        .with_credits(CreditRange::new(3, 3).unwrap());

    let results = filter_refs(index.courses(), &criteria);
    let result_ids: Vec<&str> = results.into_iter().map(|c| c.id.as_str()).collect();
    assert_eq!(result_ids, vec!["c2", "c6"]);
}
