//! Plain-text rendering of course records.

use itertools::Itertools;

use crate::domain::CourseRecord;

/// `"CSCI101: Introduction to Programming in C++"`
pub fn course_line(course: &CourseRecord) -> String {
    format!("{}: {}", course.identifier(), course.title())
}

/// `"Prerequisites: None"` or the space-joined prerequisite list.
pub fn prerequisites_line(course: &CourseRecord) -> String {
    if course.has_prerequisites() {
        format!("Prerequisites: {}", course.prerequisites().iter().join(" "))
    } else {
        "Prerequisites: None".to_string()
    }
}

/// Title line followed by the prerequisites line.
pub fn course_details(course: &CourseRecord) -> String {
    format!("{}\n{}", course_line(course), prerequisites_line(course))
}
