//! Input validation for timetabling problems.
//!
//! Checks structural integrity of a [`Problem`] before any model is
//! built. Detects:
//! - Empty group or teacher sets
//! - A zero classroom count
//! - Zero-session course requirements
//! - Group courses no teacher is eligible to teach
//!
//! All defects are collected in one pass; callers see the full list,
//! not just the first failure.

use std::fmt;

use thiserror::Error;

use crate::models::Problem;

/// A single structural defect in a problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The problem defines no groups.
    #[error("no groups defined")]
    NoGroups,
    /// The problem defines no teachers.
    #[error("no teachers defined")]
    NoTeachers,
    /// The classroom count is zero.
    #[error("classroom count must be positive")]
    NoClassrooms,
    /// A course requires zero weekly sessions.
    #[error("course '{course}' has a session count of zero")]
    ZeroSessions {
        /// Offending course.
        course: String,
    },
    /// A group requires a course no teacher can teach.
    #[error("course '{course}' required by group '{group}' has no eligible teacher")]
    UncoveredCourse {
        /// Requiring group.
        group: String,
        /// Uncovered course.
        course: String,
    },
}

/// Domain model construction failure.
///
/// Carries every defect found in the problem instance. Search never
/// starts on a problem that fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedInputError {
    /// All defects detected, in check order.
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for MalformedInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed problem instance: ")?;
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MalformedInputError {}

/// Validates a raw problem instance.
///
/// Checks:
/// 1. At least one group and one teacher
/// 2. A positive classroom count
/// 3. Positive session counts for every listed course
/// 4. Every group course has at least one eligible teacher
///
/// # Returns
/// `Ok(())` if all checks pass, `Err` with all detected defects.
pub fn validate(problem: &Problem) -> Result<(), MalformedInputError> {
    let mut errors = Vec::new();

    if problem.groups.is_empty() {
        errors.push(ValidationError::NoGroups);
    }
    if problem.teachers.is_empty() {
        errors.push(ValidationError::NoTeachers);
    }
    if problem.classrooms == 0 {
        errors.push(ValidationError::NoClassrooms);
    }

    for (course, &sessions) in &problem.course_sessions {
        if sessions == 0 {
            errors.push(ValidationError::ZeroSessions {
                course: course.clone(),
            });
        }
    }

    for (group, courses) in &problem.groups {
        for course in courses {
            if !problem.has_eligible_teacher(course) {
                errors.push(ValidationError::UncoveredCourse {
                    group: group.clone(),
                    course: course.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(MalformedInputError { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_problem() -> Problem {
        Problem::new()
            .with_group("g1", vec!["math".into()])
            .with_teacher("t1", vec!["math".into()])
            .with_classrooms(1)
    }

    #[test]
    fn test_valid_problem() {
        assert!(validate(&valid_problem()).is_ok());
    }

    #[test]
    fn test_empty_groups() {
        let problem = Problem::new()
            .with_teacher("t1", vec!["math".into()])
            .with_classrooms(1);

        let err = validate(&problem).unwrap_err();
        assert!(err.errors.contains(&ValidationError::NoGroups));
    }

    #[test]
    fn test_empty_teachers() {
        let problem = Problem::new()
            .with_group("g1", vec![])
            .with_classrooms(1);

        let err = validate(&problem).unwrap_err();
        assert!(err.errors.contains(&ValidationError::NoTeachers));
    }

    #[test]
    fn test_zero_classrooms() {
        let problem = valid_problem().with_classrooms(0);

        let err = validate(&problem).unwrap_err();
        assert!(err.errors.contains(&ValidationError::NoClassrooms));
    }

    #[test]
    fn test_zero_sessions() {
        let problem = valid_problem().with_course_sessions("math", 0);

        let err = validate(&problem).unwrap_err();
        assert!(err.errors.iter().any(|e| matches!(
            e,
            ValidationError::ZeroSessions { course } if course == "math"
        )));
    }

    #[test]
    fn test_uncovered_course() {
        let problem = Problem::new()
            .with_group("g1", vec!["math".into(), "art".into()])
            .with_teacher("t1", vec!["math".into()])
            .with_classrooms(1);

        let err = validate(&problem).unwrap_err();
        assert!(err.errors.iter().any(|e| matches!(
            e,
            ValidationError::UncoveredCourse { group, course }
                if group == "g1" && course == "art"
        )));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let problem = Problem::new()
            .with_group("g1", vec!["math".into()])
            .with_classrooms(0);

        let err = validate(&problem).unwrap_err();
        // No teachers, no classrooms, and math therefore uncovered.
        assert!(err.errors.len() >= 3);
    }

    #[test]
    fn test_display_joins_errors() {
        let err = MalformedInputError {
            errors: vec![ValidationError::NoGroups, ValidationError::NoTeachers],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("no groups defined"));
        assert!(rendered.contains("; no teachers defined"));
    }
}
