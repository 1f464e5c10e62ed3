//! Problem instance (request) model.
//!
//! A [`Problem`] is the raw, as-received form of a timetabling request:
//! string identifiers, no interning, no validation. It deserializes
//! directly from the scheduling request body. Validation and interning
//! happen when a [`Model`](crate::models::Model) is built from it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Weekly session count assumed for courses absent from `course_sessions`.
pub const DEFAULT_SESSIONS_PER_WEEK: u32 = 2;

/// A raw timetabling problem instance.
///
/// Ordered maps keep iteration deterministic, which the solver's
/// reproducibility guarantee depends on.
///
/// # Example
///
/// ```
/// use u_timetable::Problem;
///
/// let problem = Problem::new()
///     .with_group("g1", vec!["math".into(), "art".into()])
///     .with_teacher("t1", vec!["math".into(), "art".into()])
///     .with_classrooms(1)
///     .with_course_sessions("math", 3);
///
/// assert_eq!(problem.sessions_for("math"), 3);
/// assert_eq!(problem.sessions_for("art"), 2); // default
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Problem {
    /// Group identifier → ordered list of required course identifiers.
    pub groups: BTreeMap<String, Vec<String>>,
    /// Teacher identifier → set of course identifiers they may teach.
    pub teachers: BTreeMap<String, BTreeSet<String>>,
    /// Number of interchangeable classrooms.
    pub classrooms: u32,
    /// Course identifier → required weekly session count.
    ///
    /// Courses not listed here require [`DEFAULT_SESSIONS_PER_WEEK`] sessions.
    #[serde(default)]
    pub course_sessions: BTreeMap<String, u32>,
}

impl Problem {
    /// Creates an empty problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group with its required course list.
    pub fn with_group(mut self, id: impl Into<String>, courses: Vec<String>) -> Self {
        self.groups.insert(id.into(), courses);
        self
    }

    /// Adds a teacher with the courses they are eligible to teach.
    pub fn with_teacher(mut self, id: impl Into<String>, courses: Vec<String>) -> Self {
        self.teachers.insert(id.into(), courses.into_iter().collect());
        self
    }

    /// Sets the classroom count.
    pub fn with_classrooms(mut self, classrooms: u32) -> Self {
        self.classrooms = classrooms;
        self
    }

    /// Sets the weekly session count for a course.
    pub fn with_course_sessions(mut self, course: impl Into<String>, sessions: u32) -> Self {
        self.course_sessions.insert(course.into(), sessions);
        self
    }

    /// Required weekly sessions for a course (default 2 when unlisted).
    pub fn sessions_for(&self, course: &str) -> u32 {
        self.course_sessions
            .get(course)
            .copied()
            .unwrap_or(DEFAULT_SESSIONS_PER_WEEK)
    }

    /// Whether any teacher is eligible to teach the given course.
    pub fn has_eligible_teacher(&self, course: &str) -> bool {
        self.teachers.values().any(|courses| courses.contains(course))
    }
}
