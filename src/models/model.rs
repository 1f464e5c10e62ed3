//! Validated domain model.
//!
//! A [`Model`] is the interned form of a [`Problem`]: identifiers become
//! dense indices, teacher eligibility becomes an index relation, and every
//! structural rule is checked once at construction. All types here are
//! immutable after construction.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::Problem;
use crate::validation::{self, MalformedInputError};

/// A student group and the courses it must attend.
#[derive(Debug, Clone)]
pub struct Group {
    /// Group identifier.
    pub id: String,
    /// Required courses as indices into [`Model::courses`], in request
    /// order. Course lists are ordered sets: a repeated mention collapses
    /// onto its first occurrence.
    pub courses: Vec<usize>,
}

/// A teacher and the courses they are eligible to teach.
#[derive(Debug, Clone)]
pub struct Teacher {
    /// Teacher identifier.
    pub id: String,
    /// Eligible courses as ascending indices into [`Model::courses`].
    pub eligible: Vec<usize>,
}

/// A course with its weekly session requirement.
#[derive(Debug, Clone)]
pub struct Course {
    /// Course identifier.
    pub id: String,
    /// Required sessions per week.
    pub sessions: u32,
}

/// Validated, interned problem instance.
///
/// Classrooms carry no attributes and are identified purely by index
/// `0..classrooms`. Courses are interned only when some group requires
/// them; a course a teacher could teach but nobody takes does not exist
/// in the model.
#[derive(Debug, Clone)]
pub struct Model {
    groups: Vec<Group>,
    teachers: Vec<Teacher>,
    courses: Vec<Course>,
    classrooms: u32,
    /// `eligibility[teacher][course]`
    eligibility: Vec<Vec<bool>>,
}

impl Model {
    /// Builds a validated model from a raw problem.
    ///
    /// Fails with [`MalformedInputError`] when the problem is structurally
    /// unsound; the error carries every defect found, not just the first.
    pub fn from_problem(problem: &Problem) -> Result<Self, MalformedInputError> {
        validation::validate(problem)?;

        // Intern the courses any group requires, ascending by identifier.
        let course_ids: BTreeSet<&str> = problem
            .groups
            .values()
            .flat_map(|courses| courses.iter().map(String::as_str))
            .collect();
        let course_index: BTreeMap<&str, usize> = course_ids
            .iter()
            .enumerate()
            .map(|(index, &id)| (id, index))
            .collect();
        let courses: Vec<Course> = course_ids
            .iter()
            .map(|&id| Course {
                id: id.to_string(),
                sessions: problem.sessions_for(id),
            })
            .collect();

        let groups: Vec<Group> = problem
            .groups
            .iter()
            .map(|(id, course_list)| {
                let mut seen = BTreeSet::new();
                let courses = course_list
                    .iter()
                    .filter_map(|course| course_index.get(course.as_str()).copied())
                    .filter(|&course| seen.insert(course))
                    .collect();
                Group {
                    id: id.clone(),
                    courses,
                }
            })
            .collect();

        // Identifier order is index order on both sides, so the mapped
        // indices come out ascending without an explicit sort.
        let teachers: Vec<Teacher> = problem
            .teachers
            .iter()
            .map(|(id, able)| Teacher {
                id: id.clone(),
                eligible: able
                    .iter()
                    .filter_map(|course| course_index.get(course.as_str()).copied())
                    .collect(),
            })
            .collect();

        let mut eligibility = vec![vec![false; courses.len()]; teachers.len()];
        for (t, teacher) in teachers.iter().enumerate() {
            for &course in &teacher.eligible {
                eligibility[t][course] = true;
            }
        }

        Ok(Self {
            groups,
            teachers,
            courses,
            classrooms: problem.classrooms,
            eligibility,
        })
    }

    /// Student groups, ascending by identifier.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Teachers, ascending by identifier.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Interned courses, ascending by identifier.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of interchangeable classrooms.
    pub fn classrooms(&self) -> u32 {
        self.classrooms
    }

    /// Whether a teacher may teach a course.
    #[inline]
    pub fn is_eligible(&self, teacher: usize, course: usize) -> bool {
        self.eligibility[teacher][course]
    }

    /// Teachers eligible for a course, in ascending index order.
    pub fn eligible_teachers(&self, course: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.teachers.len()).filter(move |&teacher| self.eligibility[teacher][course])
    }
}
