//! Decision-variable space.
//!
//! One boolean variable per admissible (group, course, slot, teacher,
//! classroom) combination. Combinations whose teacher is not eligible for
//! the course are never materialized, which keeps the space at
//! |groups| × |courses per group| × |eligible teachers| × |classrooms| × 20
//! instead of the full cross product — the dominant factor in search
//! tractability.
//!
//! The arena is built once, in ascending (group, course position, day,
//! period, teacher, classroom) order; that order doubles as the solver's
//! deterministic value order. Secondary indexes give O(1) access to the
//! variable subsets each constraint family ranges over.

use crate::models::slot::SLOTS_PER_WEEK;
use crate::models::{Model, Slot};

/// Index of a variable in the arena.
pub type VarId = usize;

/// A boolean session decision: the group attends the course, taught by
/// the teacher, in the classroom, during the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionVar {
    /// Group index into [`Model::groups`].
    pub group: usize,
    /// Course index into [`Model::courses`].
    pub course: usize,
    /// Teacher index into [`Model::teachers`]; always eligible for `course`.
    pub teacher: usize,
    /// Classroom index, `0..Model::classrooms()`.
    pub classroom: usize,
    /// Weekly slot.
    pub slot: Slot,
}

/// The full variable arena plus the lookup indexes the constraint
/// families need.
#[derive(Debug, Clone)]
pub struct VariableSpace {
    vars: Vec<SessionVar>,
    /// Row per (group, course position), addressed through
    /// `group_course_offsets`.
    by_group_course: Vec<Vec<VarId>>,
    /// Start row in `by_group_course` for each group.
    group_course_offsets: Vec<usize>,
    /// Row per teacher × slot.
    by_teacher_slot: Vec<Vec<VarId>>,
    /// Row per classroom × slot.
    by_classroom_slot: Vec<Vec<VarId>>,
    /// Row per group × slot.
    by_group_slot: Vec<Vec<VarId>>,
}

impl VariableSpace {
    /// Enumerates the admissible variable universe for a model.
    pub fn build(model: &Model) -> Self {
        let classrooms = model.classrooms() as usize;

        let mut vars = Vec::new();
        let mut by_group_course = Vec::new();
        let mut group_course_offsets = Vec::with_capacity(model.groups().len());
        let mut by_teacher_slot = vec![Vec::new(); model.teachers().len() * SLOTS_PER_WEEK];
        let mut by_classroom_slot = vec![Vec::new(); classrooms * SLOTS_PER_WEEK];
        let mut by_group_slot = vec![Vec::new(); model.groups().len() * SLOTS_PER_WEEK];

        for (group, group_data) in model.groups().iter().enumerate() {
            group_course_offsets.push(by_group_course.len());
            for &course in &group_data.courses {
                let mut row = Vec::new();
                for slot in Slot::all() {
                    for teacher in model.eligible_teachers(course) {
                        for classroom in 0..classrooms {
                            let id = vars.len();
                            vars.push(SessionVar {
                                group,
                                course,
                                teacher,
                                classroom,
                                slot,
                            });
                            row.push(id);
                            by_teacher_slot[teacher * SLOTS_PER_WEEK + slot.index()].push(id);
                            by_classroom_slot[classroom * SLOTS_PER_WEEK + slot.index()].push(id);
                            by_group_slot[group * SLOTS_PER_WEEK + slot.index()].push(id);
                        }
                    }
                }
                by_group_course.push(row);
            }
        }

        Self {
            vars,
            by_group_course,
            group_course_offsets,
            by_teacher_slot,
            by_classroom_slot,
            by_group_slot,
        }
    }

    /// Number of variables in the arena.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// The arena, in creation (and value) order.
    pub fn vars(&self) -> &[SessionVar] {
        &self.vars
    }

    /// Variables for a group's course at a position in its course list.
    pub fn group_course_vars(&self, group: usize, position: usize) -> &[VarId] {
        &self.by_group_course[self.group_course_offsets[group] + position]
    }

    /// Variables placing a teacher in a slot.
    pub fn teacher_slot_vars(&self, teacher: usize, slot: Slot) -> &[VarId] {
        &self.by_teacher_slot[teacher * SLOTS_PER_WEEK + slot.index()]
    }

    /// Variables occupying a classroom in a slot.
    pub fn classroom_slot_vars(&self, classroom: usize, slot: Slot) -> &[VarId] {
        &self.by_classroom_slot[classroom * SLOTS_PER_WEEK + slot.index()]
    }

    /// Variables engaging a group in a slot.
    pub fn group_slot_vars(&self, group: usize, slot: Slot) -> &[VarId] {
        &self.by_group_slot[group * SLOTS_PER_WEEK + slot.index()]
    }
}
