//! Constraint compilation.
//!
//! Translates the scheduling rules into cardinality constraints over
//! variable subsets. Four families:
//!
//! 1. **Session count** — for every (group, course): exactly N variables
//!    true, N the course's weekly session requirement.
//! 2. **Teacher** — for every (teacher, slot): at most one variable true.
//! 3. **Classroom** — for every (classroom, slot): at most one true.
//! 4. **Group** — for every (group, slot): at most one true.
//!
//! Eligibility needs no constraint family: ineligible combinations were
//! never created as variables. Compilation is purely structural and
//! cannot fail on a validated model.

use crate::cp::variables::{VarId, VariableSpace};
use crate::models::{Model, Slot};

/// Cardinality requirement over a subset of variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Exactly `n` of the variables must be true.
    ExactlyN(u32),
    /// At most one of the variables may be true.
    AtMostOne,
}

/// A cardinality constraint over a variable subset.
#[derive(Debug, Clone)]
pub struct Constraint {
    /// The cardinality requirement.
    pub kind: ConstraintKind,
    /// The variables it ranges over, ascending.
    pub vars: Vec<VarId>,
}

impl Constraint {
    /// Creates an exactly-`n` constraint.
    pub fn exactly(n: u32, vars: Vec<VarId>) -> Self {
        Self {
            kind: ConstraintKind::ExactlyN(n),
            vars,
        }
    }

    /// Creates an at-most-one constraint.
    pub fn at_most_one(vars: Vec<VarId>) -> Self {
        Self {
            kind: ConstraintKind::AtMostOne,
            vars,
        }
    }
}

/// Compiles the four constraint families for a model.
///
/// Emission order is fixed: session-count constraints first (group-major,
/// courses in listing order), then teacher, classroom, and group
/// at-most-ones slot-major. Subsets that cannot contain a true variable
/// (an empty index row) are skipped.
pub fn compile(model: &Model, space: &VariableSpace) -> Vec<Constraint> {
    let mut constraints = Vec::new();

    for (group, group_data) in model.groups().iter().enumerate() {
        for (position, &course) in group_data.courses.iter().enumerate() {
            let vars = space.group_course_vars(group, position).to_vec();
            constraints.push(Constraint::exactly(model.courses()[course].sessions, vars));
        }
    }

    for teacher in 0..model.teachers().len() {
        for slot in Slot::all() {
            let vars = space.teacher_slot_vars(teacher, slot);
            if !vars.is_empty() {
                constraints.push(Constraint::at_most_one(vars.to_vec()));
            }
        }
    }

    for classroom in 0..model.classrooms() as usize {
        for slot in Slot::all() {
            let vars = space.classroom_slot_vars(classroom, slot);
            if !vars.is_empty() {
                constraints.push(Constraint::at_most_one(vars.to_vec()));
            }
        }
    }

    for group in 0..model.groups().len() {
        for slot in Slot::all() {
            let vars = space.group_slot_vars(group, slot);
            if !vars.is_empty() {
                constraints.push(Constraint::at_most_one(vars.to_vec()));
            }
        }
    }

    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slot::SLOTS_PER_WEEK;
    use crate::models::Problem;

    fn compiled(problem: &Problem) -> (Model, VariableSpace, Vec<Constraint>) {
        let model = Model::from_problem(problem).unwrap();
        let space = VariableSpace::build(&model);
        let constraints = compile(&model, &space);
        (model, space, constraints)
    }

    #[test]
    fn test_family_counts() {
        let problem = Problem::new()
            .with_group("g1", vec!["math".into(), "art".into()])
            .with_teacher("t1", vec!["math".into(), "art".into()])
            .with_classrooms(1);
        let (_, _, constraints) = compiled(&problem);

        let exactly = constraints
            .iter()
            .filter(|c| matches!(c.kind, ConstraintKind::ExactlyN(_)))
            .count();
        let at_most = constraints
            .iter()
            .filter(|c| c.kind == ConstraintKind::AtMostOne)
            .count();

        // One session-count constraint per (group, course).
        assert_eq!(exactly, 2);
        // t1, the classroom, and g1 each occupy all 20 slot rows.
        assert_eq!(at_most, 3 * SLOTS_PER_WEEK);
    }

    #[test]
    fn test_session_counts_resolved() {
        let problem = Problem::new()
            .with_group("g1", vec!["math".into(), "art".into()])
            .with_teacher("t1", vec!["math".into(), "art".into()])
            .with_classrooms(1)
            .with_course_sessions("math", 5);
        let (_, _, constraints) = compiled(&problem);

        // Emission is group-major in listing order: math first, then art.
        assert_eq!(constraints[0].kind, ConstraintKind::ExactlyN(5));
        assert_eq!(constraints[1].kind, ConstraintKind::ExactlyN(2));
    }

    #[test]
    fn test_empty_rows_skipped() {
        // t2 teaches nothing any group takes: its slot rows are empty and
        // produce no constraints.
        let problem = Problem::new()
            .with_group("g1", vec!["math".into()])
            .with_teacher("t1", vec!["math".into()])
            .with_teacher("t2", vec!["art".into()])
            .with_classrooms(1);
        let (_, _, constraints) = compiled(&problem);

        let at_most = constraints
            .iter()
            .filter(|c| c.kind == ConstraintKind::AtMostOne)
            .count();
        assert_eq!(at_most, 3 * SLOTS_PER_WEEK);
    }

    #[test]
    fn test_constraints_reference_existing_vars() {
        let problem = Problem::new()
            .with_group("g1", vec!["math".into()])
            .with_group("g2", vec!["math".into()])
            .with_teacher("t1", vec!["math".into()])
            .with_classrooms(2);
        let (_, space, constraints) = compiled(&problem);

        for constraint in &constraints {
            assert!(!constraint.vars.is_empty());
            assert!(constraint.vars.iter().all(|&v| v < space.len()));
        }
    }
}
