//! University course timetabling engine.
//!
//! Assigns, for every (student group, weekday, period), a (course,
//! teacher, classroom) triple such that the weekly timetable satisfies
//! all hard constraints: exact session counts per course, no
//! double-booked teachers, classrooms, or groups, and teacher/course
//! eligibility. Feasibility only — there is no objective function.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Problem`, `Model`, `Slot`, `Timetable`
//! - **`validation`**: Structural input checks, `MalformedInputError`
//! - **`cp`**: CSP formulation — variable space, constraint compilation,
//!   solution decoding
//! - **`solver`**: Complete backtracking search with forward checking
//!
//! # Architecture
//!
//! A request flows one way: a raw [`Problem`] is validated and interned
//! into a [`Model`], the model is compiled into boolean session variables
//! and cardinality constraints, the search engine finds a satisfying
//! assignment (or proves there is none, or runs out of budget), and the
//! assignment is decoded into a [`Timetable`]. Every request owns its
//! model, variable space, and engine; nothing is shared or reused.
//!
//! # Example
//!
//! ```
//! use u_timetable::{solve, Problem, SolverConfig};
//!
//! let problem = Problem::new()
//!     .with_group("g1", vec!["math".into(), "art".into()])
//!     .with_teacher("t1", vec!["math".into(), "art".into()])
//!     .with_classrooms(1);
//!
//! let result = solve(&problem, &SolverConfig::default()).unwrap();
//! assert!(result.is_solution_found());
//! assert_eq!(result.timetable.unwrap().session_count(), 4);
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6: Constraint Satisfaction Problems

pub mod cp;
pub mod models;
pub mod solver;
pub mod validation;

pub use cp::{SolveResult, TimetableCspBuilder};
pub use models::{Model, Problem, ScheduledSession, Slot, Timetable};
pub use solver::{SearchStats, SolverConfig, SolverStatus};
pub use validation::{MalformedInputError, ValidationError};

/// Solves a timetabling problem end to end.
///
/// Validates and interns the problem, compiles the CSP, and runs the
/// search within the configured budget. Infeasibility and timeout are
/// reported through [`SolveResult::status`], not as errors; the only
/// error is a structurally malformed problem, raised before any search
/// starts.
pub fn solve(problem: &Problem, config: &SolverConfig) -> Result<SolveResult, MalformedInputError> {
    let model = Model::from_problem(problem)?;
    Ok(TimetableCspBuilder::new(&model).solve(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_end_to_end() {
        let problem = Problem::new()
            .with_group("g1", vec!["math".into()])
            .with_teacher("t1", vec!["math".into()])
            .with_classrooms(1);

        let result = solve(&problem, &SolverConfig::default()).unwrap();
        assert_eq!(result.status, SolverStatus::Feasible);
        assert_eq!(result.timetable.unwrap().session_count(), 2);
    }

    #[test]
    fn test_solve_rejects_malformed_before_search() {
        let problem = Problem::new();

        let err = solve(&problem, &SolverConfig::default()).unwrap_err();
        assert!(!err.errors.is_empty());
    }

    #[test]
    fn test_solve_reports_infeasible_as_result() {
        let problem = Problem::new()
            .with_group("g1", vec!["math".into()])
            .with_teacher("t1", vec!["math".into()])
            .with_classrooms(1)
            .with_course_sessions("math", 21);

        let result = solve(&problem, &SolverConfig::default()).unwrap();
        assert_eq!(result.status, SolverStatus::Infeasible);
        assert!(result.timetable.is_none());
    }
}
