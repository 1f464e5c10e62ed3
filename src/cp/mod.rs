//! CSP formulation of the timetabling problem.
//!
//! Bridges the domain model to the search engine: builds the decision
//! variable space from a [`Model`], compiles the constraint families over
//! it, runs a [`SearchEngine`], and decodes the satisfying assignment
//! back into a [`Timetable`].
//!
//! # Reference
//! - Rossi, van Beek & Walsh (2006), "Handbook of Constraint Programming"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

mod constraints;
mod variables;

pub use constraints::{compile, Constraint, ConstraintKind};
pub use variables::{SessionVar, VarId, VariableSpace};

use log::{debug, info};

use crate::models::{Model, ScheduledSession, Timetable};
use crate::solver::{SearchEngine, SearchStats, SolverConfig, SolverStatus};

/// Result of solving a timetabling model.
///
/// Infeasibility and timeout are ordinary outcomes, not errors; callers
/// that only care about success branch on [`is_solution_found`](Self::is_solution_found).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Terminal solver status.
    pub status: SolverStatus,
    /// The timetable, present only when feasible.
    pub timetable: Option<Timetable>,
    /// Search statistics.
    pub stats: SearchStats,
}

impl SolveResult {
    /// Whether a feasible timetable was found.
    pub fn is_solution_found(&self) -> bool {
        matches!(self.status, SolverStatus::Feasible)
    }
}

/// Builds and solves the CSP formulation of a timetabling model.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Model, Problem};
/// use u_timetable::cp::TimetableCspBuilder;
/// use u_timetable::solver::SolverConfig;
///
/// let problem = Problem::new()
///     .with_group("g1", vec!["math".into()])
///     .with_teacher("t1", vec!["math".into()])
///     .with_classrooms(1);
/// let model = Model::from_problem(&problem).unwrap();
///
/// let result = TimetableCspBuilder::new(&model).solve(&SolverConfig::default());
/// assert!(result.is_solution_found());
/// ```
pub struct TimetableCspBuilder<'a> {
    model: &'a Model,
}

impl<'a> TimetableCspBuilder<'a> {
    /// Creates a builder over a validated model.
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    /// Builds the variable space and the four constraint families.
    pub fn build(&self) -> (VariableSpace, Vec<Constraint>) {
        let space = VariableSpace::build(self.model);
        let constraints = compile(self.model, &space);
        debug!(
            "compiled {} variables, {} constraints",
            space.len(),
            constraints.len()
        );
        (space, constraints)
    }

    /// Solves the model within the configured budget.
    ///
    /// Each call builds a fresh variable space and engine; nothing is
    /// shared between requests.
    pub fn solve(&self, config: &SolverConfig) -> SolveResult {
        let (space, constraints) = self.build();
        info!(
            "solving timetable: {} groups, {} teachers, {} classrooms, {} variables",
            self.model.groups().len(),
            self.model.teachers().len(),
            self.model.classrooms(),
            space.len()
        );

        let engine = SearchEngine::new(space.len(), &constraints);
        let outcome = engine.run(config);
        let timetable = outcome
            .assignment
            .as_deref()
            .map(|assignment| self.decode_solution(&space, assignment));

        SolveResult {
            status: outcome.status,
            timetable,
            stats: outcome.stats,
        }
    }

    /// Decodes a satisfying assignment into a timetable.
    ///
    /// Reads back every true variable; slot uniqueness per group is
    /// guaranteed by the group at-most-one family.
    fn decode_solution(&self, space: &VariableSpace, assignment: &[bool]) -> Timetable {
        let mut timetable = Timetable::new();
        for (id, var) in space.vars().iter().enumerate() {
            if assignment[id] {
                timetable.add_session(ScheduledSession {
                    group: self.model.groups()[var.group].id.clone(),
                    day: var.slot.day,
                    period: var.slot.period,
                    course: self.model.courses()[var.course].id.clone(),
                    teacher: self.model.teachers()[var.teacher].id.clone(),
                    classroom: var.classroom as u32,
                });
            }
        }
        timetable
    }
}
