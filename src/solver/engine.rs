//! Backtracking search with forward checking.
//!
//! # Algorithm
//!
//! Systematic binary branching over the boolean variable space, guided by
//! the constraint set:
//!
//! 1. Pick the unmet session-count constraint with the fewest free
//!    variables (most-constrained-first) and branch on its lowest-index
//!    free variable, trying `true` before `false`.
//! 2. After every assignment, forward-check each constraint containing the
//!    variable through cardinality counters, applying forced assignments
//!    and failing as soon as a constraint becomes unsatisfiable.
//! 3. On failure, undo the trail to the most recent decision with an
//!    untried branch.
//!
//! The search is complete: it terminates with a satisfying assignment or a
//! proof that none exists, unless the wall-clock budget elapses first. The
//! budget is checked only between decisions, so constraint bookkeeping is
//! never interrupted mid-propagation.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! Ch. 6: Constraint Satisfaction Problems

use std::time::{Duration, Instant};

use log::debug;

use crate::cp::{Constraint, ConstraintKind, VarId};
use crate::solver::config::SolverConfig;
use crate::solver::types::{SearchOutcome, SearchStats, SolverStatus};

/// Index of a constraint in the compiled set.
type ConstraintId = usize;

/// Signals an unsatisfiable constraint during propagation.
struct Conflict;

/// One entry on the decision stack.
#[derive(Debug, Clone, Copy)]
struct Decision {
    /// The branching variable.
    var: VarId,
    /// Trail length before this decision was applied.
    trail_mark: usize,
    /// Whether the `false` branch has been taken.
    tried_false: bool,
}

/// A single-use backtracking engine over a compiled constraint set.
///
/// [`run`](Self::run) consumes the engine: terminal outcomes cannot be
/// re-entered, a fresh engine is required per request.
pub struct SearchEngine<'a> {
    constraints: &'a [Constraint],
    /// Constraints containing each variable.
    var_constraints: Vec<Vec<ConstraintId>>,
    /// Current truth value per variable, `None` while unassigned.
    values: Vec<Option<bool>>,
    /// True-assigned variable count per constraint.
    true_counts: Vec<u32>,
    /// Unassigned variable count per constraint.
    free_counts: Vec<u32>,
    /// Assigned variables in assignment order, for undo.
    trail: Vec<VarId>,
    decisions: Vec<Decision>,
    stats: SearchStats,
}

impl<'a> SearchEngine<'a> {
    /// Creates an engine for `var_count` variables under `constraints`.
    pub fn new(var_count: usize, constraints: &'a [Constraint]) -> Self {
        let mut var_constraints = vec![Vec::new(); var_count];
        let mut free_counts = Vec::with_capacity(constraints.len());
        for (c, constraint) in constraints.iter().enumerate() {
            for &var in &constraint.vars {
                var_constraints[var].push(c);
            }
            free_counts.push(constraint.vars.len() as u32);
        }

        Self {
            constraints,
            var_constraints,
            values: vec![None; var_count],
            true_counts: vec![0; constraints.len()],
            free_counts,
            trail: Vec::new(),
            decisions: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Runs the search to a terminal status within the configured budget.
    pub fn run(mut self, config: &SolverConfig) -> SearchOutcome {
        let started = Instant::now();
        let deadline = started + Duration::from_millis(config.time_limit_ms);

        let status = self.search(deadline);
        self.stats.solve_time_ms = started.elapsed().as_millis() as u64;
        debug!(
            "search {:?}: {} decisions, {} backtracks, {} propagations, {} ms",
            status,
            self.stats.decisions,
            self.stats.backtracks,
            self.stats.propagations,
            self.stats.solve_time_ms
        );

        let assignment = (status == SolverStatus::Feasible)
            .then(|| self.values.iter().map(|v| v == &Some(true)).collect());
        SearchOutcome {
            status,
            assignment,
            stats: self.stats,
        }
    }

    fn search(&mut self, deadline: Instant) -> SolverStatus {
        // Root check: a session-count constraint over fewer variables than
        // it requires can never be met.
        for (c, constraint) in self.constraints.iter().enumerate() {
            if let ConstraintKind::ExactlyN(n) = constraint.kind {
                if self.free_counts[c] < n {
                    return SolverStatus::Infeasible;
                }
            }
        }

        loop {
            if Instant::now() >= deadline {
                return SolverStatus::Timeout;
            }
            match self.select_branch_variable() {
                None => {
                    self.finish_assignment();
                    return SolverStatus::Feasible;
                }
                Some(var) => {
                    self.stats.decisions += 1;
                    self.decisions.push(Decision {
                        var,
                        trail_mark: self.trail.len(),
                        tried_false: false,
                    });
                    if self.propagate(var, true).is_err() && !self.backtrack() {
                        return SolverStatus::Infeasible;
                    }
                }
            }
        }
    }

    /// Chooses the next branching variable: the lowest-index free variable
    /// of the unmet session-count constraint with the fewest free
    /// variables, ties broken by constraint order. `None` once every
    /// session-count constraint is met.
    fn select_branch_variable(&self) -> Option<VarId> {
        let mut best: Option<(u32, ConstraintId)> = None;
        for (c, constraint) in self.constraints.iter().enumerate() {
            let ConstraintKind::ExactlyN(n) = constraint.kind else {
                continue;
            };
            if self.true_counts[c] >= n {
                continue;
            }
            let free = self.free_counts[c];
            if best.map_or(true, |(best_free, _)| free < best_free) {
                best = Some((free, c));
            }
        }
        let (_, c) = best?;
        // An unmet constraint always has a free variable: propagation
        // fails it the moment its options run out.
        self.constraints[c]
            .vars
            .iter()
            .copied()
            .find(|&var| self.values[var].is_none())
    }

    /// Assigns all remaining free variables false once every session-count
    /// constraint is met.
    fn finish_assignment(&mut self) {
        for var in 0..self.values.len() {
            if self.values[var].is_none() {
                // Cannot conflict: false never violates an at-most-one,
                // and every session-count constraint is already met.
                let forced = self.propagate(var, false);
                debug_assert!(forced.is_ok());
            }
        }
    }

    /// Assigns `var := value` and forward-checks every affected
    /// constraint, applying forced consequences transitively. On conflict
    /// the partial propagation stays on the trail for the caller to undo.
    fn propagate(&mut self, var: VarId, value: bool) -> Result<(), Conflict> {
        let constraints = self.constraints;
        let mut pending = vec![(var, value)];

        while let Some((var, value)) = pending.pop() {
            match self.values[var] {
                Some(existing) if existing == value => continue,
                Some(_) => return Err(Conflict),
                None => {}
            }
            self.values[var] = Some(value);
            self.trail.push(var);
            self.stats.propagations += 1;

            let mut conflict = false;
            for index in 0..self.var_constraints[var].len() {
                let c = self.var_constraints[var][index];
                self.free_counts[c] -= 1;
                if value {
                    self.true_counts[c] += 1;
                }
                if conflict {
                    // Counter updates must complete for every constraint
                    // of the variable, or undo would desynchronize them.
                    continue;
                }
                let trues = self.true_counts[c];
                let frees = self.free_counts[c];

                match constraints[c].kind {
                    ConstraintKind::AtMostOne => {
                        if trues > 1 {
                            conflict = true;
                        } else if value && frees > 0 {
                            // Saturated: every other option is off.
                            for &other in &constraints[c].vars {
                                if self.values[other].is_none() {
                                    pending.push((other, false));
                                }
                            }
                        }
                    }
                    ConstraintKind::ExactlyN(n) => {
                        if trues > n || trues + frees < n {
                            conflict = true;
                        } else if frees > 0 && trues == n {
                            for &other in &constraints[c].vars {
                                if self.values[other].is_none() {
                                    pending.push((other, false));
                                }
                            }
                        } else if frees > 0 && trues + frees == n {
                            for &other in &constraints[c].vars {
                                if self.values[other].is_none() {
                                    pending.push((other, true));
                                }
                            }
                        }
                    }
                }
            }
            if conflict {
                return Err(Conflict);
            }
        }
        Ok(())
    }

    /// Undoes decisions until one admits an untried `false` branch and
    /// that branch propagates cleanly. Returns `false` when the stack is
    /// exhausted, i.e. the search space holds no satisfying assignment.
    fn backtrack(&mut self) -> bool {
        while let Some(mut decision) = self.decisions.pop() {
            self.stats.backtracks += 1;
            self.undo_to(decision.trail_mark);
            if decision.tried_false {
                continue;
            }
            decision.tried_false = true;
            self.decisions.push(decision);
            if self.propagate(decision.var, false).is_ok() {
                return true;
            }
            // The false branch failed too; the next iteration pops this
            // decision again and keeps unwinding.
        }
        false
    }

    /// Pops the trail back to `mark`, reversing counter updates.
    fn undo_to(&mut self, mark: usize) {
        while self.trail.len() > mark {
            let Some(var) = self.trail.pop() else {
                break;
            };
            let value = self.values[var].take();
            for index in 0..self.var_constraints[var].len() {
                let c = self.var_constraints[var][index];
                self.free_counts[c] += 1;
                if value == Some(true) {
                    self.true_counts[c] -= 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cp::Constraint;

    fn run(var_count: usize, constraints: &[Constraint]) -> SearchOutcome {
        SearchEngine::new(var_count, constraints).run(&SolverConfig::default())
    }

    #[test]
    fn test_trivial_feasible() {
        let constraints = vec![
            Constraint::exactly(1, vec![0, 1]),
            Constraint::at_most_one(vec![0, 1]),
        ];
        let outcome = run(2, &constraints);

        assert_eq!(outcome.status, SolverStatus::Feasible);
        // Deterministic: the first variable is tried true first.
        assert_eq!(outcome.assignment, Some(vec![true, false]));
    }

    #[test]
    fn test_pigeonhole_infeasible() {
        // Two sessions demanded, but the two variables exclude each other.
        let constraints = vec![
            Constraint::exactly(2, vec![0, 1]),
            Constraint::at_most_one(vec![0, 1]),
        ];
        let outcome = run(2, &constraints);

        assert_eq!(outcome.status, SolverStatus::Infeasible);
        assert!(outcome.assignment.is_none());
    }

    #[test]
    fn test_too_few_variables_infeasible() {
        let constraints = vec![Constraint::exactly(3, vec![0, 1])];
        let outcome = run(2, &constraints);

        assert_eq!(outcome.status, SolverStatus::Infeasible);
    }

    #[test]
    fn test_backtracking_recovers() {
        // The first branch (var 0 true) saturates the at-most-one and
        // starves the second exactly-1; only the false branch works.
        let constraints = vec![
            Constraint::exactly(1, vec![0, 1]),
            Constraint::exactly(1, vec![2, 3]),
            Constraint::at_most_one(vec![0, 2, 3]),
        ];
        let outcome = run(4, &constraints);

        assert_eq!(outcome.status, SolverStatus::Feasible);
        assert_eq!(outcome.assignment, Some(vec![false, true, true, false]));
        assert!(outcome.stats.backtracks >= 1);
    }

    #[test]
    fn test_unconstrained_vars_default_false() {
        let constraints = vec![Constraint::exactly(1, vec![0])];
        let outcome = run(3, &constraints);

        assert_eq!(outcome.status, SolverStatus::Feasible);
        assert_eq!(outcome.assignment, Some(vec![true, false, false]));
    }

    #[test]
    fn test_zero_budget_times_out() {
        let constraints = vec![Constraint::exactly(1, vec![0, 1])];
        let outcome =
            SearchEngine::new(2, &constraints).run(&SolverConfig::new().with_time_limit_ms(0));

        assert_eq!(outcome.status, SolverStatus::Timeout);
        assert!(outcome.assignment.is_none());
    }

    #[test]
    fn test_empty_problem_feasible() {
        let outcome = run(0, &[]);
        assert_eq!(outcome.status, SolverStatus::Feasible);
        assert_eq!(outcome.assignment, Some(vec![]));
    }

    #[test]
    fn test_determinism() {
        let constraints = vec![
            Constraint::exactly(2, vec![0, 1, 2, 3]),
            Constraint::at_most_one(vec![0, 2]),
            Constraint::at_most_one(vec![1, 3]),
        ];
        let first = run(4, &constraints);
        let second = run(4, &constraints);

        assert_eq!(first.status, SolverStatus::Feasible);
        assert_eq!(first.assignment, second.assignment);
    }

    #[test]
    fn test_stats_populated() {
        let constraints = vec![
            Constraint::exactly(1, vec![0, 1]),
            Constraint::at_most_one(vec![0, 1]),
        ];
        let outcome = run(2, &constraints);

        assert!(outcome.stats.decisions >= 1);
        assert!(outcome.stats.propagations >= 2);
    }
}
