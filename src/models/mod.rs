//! Timetabling domain models.
//!
//! Core data types for representing timetabling problems and solutions:
//! the raw request shape ([`Problem`]), the validated and interned
//! instance ([`Model`]), the fixed weekly grid ([`Slot`]), and the
//! solution ([`Timetable`]).

mod model;
mod problem;
pub mod slot;
mod timetable;

pub use model::{Course, Group, Model, Teacher};
pub use problem::{Problem, DEFAULT_SESSIONS_PER_WEEK};
pub use slot::{Slot, DAYS_PER_WEEK, PERIODS_PER_DAY, SLOTS_PER_WEEK};
pub use timetable::{ScheduledSession, Timetable};
