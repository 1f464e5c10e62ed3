//! Timetable (solution) model.
//!
//! A timetable is a complete weekly assignment of sessions to groups:
//! for every (group, day, period) at most one (course, teacher, classroom)
//! triple. Slots without a session are simply absent.

use serde::{Deserialize, Serialize};

use crate::models::slot::{DAYS_PER_WEEK, PERIODS_PER_DAY};

/// One scheduled session: a group attends a course taught by a teacher
/// in a classroom during a specific slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// Attending group.
    pub group: String,
    /// Weekday, 0 through 4.
    pub day: u8,
    /// Period within the day, 0 through 3.
    pub period: u8,
    /// Course taught.
    pub course: String,
    /// Assigned teacher.
    pub teacher: String,
    /// Assigned classroom index.
    pub classroom: u32,
}

/// A complete weekly timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Scheduled sessions; at most one per (group, day, period).
    pub sessions: Vec<ScheduledSession>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a session.
    pub fn add_session(&mut self, session: ScheduledSession) {
        self.sessions.push(session);
    }

    /// The session a group attends in a slot, if any.
    pub fn session_at(&self, group: &str, day: u8, period: u8) -> Option<&ScheduledSession> {
        self.sessions
            .iter()
            .find(|s| s.group == group && s.day == day && s.period == period)
    }

    /// All sessions for a group.
    pub fn sessions_for_group(&self, group: &str) -> Vec<&ScheduledSession> {
        self.sessions.iter().filter(|s| s.group == group).collect()
    }

    /// All sessions taught by a teacher.
    pub fn sessions_for_teacher(&self, teacher: &str) -> Vec<&ScheduledSession> {
        self.sessions.iter().filter(|s| s.teacher == teacher).collect()
    }

    /// All sessions held in a classroom.
    pub fn sessions_for_classroom(&self, classroom: u32) -> Vec<&ScheduledSession> {
        self.sessions
            .iter()
            .filter(|s| s.classroom == classroom)
            .collect()
    }

    /// Number of scheduled sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Renders a group's week as a day → period grid.
    pub fn grid(&self, group: &str) -> Vec<Vec<Option<&ScheduledSession>>> {
        (0..DAYS_PER_WEEK)
            .map(|day| {
                (0..PERIODS_PER_DAY)
                    .map(|period| self.session_at(group, day, period))
                    .collect()
            })
            .collect()
    }
}
