//! Fixed weekly time grid.
//!
//! The scheduling horizon is a single week of 5 teaching days with 4
//! periods each, giving 20 slots. The grid is fixed by the model and
//! never derived from input.

use serde::{Deserialize, Serialize};

/// Number of teaching days per week.
pub const DAYS_PER_WEEK: u8 = 5;

/// Number of periods per teaching day.
pub const PERIODS_PER_DAY: u8 = 4;

/// Total number of weekly slots.
pub const SLOTS_PER_WEEK: usize = DAYS_PER_WEEK as usize * PERIODS_PER_DAY as usize;

/// A (day, period) pair identifying one of the 20 weekly slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Weekday, 0 (Monday) through 4 (Friday).
    pub day: u8,
    /// Period within the day, 0 through 3.
    pub period: u8,
}

impl Slot {
    /// Creates a slot, or `None` if day or period is out of range.
    pub fn new(day: u8, period: u8) -> Option<Self> {
        (day < DAYS_PER_WEEK && period < PERIODS_PER_DAY).then_some(Self { day, period })
    }

    /// Dense index in `0..SLOTS_PER_WEEK`, day-major.
    #[inline]
    pub fn index(&self) -> usize {
        self.day as usize * PERIODS_PER_DAY as usize + self.period as usize
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SLOTS_PER_WEEK).then(|| Self {
            day: (index / PERIODS_PER_DAY as usize) as u8,
            period: (index % PERIODS_PER_DAY as usize) as u8,
        })
    }

    /// Iterates all slots in ascending (day, period) order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..DAYS_PER_WEEK)
            .flat_map(|day| (0..PERIODS_PER_DAY).map(move |period| Slot { day, period }))
    }
}
