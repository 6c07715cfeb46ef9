use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type HabitId = u64;

/// A recurring behavior tracked per calendar day.
///
/// `completions` holds the days the habit was marked done, as date-only
/// values serialized `YYYY-MM-DD`. The set form guarantees each day appears
/// at most once, which is what makes the toggle operation an involution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completions: BTreeSet<NaiveDate>,
}

impl Habit {
    /// The UTC calendar day this habit was created on.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Drops completion days outside `[creation day, today]` and returns how
    /// many were removed. Records arriving from storage may carry days
    /// written by older or clock-skewed clients; streak and rate assume the
    /// window holds.
    pub fn retain_window(&mut self, today: NaiveDate) -> usize {
        let created = self.created_on();
        let before = self.completions.len();
        self.completions.retain(|day| *day >= created && *day <= today);
        before - self.completions.len()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
}
