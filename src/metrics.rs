use crate::models::Habit;
use chrono::{Duration, NaiveDate, Utc};

/// The current UTC calendar date. Every ambient-clock read in the crate goes
/// through here; the `_at`/`_on` variants below take the day explicitly.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn streak(habit: &Habit) -> u32 {
    streak_at(today(), habit)
}

/// Number of consecutive completed days ending at `today`. The chain must
/// include `today` itself: a habit last completed yesterday has streak 0 no
/// matter how long the earlier run was.
pub fn streak_at(today: NaiveDate, habit: &Habit) -> u32 {
    let mut run = 0u32;
    let mut day = today;
    while habit.completions.contains(&day) {
        run += 1;
        day = day - Duration::days(1);
    }
    run
}

pub fn completion_rate(habit: &Habit) -> u8 {
    completion_rate_at(today(), habit)
}

/// Percentage of days since creation (inclusive) with a completion, rounded
/// to the nearest integer and clamped to 100.
pub fn completion_rate_at(today: NaiveDate, habit: &Habit) -> u8 {
    let days_tracked = (today - habit.created_on()).num_days().max(0) + 1;
    let rate = habit.completions.len() as f64 * 100.0 / days_tracked as f64;
    rate.round().clamp(0.0, 100.0) as u8
}

pub fn completed_today(habit: &Habit) -> bool {
    completed_on(today(), habit)
}

pub fn completed_on(day: NaiveDate, habit: &Habit) -> bool {
    habit.completions.contains(&day)
}
