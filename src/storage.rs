use crate::errors::{HabitError, HabitResult};
use crate::metrics;
use crate::models::{Habit, HabitId};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::warn;

/// Durable storage for the habit collection.
///
/// Two implementations exist: [`LocalStore`] keeps the full array in one
/// JSON file slot, [`crate::remote::RemoteStore`] speaks the HTTP wire
/// contract. The engine drives both through the same four calls.
#[async_trait]
pub trait HabitStore: Send + Sync {
    /// Reads the full collection. A store that does not exist yet is the
    /// empty collection; a store that exists but cannot be decoded is an
    /// error, never empty.
    async fn load(&self) -> HabitResult<Vec<Habit>>;

    /// Persists a newly created habit and returns the stored record. The
    /// returned record is authoritative: a remote backend assigns its own
    /// id and creation instant.
    async fn save(&self, habit: &Habit) -> HabitResult<Habit>;

    /// Removes the habit with the given id.
    async fn remove(&self, id: HabitId) -> HabitResult<()>;

    /// Records that `day` was flipped in the habit's completion set and
    /// that the set now equals `completions`. The local slot serializes the
    /// set; the remote service is told to flip its own current day.
    async fn update(
        &self,
        id: HabitId,
        day: NaiveDate,
        completions: &BTreeSet<NaiveDate>,
    ) -> HabitResult<()>;

    /// Whether the engine should reload the full collection after a
    /// mutation instead of trusting its in-memory patch.
    fn refetch_after_write(&self) -> bool {
        false
    }
}

/// Clamp applied to every record crossing the persistence boundary:
/// completion days outside `[creation day, today]` are discarded.
pub(crate) fn clamp_loaded(habits: &mut [Habit], today: NaiveDate) {
    for habit in habits {
        let dropped = habit.retain_window(today);
        if dropped > 0 {
            warn!(
                "dropped {dropped} out-of-range completion day(s) for habit {}",
                habit.id
            );
        }
    }
}

/// Same-device durable slot: the whole habit array serialized into one JSON
/// file. Operations never cross the network; failures are quota or
/// serialization problems.
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> HabitResult<Vec<Habit>> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(HabitError::load),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(HabitError::load(err)),
        }
    }

    async fn write_all(&self, habits: &[Habit]) -> HabitResult<()> {
        let payload = serde_json::to_vec_pretty(habits).map_err(HabitError::storage)?;
        fs::write(&self.path, payload).await.map_err(HabitError::storage)?;
        Ok(())
    }
}

#[async_trait]
impl HabitStore for LocalStore {
    async fn load(&self) -> HabitResult<Vec<Habit>> {
        let mut habits = self.read_all().await?;
        clamp_loaded(&mut habits, metrics::today());
        Ok(habits)
    }

    async fn save(&self, habit: &Habit) -> HabitResult<Habit> {
        let mut habits = self.read_all().await?;
        habits.push(habit.clone());
        self.write_all(&habits).await?;
        Ok(habit.clone())
    }

    async fn remove(&self, id: HabitId) -> HabitResult<()> {
        let mut habits = self.read_all().await?;
        let before = habits.len();
        habits.retain(|habit| habit.id != id);
        if habits.len() == before {
            return Err(HabitError::NotFound(id));
        }
        self.write_all(&habits).await
    }

    async fn update(
        &self,
        id: HabitId,
        _day: NaiveDate,
        completions: &BTreeSet<NaiveDate>,
    ) -> HabitResult<()> {
        let mut habits = self.read_all().await?;
        let habit = habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or(HabitError::NotFound(id))?;
        habit.completions = completions.clone();
        self.write_all(&habits).await
    }
}

pub fn resolve_data_path() -> PathBuf {
    env::var("APP_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/habits.json"))
}
