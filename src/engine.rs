use crate::errors::{HabitError, HabitResult};
use crate::metrics;
use crate::models::{Habit, HabitId};
use crate::storage::HabitStore;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeSet;

/// Session owner of the habit collection.
///
/// Every mutation goes through the backing store before the in-memory view
/// changes, so the two never diverge by more than one round trip. A store
/// that answers `refetch_after_write` (the remote variant) causes a full
/// reload after each mutation; the local variant applies the
/// already-persisted patch directly.
pub struct HabitEngine<S> {
    store: S,
    habits: Vec<Habit>,
}

impl<S: HabitStore> HabitEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            habits: Vec::new(),
        }
    }

    /// The current in-memory view, in insertion order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Reloads the collection from the backing store. On failure the
    /// in-memory view is left untouched: callers surface the error rather
    /// than showing an empty collection for undecodable state.
    pub async fn refresh(&mut self) -> HabitResult<&[Habit]> {
        let habits = self.store.load().await?;
        self.habits = habits;
        Ok(&self.habits)
    }

    /// Creates a habit. The name is validated before any I/O; empty and
    /// whitespace-only names are rejected.
    pub async fn create(&mut self, name: &str) -> HabitResult<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitError::EmptyName);
        }
        let habit = Habit {
            id: self.next_id(),
            name: name.to_string(),
            created_at: Utc::now(),
            completions: BTreeSet::new(),
        };
        let stored = self.store.save(&habit).await?;
        if self.store.refetch_after_write() {
            self.refresh().await?;
        } else {
            self.habits.push(stored.clone());
        }
        Ok(stored)
    }

    /// Removes the habit with the given id from the store and the in-memory
    /// view. There is no soft delete.
    pub async fn delete(&mut self, id: HabitId) -> HabitResult<()> {
        if !self.habits.iter().any(|habit| habit.id == id) {
            return Err(HabitError::NotFound(id));
        }
        self.store.remove(id).await?;
        if self.store.refetch_after_write() {
            self.refresh().await?;
        } else {
            self.habits.retain(|habit| habit.id != id);
        }
        Ok(())
    }

    /// Flips today's completion for the habit. This is the single mutation
    /// primitive for completions; two identical calls cancel out.
    pub async fn toggle(&mut self, id: HabitId) -> HabitResult<Habit> {
        self.toggle_on(id, metrics::today()).await
    }

    /// Flips `day`'s membership in the habit's completion set, persists the
    /// change, and returns the updated record.
    pub async fn toggle_on(&mut self, id: HabitId, day: NaiveDate) -> HabitResult<Habit> {
        let index = self
            .habits
            .iter()
            .position(|habit| habit.id == id)
            .ok_or(HabitError::NotFound(id))?;
        let mut completions = self.habits[index].completions.clone();
        if !completions.remove(&day) {
            completions.insert(day);
        }
        self.store.update(id, day, &completions).await?;
        if self.store.refetch_after_write() {
            self.refresh().await?;
            return self
                .habits
                .iter()
                .find(|habit| habit.id == id)
                .cloned()
                .ok_or(HabitError::NotFound(id));
        }
        self.habits[index].completions = completions;
        Ok(self.habits[index].clone())
    }

    /// Timestamp-derived id, bumped past the current maximum so rapid
    /// creation within one millisecond stays unique.
    fn next_id(&self) -> HabitId {
        let millis = Utc::now().timestamp_millis().max(0) as HabitId;
        let floor = self
            .habits
            .iter()
            .map(|habit| habit.id + 1)
            .max()
            .unwrap_or(0);
        millis.max(floor)
    }
}
