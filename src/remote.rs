use crate::errors::{HabitError, HabitResult};
use crate::metrics;
use crate::models::{CreateHabitRequest, Habit, HabitId};
use crate::storage::{HabitStore, clamp_loaded};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use std::collections::BTreeSet;

/// [`HabitStore`] over the HTTP wire contract.
///
/// Every call crosses the network and can fail on connectivity. The engine
/// re-fetches the full list after each mutation rather than trusting an
/// optimistic patch, so `refetch_after_write` answers true.
pub struct RemoteStore {
    base_url: String,
    client: Client,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl HabitStore for RemoteStore {
    async fn load(&self) -> HabitResult<Vec<Habit>> {
        let response = self
            .client
            .get(self.url("/api/habits"))
            .send()
            .await
            .map_err(HabitError::load)?;
        if !response.status().is_success() {
            return Err(HabitError::Load(format!("list returned {}", response.status())));
        }
        let mut habits: Vec<Habit> = response.json().await.map_err(HabitError::load)?;
        clamp_loaded(&mut habits, metrics::today());
        Ok(habits)
    }

    async fn save(&self, habit: &Habit) -> HabitResult<Habit> {
        let response = self
            .client
            .post(self.url("/api/habits"))
            .json(&CreateHabitRequest {
                name: habit.name.clone(),
            })
            .send()
            .await
            .map_err(HabitError::storage)?;
        if !response.status().is_success() {
            return Err(HabitError::Storage(format!(
                "create returned {}",
                response.status()
            )));
        }
        response.json().await.map_err(HabitError::storage)
    }

    async fn remove(&self, id: HabitId) -> HabitResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/habits/{id}")))
            .send()
            .await
            .map_err(HabitError::storage)?;
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(HabitError::NotFound(id)),
            status => Err(HabitError::Storage(format!("delete returned {status}"))),
        }
    }

    /// The toggle endpoint takes no body: the service flips its own current
    /// day. `day` and `completions` describe the flip the engine performed
    /// locally and are not sent; the follow-up refetch picks up whatever
    /// the service recorded.
    async fn update(
        &self,
        id: HabitId,
        _day: NaiveDate,
        _completions: &BTreeSet<NaiveDate>,
    ) -> HabitResult<()> {
        let response = self
            .client
            .post(self.url(&format!("/api/habits/{id}/toggle")))
            .send()
            .await
            .map_err(HabitError::storage)?;
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(HabitError::NotFound(id)),
            status => Err(HabitError::Storage(format!("toggle returned {status}"))),
        }
    }

    fn refetch_after_write(&self) -> bool {
        true
    }
}
