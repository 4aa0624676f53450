use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::Store;
use crate::error::Result;
use crate::models::{CostOfLiving, Insight, InsightUpdate, Transaction, User};

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    insights: HashMap<Uuid, Insight>,
    transactions: Vec<Transaction>,
    cost_of_living: HashMap<String, CostOfLiving>,
}

/// In-memory store used as a test double
///
/// One lock covers every map: individual calls are atomic, sequences of calls
/// are not.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the transactions persisted for one user
    pub async fn transactions_for(&self, user_id: Uuid) -> Vec<Transaction> {
        let inner = self.inner.lock().await;
        inner
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Snapshot of the stored price document for one city
    pub async fn cost_of_living_for(&self, city: &str) -> Option<CostOfLiving> {
        let inner = self.inner.lock().await;
        inner.cost_of_living.get(city).cloned()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, user: &User) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let inner = self.inner.lock().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn create_insight(&self, insight: &Insight) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.insights.insert(insight.id, insight.clone());
        Ok(())
    }

    async fn get_insight(&self, id: Uuid) -> Result<Option<Insight>> {
        let inner = self.inner.lock().await;
        Ok(inner.insights.get(&id).cloned())
    }

    async fn get_user_insights(&self, user_id: Uuid) -> Result<Vec<Insight>> {
        let inner = self.inner.lock().await;
        let mut insights: Vec<Insight> = inner
            .insights
            .values()
            .filter(|insight| insight.user_id == user_id)
            .cloned()
            .collect();
        insights.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(insights)
    }

    async fn update_insight(&self, id: Uuid, update: &InsightUpdate) -> Result<Option<Insight>> {
        let mut inner = self.inner.lock().await;
        Ok(inner.insights.get_mut(&id).map(|insight| {
            insight.apply(update);
            insight.clone()
        }))
    }

    async fn delete_insight(&self, id: Uuid) -> Result<bool> {
        let mut inner = self.inner.lock().await;
        Ok(inner.insights.remove(&id).is_some())
    }

    async fn create_transaction(&self, transaction: &Transaction) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.transactions.push(transaction.clone());
        Ok(())
    }

    async fn upsert_cost_of_living(&self, city: &str, prices: &Value) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.cost_of_living.insert(
            city.to_string(),
            CostOfLiving {
                city: city.to_string(),
                prices: prices.clone(),
                fetched_at: Utc::now(),
            },
        );
        Ok(())
    }
}
