//! Storage layer: the [`Store`] capability trait and its implementations

pub mod memory;
pub mod pool;
pub mod postgres;

pub use memory::MemoryStore;
pub use pool::create_pool;
pub use postgres::PgStore;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Insight, InsightUpdate, Transaction, User};

/// Persistence operations the handlers depend on
///
/// Implementations report facts (`Option` for lookups, `bool` for deletes);
/// mapping absence to an HTTP status is the caller's job.
#[async_trait]
pub trait Store: Send + Sync {
    // === Users ===

    /// Insert a new user row
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Look up a user by id
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    // === Insights ===

    /// Insert a new insight row
    async fn create_insight(&self, insight: &Insight) -> Result<()>;

    /// Look up an insight by id
    async fn get_insight(&self, id: Uuid) -> Result<Option<Insight>>;

    /// All insights owned by the user, newest first
    async fn get_user_insights(&self, user_id: Uuid) -> Result<Vec<Insight>>;

    /// Apply an update to an existing insight; `None` when the row is absent
    async fn update_insight(&self, id: Uuid, update: &InsightUpdate) -> Result<Option<Insight>>;

    /// Remove an insight; `false` when the row was absent
    async fn delete_insight(&self, id: Uuid) -> Result<bool>;

    // === Transactions ===

    /// Insert one imported transaction row
    async fn create_transaction(&self, transaction: &Transaction) -> Result<()>;

    // === Cost of living ===

    /// Insert or overwrite the price snapshot for a city
    async fn upsert_cost_of_living(&self, city: &str, prices: &Value) -> Result<()>;
}
