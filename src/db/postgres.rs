use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use super::Store;
use crate::error::Result;
use crate::models::{Insight, InsightUpdate, Transaction, User};

/// PostgreSQL-backed store
///
/// Queries use runtime binding; the compile-time checked macros need a live
/// database at build time.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, user: &User) -> Result<()> {
        sqlx::query(
            "INSERT INTO users (id, email, name, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, created_at, updated_at
             FROM users
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_insight(&self, insight: &Insight) -> Result<()> {
        sqlx::query(
            "INSERT INTO insights (id, user_id, type, title, description, data, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(insight.id)
        .bind(insight.user_id)
        .bind(&insight.insight_type)
        .bind(&insight.title)
        .bind(&insight.description)
        .bind(&insight.data)
        .bind(insight.created_at)
        .bind(insight.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_insight(&self, id: Uuid) -> Result<Option<Insight>> {
        let insight = sqlx::query_as::<_, Insight>(
            "SELECT id, user_id, type, title, description, data, created_at, updated_at
             FROM insights
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(insight)
    }

    async fn get_user_insights(&self, user_id: Uuid) -> Result<Vec<Insight>> {
        let insights = sqlx::query_as::<_, Insight>(
            "SELECT id, user_id, type, title, description, data, created_at, updated_at
             FROM insights
             WHERE user_id = $1
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(insights)
    }

    async fn update_insight(&self, id: Uuid, update: &InsightUpdate) -> Result<Option<Insight>> {
        let insight = sqlx::query_as::<_, Insight>(
            "UPDATE insights
             SET type = $1, title = $2, description = $3, data = $4, updated_at = $5
             WHERE id = $6
             RETURNING id, user_id, type, title, description, data, created_at, updated_at",
        )
        .bind(update.insight_type.as_str())
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.data)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(insight)
    }

    async fn delete_insight(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM insights WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_transaction(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            "INSERT INTO transactions (id, user_id, amount, category, description, date, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(transaction.id)
        .bind(transaction.user_id)
        .bind(transaction.amount)
        .bind(&transaction.category)
        .bind(&transaction.description)
        .bind(transaction.date)
        .bind(transaction.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn upsert_cost_of_living(&self, city: &str, prices: &Value) -> Result<()> {
        sqlx::query(
            "INSERT INTO cost_of_living (city, prices, fetched_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (city)
             DO UPDATE SET prices = EXCLUDED.prices, fetched_at = EXCLUDED.fetched_at",
        )
        .bind(city)
        .bind(prices)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
