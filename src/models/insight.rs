use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of insight types the API accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightType {
    SpendingPattern,
    BudgetAlert,
    SavingsGoal,
    CategoryInsight,
}

impl InsightType {
    /// Parse a wire value; anything outside the set is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "spending_pattern" => Some(Self::SpendingPattern),
            "budget_alert" => Some(Self::BudgetAlert),
            "savings_goal" => Some(Self::SavingsGoal),
            "category_insight" => Some(Self::CategoryInsight),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SpendingPattern => "spending_pattern",
            Self::BudgetAlert => "budget_alert",
            Self::SavingsGoal => "savings_goal",
            Self::CategoryInsight => "category_insight",
        }
    }
}

/// A stored, typed note about a user's financial behavior
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Insight {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub insight_type: String,
    pub title: String,
    pub description: String,
    /// Opaque payload attached by whatever produced the insight
    pub data: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a PUT request may change on an existing insight
#[derive(Debug, Clone)]
pub struct InsightUpdate {
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    pub data: String,
}

impl Insight {
    /// Build a new insight with a server-generated id
    pub fn new(
        user_id: Uuid,
        insight_type: InsightType,
        title: String,
        description: String,
        data: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            insight_type: insight_type.as_str().to_string(),
            title,
            description,
            data,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update in place, refreshing `updated_at`
    pub fn apply(&mut self, update: &InsightUpdate) {
        self.insight_type = update.insight_type.as_str().to_string();
        self.title = update.title.clone();
        self.description = update.description.clone();
        self.data = update.data.clone();
        self.updated_at = Utc::now();
    }
}
