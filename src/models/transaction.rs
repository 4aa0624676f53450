use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One financial transaction imported from the banking aggregator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Stored as a magnitude; the source amount's sign encodes direction and
    /// is discarded on import
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a local row from an aggregator transaction, normalizing the
    /// amount to a non-negative magnitude
    pub fn imported(
        user_id: Uuid,
        amount: f64,
        category: String,
        description: String,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount: amount.abs(),
            category,
            description,
            date,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
    }

    #[test]
    fn test_imported_flips_negative_amounts() {
        let tx = Transaction::imported(
            Uuid::new_v4(),
            -42.17,
            "Food and Drink".to_string(),
            "COFFEE SHOP".to_string(),
            sample_date(),
        );

        assert_eq!(tx.amount, 42.17);
    }

    #[test]
    fn test_imported_keeps_positive_amounts() {
        let tx = Transaction::imported(
            Uuid::new_v4(),
            19.99,
            "Travel".to_string(),
            "TRAIN TICKET".to_string(),
            sample_date(),
        );

        assert_eq!(tx.amount, 19.99);
        assert_eq!(tx.category, "Travel");
        assert_eq!(tx.date, sample_date());
    }
}
