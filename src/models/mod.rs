pub mod cost_of_living;
pub mod insight;
pub mod transaction;
pub mod user;

pub use cost_of_living::CostOfLiving;
pub use insight::{Insight, InsightType, InsightUpdate};
pub use transaction::Transaction;
pub use user::User;
