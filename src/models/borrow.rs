use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BorrowRecord {
    pub id: i64,
    pub cookbook_id: i64,
    pub friend_name: String,
    pub date_borrowed: String,
    /// Never written by any store operation; stays NULL until a return
    /// flow exists.
    pub return_date: Option<String>,
}
