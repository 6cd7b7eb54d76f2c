//! Reading list model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Reading list record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ReadingList {
    pub id: i32,
    /// Owning user, never reassigned
    pub owner_id: i32,
    /// Private lists are visible to their owner only
    pub private: bool,
    pub created_at: DateTime<Utc>,
}

/// Create reading list request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateReadingList {
    /// Defaults to true when absent or null
    pub private: Option<bool>,
}

impl CreateReadingList {
    pub fn is_private(&self) -> bool {
        self.private.unwrap_or(true)
    }
}

/// Reference to a reading list in a request body
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReadingListRef {
    pub id: Option<i32>,
}

/// Titles of the books of every list visible to the caller, one sequence per list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadingListsResponse {
    pub objects: Vec<Vec<String>>,
}
