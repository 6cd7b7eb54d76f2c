//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record, always attached to one reading list
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub reading_list_id: i32,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub cover_url: Option<String>,
    pub summary: Option<String>,
}

/// The six bibliographic fields of a book.
///
/// Omitted fields deserialize to `None` and are stored as NULL, both on
/// creation and on update, which replaces the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookFields {
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    #[validate(url)]
    pub cover_url: Option<String>,
    pub summary: Option<String>,
}

/// Add book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddBook {
    /// Reading list id
    pub id: Option<i32>,
    #[serde(flatten)]
    #[validate(nested)]
    pub fields: BookFields,
}

/// Update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    /// Reading list id
    pub id: Option<i32>,
    pub book_id: Option<i32>,
    #[serde(flatten)]
    #[validate(nested)]
    pub fields: BookFields,
}

/// Delete book request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BookRef {
    /// Reading list id
    pub id: Option<i32>,
    pub book_id: Option<i32>,
}
