//! Business logic services

pub mod reading_lists;
pub mod users;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub reading_lists: reading_lists::ReadingListsService,
    pub users: users::UsersService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            reading_lists: reading_lists::ReadingListsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn ready(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
