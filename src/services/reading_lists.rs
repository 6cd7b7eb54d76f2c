//! Reading list and book service
//!
//! Every mutation resolves the referenced list first and lets the access
//! layer decide; book references are only checked once the list is known
//! to belong to the caller.

use std::collections::HashMap;

use crate::{
    access::{Operation, Requester},
    error::{AppError, AppResult, RejectReason},
    models::{
        book::{AddBook, BookRef, UpdateBook},
        reading_list::{CreateReadingList, ReadingListRef},
        Book, ReadingList,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ReadingListsService {
    repository: Repository,
}

impl ReadingListsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, requester: &Requester, data: &CreateReadingList) -> AppResult<ReadingList> {
        let identity = requester.require_authenticated()?;
        let list = self
            .repository
            .reading_lists_create(identity.user_id, data.is_private())
            .await?;
        tracing::info!(user_id = identity.user_id, reading_list_id = list.id, private = list.private, "Reading list created");
        Ok(list)
    }

    /// Book titles of every list the requester may read, one sequence per list
    pub async fn list_titles(&self, requester: &Requester) -> AppResult<Vec<Vec<String>>> {
        let lists: Vec<ReadingList> = self
            .repository
            .reading_lists_visible_to(requester.user_id())
            .await?
            .into_iter()
            .filter(|list| requester.authorize(list, Operation::Read).is_permitted())
            .collect();

        let ids: Vec<i32> = lists.iter().map(|list| list.id).collect();
        let titles = self.repository.books_titles_for_lists(&ids).await?;
        Ok(group_titles(&lists, titles))
    }

    pub async fn delete(&self, requester: &Requester, data: &ReadingListRef) -> AppResult<()> {
        let list = self.owned_list(requester, data.id).await?;
        let books = self.repository.reading_lists_delete(list.id, list.owner_id).await?;
        tracing::info!(user_id = list.owner_id, reading_list_id = list.id, books, "Reading list deleted");
        Ok(())
    }

    pub async fn add_book(&self, requester: &Requester, data: &AddBook) -> AppResult<Book> {
        let list = self.owned_list(requester, data.id).await?;
        let book = self.repository.books_create(list.id, &data.fields).await?;
        tracing::info!(user_id = list.owner_id, reading_list_id = list.id, book_id = book.id, "Book added");
        Ok(book)
    }

    /// Replace every field of the book, omitted ones are cleared
    pub async fn update_book(&self, requester: &Requester, data: &UpdateBook) -> AppResult<Book> {
        let list = self.owned_list(requester, data.id).await?;
        let book = self.book_in_list(&list, data.book_id).await?;
        let book = self
            .repository
            .books_replace(list.id, book.id, &data.fields)
            .await?
            .ok_or(AppError::BadBookId(RejectReason::Missing))?;
        tracing::info!(user_id = list.owner_id, reading_list_id = list.id, book_id = book.id, "Book updated");
        Ok(book)
    }

    pub async fn delete_book(&self, requester: &Requester, data: &BookRef) -> AppResult<()> {
        let list = self.owned_list(requester, data.id).await?;
        let book = self.book_in_list(&list, data.book_id).await?;
        if !self.repository.books_delete(list.id, book.id).await? {
            return Err(AppError::BadBookId(RejectReason::Missing));
        }
        tracing::info!(user_id = list.owner_id, reading_list_id = list.id, book_id = book.id, "Book deleted");
        Ok(())
    }

    /// List `id` if the requester owns it
    async fn owned_list(&self, requester: &Requester, id: Option<i32>) -> AppResult<ReadingList> {
        requester.require_authenticated()?;
        let list = match id {
            Some(id) => self.repository.reading_lists_get(id).await?,
            None => None,
        };
        requester.require_mutable(list)
    }

    async fn book_in_list(&self, list: &ReadingList, book_id: Option<i32>) -> AppResult<Book> {
        let book = match book_id {
            Some(id) => self.repository.books_get(id).await?,
            None => None,
        };
        check_book_in_list(list, book)
    }
}

fn check_book_in_list(list: &ReadingList, book: Option<Book>) -> AppResult<Book> {
    match book {
        None => Err(AppError::BadBookId(RejectReason::Missing)),
        Some(book) if book.reading_list_id != list.id => Err(AppError::BadBookId(RejectReason::NotOwner)),
        Some(book) => Ok(book),
    }
}

/// Group `(reading_list_id, title)` rows into one title sequence per list,
/// following the order of `lists`. Lists without books give an empty sequence.
fn group_titles(lists: &[ReadingList], rows: Vec<(i32, Option<String>)>) -> Vec<Vec<String>> {
    let mut by_list: HashMap<i32, Vec<String>> = HashMap::new();
    for (list_id, title) in rows {
        by_list.entry(list_id).or_default().push(title.unwrap_or_default());
    }
    lists
        .iter()
        .map(|list| by_list.remove(&list.id).unwrap_or_default())
        .collect()
}
