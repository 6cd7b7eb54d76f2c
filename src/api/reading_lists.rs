//! Reading list endpoints

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        book::{AddBook, BookRef, UpdateBook},
        reading_list::{CreateReadingList, ReadingListRef, ReadingListsResponse},
    },
};

use super::{Acknowledgement, AuthenticatedUser, MaybeAuthenticated};

/// Create a reading list owned by the caller
#[utoipa::path(
    post,
    path = "/reading_list/create",
    tag = "reading_lists",
    security(("bearer_auth" = []), ("api_key" = [])),
    request_body = CreateReadingList,
    responses(
        (status = 200, description = "Reading list created", body = Acknowledgement),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reading_list(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(data): Json<CreateReadingList>,
) -> AppResult<Json<Acknowledgement>> {
    state
        .services
        .reading_lists
        .create(&identity.into(), &data)
        .await?;
    Ok(Json(Acknowledgement {}))
}

/// Book titles of all public lists, plus the caller's own lists when authenticated
#[utoipa::path(
    get,
    path = "/reading_list/read",
    tag = "reading_lists",
    security((), ("bearer_auth" = []), ("api_key" = [])),
    responses(
        (status = 200, description = "One title sequence per visible list", body = ReadingListsResponse)
    )
)]
pub async fn read_reading_lists(
    State(state): State<crate::AppState>,
    MaybeAuthenticated(requester): MaybeAuthenticated,
) -> AppResult<Json<ReadingListsResponse>> {
    let objects = state.services.reading_lists.list_titles(&requester).await?;
    Ok(Json(ReadingListsResponse { objects }))
}

/// Delete one of the caller's lists together with its books
#[utoipa::path(
    post,
    path = "/reading_list/delete",
    tag = "reading_lists",
    security(("bearer_auth" = []), ("api_key" = [])),
    request_body = ReadingListRef,
    responses(
        (status = 200, description = "Reading list deleted", body = Acknowledgement),
        (status = 400, description = "Bad reading list id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_reading_list(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(data): Json<ReadingListRef>,
) -> AppResult<Json<Acknowledgement>> {
    state
        .services
        .reading_lists
        .delete(&identity.into(), &data)
        .await?;
    Ok(Json(Acknowledgement {}))
}

/// Add a book to one of the caller's lists
#[utoipa::path(
    post,
    path = "/reading_list/add_book",
    tag = "reading_lists",
    security(("bearer_auth" = []), ("api_key" = [])),
    request_body = AddBook,
    responses(
        (status = 200, description = "Book added", body = Acknowledgement),
        (status = 400, description = "Bad reading list id or invalid field", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(data): Json<AddBook>,
) -> AppResult<Json<Acknowledgement>> {
    data.validate()?;
    state
        .services
        .reading_lists
        .add_book(&identity.into(), &data)
        .await?;
    Ok(Json(Acknowledgement {}))
}

/// Replace every field of a book; omitted fields are cleared
#[utoipa::path(
    post,
    path = "/reading_list/update_book",
    tag = "reading_lists",
    security(("bearer_auth" = []), ("api_key" = [])),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Acknowledgement),
        (status = 400, description = "Bad reading list id, bad book id or invalid field", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(data): Json<UpdateBook>,
) -> AppResult<Json<Acknowledgement>> {
    data.validate()?;
    state
        .services
        .reading_lists
        .update_book(&identity.into(), &data)
        .await?;
    Ok(Json(Acknowledgement {}))
}

/// Delete a book from one of the caller's lists
#[utoipa::path(
    post,
    path = "/reading_list/delete_book",
    tag = "reading_lists",
    security(("bearer_auth" = []), ("api_key" = [])),
    request_body = BookRef,
    responses(
        (status = 200, description = "Book deleted", body = Acknowledgement),
        (status = 400, description = "Bad reading list id or bad book id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(data): Json<BookRef>,
) -> AppResult<Json<Acknowledgement>> {
    state
        .services
        .reading_lists
        .delete_book(&identity.into(), &data)
        .await?;
    Ok(Json(Acknowledgement {}))
}
