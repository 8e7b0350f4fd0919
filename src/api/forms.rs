//! Browser form endpoints (urlencoded bodies).

use axum::{extract::rejection::FormRejection, Form};
use serde::Serialize;

use super::{success, ApiResult};
use crate::forms::{BookmarkForm, FieldMeta, FormData, HomeForm, SearchBookmarksForm};

/// Initial state of the search form with its field help texts.
#[derive(Debug, Serialize)]
pub struct SearchFormSchema {
    pub fields: &'static [FieldMeta],
    pub defaults: SearchBookmarksForm,
}

/// GET /api/forms/search - Describe the search form.
pub async fn describe_search_form() -> ApiResult<SearchFormSchema> {
    success(SearchFormSchema {
        fields: SearchBookmarksForm::fields(),
        defaults: SearchBookmarksForm::default(),
    })
}

/// POST /api/forms/search - Read submitted search criteria.
pub async fn submit_search_form(
    payload: Result<Form<FormData>, FormRejection>,
) -> ApiResult<SearchBookmarksForm> {
    let Form(data) = payload?;
    success(SearchBookmarksForm::from_form(&data))
}

/// POST /api/forms/home - Read the landing page search form.
pub async fn submit_home_form(
    payload: Result<Form<FormData>, FormRejection>,
) -> ApiResult<HomeForm> {
    let Form(data) = payload?;
    success(HomeForm::from_form(&data))
}

/// GET /api/forms/bookmark - Describe the bookmark form.
pub async fn describe_bookmark_form() -> ApiResult<&'static [FieldMeta]> {
    success(BookmarkForm::fields())
}

/// POST /api/forms/bookmark - Validate a bookmark entered in the browser.
pub async fn submit_bookmark_form(
    payload: Result<Form<FormData>, FormRejection>,
) -> ApiResult<BookmarkForm> {
    let Form(data) = payload?;
    let form = BookmarkForm::from_form(&data)?;
    tracing::debug!(fetch = form.fetch, "Bookmark form accepted");
    success(form)
}
