//! Handlers for the `/persons` resource.
//!
//! Request decoding and validation of ids, pagination and filters happen
//! here; everything else is delegated to [`PersonService`](crate::services::PersonService).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use persons_core::types::DbId;
use persons_db::models::person::{CreatePerson, PatchPerson, UpdatePerson};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PersonListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/persons
///
/// Create a person; age, gender and nationality are filled in from the
/// predictors where they answer.
pub async fn create_person(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePerson>,
) -> AppResult<impl IntoResponse> {
    let person = state.persons.create_person(input).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /api/v1/persons
///
/// Paginated list with optional `name`, `surname`, `age`, `gender` and
/// `nationality` filters.
pub async fn list_persons(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PersonListParams>,
) -> AppResult<impl IntoResponse> {
    let (page, limit) = params.pagination()?;
    let filter = params.filter()?;

    let persons = state.persons.list_persons(page, limit, &filter).await?;
    Ok(Json(persons))
}

/// GET /api/v1/persons/{id}
pub async fn get_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let person = state.persons.get_person(id).await?;
    Ok(Json(person))
}

/// PUT /api/v1/persons/{id}
///
/// Replace every field of a person.
pub async fn update_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdatePerson>,
) -> AppResult<impl IntoResponse> {
    state.persons.update_person(id, input).await?;
    Ok(Json(MessageResponse::new("Person updated")))
}

/// PATCH /api/v1/persons/{id}
///
/// Update only the supplied fields. An empty body is a 400.
pub async fn patch_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<PatchPerson>,
) -> AppResult<impl IntoResponse> {
    state.persons.patch_person(id, input).await?;
    Ok(Json(MessageResponse::new("Person patched")))
}

/// DELETE /api/v1/persons/{id}
pub async fn delete_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    state.persons.delete_person(id).await?;
    Ok(Json(MessageResponse::new("Person deleted")))
}
