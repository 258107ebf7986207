//! Repository for the `persons` table.

use persons_core::pagination;
use persons_core::types::DbId;
use sqlx::PgPool;

use crate::clause::{ClauseBuilder, Op};
use crate::models::person::{NewPerson, PatchPerson, Person, PersonFilter, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, surname, patronymic, age, gender, nationality";

/// Failure modes of [`PersonRepo::patch`].
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// The patch carried no fields; storage was not touched.
    #[error("no fields to update")]
    NoFields,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides CRUD operations for persons plus filtered, paginated listing.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row with its generated id.
    pub async fn create(pool: &PgPool, input: &NewPerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO persons (name, surname, patronymic, age, gender, nationality)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.patronymic)
            .bind(input.age)
            .bind(&input.gender)
            .bind(&input.nationality)
            .fetch_one(pool)
            .await
    }

    /// Find a person by id. Returns `None` when no row matches.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of persons matching `filter`, ordered by id.
    ///
    /// `page` is 1-indexed; callers validate `page >= 1` and `limit >= 1`.
    /// Empty filter strings are treated as absent.
    pub async fn list(
        pool: &PgPool,
        page: i64,
        limit: i64,
        filter: &PersonFilter,
    ) -> Result<Vec<Person>, sqlx::Error> {
        let mut clauses = ClauseBuilder::new();
        clauses
            .push_opt("name", Op::Contains, non_empty(&filter.name))
            .push_opt("surname", Op::Contains, non_empty(&filter.surname))
            .push_opt("age", Op::Eq, filter.age)
            .push_opt("gender", Op::Eq, non_empty(&filter.gender))
            .push_opt("nationality", Op::Eq, non_empty(&filter.nationality));

        let where_clause = clauses.where_clause();
        let limit_param = clauses.param(limit);
        let offset_param = clauses.param(pagination::offset(page, limit));

        let query = format!(
            "SELECT {COLUMNS} FROM persons{where_clause} \
             ORDER BY id \
             LIMIT {limit_param} OFFSET {offset_param}"
        );

        tracing::debug!(%query, "Listing persons");

        clauses
            .bind_all(sqlx::query_as::<_, Person>(&query))
            .fetch_all(pool)
            .await
    }

    /// Replace every column of a person.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE persons SET
                name = $2,
                surname = $3,
                patronymic = $4,
                age = $5,
                gender = $6,
                nationality = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.patronymic)
            .bind(input.age)
            .bind(&input.gender)
            .bind(&input.nationality)
            .fetch_optional(pool)
            .await
    }

    /// Update only the fields present in `input`.
    ///
    /// Fails with [`PatchError::NoFields`] without issuing a query when the
    /// patch is empty. Returns `None` if no row with the given `id` exists.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchPerson,
    ) -> Result<Option<Person>, PatchError> {
        let mut clauses = ClauseBuilder::new();
        clauses
            .push_opt("name", Op::Eq, input.name.as_deref())
            .push_opt("surname", Op::Eq, input.surname.as_deref())
            .push_opt("patronymic", Op::Eq, input.patronymic.as_deref())
            .push_opt("age", Op::Eq, input.age)
            .push_opt("gender", Op::Eq, input.gender.as_deref())
            .push_opt("nationality", Op::Eq, input.nationality.as_deref());

        if clauses.is_empty() {
            return Err(PatchError::NoFields);
        }

        let set_clause = clauses.set_clause();
        let id_param = clauses.param(id);
        let query =
            format!("UPDATE persons SET {set_clause} WHERE id = {id_param} RETURNING {COLUMNS}");

        let person = clauses
            .bind_all(sqlx::query_as::<_, Person>(&query))
            .fetch_optional(pool)
            .await?;
        Ok(person)
    }

    /// Delete a person by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Empty filter values mean "no filter on this column".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
