//! Person use cases: enrich-then-store on create, pass-through for the rest.
//!
//! Every missing-row outcome is reported as [`CoreError::NotFound`], for
//! reads and writes alike.

use persons_core::error::CoreError;
use persons_core::types::DbId;
use persons_db::models::person::{
    CreatePerson, NewPerson, PatchPerson, Person, PersonFilter, UpdatePerson,
};
use persons_db::repositories::{PatchError, PersonRepo};
use persons_db::DbPool;
use persons_enrichment::EnrichmentClient;
use validator::Validate;

use crate::error::AppResult;

const ENTITY: &str = "Person";

/// Composes the enrichment client and the person repository.
pub struct PersonService {
    pool: DbPool,
    enrichment: EnrichmentClient,
}

impl PersonService {
    pub fn new(pool: DbPool, enrichment: EnrichmentClient) -> Self {
        Self { pool, enrichment }
    }

    /// Enrich a new person from its given name, then store it.
    ///
    /// Enrichment is best-effort; only the final insert can fail.
    pub async fn create_person(&self, input: CreatePerson) -> AppResult<Person> {
        input.validate()?;

        let enrichment = self.enrichment.enrich(&input.name).await;

        let new_person = NewPerson {
            name: input.name,
            surname: input.surname,
            patronymic: input.patronymic,
            age: enrichment.age,
            gender: enrichment.gender,
            nationality: enrichment.nationality,
        };

        let person = PersonRepo::create(&self.pool, &new_person)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to create person"))?;

        tracing::info!(
            person_id = person.id,
            age = ?person.age,
            gender = ?person.gender,
            nationality = ?person.nationality,
            "Person created",
        );

        Ok(person)
    }

    pub async fn get_person(&self, id: DbId) -> AppResult<Person> {
        let person = PersonRepo::find_by_id(&self.pool, id)
            .await
            .inspect_err(|e| tracing::error!(person_id = id, error = %e, "Failed to get person"))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(person)
    }

    /// One page of persons. `page` and `limit` are validated by the caller.
    pub async fn list_persons(
        &self,
        page: i64,
        limit: i64,
        filter: &PersonFilter,
    ) -> AppResult<Vec<Person>> {
        let persons = PersonRepo::list(&self.pool, page, limit, filter)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to list persons"))?;

        tracing::debug!(page, limit, count = persons.len(), "Listed persons");

        Ok(persons)
    }

    pub async fn update_person(&self, id: DbId, input: UpdatePerson) -> AppResult<Person> {
        input.validate()?;

        let person = PersonRepo::update(&self.pool, id, &input)
            .await
            .inspect_err(|e| tracing::error!(person_id = id, error = %e, "Failed to update person"))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tracing::info!(person_id = id, "Person updated");
        Ok(person)
    }

    pub async fn patch_person(&self, id: DbId, input: PatchPerson) -> AppResult<Person> {
        input.validate()?;

        let person = PersonRepo::patch(&self.pool, id, &input)
            .await
            .inspect_err(|e| {
                if let PatchError::Database(db) = e {
                    tracing::error!(person_id = id, error = %db, "Failed to patch person");
                }
            })?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tracing::info!(person_id = id, "Person patched");
        Ok(person)
    }

    pub async fn delete_person(&self, id: DbId) -> AppResult<()> {
        let deleted = PersonRepo::delete(&self.pool, id)
            .await
            .inspect_err(|e| tracing::error!(person_id = id, error = %e, "Failed to delete person"))?;

        if !deleted {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }

        tracing::info!(person_id = id, "Person deleted");
        Ok(())
    }
}
