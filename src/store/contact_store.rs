use sqlx::PgPool;

use crate::api::pagination::Pagination;
use crate::database::models::contact::{is_contact_id, new_contact_id, Contact, ContactFields, ContactPatch};
use crate::store::StoreError;

/// Unified not-found message for a malformed id, an absent record, and a
/// record owned by another user. Keeping the three cases indistinguishable
/// prevents contact enumeration across owners.
const CONTACT_NOT_FOUND: &str = "Contact does not exist";

/// One page of a caller's contacts. `total` is the full matching count,
/// independent of pagination.
#[derive(Debug)]
pub struct ContactPage {
    pub total: i64,
    pub items: Vec<Contact>,
}

/// Ownership-scoped CRUD over contact records. Every operation takes the
/// caller identity as an explicit authorization parameter.
pub struct ContactStore {
    pool: PgPool,
}

impl ContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load a contact by id, enforcing ownership. Malformed id, missing row,
    /// and foreign-owned row all fail identically.
    pub async fn get_by_id(&self, id: &str, caller_id: &str) -> Result<Contact, StoreError> {
        if !is_contact_id(id) {
            return Err(StoreError::NotFound(CONTACT_NOT_FOUND));
        }

        let contact = sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        authorize(contact, caller_id)
    }

    /// Persist a new contact owned by the caller. The owner is taken from the
    /// caller identity, never from the field set.
    pub async fn create(&self, fields: ContactFields, caller_id: &str) -> Result<Contact, StoreError> {
        let contact = sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (id, first_name, last_name, email, address, phone, mobile, picture, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(new_contact_id())
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.address)
        .bind(&fields.phone)
        .bind(&fields.mobile)
        .bind(&fields.picture)
        .bind(caller_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    /// Overlay patch fields onto an owned contact and persist. Fields absent
    /// from the patch retain their prior values.
    pub async fn update(&self, id: &str, patch: ContactPatch, caller_id: &str) -> Result<Contact, StoreError> {
        let mut contact = self.get_by_id(id, caller_id).await?;
        contact.apply_patch(patch);

        let updated = sqlx::query_as::<_, Contact>(
            "UPDATE contacts \
             SET first_name = $1, last_name = $2, email = $3, address = $4, \
                 phone = $5, mobile = $6, picture = $7, updated_at = now() \
             WHERE id = $8 \
             RETURNING *",
        )
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.address)
        .bind(&contact.phone)
        .bind(&contact.mobile)
        .bind(&contact.picture)
        .bind(&contact.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete an owned contact. Same unified not-found as `get_by_id`.
    pub async fn remove(&self, id: &str, caller_id: &str) -> Result<(), StoreError> {
        let contact = self.get_by_id(id, caller_id).await?;

        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(&contact.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List the caller's contacts, most recently created first
    pub async fn list(&self, pagination: Pagination, caller_id: &str) -> Result<ContactPage, StoreError> {
        let pagination = pagination.clamped();

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE owner_id = $1")
            .bind(caller_id)
            .fetch_one(&self.pool)
            .await?;

        // Id as tie-break so pages stay stable when timestamps collide
        let items = sqlx::query_as::<_, Contact>(
            "SELECT * FROM contacts WHERE owner_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(caller_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(ContactPage { total, items })
    }
}

/// The single ownership predicate behind every id-based operation
fn authorize(contact: Option<Contact>, caller_id: &str) -> Result<Contact, StoreError> {
    match contact {
        Some(contact) if contact.owner_id == caller_id => Ok(contact),
        _ => Err(StoreError::NotFound(CONTACT_NOT_FOUND)),
    }
}
