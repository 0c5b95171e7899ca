use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One address-book entry, owned by exactly one user. `owner_id` is set at
/// creation from the authenticated caller and is never exposed or changed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub mobile: String,
    pub picture: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated field set for contact creation. Owner and id are structurally
/// absent so client payloads can never reach them.
#[derive(Debug, Clone, Default)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub mobile: String,
    pub picture: String,
}

/// Allow-listed field overlay for PATCH. Fields absent from the patch retain
/// their prior values; id and owner are not overlayable.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub picture: Option<String>,
}

/// Public projection of a contact. `ownerId` and `updatedAt` are never
/// exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicContact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub mobile: String,
    pub address: String,
    pub picture: String,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Overlay patch fields onto this contact
    pub fn apply_patch(&mut self, patch: ContactPatch) {
        if let Some(v) = patch.first_name {
            self.first_name = v;
        }
        if let Some(v) = patch.last_name {
            self.last_name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.address {
            self.address = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.mobile {
            self.mobile = v;
        }
        if let Some(v) = patch.picture {
            self.picture = v;
        }
    }

    /// Project to the public-safe shape
    pub fn transform(&self) -> PublicContact {
        PublicContact {
            id: self.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            mobile: self.mobile.clone(),
            address: self.address.clone(),
            picture: self.picture.clone(),
            created_at: self.created_at,
        }
    }
}

/// Check whether a string is a well-formed contact identifier (24 hex chars).
/// Ids are otherwise opaque to the core logic.
pub fn is_contact_id(s: &str) -> bool {
    s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Generate a fresh store-assigned identifier: 24 lowercase hex chars
pub fn new_contact_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(24);
    id
}
