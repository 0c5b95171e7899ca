use axum::extract::{Extension, Path, Query};
use serde::Serialize;

use crate::api::extract::Json;
use crate::api::validation::{
    validate_contact_id, validate_create, validate_list_params, validate_patch, ContactBody, ListParams,
};
use crate::database::models::contact::PublicContact;
use crate::database::DatabaseManager;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::store::ContactStore;

/// Single list result item: full matching count plus one page of contacts
#[derive(Debug, Serialize)]
pub struct ContactListing {
    pub total: i64,
    pub contacts: Vec<PublicContact>,
}

async fn contact_store() -> Result<ContactStore, crate::error::ApiError> {
    let pool = DatabaseManager::pool().await?;
    Ok(ContactStore::new(pool))
}

/// GET /v1/contacts - list the caller's contacts, newest first
pub async fn list(
    Extension(auth): Extension<AuthUser>,
    Query(params): Query<ListParams>,
) -> ApiResult<ContactListing> {
    let pagination = validate_list_params(&params)?;

    let store = contact_store().await?;
    let page = store.list(pagination, &auth.user_id).await?;

    let contacts = page.items.iter().map(|c| c.transform()).collect();
    Ok(ApiResponse::success(vec![ContactListing {
        total: page.total,
        contacts,
    }]))
}

/// POST /v1/contacts - create a contact owned by the caller
pub async fn create(
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<ContactBody>,
) -> ApiResult<PublicContact> {
    let fields = validate_create(&body)?;

    let store = contact_store().await?;
    let contact = store.create(fields, &auth.user_id).await?;

    Ok(ApiResponse::created(vec![contact.transform()]))
}

/// GET /v1/contacts/:contactId - show one owned contact
pub async fn get(
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<String>,
) -> ApiResult<PublicContact> {
    validate_contact_id(&contact_id)?;

    let store = contact_store().await?;
    let contact = store.get_by_id(&contact_id, &auth.user_id).await?;

    Ok(ApiResponse::success(vec![contact.transform()]))
}

/// PATCH /v1/contacts/:contactId - overlay fields onto an owned contact
pub async fn update(
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<String>,
    Json(body): Json<ContactBody>,
) -> ApiResult<PublicContact> {
    validate_contact_id(&contact_id)?;
    let patch = validate_patch(&body)?;

    let store = contact_store().await?;
    let contact = store.update(&contact_id, patch, &auth.user_id).await?;

    Ok(ApiResponse::success(vec![contact.transform()]))
}

/// DELETE /v1/contacts/:contactId - delete an owned contact
pub async fn remove(
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<String>,
) -> ApiResult<serde_json::Value> {
    validate_contact_id(&contact_id)?;

    let store = contact_store().await?;
    store.remove(&contact_id, &auth.user_id).await?;

    Ok(ApiResponse::empty())
}
