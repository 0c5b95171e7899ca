//! Field validation for the contact endpoints. Rules and messages follow the
//! published API behavior: required body fields on create, per-field checks
//! on patch, 24-hex path ids, bounded pagination parameters.

use serde::Deserialize;

use crate::api::pagination::{Pagination, MAX_PER_PAGE};
use crate::database::models::contact::{is_contact_id, ContactFields, ContactPatch};
use crate::error::{ApiError, FieldError};

/// Request body for contact create and patch. Every field is optional at the
/// deserialization layer so validation owns the error reporting. Owner and id
/// are not part of the body; anything else the client sends is dropped.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBody {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub picture: Option<String>,
}

/// Raw pagination query parameters, parsed and bounds-checked explicitly so
/// malformed values produce field errors instead of a framework rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

const FIRST_NAME_MAX: usize = 128;

/// Validate a create body: all fields required, trimmed, email normalized
pub fn validate_create(body: &ContactBody) -> Result<ContactFields, ApiError> {
    let mut errors = Vec::new();

    let email = required(&body.email, "email", &mut errors);
    let first_name = required(&body.first_name, "firstName", &mut errors);
    let last_name = required(&body.last_name, "lastName", &mut errors);
    let address = required(&body.address, "address", &mut errors);
    let phone = required(&body.phone, "phone", &mut errors);
    let mobile = required(&body.mobile, "mobile", &mut errors);
    let picture = required(&body.picture, "picture", &mut errors);

    let email = email.and_then(|v| check_email(v, &mut errors));
    let first_name = first_name.and_then(|v| check_first_name(v, &mut errors));
    let phone = phone.and_then(|v| check_digits(v, "phone", &mut errors));
    let mobile = mobile.and_then(|v| check_digits(v, "mobile", &mut errors));

    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    // All Some by construction once errors is empty
    Ok(ContactFields {
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        address: address.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        mobile: mobile.unwrap_or_default(),
        picture: picture.unwrap_or_default(),
    })
}

/// Validate a patch body: each field optional, checked only when present
pub fn validate_patch(body: &ContactBody) -> Result<ContactPatch, ApiError> {
    let mut errors = Vec::new();

    let email = present(&body.email, "email", &mut errors).and_then(|v| check_email(v, &mut errors));
    let first_name = present(&body.first_name, "firstName", &mut errors).and_then(|v| check_first_name(v, &mut errors));
    let last_name = present(&body.last_name, "lastName", &mut errors);
    let address = present(&body.address, "address", &mut errors);
    let phone = present(&body.phone, "phone", &mut errors).and_then(|v| check_digits(v, "phone", &mut errors));
    let mobile = present(&body.mobile, "mobile", &mut errors).and_then(|v| check_digits(v, "mobile", &mut errors));
    let picture = present(&body.picture, "picture", &mut errors);

    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    Ok(ContactPatch {
        first_name,
        last_name,
        email,
        address,
        phone,
        mobile,
        picture,
    })
}

/// Validate the `:contactId` path parameter shape (24 hex chars)
pub fn validate_contact_id(id: &str) -> Result<(), ApiError> {
    if is_contact_id(id) {
        return Ok(());
    }
    Err(ApiError::validation(vec![FieldError::new(
        "contactId",
        "params",
        format!(
            "\"contactId\" with value \"{}\" fails to match the required pattern: /^[a-fA-F0-9]{{24}}$/",
            id
        ),
    )]))
}

/// Parse and bounds-check pagination query parameters
pub fn validate_list_params(params: &ListParams) -> Result<Pagination, ApiError> {
    let mut errors = Vec::new();
    let mut pagination = Pagination::default();

    if let Some(raw) = &params.page {
        match raw.trim().parse::<i64>() {
            Ok(page) if page >= 1 => pagination.page = page,
            Ok(_) => errors.push(FieldError::new(
                "page",
                "query",
                "\"page\" must be larger than or equal to 1",
            )),
            Err(_) => errors.push(FieldError::new("page", "query", "\"page\" must be a number")),
        }
    }

    if let Some(raw) = &params.per_page {
        match raw.trim().parse::<i64>() {
            Ok(per_page) if per_page < 1 => errors.push(FieldError::new(
                "perPage",
                "query",
                "\"perPage\" must be larger than or equal to 1",
            )),
            Ok(per_page) if per_page > MAX_PER_PAGE => errors.push(FieldError::new(
                "perPage",
                "query",
                "\"perPage\" must be less than or equal to 100",
            )),
            Ok(per_page) => pagination.per_page = per_page,
            Err(_) => errors.push(FieldError::new("perPage", "query", "\"perPage\" must be a number")),
        }
    }

    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    Ok(pagination)
}

/// Required body field: missing and empty-after-trim are both errors
fn required(value: &Option<String>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match value {
        None => {
            errors.push(FieldError::new(field, "body", format!("\"{}\" is required", field)));
            None
        }
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                errors.push(FieldError::new(
                    field,
                    "body",
                    format!("\"{}\" is not allowed to be empty", field),
                ));
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

/// Optional body field: only checked when present
fn present(value: &Option<String>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let raw = value.as_ref()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(
            field,
            "body",
            format!("\"{}\" is not allowed to be empty", field),
        ));
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Basic `local@domain` shape, lowercase-normalized on success
fn check_email(value: String, errors: &mut Vec<FieldError>) -> Option<String> {
    if is_email(&value) {
        Some(value.to_lowercase())
    } else {
        errors.push(FieldError::new("email", "body", "\"email\" must be a valid email"));
        None
    }
}

fn check_first_name(value: String, errors: &mut Vec<FieldError>) -> Option<String> {
    if value.chars().count() <= FIRST_NAME_MAX {
        Some(value)
    } else {
        errors.push(FieldError::new(
            "firstName",
            "body",
            format!(
                "\"firstName\" length must be less than or equal to {} characters long",
                FIRST_NAME_MAX
            ),
        ));
        None
    }
}

/// Phone-style fields: 7 to 10 ASCII digits
fn check_digits(value: String, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let valid = (7..=10).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit());
    if valid {
        Some(value)
    } else {
        errors.push(FieldError::new(
            field,
            "body",
            format!(
                "\"{}\" with value \"{}\" fails to match the required pattern: /^[0-9]{{7,10}}$/",
                field, value
            ),
        ));
        None
    }
}

fn is_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.len() > 2
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}
