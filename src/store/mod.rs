pub mod contact_store;
pub mod user_directory;

use thiserror::Error;

pub use contact_store::{ContactPage, ContactStore};
pub use user_directory::UserDirectory;

/// Errors raised by store operations. Stores never surface raw storage
/// failures to handlers; everything maps into this enum and from there into
/// the API error taxonomy.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
