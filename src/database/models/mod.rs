pub mod contact;
pub mod user;

pub use contact::{Contact, ContactFields, ContactPatch, PublicContact};
pub use user::{PublicUser, User};
