//! Editing the signed-in user's profile: name, e-mail, optionally the
//! password, and, independently of the form, the avatar.

mod component;
pub mod form;
mod model;

pub use form::{build_payload, validate, Field, FieldErrors, ProfileForm};
pub use model::*;
