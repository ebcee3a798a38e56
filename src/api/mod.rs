//! The booking backend as seen by the screens. [`Backend`] is the seam,
//! [`HttpBackend`] talks to the real server.

mod http;

use async_trait::async_trait;
use mediatype::{media_type, MediaType};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::model::{Provider, User};

pub use self::http::HttpBackend;

/// Avatars are always uploaded as JPEG.
pub const AVATAR_MEDIA_TYPE: MediaType<'static> = media_type!(IMAGE / JPEG);

/// Name of the multipart field carrying the avatar.
pub const AVATAR_FIELD: &str = "avatar";

#[async_trait]
pub trait Backend: Send + Sync {
    async fn providers(&self) -> Result<Vec<Provider>>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User>;

    async fn update_avatar(&self, upload: AvatarUpload) -> Result<User>;
}

/// Body of the profile update request.
#[derive(Clone, Debug, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    /// Absent means the password stays as it is; none of its keys are
    /// sent then.
    #[serde(flatten)]
    pub password: Option<PasswordChange>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PasswordChange {
    #[serde(serialize_with = "expose")]
    pub old_password: SecretString,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
    #[serde(serialize_with = "expose")]
    pub password_confirmation: SecretString,
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[derive(Clone, Debug)]
pub struct AvatarUpload {
    pub user_id: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.user_id)
    }
}
