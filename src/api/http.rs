use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use super::{AvatarUpload, Backend, ProfileUpdate, AVATAR_FIELD, AVATAR_MEDIA_TYPE};
use crate::error::{Error, Result};
use crate::model::{Provider, User};

/// [`Backend`] speaking HTTP+JSON to the booking server.
#[derive(Clone)]
pub struct HttpBackend {
    http: Client,
    base: Url,
    token: Option<SecretString>,
}

impl std::fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HttpBackend").field(&self.base.as_str()).finish()
    }
}

impl HttpBackend {
    pub fn new(mut base: Url) -> HttpBackend {
        // Without the trailing slash `join` would replace the last segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        HttpBackend {
            http: Default::default(),
            base,
            token: None,
        }
    }

    /// Sends `token` as a bearer token with every request.
    pub fn with_token(mut self, token: SecretString) -> HttpBackend {
        self.token = Some(token);
        self
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{}{path}: {e}", self.base)))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn providers(&self) -> Result<Vec<Provider>> {
        let url = self.url("providers")?;
        info!("Requesting providers from {}", url);

        let providers = self
            .authorized(self.http.get(url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(providers)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let url = self.url("profile")?;
        info!(
            "Updating profile at {} (password change: {})",
            url,
            update.password.is_some()
        );

        let user = self
            .authorized(self.http.put(url))
            .json(update)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(user)
    }

    async fn update_avatar(&self, upload: AvatarUpload) -> Result<User> {
        let url = self.url("users/avatar")?;
        let file_name = upload.file_name();
        info!("Uploading avatar {} ({} bytes) to {}", file_name, upload.bytes.len(), url);

        let part = Part::bytes(upload.bytes)
            .file_name(file_name)
            .mime_str(&AVATAR_MEDIA_TYPE.to_string())?;
        let form = Form::new().part(AVATAR_FIELD, part);

        let user = self
            .authorized(self.http.patch(url))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_to_base_path() {
        let backend = HttpBackend::new("http://localhost:3333/api".parse().unwrap());
        assert_eq!(
            backend.url("users/avatar").unwrap().as_str(),
            "http://localhost:3333/api/users/avatar"
        );

        let backend = HttpBackend::new("http://localhost:3333".parse().unwrap());
        assert_eq!(
            backend.url("providers").unwrap().as_str(),
            "http://localhost:3333/providers"
        );
    }

    #[test]
    fn debug_hides_token() {
        let backend = HttpBackend::new("http://localhost:3333".parse().unwrap())
            .with_token(SecretString::new("s3cr3t".to_string()));
        assert!(!format!("{backend:?}").contains("s3cr3t"));
    }
}
