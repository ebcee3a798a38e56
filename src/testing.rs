//! Test doubles shared by the component tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use tracing::Level;

use crate::api::{AvatarUpload, Backend, ProfileUpdate};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Provider, User};
use crate::session::Session;
use crate::Agenda;

pub fn provider(id: &str, name: &str) -> Provider {
    Provider {
        id: id.to_string(),
        name: name.to_string(),
        avatar_url: None,
    }
}

pub fn user() -> User {
    User {
        id: "u1".to_string(),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        avatar_url: None,
    }
}

/// Agenda displaying times at UTC-3.
pub fn agenda(backend: MockBackend, user: Option<User>) -> Agenda {
    let config = Config {
        utc_offset_minutes: Some(-180),
        ..Config::default()
    };
    Agenda::new(config, Arc::new(backend), Session::new(user))
}

/// Log output captured in memory.
#[derive(Clone, Default)]
pub struct Logs(Arc<Mutex<Vec<u8>>>);

impl Logs {
    /// Subscriber writing everything down to `debug` into these logs.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        let logs = self.clone();
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || logs.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for Logs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct Calls {
    providers: AtomicUsize,
    profile_updates: Mutex<Vec<serde_json::Value>>,
    avatar_uploads: Mutex<Vec<String>>,
}

/// In-memory [`Backend`] recording what it was asked.
#[derive(Clone, Default)]
pub struct MockBackend {
    providers: Vec<Provider>,
    fail: bool,
    respond_with: Option<User>,
    gate: Option<Arc<Notify>>,
    calls: Arc<Calls>,
}

impl MockBackend {
    pub fn new() -> MockBackend {
        MockBackend::default()
    }

    pub fn with_providers(mut self, providers: Vec<Provider>) -> MockBackend {
        self.providers = providers;
        self
    }

    /// Every call fails like an unreachable server.
    pub fn failing(mut self) -> MockBackend {
        self.fail = true;
        self
    }

    /// Updates answer with `user` instead of echoing the request.
    pub fn responding_with(mut self, user: User) -> MockBackend {
        self.respond_with = Some(user);
        self
    }

    /// Updates wait for a notification on the returned gate before they
    /// answer.
    pub fn gated(mut self) -> (MockBackend, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn provider_requests(&self) -> usize {
        self.calls.providers.load(Ordering::SeqCst)
    }

    /// Bodies of profile updates as they would go over the wire.
    pub fn profile_updates(&self) -> Vec<serde_json::Value> {
        self.calls.profile_updates.lock().unwrap().clone()
    }

    /// File names of uploaded avatars.
    pub fn avatar_uploads(&self) -> Vec<String> {
        self.calls.avatar_uploads.lock().unwrap().clone()
    }

    async fn answer(&self, echo: User) -> Result<User> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail {
            Err(unreachable_server())
        } else {
            Ok(self.respond_with.clone().unwrap_or(echo))
        }
    }
}

fn unreachable_server() -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

#[async_trait]
impl Backend for MockBackend {
    async fn providers(&self) -> Result<Vec<Provider>> {
        self.calls.providers.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            Err(unreachable_server())
        } else {
            Ok(self.providers.clone())
        }
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let body = serde_json::to_value(update).expect("profile update serializes");
        self.calls.profile_updates.lock().unwrap().push(body);

        let echo = User {
            name: update.name.clone(),
            email: update.email.clone(),
            ..user()
        };
        self.answer(echo).await
    }

    async fn update_avatar(&self, upload: AvatarUpload) -> Result<User> {
        let file_name = upload.file_name();
        self.calls.avatar_uploads.lock().unwrap().push(file_name.clone());

        let echo = User {
            id: upload.user_id,
            avatar_url: Some(format!("http://cdn.example.com/{file_name}")),
            ..user()
        };
        self.answer(echo).await
    }
}
