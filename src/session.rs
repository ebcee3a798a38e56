use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::error::{Error, Result};
use crate::model::User;

/// Authenticated session shared by all screens. Cloning is cheap, clones
/// see the same user.
///
/// Writes are last-writer-wins.
#[derive(Clone, Debug, Default)]
pub struct Session(Arc<RwLock<Option<User>>>);

impl Session {
    pub fn new(user: Option<User>) -> Session {
        Session(Arc::new(RwLock::new(user)))
    }

    pub fn current_user(&self) -> Option<User> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// The signed-in user, [`Error::NotSignedIn`] when there is none.
    pub fn require_user(&self) -> Result<User> {
        self.current_user().ok_or(Error::NotSignedIn)
    }

    /// Replaces the cached user with `user`, typically the body the backend
    /// answered with.
    pub fn replace_user(&self, user: User) {
        info!("Session user {} replaced", user.id);
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    pub fn sign_out(&self) {
        let previous = self.0.write().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(user) = previous {
            info!("User {} signed out", user.id);
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.0.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}
