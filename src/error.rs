use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong outside of form validation.
///
/// Form validation has its own [`FieldErrors`](crate::ui::profile::FieldErrors),
/// those never leave the profile screen.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("could not write configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid URL {0}")]
    InvalidUrl(String),

    #[error("no user is signed in")]
    NotSignedIn,

    #[error("could not install tracing subscriber: {0}")]
    Tracing(String),
}
