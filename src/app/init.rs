use std::sync::Arc;

use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use crate::agenda::Agenda;
use crate::api::HttpBackend;
use crate::config::{api_url, Config};
use crate::error::{Error, Result};
use crate::model::User;
use crate::session::Session;

/// Installs the global tracing subscriber. `filter` uses the `RUST_LOG`
/// syntax.
pub fn init_tracing(filter: &str) -> Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(filter))
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| Error::Tracing(e.to_string()))
}

/// Builds [`Agenda`] talking to the backend at `config.api_url`.
///
/// `user` and `token` come from whatever signed the user in.
pub fn make_agenda(config: Config, user: Option<User>, token: Option<SecretString>) -> Result<Agenda> {
    let mut backend = HttpBackend::new(api_url(&config)?);
    if let Some(token) = token {
        backend = backend.with_token(token);
    }

    Ok(Agenda::new(config, Arc::new(backend), Session::new(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_subscriber_is_an_error() {
        // Whichever call came first in this test binary, the last one loses.
        let _ = init_tracing("debug");
        let second = init_tracing("debug");
        assert!(matches!(second, Err(Error::Tracing(_))));
    }

    #[test]
    fn agenda_from_config() {
        let agenda = make_agenda(Config::default(), None, None).unwrap();
        assert!(!agenda.session().is_signed_in());
        assert_eq!(agenda.config().api_url, crate::config::DEFAULT_API_URL);

        let broken = Config {
            api_url: "::".to_string(),
            ..Config::default()
        };
        assert!(matches!(make_agenda(broken, None, None), Err(Error::InvalidUrl(_))));
    }
}
