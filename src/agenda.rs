use std::fmt::Debug;
use std::sync::Arc;

use crate::api::Backend;
use crate::config::Config;
use crate::session::Session;

/// Agenda context. Every screen receives one at init; cloning is cheap.
#[derive(Clone)]
pub struct Agenda(Arc<AgendaInner>);

impl Debug for Agenda {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Agenda").field(&self.0.config).finish()
    }
}

struct AgendaInner {
    config: Config,
    backend: Arc<dyn Backend>,
    session: Session,
}

impl Agenda {
    pub fn new(config: Config, backend: Arc<dyn Backend>, session: Session) -> Agenda {
        Agenda(Arc::new(AgendaInner {
            config,
            backend,
            session,
        }))
    }

    pub fn config(&self) -> &Config {
        &self.0.config
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.0.backend
    }

    pub fn session(&self) -> &Session {
        &self.0.session
    }
}
