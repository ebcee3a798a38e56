//! Client core of a service-appointment booking app.
//!
//! Screens are headless [components](ui::component::Component): a shell
//! renders their models and feeds user events to them as messages. Every
//! screen gets an [`Agenda`] holding configuration, the backend and the
//! signed-in user.

mod agenda;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod navigation;
pub mod session;
pub mod ui;

#[cfg(test)]
mod testing;

pub use agenda::Agenda;
pub use error::{Error, Result};
pub use model::{Provider, User};
