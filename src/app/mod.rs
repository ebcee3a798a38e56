//! Process-level setup: logging and the [`Agenda`](crate::Agenda) context.

pub mod init;
