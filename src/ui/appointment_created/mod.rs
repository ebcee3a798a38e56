//! Confirmation shown right after an appointment was booked. Tells the
//! user when and with whom, then sends them back to the dashboard with no
//! way back into the booking flow.

mod component;
mod model;

pub use model::*;
