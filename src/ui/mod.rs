pub mod appointment_created;
pub mod component;
pub mod memo;
pub mod profile;
