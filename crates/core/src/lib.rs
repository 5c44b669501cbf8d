//! # Garagebook Core
//!
//! Domain models, the error taxonomy, and the appointment scheduling engine
//! for the garagebook service. Everything in this crate is pure: no I/O, no
//! global state. The `scheduling` module is safe to call from any number of
//! concurrent requests without synchronization.

pub mod errors;
pub mod models;
pub mod scheduling;
