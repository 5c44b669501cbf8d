//! # Appointment Scheduling Engine
//!
//! Computes which time windows are bookable for a service/employee/date,
//! enforces non-overlap of an employee's bookings, and classifies
//! appointments into temporal buckets for the read path.
//!
//! Every function in this module is pure with respect to its arguments:
//! persisted appointment data is read by the caller and passed in, and the
//! current instant is always an explicit parameter. Generating the slot
//! sequence twice with identical inputs yields identical results, which the
//! booking and availability handlers rely on to agree with each other.

pub mod calendar;
pub mod clamp;
pub mod classify;
pub mod overlap;
pub mod review;
pub mod slots;
