pub mod appointment;
pub mod customer;
pub mod employee;
pub mod garage;
pub mod service;
