//! Command parsing and execution for the clinic record manager.
//!
//! This crate turns a line of user text into a [`Command`] and runs it
//! against a [`clinic_core::ClinicModel`].

pub mod find;
pub mod messages;
pub mod parser;

pub use find::*;
pub use parser::*;
