//! A register of municipalities stored in an [ord_table::OrdTable] keyed by
//! name, with CSV import and export, a seeded random generator, RON
//! snapshots, and a command shell.

mod config;
pub mod generator;
mod municipality;
pub mod persistence;
mod register;
pub mod shell;

pub use config::{AgendaConfig, DEFAULT_LOG_FILTER, DEFAULT_NAME_PREFIX, DEFAULT_SEED};
pub use municipality::Municipality;
pub use register::{Agenda, AgendaError, SEQUENCE_LABEL, SEQUENCE_SEPARATOR};
