//! An interactive, in-memory phonebook driven by a numbered text menu.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logger;
pub mod prelude;
pub mod store;
