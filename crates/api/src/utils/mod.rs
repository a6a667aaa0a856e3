//! Boundary utilities: command execution, logging bootstrap, health types

pub mod command_helpers;
pub mod health;
pub mod logging;
