//! User lookup

pub mod ports;
