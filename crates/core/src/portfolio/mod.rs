//! Portfolio catalog

pub mod ports;
mod service;

pub use service::PortfolioCatalog;
