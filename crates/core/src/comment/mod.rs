//! Comment threads on user profiles

pub mod ports;
mod service;

pub use service::CommentService;
