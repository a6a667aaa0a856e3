//! Ownership and access checks

mod guard;

pub use guard::AccessGuard;
