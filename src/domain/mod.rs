//! Domain layer — pure types and functions, no I/O.

pub mod env;
pub mod error;
pub mod health;
