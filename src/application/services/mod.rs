//! Application services — one module per use-case.

pub mod bootstrap;
pub mod doctor;
pub mod status;
