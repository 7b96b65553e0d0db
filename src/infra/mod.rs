//! Infrastructure layer — port implementations that touch the real system.

pub mod provisioner;
