//! Domain models.

pub mod role;

pub use role::Access;
