//! Caredesk Console Kernel Library
//!
//! Role-scoped navigation filtering, sidebar state, and route guarding for
//! the hospital administration console. The identity, routing, and rendering
//! layers are external collaborators; this crate only derives what they
//! should show and who may go where.

pub mod config;
pub mod error;
pub mod models;
pub mod nav;
pub mod routes;
pub mod session;
