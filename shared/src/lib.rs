//! Shared types for the Warden admin console
//!
//! This crate contains the target-independent core of the console:
//! - Entity types (users, roles, permission sets)
//! - The entity store and the filter/sort engine
//! - Record form and permission panel state machines
//! - Seed configuration

pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod permissions;
pub mod query;
pub mod shell;
pub mod store;

pub use config::*;
pub use error::*;
pub use form::*;
pub use model::*;
pub use permissions::*;
pub use query::*;
pub use shell::*;
pub use store::*;
