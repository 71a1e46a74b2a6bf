//! Warden UI Library
//!
//! Browser console for managing users, roles and the permissions attached
//! to roles. All data is seeded in memory and lost on reload.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`components`]: Section pages, layout and shared widgets
//! - [`state`]: Dashboard signal provided through context

pub mod app;
pub mod components;
pub mod state;

pub use app::App;
