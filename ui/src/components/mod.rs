//! UI Components
//!
//! Components organized by feature:
//! - `access`: users, roles and permission sections
//! - `layout`: app shell and sidebar
//! - `common`: shared/reusable components

pub mod access;
pub mod common;
pub mod layout;
