//! Access Management Components
//!
//! The three dashboard sections:
//! - `users`: user table and form
//! - `roles`: role table and form
//! - `permissions`: permission assignment panel

mod permissions;
mod roles;
mod users;

pub use permissions::PermissionManager;
pub use roles::RoleManagement;
pub use users::UserManagement;
