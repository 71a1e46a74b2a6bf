//! Layout Components
//!
//! - `Sidebar`: section links
//! - `AppShell`: sidebar + the active section

mod app_shell;
mod sidebar;

pub use app_shell::AppShell;
pub use sidebar::Sidebar;
