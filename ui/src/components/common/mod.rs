//! Common/Shared UI Components
//!
//! Reusable pieces used by every section:
//! - `icons`: SVG icons
//! - `modal`: backdrop + dialog frame for the record forms
//! - `controls`: search box, sortable column header, empty-state row

mod controls;
mod icons;
mod modal;

pub use controls::{visible_rows, EmptyRow, SearchBox, SortHeader, INPUT_CLASS};
pub use icons::*;
pub use modal::Modal;
