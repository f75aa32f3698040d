//! Branch selection over merged operation states.

pub mod flags;
mod select;

pub use flags::{Flag, FlagFn};
pub use select::{select_branch, Branch, ManualFlags};
