//! Utility functions

pub mod list;

pub use list::{Sequence, to_list};
