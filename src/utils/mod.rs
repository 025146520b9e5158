//! Small shared helpers.

pub mod navigation;
