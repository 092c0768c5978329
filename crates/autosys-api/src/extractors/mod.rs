//! Request parsing helpers.

pub mod path;
