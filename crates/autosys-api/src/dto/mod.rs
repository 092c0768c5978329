//! Request and response payloads.

pub mod response;
