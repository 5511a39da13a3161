//! Command handlers for the cxr CLI.
//!
//! The main dispatch logic remains in main.rs.

pub mod extract;
