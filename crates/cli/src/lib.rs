//! # ARMOR CLI
//!
//! Command-line and interactive front end over the ARMOR API client.

pub mod commands;
pub mod context;
pub mod interactive;
pub mod output;
