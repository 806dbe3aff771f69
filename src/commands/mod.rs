//! Command handlers, one module per command group

pub mod config;
pub mod draft;
pub mod project;
