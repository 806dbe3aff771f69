//! Common test utilities for lazydraft CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated config directory, notes and site under one temp dir
//! - Fixtures: a ready-made `blog` project

pub mod env;

pub use env::*;
