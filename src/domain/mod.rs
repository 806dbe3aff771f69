//! Domain Layer
//!
//! Pure drafting logic without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Drafts, projects and the project registry
//! - `value_objects/` - Selection, rewrite rules, name normalization
//! - `services/` - Content rewriting and the staged view
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
