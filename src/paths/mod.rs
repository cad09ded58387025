//! Named paths
//!
//! This module provides the registry that maps logical names to path
//! templates, and the substitution that turns a template plus parameters
//! into a concrete path.
//!
//! # Example
//!
//! ```text
//! // Register a template
//! show_dog => /dogs/:id
//!
//! // Resolve it
//! show_dog {id: 123, sort: "name"} => /dogs/123?sort=name
//! ```

mod registry;
mod resolver;

pub use registry::PathRegistry;
pub use resolver::replace;
