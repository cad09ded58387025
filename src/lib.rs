//! Named Paths - a registry of named URL path templates
//!
//! Register a logical name for a path template containing `:placeholder`
//! segments, then resolve the name plus parameters back into a concrete
//! path. Parameters that fill no placeholder become a query string unless
//! the registry is told to ignore them. This is not a router: nothing here
//! matches or dispatches requests.
//!
//! # Example
//!
//! ```rust
//! use named_paths::{Params, PathRegistry};
//!
//! let registry = PathRegistry::new();
//! registry.register("edit_widget", "/widgets/:id/edit/:section");
//!
//! let params = Params::new()
//!     .with("id", 123)
//!     .with("section", "dog")
//!     .with("name", "felix");
//! assert_eq!(
//!     registry.resolve("edit_widget", Some(&params)),
//!     "/widgets/123/edit/dog?name=felix"
//! );
//!
//! // Unknown names resolve to an empty string
//! assert_eq!(registry.resolve("missing", None), "");
//! ```

pub mod config;
pub mod error;
pub mod funcs;
pub mod params;
pub mod paths;

pub use config::{ConfigError, PathTable};
pub use error::PathError;
pub use funcs::{params_from_pairs, PathFn, PathFuncs};
pub use params::{ParamValue, Params};
pub use paths::{replace, PathRegistry};

#[cfg(feature = "tera")]
pub use funcs::register_tera_functions;
