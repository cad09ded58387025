//! Error types for path resolution

use thiserror::Error;

use crate::params::ParamValue;

/// Errors that can occur when resolving a named path
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// No template registered under the requested name
    #[error("no path could be found with the name: {name}")]
    NotFound { name: String },

    /// A flattened argument list ended with a key that has no value
    #[error("path arguments must come in key/value pairs, got {count} values")]
    UnpairedArgument { count: usize },

    /// A flattened argument list had a non-string value in a key position
    #[error("path argument at position {index} must be a string key, got {value}")]
    NonStringKey { index: usize, value: ParamValue },
}
