//! Template-engine glue
//!
//! Exposes every registered path name as a function that takes a flattened
//! `key, value, key, value, ...` argument list, the shape most template
//! function call syntaxes produce.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::PathError;
use crate::params::{ParamValue, Params};
use crate::paths::PathRegistry;

/// A path function bound to one registered name
pub type PathFn = Box<dyn Fn(&[ParamValue]) -> Result<String, PathError> + Send + Sync>;

/// Pair up a flattened `key, value, ...` argument list into parameters
pub fn params_from_pairs(args: &[ParamValue]) -> Result<Params, PathError> {
    if args.len() % 2 != 0 {
        return Err(PathError::UnpairedArgument { count: args.len() });
    }

    let mut params = Params::new();
    for (pair_index, pair) in args.chunks_exact(2).enumerate() {
        let key = pair[0].as_str().ok_or_else(|| PathError::NonStringKey {
            index: pair_index * 2,
            value: pair[0].clone(),
        })?;
        params.insert(key, pair[1].clone());
    }
    Ok(params)
}

/// Path functions backed by a shared registry
#[derive(Debug, Clone)]
pub struct PathFuncs {
    registry: Arc<PathRegistry>,
}

impl PathFuncs {
    pub fn new(registry: Arc<PathRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve `name` with a flattened argument list
    ///
    /// No arguments resolves with absent parameters, which yields the raw
    /// template. Unknown names resolve to an empty string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use named_paths::{ParamValue, PathFuncs, PathRegistry};
    ///
    /// let registry = Arc::new(PathRegistry::new());
    /// registry.register("show_dog", "/dogs/:id");
    ///
    /// let funcs = PathFuncs::new(registry);
    /// let args = vec![ParamValue::from("id"), ParamValue::from(7)];
    /// let path = funcs.call("show_dog", &args).unwrap();
    /// assert_eq!(path, "/dogs/7");
    /// ```
    pub fn call(&self, name: &str, args: &[ParamValue]) -> Result<String, PathError> {
        if args.is_empty() {
            return Ok(self.registry.resolve(name, None));
        }
        let params = params_from_pairs(args)?;
        Ok(self.registry.resolve(name, Some(&params)))
    }

    /// One function per currently registered name, keyed by that name
    ///
    /// Each function looks its template up again at call time, so later
    /// re-registrations are picked up.
    pub fn functions(&self) -> BTreeMap<String, PathFn> {
        self.registry
            .names()
            .into_iter()
            .map(|name| {
                let funcs = self.clone();
                let bound = name.clone();
                let func: PathFn = Box::new(move |args: &[ParamValue]| funcs.call(&bound, args));
                (name, func)
            })
            .collect()
    }
}

/// Register every path name as a Tera function
///
/// Named arguments become path parameters:
/// `{{ show_dog(id=3, sort="name") }}` renders `/dogs/3?sort=name`.
#[cfg(feature = "tera")]
pub fn register_tera_functions(tera: &mut tera::Tera, registry: Arc<PathRegistry>) {
    use std::collections::HashMap;

    for name in registry.names() {
        let registry = Arc::clone(&registry);
        let bound = name.clone();
        tera.register_function(
            &name,
            move |args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
                let params = if args.is_empty() {
                    None
                } else {
                    let mut params = Params::new();
                    for (key, value) in args {
                        params.insert(key.as_str(), tera_param(key, value)?);
                    }
                    Some(params)
                };
                Ok(tera::Value::String(
                    registry.resolve(&bound, params.as_ref()),
                ))
            },
        );
    }
}

#[cfg(feature = "tera")]
fn tera_param(key: &str, value: &tera::Value) -> tera::Result<ParamValue> {
    match value {
        tera::Value::String(s) => Ok(ParamValue::Str(s.clone())),
        tera::Value::Bool(b) => Ok(ParamValue::Bool(*b)),
        tera::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(ParamValue::Int(i)),
            (None, Some(f)) => Ok(ParamValue::Float(f)),
            (None, None) => Err(tera::Error::msg(format!(
                "path parameter `{}` is not a representable number",
                key
            ))),
        },
        other => Err(tera::Error::msg(format!(
            "path parameter `{}` must be a string, number or boolean, got {}",
            key, other
        ))),
    }
}
