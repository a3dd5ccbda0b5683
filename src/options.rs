//! Configuration shared by every operation that consults a registry.

use std::sync::Arc;

use crate::Registry;

/// Options for registry-consuming operations.
///
/// The default uses [`Registry::global`].
///
/// # Examples
///
/// ```
/// use jsontype::{Options, Registry, Value};
/// use std::sync::Arc;
///
/// let sandbox = Arc::new(Registry::with_builtins());
/// let opts = Options::default().with_registry(sandbox);
///
/// let value = Value::from_json_with(br#"{"type":"int","value":42}"#, &opts).unwrap();
/// assert_eq!(value.type_name(), "int");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    registry: Arc<Registry>,
}

impl Options {
    /// Uses `registry` instead of the global one.
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = registry;
        self
    }

    /// The registry operations consult.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            registry: Registry::global(),
        }
    }
}
