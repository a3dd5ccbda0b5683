//! A thread-safe registry mapping type names to decoders.
//!
//! Lookups take a shared lock and may run concurrently; registrations take the
//! exclusive lock for the duration of a single map insert.
//!
//! # Examples
//!
//! ```
//! use jsontype::{number_decoder, Registry, Scalar};
//! use serde_json::json;
//!
//! let registry = Registry::new();
//! let previous = registry.register("half", number_decoder("decode_half", |f| Ok(f / 2.0)));
//! assert!(previous.is_none());
//!
//! let decoded = registry.decode("half", &json!(5)).unwrap();
//! assert_eq!(decoded, Scalar::Float64(2.5));
//! ```

use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    sync::{Arc, LazyLock, Mutex, RwLock},
};

use serde_json::Value as Json;

use crate::{decoders, Decoder, Error, RegistryEvent, Result, Scalar, TypeName};

/// Process-wide registry holding the built-in decoders.
///
/// Initialised on first access through [`Registry::global`].
static GLOBAL_REGISTRY: LazyLock<Arc<Registry>> =
    LazyLock::new(|| Arc::new(Registry::with_builtins()));

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` every time the registry is
/// interacted with. It must be thread-safe because registries are shared.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Thread-safe mapping from type names to decoders.
///
/// Besides the decoders, the registry remembers which scalar types each custom name
/// has decoded to, so map forms of custom-tagged values can be checked later.
pub struct Registry {
    decoders: RwLock<HashMap<TypeName, Decoder>>,
    outputs: RwLock<HashMap<TypeName, BTreeSet<TypeName>>>,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

impl Registry {
    /// Returns an empty registry.
    pub fn new() -> Self {
        Registry {
            decoders: RwLock::new(HashMap::with_capacity(24)),
            outputs: RwLock::new(HashMap::new()),
            trace: Mutex::new(None),
        }
    }

    /// Returns a fresh registry holding every built-in decoder.
    ///
    /// Unlike [`Registry::global`], the result is not shared: registering custom
    /// decoders into it affects nobody else.
    pub fn with_builtins() -> Self {
        let registry = Registry::new();
        {
            let mut map = registry.write_map();
            for (name, decoder) in decoders::builtins() {
                map.insert(name, decoder);
            }
        }
        registry
    }

    /// The shared process-wide registry, populated with the built-in decoders.
    pub fn global() -> Arc<Registry> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    // ---------------------------------------------------------------------------------------------
    // Tracing
    // ---------------------------------------------------------------------------------------------

    /// Sets a tracing callback invoked on every registration and lookup.
    ///
    /// The callback runs after the decoder map lock is released, so it may use
    /// the registry, but must not set or clear the trace callback itself.
    pub fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clears the tracing callback.
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    fn emit_event(&self, event: RegistryEvent) {
        match &event {
            RegistryEvent::Lookup { found: false, .. } => tracing::debug!(%event, "registry"),
            _ => tracing::trace!(%event, "registry"),
        }

        // Clone the callback out so user code never runs under the trace lock.
        let callback = self
            .trace
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(&event);
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Registry
    // ---------------------------------------------------------------------------------------------

    // Every mutation is a single insert, so a poisoned map is still consistent.
    fn read_map(&self) -> std::sync::RwLockReadGuard<'_, HashMap<TypeName, Decoder>> {
        self.decoders.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write_map(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<TypeName, Decoder>> {
        self.decoders.write().unwrap_or_else(|p| p.into_inner())
    }

    /// Registers `decoder` under `name`, returning the decoder it replaced.
    ///
    /// Passing `None` is a no-op that returns `None`; an existing registration for
    /// `name` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontype::{decoder_fn, decoders::decode_int64, Registry};
    ///
    /// let registry = Registry::new();
    /// assert!(registry.register("int64", decoder_fn(decode_int64)).is_none());
    /// assert!(registry.register("int64", None).is_none());
    /// assert!(registry.contains("int64"));
    /// ```
    pub fn register(
        &self,
        name: impl Into<TypeName>,
        decoder: impl Into<Option<Decoder>>,
    ) -> Option<Decoder> {
        let type_name = name.into();
        let Some(decoder) = decoder.into() else {
            self.emit_event(RegistryEvent::RegisterSkipped { type_name });
            return None;
        };

        let previous = self.write_map().insert(type_name.clone(), decoder);
        self.outputs
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .remove(&type_name);

        self.emit_event(RegistryEvent::Register {
            type_name,
            replaced: previous.is_some(),
        });
        previous
    }

    /// Returns the decoder registered under `name`, if any.
    pub fn decoder(&self, name: &str) -> Option<Decoder> {
        let decoder = self.read_map().get(name).cloned();

        self.emit_event(RegistryEvent::Lookup {
            type_name: TypeName::from(name.to_string()),
            found: decoder.is_some(),
        });
        decoder
    }

    /// Looks up the decoder for `name` and runs it on `value`.
    ///
    /// # Errors
    ///
    /// - `UnknownType` naming `name` when nothing is registered under it
    /// - whatever the decoder itself reports
    pub fn decode(&self, name: &str, value: &Json) -> Result<Scalar> {
        let decoder = self.decoder(name).ok_or_else(|| Error::unknown_type(name))?;
        let scalar = decoder(value)?;
        self.record_output(name, &scalar);
        Ok(scalar)
    }

    /// Notes that the decoder under a custom `name` produced `scalar`.
    pub(crate) fn record_output(&self, name: &str, scalar: &Scalar) {
        let type_name = TypeName::from(name.to_string());
        if type_name.is_builtin() || self.has_output(name, &scalar.type_name()) {
            return;
        }
        self.outputs
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .entry(type_name)
            .or_default()
            .insert(scalar.type_name());
    }

    /// Whether the decoder under `name` has produced a scalar of type `output` since
    /// it was registered.
    pub(crate) fn has_output(&self, name: &str, output: &TypeName) -> bool {
        self.outputs
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .get(name)
            .is_some_and(|seen| seen.contains(output))
    }

    /// Whether a decoder is registered under `name`. Unlike [`Registry::decoder`],
    /// this emits no event.
    pub fn contains(&self, name: &str) -> bool {
        self.read_map().contains_key(name)
    }

    /// Number of registered type names.
    pub fn len(&self) -> usize {
        self.read_map().len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.read_map().is_empty()
    }

    /// Registered type names in sorted order.
    pub fn type_names(&self) -> Vec<TypeName> {
        let mut names: Vec<TypeName> = self.read_map().keys().cloned().collect();
        names.sort();
        names
    }
}

/// An empty registry, same as [`Registry::new`].
impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("type_names", &self.type_names())
            .finish_non_exhaustive()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
