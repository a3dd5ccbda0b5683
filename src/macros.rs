//! Macros for creating isolated, module-scoped registries.

/// Creates a module holding its own registry, populated with the built-in decoders.
///
/// The macro generates a module containing:
/// - A lazily initialised registry static (hidden)
/// - Free functions delegating to it: `registry`, `register`, `decoder`, `contains`,
///   `options`, `from_json`, `set_trace_callback` and `clear_trace_callback`
///
/// Custom decoders registered through the module never reach the global registry.
///
/// # Examples
///
/// ```rust
/// use jsontype::{define_registry, number_decoder, Scalar};
/// use time::Duration;
///
/// define_registry!(units);
///
/// units::register("seconds", number_decoder("decode_seconds", |s| Ok(Duration::seconds_f64(s))));
///
/// let value = units::from_json(r#"{"type":"seconds","value":42}"#).unwrap();
/// assert_eq!(value.data(), &Scalar::Duration(Duration::seconds(42)));
///
/// // The global registry is untouched.
/// assert!(jsontype::decoder("seconds").is_none());
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::sync::{Arc, LazyLock};

            // Module-private registry
            static REGISTRY: LazyLock<Arc<$crate::Registry>> =
                LazyLock::new(|| Arc::new($crate::Registry::with_builtins()));

            /// The module's registry.
            pub fn registry() -> Arc<$crate::Registry> {
                Arc::clone(&REGISTRY)
            }

            /// Register a decoder, returning the one it replaced.
            pub fn register(
                name: impl Into<$crate::TypeName>,
                decoder: impl Into<Option<$crate::Decoder>>,
            ) -> Option<$crate::Decoder> {
                REGISTRY.register(name, decoder)
            }

            /// Look up a decoder.
            pub fn decoder(name: &str) -> Option<$crate::Decoder> {
                REGISTRY.decoder(name)
            }

            /// Check if a decoder is registered.
            pub fn contains(name: &str) -> bool {
                REGISTRY.contains(name)
            }

            /// Options pointing at the module's registry.
            pub fn options() -> $crate::Options {
                $crate::Options::default().with_registry(registry())
            }

            /// Decode a tagged JSON value against the module's registry.
            pub fn from_json(bytes: impl AsRef<[u8]>) -> $crate::Result<$crate::Value> {
                $crate::Value::from_json_with(bytes, &options())
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                REGISTRY.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                REGISTRY.clear_trace_callback()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{string_decoder, Scalar};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_define_registry_macro() {
        define_registry!(test_reg);

        assert!(test_reg::contains("int"));
        assert!(!test_reg::contains("upper"));

        test_reg::register("upper", string_decoder("decode_upper", |s| Ok(s.to_uppercase())));
        assert!(test_reg::contains("upper"));
        assert!(test_reg::decoder("upper").is_some());

        let value = test_reg::from_json(r#"{"type":"upper","value":"abc"}"#).unwrap();
        assert_eq!(value.data(), &Scalar::String("ABC".into()));
    }

    #[test]
    fn test_multiple_registries() {
        define_registry!(reg_a);
        define_registry!(reg_b);

        reg_a::register("only_a", string_decoder("decode_a", |s| Ok(s.len() as u64)));

        assert!(reg_a::contains("only_a"));
        assert!(!reg_b::contains("only_a"));
        assert!(!Arc::ptr_eq(&reg_a::registry(), &reg_b::registry()));
    }

    #[test]
    fn test_tracing() {
        define_registry!(trace_test);

        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        trace_test::set_trace_callback(move |event| {
            events_clone.lock().unwrap().push(format!("{}", event));
        });

        trace_test::register("x", string_decoder("decode_x", |s| Ok(s.to_string())));
        let _ = trace_test::decoder("x");
        let _ = trace_test::from_json(r#"{"type":"int","value":1}"#);
        trace_test::clear_trace_callback();

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 3);
        assert!(recorded[0].contains("register"));
        assert!(recorded[1].contains("lookup { type_name: x"));
        assert!(recorded[2].contains("lookup { type_name: int"));
    }
}
