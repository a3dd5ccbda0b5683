use crate::TypeName;

/// Events emitted by a [`Registry`](crate::Registry) during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use jsontype::{RegistryEvent, TypeName};
///
/// let event = RegistryEvent::Register { type_name: TypeName::INT, replaced: false };
/// assert_eq!(event.to_string(), "register { type_name: int, replaced: false }");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    /// A decoder was registered.
    Register {
        /// The type name the decoder was registered under
        type_name: TypeName,
        /// Whether a previous decoder was replaced
        replaced: bool,
    },

    /// A registration with no decoder was ignored.
    RegisterSkipped {
        /// The type name passed to `register`
        type_name: TypeName,
    },

    /// A decoder was looked up.
    Lookup {
        /// The type name that was requested
        type_name: TypeName,
        /// Whether a decoder was found
        found: bool,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Register {
                type_name,
                replaced,
            } => {
                write!(
                    f,
                    "register {{ type_name: {}, replaced: {} }}",
                    type_name, replaced
                )
            }
            RegistryEvent::RegisterSkipped { type_name } => {
                write!(f, "register skipped {{ type_name: {} }}", type_name)
            }
            RegistryEvent::Lookup { type_name, found } => {
                write!(f, "lookup {{ type_name: {}, found: {} }}", type_name, found)
            }
        }
    }
}
