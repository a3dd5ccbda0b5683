//! Type names used as tags on the wire and as registry keys.

use std::borrow::{Borrow, Cow};
use std::fmt;

/// Name of a decodable type, e.g. `"int"`, `"uint8"` or `"time.Time"`.
///
/// Built-in names are available as associated constants. Custom decoders may use
/// any other string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TypeName(Cow<'static, str>);

impl TypeName {
    /// `int`.
    pub const INT: TypeName = TypeName::from_static("int");
    /// `int8`.
    pub const INT8: TypeName = TypeName::from_static("int8");
    /// `int16`.
    pub const INT16: TypeName = TypeName::from_static("int16");
    /// `int32`.
    pub const INT32: TypeName = TypeName::from_static("int32");
    /// `rune`, decode alias of [`TypeName::INT32`].
    pub const RUNE: TypeName = TypeName::from_static("rune");
    /// `int64`.
    pub const INT64: TypeName = TypeName::from_static("int64");
    /// `uint`.
    pub const UINT: TypeName = TypeName::from_static("uint");
    /// `uint8`.
    pub const UINT8: TypeName = TypeName::from_static("uint8");
    /// `byte`, decode alias of [`TypeName::UINT8`].
    pub const BYTE: TypeName = TypeName::from_static("byte");
    /// `uint16`.
    pub const UINT16: TypeName = TypeName::from_static("uint16");
    /// `uint32`.
    pub const UINT32: TypeName = TypeName::from_static("uint32");
    /// `uint64`.
    pub const UINT64: TypeName = TypeName::from_static("uint64");
    /// `float32`.
    pub const FLOAT32: TypeName = TypeName::from_static("float32");
    /// `float64`.
    pub const FLOAT64: TypeName = TypeName::from_static("float64");
    /// `string`.
    pub const STRING: TypeName = TypeName::from_static("string");
    /// `bool`.
    pub const BOOL: TypeName = TypeName::from_static("bool");
    /// `time.Time`.
    pub const TIME: TypeName = TypeName::from_static("time.Time");
    /// `time.Duration`.
    pub const DURATION: TypeName = TypeName::from_static("time.Duration");
    /// `complex64`.
    pub const COMPLEX64: TypeName = TypeName::from_static("complex64");
    /// `complex128`.
    pub const COMPLEX128: TypeName = TypeName::from_static("complex128");
    /// `nil`.
    pub const NIL: TypeName = TypeName::from_static("nil");

    /// A name borrowed from a static string, usable in `const` items.
    pub const fn from_static(name: &'static str) -> Self {
        TypeName(Cow::Borrowed(name))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty, the tag of an unset [`Value`](crate::Value).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this is one of the names the built-in decoders are registered under.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self.as_str(),
            "int"
                | "int8"
                | "int16"
                | "int32"
                | "rune"
                | "int64"
                | "uint"
                | "uint8"
                | "byte"
                | "uint16"
                | "uint32"
                | "uint64"
                | "float32"
                | "float64"
                | "string"
                | "bool"
                | "time.Time"
                | "time.Duration"
                | "complex64"
                | "complex128"
                | "nil"
        )
    }

    /// Resolves decode aliases to the name emitted on encode.
    ///
    /// `byte` becomes `uint8` and `rune` becomes `int32`; every other name is
    /// returned unchanged.
    pub fn canonical(&self) -> TypeName {
        match self.as_str() {
            "byte" => TypeName::UINT8,
            "rune" => TypeName::INT32,
            _ => self.clone(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TypeName {
    fn from(name: &'static str) -> Self {
        TypeName::from_static(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        TypeName(Cow::Owned(name))
    }
}

impl From<&TypeName> for TypeName {
    fn from(name: &TypeName) -> Self {
        name.clone()
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
