//! The tagged value wrapper and its JSON and map forms.

use std::collections::BTreeMap;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Error as _, Serialize, SerializeStruct, Serializer};
use serde_json::Value as Json;

use crate::{Error, Options, Registry, Result, Scalar, TypeName};

/// Generic map form of a [`Value`]: `"type"` holds the tag as a string scalar and
/// `"value"` holds the data.
pub type ValueMap = BTreeMap<String, Scalar>;

/// A scalar paired with the name of its type.
///
/// Serializes to `{"type": <name>, "value": <json>}`. Deserializing looks the name up
/// in a [`Registry`] and runs its decoder, so the original type survives the trip
/// through JSON.
///
/// # Examples
///
/// ```
/// use jsontype::{Scalar, Value};
///
/// let json = Value::new(42usize).to_json_string().unwrap();
/// assert_eq!(json, r#"{"type":"uint","value":42}"#);
///
/// let back = Value::from_json(json.as_bytes()).unwrap();
/// assert_eq!(back.data(), &Scalar::UInt(42));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Value {
    type_name: TypeName,
    data: Scalar,
}

/// Wire shape read during decoding.
#[derive(serde::Deserialize)]
struct Wire {
    #[serde(rename = "type", default)]
    type_name: String,
    #[serde(default)]
    value: Json,
}

impl Value {
    /// Wraps `data` under its canonical type name without consulting a registry.
    ///
    /// Decoding reads numbers as `f64`: 64-bit integers beyond 2^53 in magnitude do
    /// not survive a JSON round trip exactly (`9_007_199_254_740_993` decodes as
    /// `9_007_199_254_740_992`).
    pub fn new(data: impl Into<Scalar>) -> Self {
        let data = data.into();
        Value {
            type_name: data.type_name(),
            data,
        }
    }

    /// The `nil` tagged value.
    pub fn nil() -> Self {
        Value {
            type_name: TypeName::NIL,
            data: Scalar::Nil,
        }
    }

    /// A `uint8` tagged with the `byte` alias.
    pub fn byte(data: u8) -> Self {
        Value {
            type_name: TypeName::BYTE,
            data: Scalar::UInt8(data),
        }
    }

    /// An `int32` tagged with the `rune` alias.
    pub fn rune(data: i32) -> Self {
        Value {
            type_name: TypeName::RUNE,
            data: Scalar::Int32(data),
        }
    }

    /// Like [`Value::new`], but fails when the global registry cannot decode the type.
    pub fn try_new(data: impl Into<Scalar>) -> Result<Self> {
        Self::try_new_with(data, &Options::default())
    }

    /// Like [`Value::try_new`] against the registry in `opts`.
    ///
    /// # Errors
    ///
    /// `UnknownType` naming the type when no decoder is registered for it. Nil data
    /// is always accepted.
    pub fn try_new_with(data: impl Into<Scalar>, opts: &Options) -> Result<Self> {
        let data = data.into();
        if data.is_nil() {
            return Ok(Value::nil());
        }
        let type_name = data.type_name();
        if !opts.registry().contains(type_name.as_str()) {
            return Err(Error::unknown_type(&type_name));
        }
        Ok(Value { type_name, data })
    }

    /// The tag, which may be an alias or custom name rather than `data`'s own type.
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// The wrapped scalar.
    pub fn data(&self) -> &Scalar {
        &self.data
    }

    /// Consumes the value, returning the scalar.
    pub fn into_data(self) -> Scalar {
        self.data
    }

    /// Consumes the value, returning the tag and the scalar.
    pub fn into_parts(self) -> (TypeName, Scalar) {
        (self.type_name, self.data)
    }

    // ---------------------------------------------------------------------------------------------
    // JSON
    // ---------------------------------------------------------------------------------------------

    /// Encodes as `{"type": .., "value": ..}`.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` when the value has no type name (the unset state)
    /// - [`Error::Json`] when the data has no JSON form, e.g. a NaN float
    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.ensure_tagged()?;
        Ok(serde_json::to_vec(self)?)
    }

    /// Same as [`Value::to_json`], returning a `String`.
    pub fn to_json_string(&self) -> Result<String> {
        self.ensure_tagged()?;
        Ok(serde_json::to_string(self)?)
    }

    fn ensure_tagged(&self) -> Result<()> {
        if self.type_name.is_empty() {
            return Err(Error::invalid_value("to_json: missing type name"));
        }
        Ok(())
    }

    /// Decodes JSON bytes using the global registry.
    pub fn from_json(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::from_json_with(bytes, &Options::default())
    }

    /// Decodes JSON bytes using the registry in `opts`.
    ///
    /// # Errors
    ///
    /// - [`Error::Json`] for malformed JSON, passed through unclassified
    /// - `UnknownType` naming the tag when no decoder is registered for it
    /// - the decoder's own error, prefixed with `"jsontype: "`
    pub fn from_json_with(bytes: impl AsRef<[u8]>, opts: &Options) -> Result<Self> {
        let wire: Wire = serde_json::from_slice(bytes.as_ref())?;
        decode_wire(wire, opts.registry())
    }

    /// Decodes an already parsed `{"type": .., "value": ..}` object, for tagged values
    /// embedded in a larger untyped document.
    pub fn from_json_value(json: Json, opts: &Options) -> Result<Self> {
        if !json.is_object() {
            return Err(Error::invalid_type("from_json_value"));
        }
        let wire: Wire = serde_json::from_value(json)?;
        decode_wire(wire, opts.registry())
    }

    /// Replaces this value with the one decoded from `bytes`.
    ///
    /// On error the value is left unchanged.
    pub fn unmarshal(&mut self, bytes: impl AsRef<[u8]>) -> Result<()> {
        self.unmarshal_with(bytes, &Options::default())
    }

    /// Like [`Value::unmarshal`] against the registry in `opts`.
    pub fn unmarshal_with(&mut self, bytes: impl AsRef<[u8]>, opts: &Options) -> Result<()> {
        *self = Self::from_json_with(bytes, opts)?;
        Ok(())
    }

    // ---------------------------------------------------------------------------------------------
    // Map form
    // ---------------------------------------------------------------------------------------------

    /// Projects into the map form `{"type": .., "value": ..}`.
    pub fn to_map(&self) -> ValueMap {
        ValueMap::from([
            ("type".to_string(), Scalar::String(self.type_name.to_string())),
            ("value".to_string(), self.data.clone()),
        ])
    }

    /// Builds a value from its map form using the global registry.
    pub fn from_map(map: &ValueMap) -> Result<Self> {
        Self::from_map_with(map, &Options::default())
    }

    /// Builds a value from its map form using the registry in `opts`.
    ///
    /// The declared `"type"` must name the type of the `"value"` entry, with `byte`
    /// and `rune` accepted for `uint8` and `int32`. A custom type name is accepted
    /// when its registered decoder has already produced scalars of the entry's type,
    /// or turns the entry's JSON form back into the same scalar. Maps produced by
    /// [`Value::to_map`] from values decoded through the same registry therefore
    /// always convert back.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` when either key is missing or `"type"` is not a string
    /// - `UnknownType` when the value's type has no registered decoder
    /// - `InvalidValue` when the declared type does not match the value
    pub fn from_map_with(map: &ValueMap, opts: &Options) -> Result<Self> {
        let data = map
            .get("value")
            .ok_or_else(|| Error::invalid_format("from_map: missing value field"))?;
        let inferred =
            Value::try_new_with(data.clone(), opts).map_err(|err| err.with_prefix("from_map"))?;

        let tag = map
            .get("type")
            .ok_or_else(|| Error::invalid_format("from_map: missing type field"))?
            .as_str()
            .ok_or_else(|| Error::invalid_format("from_map: type field"))?;

        let declared = TypeName::from(tag.to_string());
        if declared.canonical() != inferred.type_name.canonical()
            && !decodes_to(&declared, &inferred.data, opts.registry())?
        {
            return Err(Error::invalid_value("from_map: types do not match"));
        }
        Ok(Value {
            type_name: declared,
            data: inferred.data,
        })
    }
}

/// Whether the decoder under a custom `tag` yields scalars like `data`: either it
/// has produced that type before, or it decodes the JSON form of `data` back into
/// `data`.
///
/// Built-in names only ever match their own variant and are never re-decoded.
fn decodes_to(tag: &TypeName, data: &Scalar, registry: &Registry) -> Result<bool> {
    if tag.is_builtin() {
        return Ok(false);
    }
    let Some(decoder) = registry.decoder(tag.as_str()) else {
        return Ok(false);
    };
    if registry.has_output(tag.as_str(), &data.type_name()) {
        return Ok(true);
    }
    let json = serde_json::to_value(data)?;
    Ok(decoder(&json).is_ok_and(|decoded| decoded == *data))
}

fn decode_wire(wire: Wire, registry: &Registry) -> Result<Value> {
    let decoder = registry
        .decoder(&wire.type_name)
        .ok_or_else(|| Error::unknown_type(&wire.type_name))?;

    let data = decoder(&wire.value).map_err(|err| {
        tracing::debug!(type_name = %wire.type_name, error = %err, "decoding failed");
        err.with_prefix("jsontype")
    })?;
    registry.record_output(&wire.type_name, &data);

    Ok(Value {
        type_name: TypeName::from(wire.type_name),
        data,
    })
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.type_name.is_empty() {
            return Err(S::Error::custom(Error::invalid_value(
                "to_json: missing type name",
            )));
        }
        let mut state = serializer.serialize_struct("Value", 2)?;
        state.serialize_field("type", self.type_name.as_str())?;
        state.serialize_field("value", &self.data)?;
        state.end()
    }
}

/// Decodes against the global registry.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::deserialize(deserializer)?;
        decode_wire(wire, &Registry::global()).map_err(D::Error::custom)
    }
}
