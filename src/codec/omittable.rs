//! Tri-state optional field

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A request field that may be left out, sent as null, or sent with a value.
///
/// The API treats a missing key as "leave unchanged" and `null` as "clear
/// this value", so the two cannot share `Option::None`. Fields of this type
/// are declared with
/// `#[serde(default, skip_serializing_if = "Omittable::is_omitted")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Omittable<T> {
    /// Not serialized at all
    Omitted,
    /// Serialized as JSON `null`
    Null,
    /// Serialized as the value
    Value(T),
}

impl<T> Omittable<T> {
    /// True when the field will be left out of the payload
    pub fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted)
    }

    /// True when the field is an explicit null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the value, if any
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Drop the omitted/null distinction
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// `None` becomes an explicit null
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }

    /// Map the contained value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Omittable<U> {
        match self {
            Self::Omitted => Omittable::Omitted,
            Self::Null => Omittable::Null,
            Self::Value(v) => Omittable::Value(f(v)),
        }
    }
}

impl<T> Default for Omittable<T> {
    fn default() -> Self {
        Self::Omitted
    }
}

impl<T> From<T> for Omittable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Omittable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Omitted | Self::Null => serializer.serialize_none(),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Omittable<T> {
    /// A present key decodes to `Null` or `Value`; a missing key falls back
    /// to `Default`, i.e. `Omitted`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_option(Option::<T>::deserialize(deserializer)?))
    }
}
