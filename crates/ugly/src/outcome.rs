//! Outcome values and the [`Unit`] sentinel.
//!
//! Every action declares, at the type level, what it reports back: either a
//! named-field record specific to that action, or [`Unit`], the canonical
//! "nothing to report" value. There is no third case and no `Option` in the
//! middle - an invocation always produces exactly one of these.

use std::convert::Infallible;
use std::fmt;
use std::iter;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Marker for values an action may report from its body.
///
/// Implement this on a plain named-field record defined next to the action
/// that produces it. Records from different actions are distinct types and
/// cannot be mistaken for one another.
///
/// ```ignore
/// #[derive(Debug, Serialize)]
/// struct Added {
///     sum: f64,
/// }
///
/// impl Outcome for Added {
///     auto_json!();
/// }
/// ```
pub trait Outcome: fmt::Debug {
    /// True only for [`Unit`]. Invocation uses this to keep continuations
    /// out of the picture when there is nothing to deliver.
    const IS_UNIT: bool = false;

    /// Structured form of this outcome for logs and audits.
    ///
    /// Returns `None` when the record is not serializable. The
    /// [`auto_json!`](crate::auto_json) macro implements this in one line
    /// for records that derive `Serialize`.
    fn to_json(&self) -> Option<serde_json::Value> {
        None
    }
}

/// The canonical "no outcome" value.
///
/// `Unit` is a concrete sentinel, not a null or an absent `Option`. All
/// units are one unit: it is zero-sized, `Copy`, and any two of them compare
/// equal no matter where they came from. Under inspection it behaves as an
/// empty aggregate - zero [`len`](Unit::len), empty iteration, absent
/// [`get`](Unit::get) - so generic code can treat "nothing happened" the
/// same way it treats an empty collection.
///
/// An action that has nothing to report declares `type Outcome = Unit` and
/// is called without a continuation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unit;

impl Unit {
    /// Always zero.
    pub const fn len(&self) -> usize {
        0
    }

    /// Always true.
    pub const fn is_empty(&self) -> bool {
        true
    }

    /// Keyed access always reports absent. The `Infallible` item type is
    /// the proof: no value of it can exist for the `Some` arm to hold.
    pub fn get(&self, _index: usize) -> Option<Infallible> {
        None
    }

    /// An iterator that yields nothing.
    pub fn iter(&self) -> iter::Empty<Infallible> {
        iter::empty()
    }
}

impl Outcome for Unit {
    const IS_UNIT: bool = true;

    /// Unit converts to the empty mapping.
    fn to_json(&self) -> Option<serde_json::Value> {
        Some(serde_json::Value::Object(serde_json::Map::new()))
    }
}

impl IntoIterator for Unit {
    type Item = Infallible;
    type IntoIter = iter::Empty<Infallible>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

impl<'a> IntoIterator for &'a Unit {
    type Item = Infallible;
    type IntoIter = iter::Empty<Infallible>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

impl Serialize for Unit {
    /// Serializes as the empty map, `{}` in JSON.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let map = serializer.serialize_map(Some(0))?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Unit {
    /// Accepts unit, null, an empty map, or an empty sequence. Anything
    /// carrying data is rejected - a populated value is an [`Outcome`]
    /// record's business, never Unit's.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UnitVisitor;

        impl<'de> Visitor<'de> for UnitVisitor {
            type Value = Unit;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("unit, null, or an empty map or sequence")
            }

            fn visit_unit<E>(self) -> Result<Unit, E>
            where
                E: de::Error,
            {
                Ok(Unit)
            }

            fn visit_none<E>(self) -> Result<Unit, E>
            where
                E: de::Error,
            {
                Ok(Unit)
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Unit, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                Unit::deserialize(deserializer)
            }

            fn visit_map<M>(self, mut map: M) -> Result<Unit, M::Error>
            where
                M: MapAccess<'de>,
            {
                if map.next_key::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(1, &self));
                }
                Ok(Unit)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Unit, A::Error>
            where
                A: SeqAccess<'de>,
            {
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(1, &self));
                }
                Ok(Unit)
            }
        }

        deserializer.deserialize_any(UnitVisitor)
    }
}
