//! Field naming: descriptors, markers and the strategies that turn a declared
//! field name into the key used on the wire
//!
//! A [`FieldNamingStrategy`] is a pure function of the [`FieldDescriptor`] it is
//! given. The codec calls the same strategy for encoding and decoding, which is
//! what lets a record survive a round trip.

pub mod case;
mod policy;

use std::borrow::Cow;

pub use policy::NamingPolicy;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

/// Metadata tag attached to a field where it is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MarkerTag {
    /// Write this field's name in lower case with underscores
    LowerCaseUnderscore = 0,
}

impl MarkerTag {
    const fn bit(self) -> u8 { 1 << self as u8 }
}

/// A set of [`MarkerTag`]s, usable in `const` field tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MarkerSet(u8);

impl MarkerSet {
    /// The empty set
    #[must_use]
    pub const fn empty() -> Self { Self(0) }

    /// This set plus `tag`
    #[must_use]
    pub const fn with(self, tag: MarkerTag) -> Self { Self(self.0 | tag.bit()) }

    /// Whether `tag` is in the set
    #[must_use]
    pub const fn contains(self, tag: MarkerTag) -> bool { self.0 & tag.bit() != 0 }

    /// Whether the set has no tags
    #[must_use]
    pub const fn is_empty(self) -> bool { self.0 == 0 }
}

impl FromIterator<MarkerTag> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = MarkerTag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<MarkerTag> for MarkerSet {
    fn from(tag: MarkerTag) -> Self { Self::empty().with(tag) }
}

/// One declared field of a record type
///
/// Built once per field and shared by every (de)serialization call. Derived
/// records keep theirs in a `static` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    declared_name: Cow<'static, str>,
    markers:       MarkerSet,
}

impl FieldDescriptor {
    /// Create a descriptor for a field known at compile time
    #[must_use]
    pub const fn new_static(declared_name: &'static str, markers: MarkerSet) -> Self {
        Self {
            declared_name: Cow::Borrowed(declared_name),
            markers,
        }
    }

    /// Create a descriptor from a runtime name
    #[must_use]
    pub fn new(declared_name: impl Into<String>, markers: impl Into<MarkerSet>) -> Self {
        Self {
            declared_name: Cow::Owned(declared_name.into()),
            markers:       markers.into(),
        }
    }

    /// The name as written in the record definition
    #[must_use]
    pub fn declared_name(&self) -> &str { &self.declared_name }

    /// Markers attached to the field
    #[must_use]
    pub const fn markers(&self) -> MarkerSet { self.markers }

    /// Whether `tag` is attached to the field
    #[must_use]
    pub const fn has_marker(&self, tag: MarkerTag) -> bool { self.markers.contains(tag) }
}

impl std::fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.declared_name)
    }
}

/// Maps a field to the key it is written under
///
/// Implementations must be deterministic: the same descriptor always yields
/// the same wire name.
pub trait FieldNamingStrategy: Send + Sync {
    /// The wire name for `field`
    fn translate_name(&self, field: &FieldDescriptor) -> String;
}

impl<F> FieldNamingStrategy for F
where
    F: Fn(&FieldDescriptor) -> String + Send + Sync,
{
    fn translate_name(&self, field: &FieldDescriptor) -> String { self(field) }
}

/// Marker-driven naming
///
/// Fields carrying [`MarkerTag::LowerCaseUnderscore`] are written in lower case
/// with underscores; every other field goes through the fallback policy, which
/// is [`NamingPolicy::Identity`] unless changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldNameResolver {
    fallback: NamingPolicy,
}

impl FieldNameResolver {
    /// Resolver with the identity fallback
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fallback: NamingPolicy::Identity,
        }
    }

    /// Resolver that applies `fallback` to unmarked fields
    #[must_use]
    pub const fn with_fallback(fallback: NamingPolicy) -> Self { Self { fallback } }

    /// The wire name for `field`
    #[must_use]
    pub fn resolve(&self, field: &FieldDescriptor) -> String {
        if field.has_marker(MarkerTag::LowerCaseUnderscore) {
            NamingPolicy::LowerCaseWithUnderscores.apply(field.declared_name())
        } else {
            self.fallback.apply(field.declared_name())
        }
    }
}

impl FieldNamingStrategy for FieldNameResolver {
    fn translate_name(&self, field: &FieldDescriptor) -> String { self.resolve(field) }
}
