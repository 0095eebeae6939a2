//! Built-in field naming policies

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::case;
use super::{FieldDescriptor, FieldNamingStrategy};

/// Built-in naming policies applied to a field's declared name
///
/// Every policy except `Identity` and `UpperCamelCase` splits the name with
/// [`case::split_words`], so acronym runs stay whole: `HTTPServer` becomes
/// `http_server`, never `h_t_t_p_server`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// `someFieldName` stays `someFieldName`
    #[default]
    Identity,
    /// `someFieldName` becomes `SomeFieldName`
    UpperCamelCase,
    /// `someFieldName` becomes `Some Field Name`
    UpperCamelCaseWithSpaces,
    /// `someFieldName` becomes `SOME_FIELD_NAME`
    UpperCaseWithUnderscores,
    /// `someFieldName` becomes `some_field_name`
    LowerCaseWithUnderscores,
    /// `someFieldName` becomes `some-field-name`
    LowerCaseWithDashes,
    /// `someFieldName` becomes `some.field.name`
    LowerCaseWithDots,
}

impl NamingPolicy {
    /// Apply the policy to a bare name
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Identity => name.to_string(),
            Self::UpperCamelCase => case::upper_first_letter(name),
            Self::UpperCamelCaseWithSpaces => case::upper_first_letter(&case::joined(name, ' ')),
            Self::UpperCaseWithUnderscores => case::upper_joined(name, '_'),
            Self::LowerCaseWithUnderscores => case::lower_joined(name, '_'),
            Self::LowerCaseWithDashes => case::lower_joined(name, '-'),
            Self::LowerCaseWithDots => case::lower_joined(name, '.'),
        }
    }
}

impl FieldNamingStrategy for NamingPolicy {
    fn translate_name(&self, field: &FieldDescriptor) -> String { self.apply(field.declared_name()) }
}
